//! Session and round orchestration
//!
//! A session is a series of rounds. Each round runs the human's track to
//! resolution, then asks for the human's secret and runs the computer's
//! track. Every input goes through [`Session::apply`] (or one of the
//! per-action helpers) and produces a list of [`GameEvent`]s for the
//! presentation layer. Rejected input leaves the session untouched.

use super::config::GameConfig;
use super::track::{Side, TrackState};
use crate::core::{Code, CodeError, Feedback, FeedbackError};
use crate::solver::{Guesser, StrategyType};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// What the session is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A guess at the computer's code
    HumanGuessing,
    /// The human's secret, before the computer may start
    AwaitingSecret,
    /// Feedback for the computer's pending guess
    ComputerGuessing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HumanGuessing => write!(f, "your guess"),
            Self::AwaitingSecret => write!(f, "your secret"),
            Self::ComputerGuessing => write!(f, "feedback on the computer's guess"),
        }
    }
}

/// Input from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw guess text from the human
    Guess(String),
    /// Raw secret text from the human
    Secret(String),
    /// The human dismissed the secret prompt
    CancelSecret,
    /// Feedback the human reports for the computer's guess
    Feedback(Feedback),
    /// Start over from round one
    Restart,
}

/// Output for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A guess by either side together with its feedback
    GuessScored {
        side: Side,
        attempt: u32,
        guess: Code,
        feedback: Feedback,
    },
    /// A side's track finished; `secret` is the code it was chasing
    TrackResolved {
        side: Side,
        state: TrackState,
        score: u32,
        secret: Code,
    },
    /// The human must now enter a secret
    SecretRequested,
    /// The computer's next guess, awaiting feedback
    ComputerGuessed { attempt: u32, guess: Code },
    /// Both tracks finished
    RoundCompleted(RoundScore),
    /// A new round is ready for the human's first guess
    RoundStarted { round: u32 },
    /// The session was reset to round one
    SessionRestarted,
}

/// Error type for rejected input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidCode(CodeError),
    InvalidFeedback(FeedbackError),
    WrongPhase { expected: Phase, actual: Phase },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(e) => write!(f, "{e}"),
            Self::InvalidFeedback(e) => write!(f, "{e}"),
            Self::WrongPhase { expected, actual } => {
                write!(f, "Not expecting {expected} now, waiting for {actual}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCode(e) => Some(e),
            Self::InvalidFeedback(e) => Some(e),
            Self::WrongPhase { .. } => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::InvalidCode(err)
    }
}

impl From<FeedbackError> for GameError {
    fn from(err: FeedbackError) -> Self {
        Self::InvalidFeedback(err)
    }
}

/// One row of the score table
///
/// A side's entry is `None` until its track resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    pub round: u32,
    pub human: Option<u32>,
    pub computer: Option<u32>,
}

/// State that lives for exactly one round
#[derive(Debug, Clone)]
struct Round {
    number: u32,
    computer_secret: Code,
    human_secret: Option<Code>,
    human: TrackState,
    computer: TrackState,
    guesser: Guesser<StrategyType>,
}

impl Round {
    fn new<R: Rng + ?Sized>(number: u32, config: &GameConfig, rng: &mut R) -> Self {
        let computer_secret = Code::random(rng);
        debug!(round = number, secret = %computer_secret, "Computer secret chosen");
        Self {
            number,
            computer_secret,
            human_secret: None,
            human: TrackState::START,
            computer: TrackState::START,
            guesser: Guesser::new(config.strategy.clone()),
        }
    }

    fn score(&self, penalty: u32) -> RoundScore {
        RoundScore {
            round: self.number,
            human: self.human.score(penalty),
            computer: self.computer.score(penalty),
        }
    }
}

/// A running game between the human and the computer
pub struct Session<R: Rng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    round: Round,
    completed: Vec<RoundScore>,
}

impl<R: Rng> Session<R> {
    /// Start a session at round one with a fresh computer secret
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let round = Round::new(1, &config, &mut rng);
        info!(max_attempts = config.max_attempts, "Session started");
        Self {
            config,
            rng,
            phase: Phase::HumanGuessing,
            round,
            completed: Vec::new(),
        }
    }

    /// Apply one action
    ///
    /// # Errors
    /// Returns `GameError` if the input is malformed or arrives in the wrong
    /// phase. The session is unchanged in that case.
    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, GameError> {
        match action {
            Action::Guess(text) => self.submit_guess(&text),
            Action::Secret(text) => self.submit_secret(&text),
            Action::CancelSecret => self.cancel_secret(),
            Action::Feedback(feedback) => self.submit_feedback(feedback),
            Action::Restart => Ok(self.restart()),
        }
    }

    /// Score a human guess against the computer's secret
    ///
    /// # Errors
    /// `InvalidCode` for malformed text, `WrongPhase` outside the human's turn.
    pub fn submit_guess(&mut self, text: &str) -> Result<Vec<GameEvent>, GameError> {
        self.expect_phase(Phase::HumanGuessing)?;
        let guess = Code::parse(text)?;

        let feedback = Feedback::calculate(&guess, &self.round.computer_secret);
        self.round.human = self.round.human.record(feedback, self.config.max_attempts);
        let attempt = self.human_attempts();

        debug!(attempt, guess = %guess, feedback = %feedback, "Human guess scored");
        let mut events = vec![GameEvent::GuessScored {
            side: Side::Human,
            attempt,
            guess,
            feedback,
        }];

        if let Some(score) = self.round.human.score(self.config.penalty()) {
            info!(round = self.round.number, score, "Human track resolved");
            events.push(GameEvent::TrackResolved {
                side: Side::Human,
                state: self.round.human,
                score,
                secret: self.round.computer_secret,
            });
            events.push(GameEvent::SecretRequested);
            self.phase = Phase::AwaitingSecret;
        }

        Ok(events)
    }

    /// Accept the human's secret and issue the computer's first guess
    ///
    /// # Errors
    /// `InvalidCode` for malformed text, `WrongPhase` if no secret is wanted.
    pub fn submit_secret(&mut self, text: &str) -> Result<Vec<GameEvent>, GameError> {
        self.expect_phase(Phase::AwaitingSecret)?;
        let secret = Code::parse(text)?;

        self.round.human_secret = Some(secret);
        self.phase = Phase::ComputerGuessing;
        debug!(round = self.round.number, "Human secret received");

        Ok(vec![self.computer_guess()])
    }

    /// Abandon the secret prompt, which restarts the whole session
    ///
    /// # Errors
    /// `WrongPhase` if no secret is being asked for.
    pub fn cancel_secret(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.expect_phase(Phase::AwaitingSecret)?;
        info!("Secret entry cancelled");
        Ok(self.restart())
    }

    /// Take the human's feedback on the computer's pending guess
    ///
    /// # Errors
    /// `WrongPhase` unless a computer guess is pending.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<Vec<GameEvent>, GameError> {
        self.expect_phase(Phase::ComputerGuessing)?;
        let Some(guess) = self.round.guesser.last_guess() else {
            return Err(GameError::WrongPhase {
                expected: Phase::ComputerGuessing,
                actual: self.phase,
            });
        };

        let attempt = self.round.guesser.attempts();
        self.round.computer = self
            .round
            .computer
            .record(feedback, self.config.max_attempts);

        let mut events = vec![GameEvent::GuessScored {
            side: Side::Computer,
            attempt,
            guess,
            feedback,
        }];

        if let Some(score) = self.round.computer.score(self.config.penalty()) {
            info!(round = self.round.number, score, "Computer track resolved");
            if let Some(secret) = self.round.human_secret {
                events.push(GameEvent::TrackResolved {
                    side: Side::Computer,
                    state: self.round.computer,
                    score,
                    secret,
                });
            }
            events.extend(self.finish_round());
        } else {
            self.round.guesser.apply_feedback(feedback);
            events.push(self.computer_guess());
        }

        Ok(events)
    }

    /// Parse and submit feedback text such as "1 2"
    ///
    /// # Errors
    /// `InvalidFeedback` for unreadable or impossible counts, otherwise as
    /// [`Session::submit_feedback`].
    pub fn submit_feedback_text(&mut self, text: &str) -> Result<Vec<GameEvent>, GameError> {
        self.expect_phase(Phase::ComputerGuessing)?;
        let feedback = Feedback::parse(text)?;
        self.submit_feedback(feedback)
    }

    /// Reset scores and start again from round one
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.completed.clear();
        self.round = Round::new(1, &self.config, &mut self.rng);
        self.phase = Phase::HumanGuessing;
        info!("Session restarted");
        vec![
            GameEvent::SessionRestarted,
            GameEvent::RoundStarted { round: 1 },
        ]
    }

    fn computer_guess(&mut self) -> GameEvent {
        let guess = self.round.guesser.next_guess(&mut self.rng);
        GameEvent::ComputerGuessed {
            attempt: self.round.guesser.attempts(),
            guess,
        }
    }

    fn finish_round(&mut self) -> Vec<GameEvent> {
        let score = self.round.score(self.config.penalty());
        info!(
            round = score.round,
            human = ?score.human,
            computer = ?score.computer,
            "Round completed"
        );
        self.completed.push(score);

        let next = self.round.number + 1;
        self.round = Round::new(next, &self.config, &mut self.rng);
        self.phase = Phase::HumanGuessing;

        vec![
            GameEvent::RoundCompleted(score),
            GameEvent::RoundStarted { round: next },
        ]
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn human_attempts(&self) -> u32 {
        match self.round.human {
            TrackState::InProgress(n) | TrackState::Solved(n) => n,
            TrackState::Failed => self.config.max_attempts,
        }
    }

    /// What input the session is waiting for
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number, starting at 1
    #[inline]
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round.number
    }

    /// Session configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Which side is guessing right now
    #[must_use]
    pub const fn active_side(&self) -> Side {
        match self.phase {
            Phase::HumanGuessing => Side::Human,
            Phase::AwaitingSecret | Phase::ComputerGuessing => Side::Computer,
        }
    }

    /// Human track of the current round
    #[must_use]
    pub const fn human_track(&self) -> TrackState {
        self.round.human
    }

    /// Computer track of the current round
    #[must_use]
    pub const fn computer_track(&self) -> TrackState {
        self.round.computer
    }

    /// The computer guess waiting for feedback, with its attempt number
    #[must_use]
    pub fn pending_guess(&self) -> Option<(u32, Code)> {
        match self.phase {
            Phase::ComputerGuessing => self
                .round
                .guesser
                .last_guess()
                .map(|guess| (self.round.guesser.attempts(), guess)),
            _ => None,
        }
    }

    /// Candidates the computer still considers possible
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.round.guesser.candidates().len()
    }

    /// The secret the human entered this round, if any
    #[must_use]
    pub const fn human_secret(&self) -> Option<Code> {
        self.round.human_secret
    }

    /// Scores of finished rounds, oldest first
    #[must_use]
    pub fn completed_rounds(&self) -> &[RoundScore] {
        &self.completed
    }

    /// Score table including the round in progress
    #[must_use]
    pub fn score_table(&self) -> Vec<RoundScore> {
        let mut rows = self.completed.clone();
        rows.push(self.round.score(self.config.penalty()));
        rows
    }

    /// Sum of recorded scores per side (lower is better)
    #[must_use]
    pub fn totals(&self) -> (u32, u32) {
        self.score_table().iter().fold((0, 0), |(h, c), row| {
            (h + row.human.unwrap_or(0), c + row.computer.unwrap_or(0))
        })
    }

    #[cfg(test)]
    pub(crate) const fn computer_secret(&self) -> Code {
        self.round.computer_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SequentialStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(seed: u64) -> Session<StdRng> {
        Session::new(GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn sequential_session(seed: u64) -> Session<StdRng> {
        let config = GameConfig::new(10, StrategyType::Sequential(SequentialStrategy));
        Session::new(config, StdRng::seed_from_u64(seed))
    }

    /// A valid code guaranteed to differ from `secret`
    fn wrong_guess(secret: Code) -> String {
        let text = if secret == Code::parse("0123").unwrap() {
            "4567"
        } else {
            "0123"
        };
        text.to_string()
    }

    fn solve_human_track(session: &mut Session<StdRng>) {
        let secret = session.computer_secret().to_string();
        session.submit_guess(&secret).unwrap();
    }

    #[test]
    fn new_session_awaits_human_guess() {
        let session = session(1);
        assert_eq!(session.phase(), Phase::HumanGuessing);
        assert_eq!(session.round_number(), 1);
        assert_eq!(session.active_side(), Side::Human);
        assert_eq!(session.human_track(), TrackState::START);
        assert!(session.completed_rounds().is_empty());
        assert_eq!(session.pending_guess(), None);
    }

    #[test]
    fn human_guess_is_scored_against_computer_secret() {
        let mut session = session(2);
        let secret = session.computer_secret();
        let guess_text = wrong_guess(secret);
        let guess = Code::parse(&guess_text).unwrap();

        let events = session.submit_guess(&guess_text).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::GuessScored {
                side: Side::Human,
                attempt: 1,
                guess,
                feedback: Feedback::calculate(&guess, &secret),
            }]
        );
        assert_eq!(session.human_track(), TrackState::InProgress(1));
        assert_eq!(session.phase(), Phase::HumanGuessing);
    }

    #[test]
    fn invalid_guess_is_rejected_without_changes() {
        let mut session = session(3);
        assert_eq!(
            session.submit_guess("12"),
            Err(GameError::InvalidCode(CodeError::WrongLength(2)))
        );
        assert_eq!(
            session.submit_guess("12x4"),
            Err(GameError::InvalidCode(CodeError::NonDigit('x')))
        );
        assert_eq!(
            session.submit_guess("1214"),
            Err(GameError::InvalidCode(CodeError::DuplicateDigit(1)))
        );
        assert_eq!(session.human_track(), TrackState::START);
    }

    #[test]
    fn solving_requests_secret() {
        let mut session = session(4);
        let secret = session.computer_secret();

        let events = session.submit_guess(&secret.to_string()).unwrap();

        assert!(events.contains(&GameEvent::TrackResolved {
            side: Side::Human,
            state: TrackState::Solved(1),
            score: 1,
            secret,
        }));
        assert_eq!(events.last(), Some(&GameEvent::SecretRequested));
        assert_eq!(session.phase(), Phase::AwaitingSecret);
        assert_eq!(session.score_table()[0].human, Some(1));
    }

    #[test]
    fn ten_misses_fail_with_penalty() {
        let mut session = session(5);
        let guess = wrong_guess(session.computer_secret());

        for _ in 0..9 {
            session.submit_guess(&guess).unwrap();
            assert_eq!(session.phase(), Phase::HumanGuessing);
        }
        let events = session.submit_guess(&guess).unwrap();

        assert!(matches!(
            events[1],
            GameEvent::TrackResolved {
                side: Side::Human,
                state: TrackState::Failed,
                score: 11,
                ..
            }
        ));
        assert!(matches!(
            events[0],
            GameEvent::GuessScored { attempt: 10, .. }
        ));
        assert_eq!(session.human_track(), TrackState::Failed);
        assert_eq!(session.score_table()[0].human, Some(11));
        assert_eq!(session.phase(), Phase::AwaitingSecret);
    }

    #[test]
    fn failing_always_scores_worse_than_solving() {
        let config = GameConfig::new(0, StrategyType::default());
        let mut missed = Session::new(config.clone(), StdRng::seed_from_u64(16));
        let guess = wrong_guess(missed.computer_secret());
        missed.submit_guess(&guess).unwrap();

        let mut solved = Session::new(config, StdRng::seed_from_u64(16));
        solve_human_track(&mut solved);

        assert_eq!(missed.human_track(), TrackState::Failed);
        assert_eq!(solved.human_track(), TrackState::Solved(1));
        assert_eq!(missed.score_table()[0].human, Some(2));
        assert_eq!(solved.score_table()[0].human, Some(1));
    }

    #[test]
    fn guess_rejected_while_awaiting_secret() {
        let mut session = session(6);
        solve_human_track(&mut session);

        assert_eq!(
            session.submit_guess("0123"),
            Err(GameError::WrongPhase {
                expected: Phase::HumanGuessing,
                actual: Phase::AwaitingSecret
            })
        );
    }

    #[test]
    fn feedback_rejected_during_human_turn() {
        let mut session = session(7);
        assert!(matches!(
            session.submit_feedback(Feedback::SOLVED),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            session.submit_secret("1234"),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            session.cancel_secret(),
            Err(GameError::WrongPhase { .. })
        ));
    }

    #[test]
    fn invalid_secret_keeps_waiting() {
        let mut session = session(8);
        solve_human_track(&mut session);

        assert!(matches!(
            session.submit_secret("1123"),
            Err(GameError::InvalidCode(CodeError::DuplicateDigit(1)))
        ));
        assert_eq!(session.phase(), Phase::AwaitingSecret);
        assert_eq!(session.human_secret(), None);
    }

    #[test]
    fn secret_starts_computer_guessing() {
        let mut session = sequential_session(9);
        solve_human_track(&mut session);

        let events = session.submit_secret("5820").unwrap();

        assert_eq!(
            events,
            vec![GameEvent::ComputerGuessed {
                attempt: 1,
                guess: Code::parse("0123").unwrap()
            }]
        );
        assert_eq!(session.phase(), Phase::ComputerGuessing);
        assert_eq!(session.human_secret(), Some(Code::parse("5820").unwrap()));
        assert_eq!(
            session.pending_guess(),
            Some((1, Code::parse("0123").unwrap()))
        );
    }

    #[test]
    fn cancelling_secret_restarts_session() {
        let mut session = session(10);
        solve_human_track(&mut session);

        let events = session.cancel_secret().unwrap();

        assert_eq!(
            events,
            vec![
                GameEvent::SessionRestarted,
                GameEvent::RoundStarted { round: 1 }
            ]
        );
        assert_eq!(session.phase(), Phase::HumanGuessing);
        assert_eq!(session.round_number(), 1);
        assert_eq!(session.human_track(), TrackState::START);
        assert_eq!(session.score_table()[0].human, None);
    }

    #[test]
    fn invalid_feedback_text_is_rejected() {
        let mut session = session(11);
        solve_human_track(&mut session);
        session.submit_secret("1234").unwrap();
        let pending = session.pending_guess();

        assert!(matches!(
            session.submit_feedback_text("3 2"),
            Err(GameError::InvalidFeedback(FeedbackError::InvalidFeedback { .. }))
        ));
        assert!(matches!(
            session.submit_feedback_text("lots"),
            Err(GameError::InvalidFeedback(FeedbackError::Malformed(_)))
        ));
        assert_eq!(session.pending_guess(), pending);
        assert_eq!(session.computer_track(), TrackState::START);
    }

    #[test]
    fn computer_solves_with_honest_feedback() {
        let mut session = session(12);
        solve_human_track(&mut session);
        let secret = Code::parse("7042").unwrap();
        session.submit_secret(&secret.to_string()).unwrap();

        let mut rounds_finished = None;
        for _ in 0..10 {
            let (_, guess) = session.pending_guess().unwrap();
            let events = session
                .submit_feedback(Feedback::calculate(&guess, &secret))
                .unwrap();
            if let Some(GameEvent::RoundCompleted(score)) = events
                .iter()
                .find(|e| matches!(e, GameEvent::RoundCompleted(_)))
            {
                rounds_finished = Some(*score);
                break;
            }
        }

        let score = rounds_finished.expect("computer should solve within ten attempts");
        assert_eq!(score.round, 1);
        assert_eq!(score.human, Some(1));
        assert!(score.computer.is_some_and(|n| (1..=10).contains(&n)));
        assert_eq!(session.round_number(), 2);
        assert_eq!(session.phase(), Phase::HumanGuessing);
        assert_eq!(session.completed_rounds(), &[score]);
    }

    #[test]
    fn computer_fails_after_ten_attempts() {
        let mut session = session(13);
        solve_human_track(&mut session);
        session.submit_secret("1234").unwrap();

        // Always claim zero matches: never solved
        let zero = Feedback::new(0, 0).unwrap();
        let mut last = Vec::new();
        for _ in 0..10 {
            last = session.submit_feedback(zero).unwrap();
        }

        assert!(last.contains(&GameEvent::TrackResolved {
            side: Side::Computer,
            state: TrackState::Failed,
            score: 11,
            secret: Code::parse("1234").unwrap(),
        }));
        assert_eq!(session.completed_rounds()[0].computer, Some(11));
        assert_eq!(session.round_number(), 2);
    }

    #[test]
    fn contradictory_feedback_still_yields_guesses() {
        let mut session = sequential_session(14);
        solve_human_track(&mut session);
        session.submit_secret("9876").unwrap();

        // "0123" claimed as three dead and one injured: impossible
        let events = session
            .submit_feedback(Feedback::new(3, 1).unwrap())
            .unwrap();

        assert_eq!(session.candidates_remaining(), 0);
        match events.last() {
            Some(GameEvent::ComputerGuessed { attempt: 2, guess }) => {
                assert!(Code::from_digits(*guess.digits()).is_ok());
            }
            other => panic!("expected a fallback guess, got {other:?}"),
        }
    }

    #[test]
    fn new_round_gets_fresh_state() {
        let mut session = sequential_session(15);
        solve_human_track(&mut session);
        session.submit_secret("0123").unwrap();
        let events = session.submit_feedback(Feedback::SOLVED).unwrap();

        assert!(events.contains(&GameEvent::RoundStarted { round: 2 }));
        assert_eq!(session.human_track(), TrackState::START);
        assert_eq!(session.computer_track(), TrackState::START);
        assert_eq!(session.human_secret(), None);
        assert_eq!(session.candidates_remaining(), crate::solver::TOTAL_CODES);
        assert_eq!(
            session.score_table(),
            vec![
                RoundScore {
                    round: 1,
                    human: Some(1),
                    computer: Some(1)
                },
                RoundScore {
                    round: 2,
                    human: None,
                    computer: None
                },
            ]
        );
        assert_eq!(session.totals(), (1, 1));
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut session = session(16);
        let secret = session.computer_secret().to_string();

        session.apply(Action::Guess(secret)).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingSecret);

        session.apply(Action::Secret("4321".to_string())).unwrap();
        assert_eq!(session.phase(), Phase::ComputerGuessing);

        let events = session.apply(Action::Restart).unwrap();
        assert_eq!(events[0], GameEvent::SessionRestarted);
        assert_eq!(session.phase(), Phase::HumanGuessing);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let a = session(17);
        let b = session(17);
        assert_eq!(a.computer_secret(), b.computer_secret());
    }
}
