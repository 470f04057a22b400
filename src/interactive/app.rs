//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::game::{Action, GameError, GameEvent, Phase, Session, Side, TrackState};
use crate::output::describe_event;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest text the input line accepts ("10 / 10" fits)
const MAX_INPUT_LEN: usize = 8;

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub session: Session<StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub human_log: Vec<LogEntry>,
    pub computer_log: Vec<LogEntry>,
    pub should_quit: bool,
}

/// One scored guess in a side's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub attempt: u32,
    pub guess: Code,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session<StdRng>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            human_log: Vec::new(),
            computer_log: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess my 4-digit number, then I'll guess yours.",
            MessageStyle::Info,
        );
        app.add_message(
            &describe_event(&GameEvent::RoundStarted {
                round: app.session.round_number(),
            }),
            MessageStyle::Info,
        );
        app
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.apply(Action::Restart),
            KeyCode::Esc if self.session.phase() == Phase::AwaitingSecret => {
                self.input_buffer.clear();
                self.apply(Action::CancelSecret);
            }
            KeyCode::Char(c) if self.accepts(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Whether `c` may be typed in the current phase
    fn accepts(&self, c: char) -> bool {
        if self.input_buffer.len() >= MAX_INPUT_LEN {
            return false;
        }
        match self.session.phase() {
            Phase::HumanGuessing | Phase::AwaitingSecret => c.is_ascii_digit(),
            Phase::ComputerGuessing => c.is_ascii_digit() || matches!(c, ' ' | ',' | '/' | ':'),
        }
    }

    /// Submit the input line; its meaning follows the phase
    pub fn submit(&mut self) {
        let text = self.input_buffer.trim().to_string();
        let result = match self.session.phase() {
            Phase::HumanGuessing => self.session.submit_guess(&text),
            Phase::AwaitingSecret => self.session.submit_secret(&text),
            Phase::ComputerGuessing => self.session.submit_feedback_text(&text),
        };
        self.handle_result(result);
    }

    fn apply(&mut self, action: Action) {
        let result = self.session.apply(action);
        self.handle_result(result);
    }

    fn handle_result(&mut self, result: Result<Vec<GameEvent>, GameError>) {
        match result {
            Ok(events) => {
                self.input_buffer.clear();
                for event in &events {
                    self.record(event);
                }
            }
            Err(err) => {
                debug!(error = %err, "Input rejected");
                self.add_message(&format!("❌ {err}"), MessageStyle::Error);
            }
        }
    }

    fn record(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::GuessScored {
                side,
                attempt,
                guess,
                feedback,
            } => {
                let entry = LogEntry {
                    attempt,
                    guess,
                    feedback,
                };
                match side {
                    Side::Human => self.human_log.push(entry),
                    Side::Computer => self.computer_log.push(entry),
                }
            }
            GameEvent::RoundStarted { .. } | GameEvent::SessionRestarted => {
                self.human_log.clear();
                self.computer_log.clear();
                self.add_message(&describe_event(event), MessageStyle::Info);
            }
            GameEvent::TrackResolved { state, side, .. } => {
                let style = match (side, state) {
                    (Side::Human, TrackState::Solved(_)) | (Side::Computer, TrackState::Failed) => {
                        MessageStyle::Success
                    }
                    _ => MessageStyle::Error,
                };
                self.add_message(&describe_event(event), style);
            }
            _ => self.add_message(&describe_event(event), MessageStyle::Info),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
