//! TUI rendering with ratatui
//!
//! Both guess histories side by side, with the running score table.

use super::app::{App, LogEntry, MessageStyle};
use crate::game::{Phase, Side, TrackState};
use crate::output::formatters::{feedback_pegs, score_cell};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Guess histories
            Constraint::Length(8), // Messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Human history
            Constraint::Percentage(35), // Computer history
            Constraint::Percentage(30), // Scores
        ])
        .split(chunks[1]);

    render_history(f, app, Side::Human, main_chunks[0]);
    render_computer_panel(f, app, main_chunks[1]);
    render_scores(f, app, main_chunks[2]);

    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let turn = match app.session.active_side() {
        Side::Human => Span::styled(
            "Your turn",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Side::Computer => Span::styled(
            "Computer's turn",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🎯 DEAD & INJURED",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  |  Round {}  |  ", app.session.round_number())),
        turn,
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn log_lines(entries: &[LogEntry]) -> Vec<ListItem<'static>> {
    entries
        .iter()
        .map(|entry| {
            let style = if entry.feedback.is_solved() {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", entry.attempt)),
                Span::styled(entry.guess.to_string(), style),
                Span::raw("  "),
                Span::styled(
                    feedback_pegs(entry.feedback),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  {}D {}I", entry.feedback.dead(), entry.feedback.injured()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect()
}

fn track_title(side: Side, state: TrackState, max_attempts: u32) -> String {
    match state {
        TrackState::InProgress(n) => format!(" {side} ({n}/{max_attempts}) "),
        TrackState::Solved(n) => format!(" {side}: solved in {n} "),
        TrackState::Failed => format!(" {side}: out of attempts "),
    }
}

fn render_history(f: &mut Frame, app: &App, side: Side, area: Rect) {
    let (entries, state) = match side {
        Side::Human => (&app.human_log, app.session.human_track()),
        Side::Computer => (&app.computer_log, app.session.computer_track()),
    };
    let color = if app.session.active_side() == side {
        Color::Green
    } else {
        Color::White
    };

    let history = List::new(log_lines(entries)).block(
        Block::default()
            .title(track_title(side, state, app.session.config().max_attempts))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(history, area);
}

fn render_computer_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // History
            Constraint::Length(3), // Pending guess
            Constraint::Length(3), // Search space gauge
        ])
        .split(area);

    render_history(f, app, Side::Computer, chunks[0]);

    let pending = match (app.session.pending_guess(), app.session.human_secret()) {
        (Some((attempt, guess)), Some(secret)) => Line::from(vec![
            Span::raw(format!("Guess #{attempt}: ")),
            Span::styled(
                guess.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (your number {secret})"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        _ => Line::from("Waiting for your secret"),
    };
    let pending = Paragraph::new(pending).block(
        Block::default()
            .title(" Computer Guess ")
            .borders(Borders::ALL),
    );
    f.render_widget(pending, chunks[1]);

    render_search_progress(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = crate::solver::TOTAL_CODES;
    let remaining = app.session.candidates_remaining();
    let eliminated_pct = ((total - remaining.min(total)) * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_scores(f: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(Span::styled(
        format!("{:>5} {:>5} {:>8}", "Round", "You", "Computer"),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];
    for row in app.session.score_table() {
        lines.push(Line::from(format!(
            "{:>5} {:>5} {:>8}",
            row.round,
            score_cell(row.human),
            score_cell(row.computer)
        )));
    }

    let (human, computer) = app.session.totals();
    lines.push(Line::from(Span::styled(
        format!("{:>5} {human:>5} {computer:>8}", "Total"),
        Style::default().fg(Color::Cyan),
    )));

    let scores = Paragraph::new(lines).block(
        Block::default()
            .title(" Scores (lower wins) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(scores, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.session.phase() {
        Phase::HumanGuessing => (" Your Guess (4 different digits) ", Color::Green),
        Phase::AwaitingSecret => (" Your Secret Number | ESC to cancel ", Color::Cyan),
        Phase::ComputerGuessing => (" Dead and Injured, e.g. '1 2' ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = Paragraph::new(format!(
        "Waiting for {} | Enter: Submit | n: New Game | q: Quit",
        app.session.phase()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
