//! Interactive TUI for playing a session

mod app;
mod rendering;

pub use app::{App, LogEntry, Message, MessageStyle, run_tui};
