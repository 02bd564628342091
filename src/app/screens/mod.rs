//! TUI screen components
//!
//! One component per flow state, plus the key hint bar they share.

pub mod clue;
pub mod home;
pub mod treasure;

pub use clue::{ClueOutcome, ClueScreen, InputState, INCORRECT_ANSWER_MESSAGE};
pub use home::HomeScreen;
pub use treasure::TreasureScreen;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Build the bordered hint bar from `(key, label)` pairs
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}
