//! Treasure screen implementation

use super::{home::centered, key_hints};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEADLINE: &str = "Parabéns!";
pub const MESSAGE: &str = "Você encontrou o tesouro!";
pub const RESTART_LABEL: &str = "Recomeçar";

/// Reward screen with the restart action
#[derive(Debug, Default)]
pub struct TreasureScreen;

impl TreasureScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, show_hints: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // Headline
                Constraint::Length(1),
                Constraint::Length(1), // Message
                Constraint::Length(2),
                Constraint::Length(3), // Restart button
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let headline = Paragraph::new(HEADLINE)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(headline, chunks[1]);

        let message = Paragraph::new(MESSAGE)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(message, chunks[3]);

        let button = Paragraph::new(RESTART_LABEL)
            .style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, centered(chunks[5], 30));

        if show_hints {
            f.render_widget(key_hints(&[("Enter", "Recomeçar"), ("Q", "Sair")]), chunks[7]);
        }
    }
}
