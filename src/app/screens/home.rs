//! Home screen implementation
//!
//! Title card with the single start action.

use super::key_hints;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "Caça ao Tesouro";
pub const START_LABEL: &str = "Iniciar Caça ao Tesouro";

/// Home screen component
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the home screen
    pub fn render(&self, f: &mut Frame, show_hints: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3), // Title
                Constraint::Length(2),
                Constraint::Length(3), // Start button
                Constraint::Min(0),
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let title = Paragraph::new(TITLE)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(title, centered(chunks[1], 40));

        let button = Paragraph::new(START_LABEL)
            .style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, centered(chunks[3], 40));

        if show_hints {
            f.render_widget(key_hints(&[("Enter", "Iniciar"), ("Q", "Sair")]), chunks[5]);
        }
    }
}

/// Horizontally center a box of at most `width` columns inside `area`
pub(crate) fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
