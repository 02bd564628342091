//! Clue screen implementation
//!
//! Shows one riddle with an answer field. The typed text and the error
//! flag live only as long as this screen does.

use super::key_hints;
use crate::models::Clue;
use log::info;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const INCORRECT_ANSWER_MESSAGE: &str = "Resposta incorreta! Tente novamente.";
pub const ANSWER_LABEL: &str = "Sua resposta";

/// Transient answer input for a clue screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Text typed so far
    pub text: String,
    /// Whether the last submission was rejected
    pub show_error: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.show_error = false;
    }

    pub fn delete_char(&mut self) {
        self.text.pop();
        self.show_error = false;
    }
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueOutcome {
    Correct,
    Incorrect,
}

/// Clue screen component
#[derive(Debug)]
pub struct ClueScreen {
    clue: &'static Clue,
    input: InputState,
}

impl ClueScreen {
    /// Create a clue screen with empty input
    pub fn new(clue: &'static Clue) -> Self {
        Self {
            clue,
            input: InputState::new(),
        }
    }

    pub fn clue(&self) -> &'static Clue {
        self.clue
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert_char(c);
    }

    pub fn delete_char(&mut self) {
        self.input.delete_char();
    }

    /// Check the typed answer.
    ///
    /// A wrong answer keeps the text and raises the error flag until the
    /// next edit.
    pub fn submit(&mut self) -> ClueOutcome {
        if self.clue.matches(&self.input.text) {
            ClueOutcome::Correct
        } else {
            info!("incorrect answer for clue {}", self.clue.ordinal);
            self.input.show_error = true;
            ClueOutcome::Incorrect
        }
    }

    /// Render the clue screen
    pub fn render(&self, f: &mut Frame, show_hints: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Min(4),    // Riddle
                Constraint::Length(3), // Answer field
                Constraint::Length(1), // Error line
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        let heading = Paragraph::new(format!("Pista {}", self.clue.ordinal))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(heading, chunks[0]);

        let riddle = Paragraph::new(self.clue.prompt)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        f.render_widget(riddle, chunks[1]);

        self.render_input(f, chunks[2]);

        if self.input.show_error {
            let error = Paragraph::new(INCORRECT_ANSWER_MESSAGE)
                .style(Style::default().fg(Color::Red));
            f.render_widget(error, chunks[3]);
        }

        if show_hints {
            f.render_widget(
                key_hints(&[
                    ("Esc", "Voltar"),
                    ("Enter", "Próxima Pista"),
                    ("Ctrl+C", "Sair"),
                ]),
                chunks[4],
            );
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let border = if self.input.show_error {
            Color::Red
        } else {
            Color::Cyan
        };
        let field = Paragraph::new(self.input.text.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(ANSWER_LABEL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(field, area);

        // Cursor sits after the typed text, clamped inside the border
        let typed = u16::try_from(self.input.text.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(typed).min(max_x);
        f.set_cursor(x, area.y + 1);
    }
}
