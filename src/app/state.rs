//! Flow state management
//!
//! Holds the navigation back-stack for the hunt and translates keyboard
//! events into actions for the current screen.

use crate::models::{clue, Clue, CLUE_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use std::fmt;

/// Screens of the hunt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Title screen with the start action
    #[default]
    Home,
    /// Riddle screen for the clue with this 1-based ordinal
    Clue(u8),
    /// Reward screen with the restart action
    Treasure,
}

impl FlowState {
    /// Route name used in logs
    pub fn route(&self) -> String {
        match self {
            FlowState::Home => "home".to_string(),
            FlowState::Clue(n) => format!("clue{}", n),
            FlowState::Treasure => "treasure".to_string(),
        }
    }

    /// Clue shown on this screen, if any
    pub fn clue(&self) -> Option<&'static Clue> {
        match self {
            FlowState::Clue(n) => clue(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// Transitions understood by the flow controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Leave the home screen for the first clue
    Start,
    /// Move past a correctly answered clue
    Advance,
    /// Return to the previous screen
    Back,
    /// Return from the treasure to the home screen
    Restart,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Start the hunt (Enter, Space on Home)
    Start,
    /// Check the typed answer (Enter on a clue)
    Submit,
    /// Go back one screen (Esc on a clue)
    Back,
    /// Start over (Enter, Space, r on Treasure)
    Restart,
    /// Type a character into the answer field
    Insert(char),
    /// Remove the last typed character (Backspace)
    Delete,
    /// Quit application (q, Esc outside clues, Ctrl+C anywhere)
    Quit,
    /// No action
    None,
}

impl NavigationAction {
    /// Convert a keyboard event to an action for the given screen.
    ///
    /// Clue screens capture printable characters as answer text, so quit
    /// is only reachable there through Ctrl+C.
    pub fn from_key(state: FlowState, key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => NavigationAction::Quit,
                _ => NavigationAction::None,
            };
        }

        match state {
            FlowState::Home => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Start,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => NavigationAction::Quit,
                _ => NavigationAction::None,
            },
            FlowState::Clue(_) => match key.code {
                KeyCode::Enter => NavigationAction::Submit,
                KeyCode::Esc => NavigationAction::Back,
                KeyCode::Backspace => NavigationAction::Delete,
                KeyCode::Char(c) => NavigationAction::Insert(c),
                _ => NavigationAction::None,
            },
            FlowState::Treasure => match key.code {
                KeyCode::Enter
                | KeyCode::Char(' ')
                | KeyCode::Char('r')
                | KeyCode::Char('R') => NavigationAction::Restart,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => NavigationAction::Quit,
                _ => NavigationAction::None,
            },
        }
    }
}

/// Navigation flow controller.
///
/// The back-stack always has `Home` at the bottom; the top entry is the
/// screen being shown.
#[derive(Debug)]
pub struct FlowController {
    stack: Vec<FlowState>,
}

impl FlowController {
    /// Create a controller positioned on the home screen
    pub fn new() -> Self {
        Self {
            stack: vec![FlowState::Home],
        }
    }

    /// Get the screen currently shown
    pub fn current(&self) -> FlowState {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Number of entries on the back-stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Home -> first clue
    pub fn start(&mut self) -> bool {
        match self.current() {
            FlowState::Home => self.push(FlowState::Clue(1)),
            other => self.ignore(FlowAction::Start, other),
        }
    }

    /// Clue(n) -> Clue(n + 1), or Treasure after the last clue.
    ///
    /// Callers only advance once the current clue was answered correctly.
    pub fn advance(&mut self) -> bool {
        match self.current() {
            FlowState::Clue(n) if usize::from(n) < CLUE_COUNT => self.push(FlowState::Clue(n + 1)),
            FlowState::Clue(_) => self.push(FlowState::Treasure),
            other => self.ignore(FlowAction::Advance, other),
        }
    }

    /// Pop a clue screen, returning to the previous clue or to Home
    pub fn back(&mut self) -> bool {
        match self.current() {
            FlowState::Clue(_) => {
                let left = self.stack.pop();
                debug!(
                    "back: {} -> {}",
                    left.unwrap_or_default(),
                    self.current()
                );
                true
            }
            other => self.ignore(FlowAction::Back, other),
        }
    }

    /// Pop everything above the Home entry
    pub fn restart(&mut self) -> bool {
        match self.current() {
            FlowState::Treasure => {
                self.stack.truncate(1);
                debug!("restart: treasure -> {}", self.current());
                true
            }
            other => self.ignore(FlowAction::Restart, other),
        }
    }

    /// Dispatch a flow action to the matching transition
    pub fn handle(&mut self, action: FlowAction) -> bool {
        match action {
            FlowAction::Start => self.start(),
            FlowAction::Advance => self.advance(),
            FlowAction::Back => self.back(),
            FlowAction::Restart => self.restart(),
        }
    }

    fn push(&mut self, next: FlowState) -> bool {
        debug!("navigate: {} -> {}", self.current(), next);
        self.stack.push(next);
        true
    }

    fn ignore(&self, action: FlowAction, state: FlowState) -> bool {
        debug!("ignored {:?} on {}", action, state);
        false
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}
