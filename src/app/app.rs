//! Main application controller
//!
//! Owns the flow controller and the active clue screen, routes key events,
//! and runs the draw loop.

use crate::{
    app::{
        screens::{ClueOutcome, ClueScreen, HomeScreen, TreasureScreen},
        state::{FlowAction, FlowController, FlowState, NavigationAction},
        tui::Tui,
    },
    config::HuntConfig,
    Result,
};
use crossterm::event::KeyEvent;
use log::{debug, info};
use ratatui::Frame;

/// Treasure hunt application
pub struct App {
    /// Navigation back-stack
    controller: FlowController,
    /// Screen components
    home_screen: HomeScreen,
    clue_screen: Option<ClueScreen>,
    treasure_screen: TreasureScreen,
    show_key_hints: bool,
    should_quit: bool,
}

impl App {
    /// Create an application positioned on the home screen
    pub fn new(config: &HuntConfig) -> Self {
        Self {
            controller: FlowController::new(),
            home_screen: HomeScreen::new(),
            clue_screen: None,
            treasure_screen: TreasureScreen::new(),
            show_key_hints: config.show_key_hints,
            should_quit: false,
        }
    }

    /// Screen currently shown
    pub fn current_state(&self) -> FlowState {
        self.controller.current()
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Active clue screen, present only while a clue is shown
    pub fn clue_screen(&self) -> Option<&ClueScreen> {
        self.clue_screen.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main loop until the player quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        info!("hunt started on {}", self.current_state());
        while !self.should_quit {
            tui.draw(|f| self.render(f))?;
            if let Some(key) = tui.next_key()? {
                self.handle_key(key);
            }
        }
        info!("hunt closed on {}", self.current_state());
        Ok(())
    }

    /// Draw the current screen
    pub fn render(&self, f: &mut Frame) {
        match self.current_state() {
            FlowState::Home => self.home_screen.render(f, self.show_key_hints),
            FlowState::Clue(_) => {
                if let Some(screen) = &self.clue_screen {
                    screen.render(f, self.show_key_hints);
                }
            }
            FlowState::Treasure => self.treasure_screen.render(f, self.show_key_hints),
        }
    }

    /// Handle one key press and update state accordingly
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = NavigationAction::from_key(self.current_state(), key);
        self.handle_action(action);
    }

    /// Apply a navigation action to the current screen
    pub fn handle_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => {
                debug!("quit requested on {}", self.current_state());
                self.should_quit = true;
            }
            NavigationAction::Start => self.navigate(FlowAction::Start),
            NavigationAction::Back => self.navigate(FlowAction::Back),
            NavigationAction::Restart => self.navigate(FlowAction::Restart),
            NavigationAction::Submit => {
                let outcome = self.clue_screen.as_mut().map(ClueScreen::submit);
                if outcome == Some(ClueOutcome::Correct) {
                    self.navigate(FlowAction::Advance);
                }
            }
            NavigationAction::Insert(c) => {
                if let Some(screen) = self.clue_screen.as_mut() {
                    screen.insert_char(c);
                }
            }
            NavigationAction::Delete => {
                if let Some(screen) = self.clue_screen.as_mut() {
                    screen.delete_char();
                }
            }
            NavigationAction::None => {}
        }
    }

    /// Apply a transition and rebuild transient screen state if it happened
    fn navigate(&mut self, action: FlowAction) {
        if !self.controller.handle(action) {
            return;
        }

        let state = self.current_state();
        self.clue_screen = state.clue().map(ClueScreen::new);
        match state {
            FlowState::Treasure => info!("treasure found"),
            FlowState::Home if action == FlowAction::Restart => info!("hunt restarted"),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn answer(app: &mut App, text: &str) {
        type_text(app, text);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_app_creation() {
        let app = App::new(&HuntConfig::default());
        assert_eq!(app.current_state(), FlowState::Home);
        assert!(app.clue_screen().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_start_builds_clue_screen() {
        let mut app = App::new(&HuntConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_state(), FlowState::Clue(1));
        assert_eq!(app.clue_screen().map(|s| s.clue().ordinal), Some(1));
    }

    #[test]
    fn test_backspace_edits_instead_of_navigating() {
        let mut app = App::new(&HuntConfig::default());
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "mapx");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.current_state(), FlowState::Clue(1));
        assert_eq!(app.clue_screen().map(|s| s.input().text.as_str()), Some("map"));
    }

    #[test]
    fn test_reentered_clue_starts_fresh() {
        let mut app = App::new(&HuntConfig::default());
        press(&mut app, KeyCode::Enter);
        answer(&mut app, "mapa");
        answer(&mut app, "nope");
        assert!(app.clue_screen().map_or(false, |s| s.input().show_error));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_state(), FlowState::Clue(1));
        let screen = app.clue_screen().expect("clue screen");
        assert!(screen.input().text.is_empty());
        assert!(!screen.input().show_error);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&HuntConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        // 'q' is answer text on a clue screen
        let mut app = App::new(&HuntConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_submit_outside_clue_is_ignored() {
        let mut app = App::new(&HuntConfig::default());
        app.handle_action(NavigationAction::Submit);
        app.handle_action(NavigationAction::Insert('x'));
        assert_eq!(app.current_state(), FlowState::Home);
        assert!(app.clue_screen().is_none());
    }
}
