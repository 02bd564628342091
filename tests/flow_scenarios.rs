//! End-to-end walks through the hunt driven by key events

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use treasure_hunt::app::{App, FlowState};
use treasure_hunt::config::HuntConfig;
use treasure_hunt::models::CLUES;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn submit(app: &mut App, answer: &str) {
    for c in answer.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

fn error_shown(app: &App) -> bool {
    app.clue_screen().map_or(false, |s| s.input().show_error)
}

#[test]
fn test_full_hunt_and_restart() {
    let mut app = App::new(&HuntConfig::default());
    assert_eq!(app.current_state(), FlowState::Home);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_state(), FlowState::Clue(1));

    submit(&mut app, "MAPA");
    assert_eq!(app.current_state(), FlowState::Clue(2));

    submit(&mut app, "buraco");
    assert_eq!(app.current_state(), FlowState::Clue(3));

    submit(&mut app, "escuro");
    assert_eq!(app.current_state(), FlowState::Treasure);
    assert!(app.clue_screen().is_none());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_state(), FlowState::Home);
    assert_eq!(app.controller().depth(), 1);
}

#[test]
fn test_wrong_answer_then_right_answer() {
    let mut app = App::new(&HuntConfig::default());
    press(&mut app, KeyCode::Enter);

    submit(&mut app, "wrong");
    assert_eq!(app.current_state(), FlowState::Clue(1));
    assert!(error_shown(&app));

    // Clear the field; the first edit already hides the error
    for _ in 0.."wrong".len() {
        press(&mut app, KeyCode::Backspace);
        assert!(!error_shown(&app));
    }
    submit(&mut app, "mapa");
    assert_eq!(app.current_state(), FlowState::Clue(2));
    assert!(!error_shown(&app));
}

#[test]
fn test_every_clue_accepts_its_answer_in_any_case() {
    for clue in &CLUES {
        for variant in [
            clue.expected_answer.to_string(),
            clue.expected_answer.to_uppercase(),
            format!("  {} ", clue.expected_answer),
        ] {
            let mut app = App::new(&HuntConfig::default());
            press(&mut app, KeyCode::Enter);
            for earlier in CLUES.iter().take_while(|c| c.ordinal < clue.ordinal) {
                submit(&mut app, earlier.expected_answer);
            }
            assert_eq!(app.current_state(), FlowState::Clue(clue.ordinal));

            submit(&mut app, &variant);
            let expected = if clue.is_last() {
                FlowState::Treasure
            } else {
                FlowState::Clue(clue.ordinal + 1)
            };
            assert_eq!(app.current_state(), expected, "answer {:?}", variant);
        }
    }
}

#[test]
fn test_wrong_answers_never_advance() {
    let wrong = ["", " ", "map", "mapas", "buraco", "escuro", "m a p a", "mapa!"];
    let mut app = App::new(&HuntConfig::default());
    press(&mut app, KeyCode::Enter);

    for answer in wrong {
        submit(&mut app, answer);
        assert_eq!(app.current_state(), FlowState::Clue(1), "answer {:?}", answer);
        assert!(error_shown(&app));
        // Reset the field for the next attempt
        while app.clue_screen().map_or(false, |s| !s.input().text.is_empty()) {
            press(&mut app, KeyCode::Backspace);
        }
    }
}

#[test]
fn test_back_walks_the_stack() {
    let mut app = App::new(&HuntConfig::default());
    press(&mut app, KeyCode::Enter);
    submit(&mut app, "mapa");
    submit(&mut app, "buraco");
    assert_eq!(app.current_state(), FlowState::Clue(3));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_state(), FlowState::Clue(2));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_state(), FlowState::Clue(1));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_state(), FlowState::Home);
    assert!(!app.should_quit());
}

#[test]
fn test_clue_two_needs_clue_one_again_after_back() {
    let mut app = App::new(&HuntConfig::default());
    press(&mut app, KeyCode::Enter);
    submit(&mut app, "mapa");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_state(), FlowState::Clue(1));

    // Answering the second riddle here does not skip ahead
    submit(&mut app, "buraco");
    assert_eq!(app.current_state(), FlowState::Clue(1));
}

#[test]
fn test_treasure_ignores_back() {
    let mut app = App::new(&HuntConfig::default());
    press(&mut app, KeyCode::Enter);
    for clue in &CLUES {
        submit(&mut app, clue.expected_answer);
    }
    assert_eq!(app.current_state(), FlowState::Treasure);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.current_state(), FlowState::Treasure);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.current_state(), FlowState::Home);
}
