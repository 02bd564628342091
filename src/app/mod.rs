//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and navigation flow handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{ClueOutcome, ClueScreen, HomeScreen, InputState, TreasureScreen};
pub use state::{FlowAction, FlowController, FlowState, NavigationAction};
pub use tui::{init_panic_hook, Tui};
