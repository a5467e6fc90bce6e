//! # vitrine-tui
//!
//! Interactive terminal review carousel using ratatui with Elm architecture.

pub mod bridge;
pub mod cards;
pub mod dots;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;

pub use bridge::TuiBridgeSurface;
pub use messages::TuiMessage;
pub use model::TuiApp;
