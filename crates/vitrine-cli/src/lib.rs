//! # vitrine-cli
//!
//! Console rendering of the review carousel, output formatting, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::ConsoleSurface;
