//! Console render surface.

use std::io::{self, Write};

use tracing::warn;

use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::surface::RenderSurface;

use crate::output::{format_animation, position_token};
use crate::ui::styled_position;

/// Writes one line per surface update.
///
/// Position updates print as `positions: 0:left 1:center* ...`, animation
/// updates as `track: carousel-anim-right` (or `track: -` when cleared). In
/// quiet mode only the centered index is printed, for the initial render and
/// after each move.
pub struct ConsoleSurface<W: Write> {
    out: W,
    quiet: bool,
    color: bool,
}

impl ConsoleSurface<io::Stdout> {
    /// Surface on standard output.
    #[must_use]
    pub fn stdout(quiet: bool) -> Self {
        let color = !crate::ui::is_color_disabled() && console::colors_enabled();
        Self::new(io::stdout(), quiet, color)
    }
}

impl<W: Write> ConsoleSurface<W> {
    #[must_use]
    pub fn new(out: W, quiet: bool, color: bool) -> Self {
        Self { out, quiet, color }
    }

    /// Print a free-form line through the same writer.
    pub fn note(&mut self, text: &str) {
        if !self.quiet {
            self.write_line(text);
        }
    }

    /// Consume the surface, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            warn!(%err, "Console surface write failed");
        }
    }
}

impl<W: Write> RenderSurface for ConsoleSurface<W> {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        if self.quiet {
            self.write_line(&cursor.to_string());
            return;
        }
        let color = self.color;
        let tokens: Vec<String> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| styled_position(&position_token(i, *p), *p, color))
            .collect();
        self.write_line(&format!("positions: {}", tokens.join(" ")));
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        if !self.quiet {
            self.write_line(&format!("track: {}", format_animation(direction)));
        }
    }
}

impl<W: Write> std::fmt::Debug for ConsoleSurface<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSurface")
            .field("quiet", &self.quiet)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
