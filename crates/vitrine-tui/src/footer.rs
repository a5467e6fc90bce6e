//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer with keyboard shortcuts and an optional status message.
pub fn render_footer(frame: &mut Frame, area: Rect, status: Option<&str>, theme: &ColorTheme) {
    let mut spans = vec![
        Span::styled("←/→", theme.key_style()),
        Span::raw(": browse | "),
        Span::styled("1-9", theme.key_style()),
        Span::raw(": jump | "),
        Span::styled("t", theme.key_style()),
        Span::raw(": language | "),
        Span::styled("q", theme.key_style()),
        Span::raw(": quit"),
    ];
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.to_string(), theme.muted_style()));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
