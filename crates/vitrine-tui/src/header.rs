//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use vitrine_core::locale::{Locale, LocaleController};

use crate::styles::ColorTheme;

/// Render the header: page title plus the language buttons.
pub fn render_header(frame: &mut Frame, area: Rect, locale: &LocaleController, theme: &ColorTheme) {
    let mut spans = vec![Span::styled(locale.page_title(), theme.header_style()), Span::raw("  ")];
    for candidate in Locale::ALL {
        let label = format!(" {} ", candidate.code().to_uppercase());
        if locale.is_active(candidate) {
            spans.push(Span::styled(label, theme.active_style()));
        } else {
            spans.push(Span::styled(label, theme.muted_style()));
        }
    }

    let block = Block::default().borders(Borders::BOTTOM).title(" vitrine ");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
