//! Pagination dots.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::ColorTheme;

fn row_width(len: usize) -> u16 {
    u16::try_from((len * 2).saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Render one dot per review, the centered one filled.
pub fn render_dots(frame: &mut Frame, area: Rect, len: usize, cursor: usize, theme: &ColorTheme) {
    let mut spans = Vec::with_capacity(len * 2);
    for i in 0..len {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i == cursor {
            spans.push(Span::styled("●", theme.header_style()));
        } else {
            spans.push(Span::styled("○", theme.muted_style()));
        }
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Index of the dot under `column` on the dots row.
#[must_use]
pub fn dot_at(area: Rect, len: usize, column: u16) -> Option<usize> {
    let width = row_width(len);
    let start = area.x + area.width.saturating_sub(width) / 2;
    let offset = column.checked_sub(start)?;
    if offset % 2 != 0 {
        return None;
    }
    let index = usize::from(offset / 2);
    (index < len).then_some(index)
}
