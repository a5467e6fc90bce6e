//! Review cards panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::review::Review;

use crate::styles::ColorTheme;

/// Split the panel into the heading row and the card track.
#[must_use]
pub fn track_rows(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    (rows[0], rows[1])
}

/// Screen rectangle of every visible card, as `(review index, rect)`.
///
/// Below the heading row the track is split in three columns: left
/// neighbour, center, right neighbour. Hidden cards get no rectangle.
#[must_use]
pub fn card_rects(area: Rect, positions: &[Position]) -> Vec<(usize, Rect)> {
    let (_, track) = track_rows(area);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(track);

    positions
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let slot = match p {
                Position::Left => slots[0],
                Position::Center => slots[1],
                Position::Right => slots[2],
                Position::Hidden => return None,
            };
            Some((i, slot))
        })
        .collect()
}

/// Index of the card under a terminal cell, if any.
#[must_use]
pub fn card_at(area: Rect, positions: &[Position], column: u16, row: u16) -> Option<usize> {
    card_rects(area, positions)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(i, _)| i)
}

/// Render the track with its visible cards.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    reviews: &[Review],
    positions: &[Position],
    animation: Option<AnimationDirection>,
    title: &str,
    theme: &ColorTheme,
) {
    let (heading_row, _) = track_rows(area);
    let mut heading = vec![Span::styled(format!(" {title} "), theme.header_style())];
    if let Some(direction) = animation {
        heading.push(Span::styled(format!("· {}", direction.css_class()), theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), heading_row);

    for (index, rect) in card_rects(area, positions) {
        let Some(review) = reviews.get(index) else {
            continue;
        };
        let position = positions[index];
        let mut lines = vec![
            Line::from(Span::styled(review.stars(), theme.star_style())),
            Line::from(Span::styled(format!("\"{}\"", review.quote), theme.card_style(position))),
            Line::raw(""),
            Line::from(Span::styled(review.author.clone(), theme.card_style(position))),
        ];
        if !review.role.is_empty() {
            lines.push(Line::from(Span::styled(review.role.clone(), theme.muted_style())));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(position));
        let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(card, rect);
    }
}
