//! Bridge between the carousel and TUI messages.

use crossbeam_channel::Sender;

use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::surface::RenderSurface;

use crate::messages::TuiMessage;

/// Render surface that forwards every update to the TUI channel.
///
/// Sends never block; a full or closed channel drops the update.
#[derive(Debug, Clone)]
pub struct TuiBridgeSurface {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeSurface {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl RenderSurface for TuiBridgeSurface {
    fn render_positions(&mut self, positions: &[Position], cursor: usize) {
        let _ = self.tx.try_send(TuiMessage::Positions {
            positions: positions.to_vec(),
            cursor,
        });
    }

    fn set_animation(&mut self, direction: Option<AnimationDirection>) {
        let _ = self.tx.try_send(TuiMessage::Animation(direction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn forwards_updates() {
        let (tx, rx) = unbounded();
        let mut surface = TuiBridgeSurface::new(tx);
        surface.render_positions(&[Position::Center, Position::Right], 0);
        surface.set_animation(Some(AnimationDirection::Next));

        assert_eq!(
            rx.try_recv().unwrap(),
            TuiMessage::Positions {
                positions: vec![Position::Center, Position::Right],
                cursor: 0
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            TuiMessage::Animation(Some(AnimationDirection::Next))
        );
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut surface = TuiBridgeSurface::new(tx);
        surface.set_animation(None);
    }
}
