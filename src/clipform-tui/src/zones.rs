//! Clickable regions recorded during rendering.
//!
//! ```text
//! render:  zones.clear(); zones.register(target, rect) for each visible control
//! mouse:   zones.find(column, row) -> target under the pointer
//! ```

use crate::form_view::FocusTarget;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickZone {
    pub target: FocusTarget,
    pub rect: Rect,
}

/// Zones from the last render pass, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClickZoneRegistry {
    zones: Vec<ClickZone>,
}

impl ClickZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Record a zone. Empty rectangles are ignored.
    pub fn register(&mut self, target: FocusTarget, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.zones.push(ClickZone { target, rect });
    }

    /// The last registered zone containing the point; later zones are drawn
    /// on top.
    pub fn find(&self, x: u16, y: u16) -> Option<FocusTarget> {
        self.zones
            .iter()
            .rev()
            .find(|z| z.rect.contains(Position::new(x, y)))
            .map(|z| z.target)
    }

    pub fn rect_of(&self, target: FocusTarget) -> Option<Rect> {
        self.zones.iter().find(|z| z.target == target).map(|z| z.rect)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_view::ControlId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_hits_and_misses() {
        let mut zones = ClickZoneRegistry::new();
        zones.register(FocusTarget::Input(ControlId(0)), Rect::new(2, 3, 20, 1));
        zones.register(FocusTarget::Copy(ControlId(0)), Rect::new(24, 3, 8, 1));

        assert_eq!(zones.find(2, 3), Some(FocusTarget::Input(ControlId(0))));
        assert_eq!(zones.find(31, 3), Some(FocusTarget::Copy(ControlId(0))));
        assert_eq!(zones.find(32, 3), None);
        assert_eq!(zones.find(24, 4), None);
    }

    #[test]
    fn test_empty_rects_are_skipped() {
        let mut zones = ClickZoneRegistry::new();
        zones.register(FocusTarget::Copy(ControlId(1)), Rect::new(0, 0, 0, 1));
        assert!(zones.is_empty());
    }
}
