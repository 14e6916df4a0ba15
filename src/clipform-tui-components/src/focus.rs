//! Focus cycling across the focusable targets of a screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction of focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

impl FocusDirection {
    /// The focus move a key asks for, if any.
    ///
    /// Only Tab/BackTab move focus here; arrow keys belong to the
    /// focused control and are interpreted by the caller.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(FocusDirection::Backward)
            }
            KeyCode::Tab => Some(FocusDirection::Forward),
            KeyCode::BackTab => Some(FocusDirection::Backward),
            _ => None,
        }
    }
}

/// Index of the focused element among `count` focusable elements.
///
/// ```rust
/// use clipform_tui_components::focus::FocusManager;
///
/// let mut focus = FocusManager::new(3);
/// focus.next();
/// focus.next();
/// focus.next();
/// assert_eq!(focus.current(), 0); // wrapped
/// ```
#[derive(Debug, Clone)]
pub struct FocusManager {
    current: usize,
    count: usize,
}

impl FocusManager {
    /// Create a focus manager over `count` elements, focus on the first.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// The focused index. Meaningless when `count() == 0`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Focus a specific index; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }

    /// Move focus to the next element, wrapping to the first.
    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        if self.current + 1 < self.count {
            self.current += 1;
        } else {
            self.current = 0;
        }
    }

    /// Move focus to the previous element, wrapping to the last.
    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }
        if self.current > 0 {
            self.current -= 1;
        } else {
            self.current = self.count - 1;
        }
    }

    /// Move focus in the given direction.
    pub fn move_focus(&mut self, direction: FocusDirection) {
        match direction {
            FocusDirection::Forward => self.next(),
            FocusDirection::Backward => self.prev(),
        }
    }

    /// Check if a given index is focused.
    pub fn is_focused(&self, index: usize) -> bool {
        self.count > 0 && self.current == index
    }

    /// Total number of focusable elements.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_manager_cycles() {
        let mut fm = FocusManager::new(3);
        assert!(fm.is_focused(0));

        fm.next();
        fm.next();
        assert_eq!(fm.current(), 2);

        fm.next();
        assert_eq!(fm.current(), 0);

        fm.prev();
        assert_eq!(fm.current(), 2);
    }

    #[test]
    fn test_focus_manager_empty() {
        let mut fm = FocusManager::new(0);
        fm.next();
        fm.prev();
        assert!(!fm.is_focused(0));
    }

    #[test]
    fn test_focus_manager_set_out_of_range() {
        let mut fm = FocusManager::new(5);
        fm.set(3);
        fm.set(10);
        assert_eq!(fm.current(), 3);
    }

    #[test]
    fn test_direction_from_key() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);

        assert_eq!(FocusDirection::from_key(&tab), Some(FocusDirection::Forward));
        assert_eq!(FocusDirection::from_key(&back), Some(FocusDirection::Backward));
        assert_eq!(FocusDirection::from_key(&down), None);
    }
}
