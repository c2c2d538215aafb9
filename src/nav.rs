//! Navigation menu state machine
//!
//! Pure open/closed transitions for the collapsible nav. The render loop
//! detects trigger clicks, link activations, outside pointer presses and
//! viewport resizes and feeds them in here.

use crate::constants::MOBILE_BREAKPOINT;

/// Collapsible menu state. Stateless aside from the `open` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Trigger (hamburger) activated.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was activated; on mobile widths the menu closes.
    pub fn link_activated(&mut self, viewport_width: f32) {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.open = false;
        }
    }

    /// A pointer press landed outside both the menu and its trigger.
    pub fn pointer_outside(&mut self) {
        self.open = false;
    }

    /// Viewport resized; crossing above the breakpoint closes the menu.
    pub fn viewport_resized(&mut self, viewport_width: f32) {
        if viewport_width > MOBILE_BREAKPOINT {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_closes_menu_on_mobile_width() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.link_activated(500.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_keeps_menu_open_on_desktop_width() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.link_activated(1024.0);
        assert!(menu.is_open());
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.link_activated(MOBILE_BREAKPOINT);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_pointer_outside_closes_menu() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.pointer_outside();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_above_breakpoint_closes_menu() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.viewport_resized(1024.0);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_below_breakpoint_keeps_menu_open() {
        let mut menu = NavMenu::new();
        menu.toggle();
        menu.viewport_resized(600.0);
        assert!(menu.is_open());
    }
}
