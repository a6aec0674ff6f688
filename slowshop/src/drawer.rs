//! Cart drawer state
//!
//! The drawer slides in from the right. While it is open the page behind it
//! is dimmed by an overlay (if the store has one) and the product grid does
//! not scroll.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScroll {
    Auto,
    Locked,
}

#[derive(Debug, Clone)]
pub struct Drawer {
    open: bool,
    overlay_enabled: bool,
    overlay_open: bool,
    scroll: PageScroll,
}

impl Drawer {
    /// A closed drawer. `overlay` says whether there is a dimming overlay at all.
    pub fn new(overlay: bool) -> Self {
        Self {
            open: false,
            overlay_enabled: overlay,
            overlay_open: false,
            scroll: PageScroll::Auto,
        }
    }

    /// Open or close the drawer. `None` flips the current state.
    /// Returns the resulting state.
    pub fn toggle(&mut self, explicit: Option<bool>) -> bool {
        let will_open = explicit.unwrap_or(!self.open);

        self.open = will_open;
        if self.overlay_enabled {
            self.overlay_open = will_open;
        }
        self.scroll = if will_open { PageScroll::Locked } else { PageScroll::Auto };

        will_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn scroll(&self) -> PageScroll {
        self.scroll
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll == PageScroll::Locked
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        let mut d = Drawer::new(true);
        assert!(!d.is_open());
        assert!(d.toggle(None));
        assert!(d.is_open() && d.overlay_open() && d.scroll_locked());
        assert!(!d.toggle(None));
        assert!(!d.is_open() && !d.overlay_open());
        assert_eq!(d.scroll(), PageScroll::Auto);
    }

    #[test]
    fn test_explicit_state_is_idempotent() {
        let mut d = Drawer::new(true);
        d.toggle(Some(true));
        d.toggle(Some(true));
        assert!(d.is_open() && d.overlay_open() && d.scroll_locked());

        d.toggle(Some(false));
        d.toggle(Some(false));
        assert!(!d.is_open() && !d.overlay_open() && !d.scroll_locked());
    }

    #[test]
    fn test_without_overlay() {
        let mut d = Drawer::new(false);
        d.toggle(Some(true));
        assert!(d.is_open());
        assert!(!d.overlay_open());
        assert!(d.scroll_locked());
    }
}
