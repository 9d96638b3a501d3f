use tracing::debug;


// Sections reachable through in-page links
pub const ANCHORS: [&str; 4] = ["#home", "#menu", "#about", "#contact"];


// Open/closed state of the overlays that sit on top of the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
    pub cart_open: bool,
    pub mobile_menu_open: bool,
}


impl Chrome {
    // Drawer and its overlay always move together
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
        debug!(open = self.cart_open, "cart drawer");
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu");
    }

    // Escape closes whatever is open; returns whether anything changed
    pub fn escape(&mut self) -> bool {
        let changed = self.cart_open || self.mobile_menu_open;
        if self.cart_open {
            self.toggle_cart();
        }
        if self.mobile_menu_open {
            self.toggle_mobile_menu();
        }
        changed
    }

    // Page behind an open overlay must not scroll
    pub fn scroll_locked(&self) -> bool {
        self.cart_open || self.mobile_menu_open
    }
}


// Normalize an in-page link to a known section anchor
pub fn resolve_anchor(href: &str) -> Option<&'static str> {
    let wanted = href.trim();
    let wanted = wanted.strip_prefix('#').unwrap_or(wanted);
    ANCHORS.iter().copied().find(|a| &a[1..] == wanted)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_everything() {
        let mut chrome = Chrome::default();
        chrome.toggle_cart();
        chrome.toggle_mobile_menu();
        assert!(chrome.scroll_locked());

        assert!(chrome.escape());
        assert_eq!(chrome, Chrome::default());
        assert!(!chrome.scroll_locked());
        assert!(!chrome.escape());
    }

    #[test]
    fn toggles_flip() {
        let mut chrome = Chrome::default();
        chrome.toggle_cart();
        assert!(chrome.cart_open && chrome.scroll_locked());
        chrome.toggle_cart();
        assert!(!chrome.cart_open && !chrome.scroll_locked());
    }

    #[test]
    fn anchors_resolve() {
        assert_eq!(resolve_anchor("#menu"), Some("#menu"));
        assert_eq!(resolve_anchor("contact"), Some("#contact"));
        assert_eq!(resolve_anchor("#specials"), None);
        assert_eq!(resolve_anchor("#"), None);
    }
}
