// Scroll offset (px) above which the header may hide
const HIDE_AFTER: f64 = 100.0;


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarPosition {
    #[default]
    Shown,
    Hidden,
}

// Hides the fixed header while scrolling down, shows it while scrolling up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarScroll {
    last_offset: f64,
    position: NavbarPosition,
}


impl NavbarScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f64) -> NavbarPosition {
        self.position = if offset > HIDE_AFTER && offset > self.last_offset {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_offset = offset;
        self.position
    }

    pub fn position(&self) -> NavbarPosition {
        self.position
    }
}


impl NavbarPosition {
    pub fn css_transform(&self) -> &'static str {
        match self {
            NavbarPosition::Shown => "translateY(0)",
            NavbarPosition::Hidden => "translateY(-100%)",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_shown_near_top() {
        let mut nav = NavbarScroll::new();
        assert_eq!(nav.on_scroll(50.0), NavbarPosition::Shown);
        assert_eq!(nav.on_scroll(100.0), NavbarPosition::Shown);
    }

    #[test]
    fn follows_scroll_direction_past_threshold() {
        let mut nav = NavbarScroll::new();
        assert_eq!(nav.on_scroll(150.0), NavbarPosition::Hidden);
        assert_eq!(nav.on_scroll(400.0), NavbarPosition::Hidden);
        assert_eq!(nav.on_scroll(380.0), NavbarPosition::Shown);
        assert_eq!(nav.on_scroll(380.0), NavbarPosition::Shown);
        assert_eq!(nav.on_scroll(390.0), NavbarPosition::Hidden);
        assert_eq!(nav.on_scroll(20.0), NavbarPosition::Shown);
        assert_eq!(nav.position().css_transform(), "translateY(0)");
    }
}
