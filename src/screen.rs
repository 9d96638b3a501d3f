use std::{fmt::Write as _, io::{self, Write}};

use crate::{
    chrome::Chrome,
    effects::{NavbarPosition, Revealed, TiltTransform},
    view::{CartBody, CartView, MenuView},
};


// Everything the page shows at one moment, apart from the static menu
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cart: CartView,
    pub chrome: Chrome,
    pub toast: Option<String>,
    pub navbar: NavbarPosition,
    pub tilt: Option<TiltTransform>,
    pub revealed: Vec<Revealed>,
    pub badge_pulse: bool,
    pub scroll_target: Option<&'static str>,
}

// Front end that turns view descriptions into something visible
pub trait Screen {
    fn draw_menu(&mut self, menu: &MenuView);
    fn draw(&mut self, frame: &Frame);
}

// Redraws the whole page as text on stdout
#[derive(Debug, Default)]
pub struct TerminalScreen {
    menu: String,
    redraw: bool,
}


impl TerminalScreen {
    pub fn new(redraw: bool) -> Self {
        Self {
            menu: String::new(),
            redraw,
        }
    }
}


impl Screen for TerminalScreen {
    fn draw_menu(&mut self, menu: &MenuView) {
        self.menu = format_menu(menu);
    }

    fn draw(&mut self, frame: &Frame) {
        let mut out = io::stdout().lock();
        if self.redraw {
            // Move cursor to top-left and clear screen
            let _ = write!(out, "\x1B[H\x1B[0J");
        }
        let _ = write!(out, "{}{}", self.menu, format_frame(frame));
        let _ = out.flush();
    }
}


// Menu as category headings over a name/price table
pub fn format_menu(menu: &MenuView) -> String {
    let mut s = String::from("Menu\n");
    for section in &menu.sections {
        let _ = writeln!(s, "\n{}", section.title);
        for item in &section.items {
            let _ = writeln!(s, "  {:<24} {:>8}", item.name, item.price_label);
        }
    }
    s
}


pub fn format_frame(frame: &Frame) -> String {
    let mut s = String::new();

    let mut badge = match frame.cart.badge {
        Some(n) => format!("[cart {}]", n),
        None => "[cart]".to_string(),
    };
    if frame.badge_pulse {
        badge.push('*');
    }
    let _ = writeln!(s, "\nHeader {} {}", frame.navbar.css_transform(), badge);

    if let Some(t) = &frame.tilt {
        let _ = writeln!(s, "Hero    {}", t.css());
    }
    for r in &frame.revealed {
        let _ = writeln!(s, "Shown   section {} after {:.2}s", r.element, r.delay_secs);
    }
    if let Some(anchor) = frame.scroll_target {
        let _ = writeln!(s, "Scroll  {}", anchor);
    }
    if frame.chrome.mobile_menu_open {
        let _ = writeln!(s, "Mobile menu open");
    }

    if frame.chrome.cart_open {
        let _ = writeln!(s, "\nCart");
        match &frame.cart.body {
            CartBody::Empty => {
                let _ = writeln!(s, "  Your cart is empty");
            }
            CartBody::Lines { rows, total_label, .. } => {
                let _ = writeln!(s, "item                     |    price | qty");
                let _ = writeln!(s, "------------------------ | -------- | ---");
                for row in rows {
                    let _ = writeln!(
                        s,
                        "{:<24} | {:>8} | {:>3}  [-] [+] [x]",
                        row.name, row.price_label, row.quantity
                    );
                }
                let _ = writeln!(s, "Total: {}", total_label);
            }
        }
    }

    if let Some(message) = &frame.toast {
        let _ = writeln!(s, "\n>> {}", message);
    }
    s
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cart::CartStore, catalog::Catalog, view::{render_cart, render_menu}};

    fn frame(cart: &CartStore, cart_open: bool) -> Frame {
        Frame {
            cart: render_cart(cart),
            chrome: Chrome {
                cart_open,
                mobile_menu_open: false,
            },
            toast: None,
            navbar: NavbarPosition::Shown,
            tilt: None,
            revealed: Vec::new(),
            badge_pulse: false,
            scroll_target: None,
        }
    }

    #[test]
    fn closed_drawer_shows_only_badge() {
        let mut cart = CartStore::new();
        cart.add("Fries", 150);
        let text = format_frame(&frame(&cart, false));
        assert!(text.contains("[cart 1]"));
        assert!(!text.contains("[cart 1]*"));
        assert!(text.contains("translateY(0)"));
        assert!(!text.contains("Total"));
    }

    #[test]
    fn pulse_marks_badge_and_hidden_header_slides_up() {
        let mut cart = CartStore::new();
        cart.add("Fries", 150);
        let mut f = frame(&cart, false);
        f.badge_pulse = true;
        f.navbar = NavbarPosition::Hidden;

        let text = format_frame(&f);
        assert!(text.contains("[cart 1]*"));
        assert!(text.contains("translateY(-100%)"));
    }

    #[test]
    fn revealed_sections_list_their_delays() {
        let mut f = frame(&CartStore::new(), false);
        f.revealed = vec![
            Revealed { element: 0, delay_secs: 0.0 },
            Revealed { element: 2, delay_secs: 0.2 },
        ];
        let text = format_frame(&f);
        assert!(text.contains("Shown   section 0 after 0.00s"));
        assert!(text.contains("Shown   section 2 after 0.20s"));
    }

    #[test]
    fn open_drawer_lists_lines() {
        let mut cart = CartStore::new();
        cart.add("Fries", 150);
        cart.add("Fries", 150);
        let mut f = frame(&cart, true);
        f.toast = Some("Fries added to cart!".to_string());

        let text = format_frame(&f);
        assert!(text.contains("Fries"));
        assert!(text.contains("Total: Rs 300"));
        assert!(text.contains(">> Fries added to cart!"));
    }

    #[test]
    fn empty_drawer_says_so() {
        let text = format_frame(&frame(&CartStore::new(), true));
        assert!(text.contains("Your cart is empty"));
        assert!(text.contains("[cart]"));
    }

    #[test]
    fn menu_lists_categories() {
        let text = format_menu(&render_menu(&Catalog::default()));
        assert!(text.contains("Burgers"));
        assert!(text.contains("Rs 500"));
    }
}
