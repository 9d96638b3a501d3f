use serde::Deserialize;

use crate::{contact::ContactForm, effects::Rect, error::EmailError};


// Whole rupees; the menu never uses fractions
pub type Price = u64;

// Units of one item held in the cart
pub type Quantity = u64;


// One purchasable item as listed on the menu
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: Price,
}

// A named group of menu entries, kept in listing order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub category: String,
    pub items: Vec<MenuEntry>,
}

// One aggregated entry per distinct item name in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Price,
    pub quantity: Quantity,
}

// Derived cart aggregates, recomputed on every read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub item_count: Quantity,
    pub amount_due: Price,
}


impl MenuEntry {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}


impl CartLine {
    // Price of this line at its current quantity
    pub fn line_total(&self) -> Price {
        self.unit_price.saturating_mul(self.quantity)
    }
}


// Everything the page can be asked to do, from clicks, keys, scroll,
// pointer movement, form submits and async completions
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    AddToCart { name: String, price: Price },
    UpdateQuantity { name: String, delta: i64 },
    RemoveFromCart { name: String },
    Checkout,
    ToggleCart,
    ToggleMobileMenu,
    Escape,
    Navigate(String),
    ScrollToMenu,
    Scroll { offset: f64 },
    PointerMove { x: f64, y: f64, container: Rect },
    PointerLeave,
    Intersection { element: usize, rect: Rect, viewport_height: f64 },
    ContactSubmit(ContactForm),
    ContactSent(Result<(), EmailError>),
}
