// Pure view descriptions of the menu and the cart drawer.
//
// Renderers take a snapshot and return plain data; deciding when to
// re-render, and drawing the result, happens elsewhere.

use crate::{
    cart::CartStore,
    catalog::Catalog,
    model::{Price, Quantity, UiEvent},
    utils::{format_price, stagger_delay},
};


// One selectable menu entry and the event it emits when activated.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemView {
    pub name: String,
    pub price_label: String,
    pub on_add: UiEvent,
    pub delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItemView>,
    pub delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub sections: Vec<MenuSection>,
}

// One drawer row with its quantity controls.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowView {
    pub name: String,
    pub price_label: String,
    pub quantity: Quantity,
    pub on_decrement: UiEvent,
    pub on_increment: UiEvent,
    pub on_remove: UiEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartBody {
    Empty,
    Lines {
        rows: Vec<CartRowView>,
        total: Price,
        total_label: String,
    },
}

// The cart drawer plus the header badge.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    // Hidden (`None`) when the cart holds no items.
    pub badge: Option<Quantity>,
    pub body: CartBody,
}


pub fn render_menu(catalog: &Catalog) -> MenuView {
    let sections = catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(ci, category)| MenuSection {
            title: category.category.clone(),
            delay_secs: stagger_delay(ci, 0.1),
            items: category
                .items
                .iter()
                .enumerate()
                .map(|(ii, entry)| MenuItemView {
                    name: entry.name.clone(),
                    price_label: format_price(entry.price),
                    on_add: UiEvent::AddToCart {
                        name: entry.name.clone(),
                        price: entry.price,
                    },
                    delay_secs: stagger_delay(ii, 0.05),
                })
                .collect(),
        })
        .collect();

    MenuView { sections }
}


pub fn render_cart(cart: &CartStore) -> CartView {
    let totals = cart.totals();
    let badge = (totals.item_count > 0).then_some(totals.item_count);

    if cart.is_empty() {
        return CartView {
            badge,
            body: CartBody::Empty,
        };
    }

    let rows = cart
        .lines()
        .iter()
        .map(|line| CartRowView {
            name: line.name.clone(),
            price_label: format_price(line.unit_price),
            quantity: line.quantity,
            on_decrement: UiEvent::UpdateQuantity {
                name: line.name.clone(),
                delta: -1,
            },
            on_increment: UiEvent::UpdateQuantity {
                name: line.name.clone(),
                delta: 1,
            },
            on_remove: UiEvent::RemoveFromCart {
                name: line.name.clone(),
            },
        })
        .collect();

    CartView {
        badge,
        body: CartBody::Lines {
            rows,
            total: totals.amount_due,
            total_label: format_price(totals.amount_due),
        },
    }
}
