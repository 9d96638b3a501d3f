use std::fmt::Write as _;

use tracing::info;

use crate::{cart::CartStore, error::MessengerError, utils::{digits_only, format_price}};


pub const EMPTY_CART_NOTICE: &str = "Your cart is empty!";


// External messaging endpoint; opening a link happens in a new browsing context
pub trait Messenger {
    fn open(&self, url: &str) -> Result<(), MessengerError>;
}

// Stand-in endpoint: records the link in the log instead of opening it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMessenger;

// Ready-to-send order: the plain text and the deep link carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Sent(OrderMessage),
    EmptyCart,
}

// Turns a cart into an order message for a fixed destination
#[derive(Debug, Clone)]
pub struct CheckoutAdapter {
    pub restaurant: String,
    pub destination: String,
}


impl CheckoutAdapter {
    pub fn new(restaurant: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            restaurant: restaurant.into(),
            destination: destination.into(),
        }
    }

    // Build the message for a non-empty cart; never touches the cart
    pub fn prepare(&self, cart: &CartStore) -> Option<OrderMessage> {
        let text = order_text(&self.restaurant, cart)?;
        let url = deep_link(&self.destination, &text);
        Some(OrderMessage { text, url })
    }

    // Prepare and hand off to the messenger
    pub fn checkout(
        &self,
        cart: &CartStore,
        messenger: &dyn Messenger,
    ) -> Result<CheckoutOutcome, MessengerError> {
        let Some(message) = self.prepare(cart) else {
            return Ok(CheckoutOutcome::EmptyCart);
        };
        let totals = cart.totals();
        info!(
            items = totals.item_count,
            amount = totals.amount_due,
            "sending order to messenger"
        );
        messenger.open(&message.url)?;
        Ok(CheckoutOutcome::Sent(message))
    }
}


impl Messenger for LoggingMessenger {
    fn open(&self, url: &str) -> Result<(), MessengerError> {
        info!(%url, "open in new tab");
        Ok(())
    }
}


// Numbered order summary followed by the grand total
pub fn order_text(restaurant: &str, cart: &CartStore) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let mut text = format!("*Hello {}!*\n\nI would like to order:\n\n", restaurant);
    for (i, line) in cart.lines().iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            text,
            "{}. *{}* x{} = {}",
            i + 1,
            line.name,
            line.quantity,
            format_price(line.line_total())
        );
    }
    let _ = write!(
        text,
        "\n*Total: {}*\n\nThank you!",
        format_price(cart.totals().amount_due)
    );
    Some(text)
}


// Compose-message deep link with the text URL-encoded
pub fn deep_link(destination: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(destination),
        urlencoding::encode(text)
    )
}
