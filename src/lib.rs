// Snacknest Kitchen ordering page.
//
// A static menu, a cart held in page state, and a checkout that hands the
// order to a messaging deep link. Front ends (browser, terminal) only ever
// see the view descriptions in `view` and `screen` and feed
// `UiEvent`s back into `App`.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod model;
pub mod random;
pub mod screen;
pub mod utils;
pub mod view;

pub use app::{App, Ports};
pub use cart::{CartChange, CartStore};
pub use catalog::Catalog;
pub use config::SiteConfig;
pub use model::{CartLine, MenuEntry, Totals, UiEvent};
