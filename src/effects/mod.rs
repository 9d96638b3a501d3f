// Ambient page effects. Each one is a small state machine fed by viewport
// or input events; none of them look at the cart or the catalog.

pub mod navbar;
pub mod reveal;
pub mod sound;
pub mod tilt;
pub mod toast;

pub use navbar::{NavbarPosition, NavbarScroll};
pub use reveal::{RevealTracker, Revealed};
pub use sound::{AudioSink, Tone};
pub use tilt::{PointerKind, Tilt, TiltTransform};
pub use toast::ToastSlot;


// Client-space rectangle of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
