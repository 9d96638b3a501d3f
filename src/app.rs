// The page's single event loop.
//
// `App` owns the cart and every effect; `handle` applies one event and
// reports whether anything visible changed. `run` drives an `App` from a
// channel of events, alongside the toast timer, the animation-frame tick
// and a short redraw debounce.

use std::{pin::Pin, sync::Arc, time::Duration};

use tokio::{
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::{
    cart::{CartChange, CartStore},
    catalog::Catalog,
    checkout::{CheckoutAdapter, CheckoutOutcome, Messenger, EMPTY_CART_NOTICE},
    chrome::{resolve_anchor, Chrome},
    config::{EmailConfig, SiteConfig},
    contact::{self, ContactForm, EmailService, SEND_FAILED_NOTICE},
    effects::{sound::play_add_sound, AudioSink, NavbarScroll, PointerKind, RevealTracker, Tilt, ToastSlot},
    model::UiEvent,
    screen::{Frame, Screen},
    view::{render_cart, render_menu, MenuView},
};


// Roughly one display refresh
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// Coalesce bursts of events into one redraw
const REDRAW_DEBOUNCE: Duration = Duration::from_millis(16);


// Outward-facing collaborators
pub struct Ports {
    pub messenger: Box<dyn Messenger + Send>,
    pub audio: Box<dyn AudioSink + Send>,
    pub email: Arc<dyn EmailService>,
}

// Page state, owned by the event loop
pub struct App {
    catalog: Catalog,
    cart: CartStore,
    checkout: CheckoutAdapter,
    contact_address: String,
    email: EmailConfig,
    chrome: Chrome,
    toast: ToastSlot,
    navbar: NavbarScroll,
    tilt: Option<Tilt>,
    reveal: RevealTracker,
    contact: ContactForm,
    scroll_target: Option<&'static str>,
    badge_pulse: bool,
    ports: Ports,
    events: mpsc::WeakUnboundedSender<UiEvent>,
}


impl App {
    // `events` is where async completions (email sends) report back; it is
    // held weakly so the loop still ends once every producer is gone.
    pub fn new(
        config: &SiteConfig,
        pointer: PointerKind,
        reveal_elements: usize,
        ports: Ports,
        events: &mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            catalog: config.catalog.clone(),
            cart: CartStore::new(),
            checkout: CheckoutAdapter::new(&config.restaurant, &config.whatsapp_number),
            contact_address: config.contact_address.clone(),
            email: config.email.clone(),
            chrome: Chrome::default(),
            toast: ToastSlot::new(config.toast_duration),
            navbar: NavbarScroll::new(),
            tilt: Tilt::enable(pointer),
            reveal: RevealTracker::new(reveal_elements),
            contact: ContactForm::default(),
            scroll_target: None,
            badge_pulse: false,
            ports,
            events: events.downgrade(),
        }
    }

    pub fn menu(&self) -> MenuView {
        render_menu(&self.catalog)
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn chrome(&self) -> Chrome {
        self.chrome
    }

    pub fn toast(&self) -> &ToastSlot {
        &self.toast
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn is_animating(&self) -> bool {
        self.tilt.as_ref().is_some_and(|t| !t.is_settled())
    }

    // Apply one event. Returns true when the page needs a redraw.
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> bool {
        match event {
            UiEvent::AddToCart { name, price } => {
                self.cart.add(&name, price);
                self.badge_pulse = true;
                self.toast.show(format!("{} added to cart!", name), now);
                play_add_sound(self.ports.audio.as_ref());
                true
            }
            UiEvent::UpdateQuantity { name, delta } => {
                self.cart.update_quantity(&name, delta) != CartChange::Unchanged
            }
            UiEvent::RemoveFromCart { name } => self.cart.remove(&name) != CartChange::Unchanged,
            UiEvent::Checkout => self.place_order(now),
            UiEvent::ToggleCart => {
                self.chrome.toggle_cart();
                true
            }
            UiEvent::ToggleMobileMenu => {
                self.chrome.toggle_mobile_menu();
                true
            }
            UiEvent::Escape => self.chrome.escape(),
            UiEvent::Navigate(href) => self.navigate(&href),
            UiEvent::ScrollToMenu => self.navigate("#menu"),
            UiEvent::Scroll { offset } => {
                let before = self.navbar.position();
                self.navbar.on_scroll(offset) != before
            }
            UiEvent::PointerMove { x, y, container } => match &mut self.tilt {
                Some(tilt) => {
                    tilt.on_pointer_move(x, y, container);
                    false
                }
                None => false,
            },
            UiEvent::PointerLeave => {
                if let Some(tilt) = &mut self.tilt {
                    tilt.on_pointer_leave();
                }
                false
            }
            UiEvent::Intersection {
                element,
                rect,
                viewport_height,
            } => self.reveal.on_intersection(element, rect, viewport_height),
            UiEvent::ContactSubmit(form) => {
                self.submit_contact(form);
                false
            }
            UiEvent::ContactSent(Ok(())) => {
                self.toast.show(contact::sent_notice(&self.contact_address), now);
                self.contact.clear();
                true
            }
            UiEvent::ContactSent(Err(e)) => {
                error!(error = %e, "contact form failed");
                self.toast.show(SEND_FAILED_NOTICE, now);
                true
            }
        }
    }

    // Advance the tilt animation one frame
    pub fn animate(&mut self) -> bool {
        match &mut self.tilt {
            Some(tilt) => {
                tilt.step();
                true
            }
            None => false,
        }
    }

    pub fn expire_toast(&mut self, now: Instant) -> bool {
        self.toast.expire(now)
    }

    // Snapshot for the screen. Scroll requests and badge pulses are handed over once.
    pub fn next_frame(&mut self) -> Frame {
        Frame {
            cart: render_cart(&self.cart),
            chrome: self.chrome,
            toast: self.toast.message().map(str::to_string),
            navbar: self.navbar.position(),
            tilt: self.tilt.as_ref().map(Tilt::transform),
            revealed: self.reveal.revealed(),
            badge_pulse: std::mem::take(&mut self.badge_pulse),
            scroll_target: self.scroll_target.take(),
        }
    }

    fn place_order(&mut self, now: Instant) -> bool {
        match self.checkout.checkout(&self.cart, self.ports.messenger.as_ref()) {
            Ok(CheckoutOutcome::EmptyCart) => {
                self.toast.show(EMPTY_CART_NOTICE, now);
                true
            }
            Ok(CheckoutOutcome::Sent(message)) => {
                debug!(url = %message.url, "order handed off");
                false
            }
            Err(e) => {
                warn!(error = %e, "could not open messenger");
                false
            }
        }
    }

    fn navigate(&mut self, href: &str) -> bool {
        match resolve_anchor(href) {
            Some(anchor) => {
                self.scroll_target = Some(anchor);
                true
            }
            None => {
                debug!(href, "unknown anchor");
                false
            }
        }
    }

    fn submit_contact(&mut self, form: ContactForm) {
        self.contact = form;
        let Some(events) = self.events.upgrade() else {
            warn!("event loop closed, contact form dropped");
            return;
        };
        info!(from = %self.contact.email, "submitting contact form");
        contact::submit(
            Arc::clone(&self.ports.email),
            &self.email,
            self.contact.clone(),
            events,
        );
    }
}


// Drive `app` until every event producer has hung up
pub async fn run<S: Screen>(
    mut app: App,
    mut events: mpsc::UnboundedReceiver<UiEvent>,
    mut screen: S,
) -> (App, S) {
    screen.draw_menu(&app.menu());

    let mut ticker = time::interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // "dirty flag": state changed since last draw
    let mut dirty = true;
    let mut pending: Option<Pin<Box<time::Sleep>>> = Some(Box::pin(time::sleep(Duration::ZERO)));

    loop {
        let toast_deadline = app.toast.deadline();
        let animating = app.is_animating();

        tokio::select! {
            ev = events.recv() => {
                match ev {
                    Some(ev) => {
                        if app.handle(ev, Instant::now()) {
                            dirty = true;
                            if pending.is_none() {
                                pending = Some(Box::pin(time::sleep(REDRAW_DEBOUNCE)));
                            }
                        }
                    }
                    None => {
                        if dirty {
                            screen.draw(&app.next_frame());
                        }
                        break;
                    }
                }
            }

            _ = async {
                if let Some(deadline) = toast_deadline {
                    time::sleep_until(deadline).await;
                }
            }, if toast_deadline.is_some() => {
                if app.expire_toast(Instant::now()) {
                    dirty = true;
                    if pending.is_none() {
                        pending = Some(Box::pin(time::sleep(Duration::ZERO)));
                    }
                }
            }

            _ = ticker.tick(), if animating => {
                if app.animate() {
                    dirty = true;
                    if pending.is_none() {
                        pending = Some(Box::pin(time::sleep(Duration::ZERO)));
                    }
                }
            }

            // Debounce fires: draw once if anything changed
            _ = async {
                if let Some(s) = &mut pending {
                    s.as_mut().await;
                }
            }, if pending.is_some() => {
                if dirty {
                    screen.draw(&app.next_frame());
                    dirty = false;
                }
                pending = None;
            }
        }
    }

    (app, screen)
}
