use rand::{seq::SliceRandom, Rng, SeedableRng};
use crate::{
    catalog::Catalog,
    contact::ContactForm,
    effects::Rect,
    model::{MenuEntry, UiEvent},
};


// Where the hero image sits in the simulated viewport
pub const HERO: Rect = Rect {
    left: 700.0,
    top: 120.0,
    width: 480.0,
    height: 480.0,
};

pub const VIEWPORT_HEIGHT: f64 = 900.0;

// Number of `.reveal` sections on the simulated page
pub const REVEAL_SECTIONS: usize = 4;


// Random generation of a cart interaction
fn random_cart_event(rng: &mut impl Rng, entries: &[&MenuEntry]) -> Option<UiEvent> {
    let entry = entries.choose(rng)?;
    let name = entry.name.clone();
    let event = match rng.gen_range(0..6) {
        0..=2 => UiEvent::AddToCart {
            name,
            price: entry.price,
        },
        3 => UiEvent::UpdateQuantity { name, delta: 1 },
        4 => UiEvent::UpdateQuantity { name, delta: -1 },
        5 => UiEvent::RemoveFromCart { name },
        _ => unreachable!(),
    };
    Some(event)
}

// Random generation of browsing noise
fn random_page_event(rng: &mut impl Rng, scroll: &mut f64) -> UiEvent {
    match rng.gen_range(0..6) {
        0 | 1 => {
            *scroll = (*scroll + rng.gen_range(-300.0..600.0)).max(0.0);
            UiEvent::Scroll { offset: *scroll }
        }
        2 => UiEvent::PointerMove {
            x: rng.gen_range(0.0..1400.0),
            y: rng.gen_range(0.0..VIEWPORT_HEIGHT),
            container: HERO,
        },
        3 => UiEvent::PointerLeave,
        4 => {
            let element = rng.gen_range(0..REVEAL_SECTIONS);
            let top = element as f64 * 700.0 - *scroll;
            UiEvent::Intersection {
                element,
                rect: Rect::new(0.0, top, 1200.0, 600.0),
                viewport_height: VIEWPORT_HEIGHT,
            }
        }
        5 => match rng.gen_range(0..4) {
            0 => UiEvent::ToggleMobileMenu,
            1 => UiEvent::Escape,
            2 => UiEvent::ScrollToMenu,
            3 => UiEvent::Navigate("#contact".to_string()),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

// Generate a seeded customer session: browse, fill the cart, check out
pub fn generate_session(catalog: &Catalog, actions: usize, seed: u64) -> Vec<UiEvent> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let entries: Vec<&MenuEntry> = catalog.entries().map(|(_, e)| e).collect();
    let mut scroll = 0.0;

    let mut events = vec![UiEvent::ToggleCart];
    for _ in 0..actions {
        if rng.gen_bool(0.6) {
            if let Some(ev) = random_cart_event(&mut rng, &entries) {
                events.push(ev);
                continue;
            }
        }
        events.push(random_page_event(&mut rng, &mut scroll));
    }

    if rng.gen_bool(0.5) {
        events.push(UiEvent::ContactSubmit(ContactForm::new(
            "Guest",
            "guest@example.com",
            "Do you deliver after 11pm?",
        )));
    }
    events.push(UiEvent::Checkout);
    events
}
