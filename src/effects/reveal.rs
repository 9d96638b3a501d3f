use tracing::debug;

use super::Rect;
use crate::utils::stagger_delay;


// Share of an element that must be on screen before it reveals
const THRESHOLD: f64 = 0.1;

// The viewport's bottom edge is pulled up by this much
const BOTTOM_MARGIN: f64 = 50.0;

// Per-element transition stagger, seconds
const STAGGER_SECS: f64 = 0.1;


// A revealed section and how long its transition waits before starting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revealed {
    pub element: usize,
    pub delay_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Observed,
    Active,
}

// One-shot reveal of page sections as they scroll into view
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}


impl RevealTracker {
    // Observe `count` elements, in document order
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Observed; count],
        }
    }

    pub fn transition_delay(&self, element: usize) -> Option<f64> {
        (element < self.states.len()).then(|| stagger_delay(element, STAGGER_SECS))
    }

    // Returns true only the first time the element qualifies
    pub fn on_intersection(&mut self, element: usize, rect: Rect, viewport_height: f64) -> bool {
        let Some(state) = self.states.get_mut(element) else {
            return false;
        };
        if *state == RevealState::Active {
            return false;
        }

        let ratio = intersection_ratio(rect, viewport_height);
        if ratio >= THRESHOLD {
            *state = RevealState::Active;
            debug!(element, ratio, "revealed");
            return true;
        }
        false
    }

    pub fn is_active(&self, element: usize) -> bool {
        self.states.get(element) == Some(&RevealState::Active)
    }

    // Active sections in document order, with their staggered delays
    pub fn revealed(&self) -> Vec<Revealed> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == RevealState::Active)
            .filter_map(|(element, _)| {
                self.transition_delay(element)
                    .map(|delay_secs| Revealed { element, delay_secs })
            })
            .collect()
    }
}


// Visible share of `rect` within the margin-adjusted viewport
pub fn intersection_ratio(rect: Rect, viewport_height: f64) -> f64 {
    let root_bottom = viewport_height - BOTTOM_MARGIN;
    let visible = rect.bottom().min(root_bottom) - rect.top.max(0.0);

    if rect.height <= 0.0 {
        return if rect.top >= 0.0 && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }
    (visible / rect.height).clamp(0.0, 1.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 300.0, height)
    }

    #[test]
    fn ratio_respects_bottom_margin() {
        // viewport 800, root bottom 750
        assert_eq!(intersection_ratio(at(760.0, 100.0), 800.0), 0.0);
        assert!((intersection_ratio(at(700.0, 100.0), 800.0) - 0.5).abs() < 1e-9);
        assert_eq!(intersection_ratio(at(100.0, 100.0), 800.0), 1.0);
        assert_eq!(intersection_ratio(at(-200.0, 100.0), 800.0), 0.0);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = RevealTracker::new(1);
        // 5 of 100px visible
        assert!(!reveal.on_intersection(0, at(745.0, 100.0), 800.0));
        assert!(!reveal.is_active(0));
    }

    #[test]
    fn reveals_once_and_never_again() {
        let mut reveal = RevealTracker::new(3);
        assert!(reveal.on_intersection(1, at(600.0, 100.0), 800.0));
        assert!(reveal.is_active(1));

        // scrolled away and back
        assert!(!reveal.on_intersection(1, at(2000.0, 100.0), 800.0));
        assert!(!reveal.on_intersection(1, at(600.0, 100.0), 800.0));
        assert!(reveal.is_active(1));
        assert_eq!(
            reveal.revealed(),
            vec![Revealed {
                element: 1,
                delay_secs: 0.1
            }]
        );
    }

    #[test]
    fn staggered_delays_and_unknown_elements() {
        let mut reveal = RevealTracker::new(3);
        assert_eq!(reveal.transition_delay(0), Some(0.0));
        assert!((reveal.transition_delay(2).unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(reveal.transition_delay(3), None);
        assert!(!reveal.on_intersection(7, at(0.0, 10.0), 800.0));

        reveal.on_intersection(2, at(0.0, 100.0), 800.0);
        reveal.on_intersection(0, at(0.0, 100.0), 800.0);
        let elements: Vec<_> = reveal.revealed().iter().map(|r| r.element).collect();
        assert_eq!(elements, [0, 2]);
    }
}
