use tracing::debug;

use super::Rect;


// Pointer travel (px) per degree of tilt
const SENSITIVITY: f64 = 15.0;

// Tilt never exceeds this many degrees on either axis
const MAX_ANGLE: f64 = 15.0;

// Fraction of the remaining distance covered each frame
const SMOOTHING: f64 = 0.08;

// Below this the image is considered at rest
const SETTLE_EPSILON: f64 = 1e-3;


// Primary pointing device, as a `(pointer: coarse)` media query reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Fine,
    Coarse,
}

// Rotation to apply to the hero image this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltTransform {
    pub rotate_y: f64,
    pub rotate_x: f64,
}

// Pointer-driven tilt with exponential smoothing toward the target angle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tilt {
    target: (f64, f64),
    current: (f64, f64),
}


impl Tilt {
    // Touch-primary devices get no tilt at all
    pub fn enable(pointer: PointerKind) -> Option<Self> {
        match pointer {
            PointerKind::Fine => Some(Self::default()),
            PointerKind::Coarse => {
                debug!("coarse pointer, tilt disabled");
                None
            }
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, container: Rect) {
        let centre_x = container.left + container.width / 2.0;
        let centre_y = container.top + container.height / 2.0;
        self.target = (
            ((x - centre_x) / SENSITIVITY).clamp(-MAX_ANGLE, MAX_ANGLE),
            ((y - centre_y) / SENSITIVITY).clamp(-MAX_ANGLE, MAX_ANGLE),
        );
    }

    pub fn on_pointer_leave(&mut self) {
        self.target = (0.0, 0.0);
    }

    // Advance one animation frame
    pub fn step(&mut self) -> TiltTransform {
        self.current.0 += (self.target.0 - self.current.0) * SMOOTHING;
        self.current.1 += (self.target.1 - self.current.1) * SMOOTHING;
        self.transform()
    }

    pub fn transform(&self) -> TiltTransform {
        TiltTransform {
            rotate_y: self.current.0,
            rotate_x: -self.current.1,
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.target.0 - self.current.0).abs() < SETTLE_EPSILON
            && (self.target.1 - self.current.1).abs() < SETTLE_EPSILON
    }
}


impl TiltTransform {
    pub fn css(&self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.rotate_y, self.rotate_x)
    }
}
