use std::{
    io::{self, Write},
    time::Duration,
};

use tracing::debug;

use crate::error::AudioError;


// A short sine tone with an exponential gain envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration: Duration,
}

// Whatever can turn a tone into sound
pub trait AudioSink {
    fn play(&self, tone: &Tone) -> Result<(), AudioError>;
}

// No audio device: every tone fails, silently as far as the user is concerned
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAudio;

// Rings the terminal bell in place of a real tone
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;


impl Tone {
    // The blip played when something lands in the cart
    pub fn add_to_cart() -> Self {
        Self {
            frequency_hz: 800.0,
            start_gain: 0.1,
            end_gain: 0.01,
            duration: Duration::from_millis(100),
        }
    }
}


impl AudioSink for NoAudio {
    fn play(&self, _tone: &Tone) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

impl AudioSink for TerminalBell {
    fn play(&self, tone: &Tone) -> Result<(), AudioError> {
        debug!(frequency_hz = tone.frequency_hz, duration = ?tone.duration, "bell");
        let mut err = io::stderr();
        err.write_all(b"\x07")
            .and_then(|_| err.flush())
            .map_err(|e| AudioError::Playback(e.to_string()))
    }
}


// Best effort: failures never reach the user
pub fn play_add_sound(sink: &dyn AudioSink) {
    if let Err(e) = sink.play(&Tone::add_to_cart()) {
        debug!(error = %e, "add sound skipped");
    }
}
