// Error types for the ordering page.
//
// None of these are fatal to the page: cart operations are total, and the
// outward-facing failures below only change which toast is shown.

use std::path::PathBuf;

use thiserror::Error;


// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}


// Errors from the transactional email integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email service is not configured (service {service_id}, template {template_id})")]
    NotConfigured {
        service_id: String,
        template_id: String,
    },

    #[error("Email rejected: {0}")]
    Rejected(String),

    #[error("Email transport failure: {0}")]
    Transport(String),
}


// Audio output could not produce the tone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("Audio output unavailable")]
    Unavailable,

    #[error("Audio playback failed: {0}")]
    Playback(String),
}


// The messaging deep link could not be opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to open {url}: {reason}")]
pub struct MessengerError {
    pub url: String,
    pub reason: String,
}
