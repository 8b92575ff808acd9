//! # Trellis Client Errors
//!
//! The crate-level [`Error`] aggregates the per-module error types, and
//! [`unavailable`] builds the deferred missing-dependency error used to
//! stub out integrations whose requirements are not loaded.
use thiserror::Error;

use crate::config::ConfigError;
use crate::version::{CompatibilityError, VersionParseError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Version compatibility error: {0}")]
    Compatibility(#[from] CompatibilityError),

    #[error("Version parse error: {0}")]
    VersionParse(#[from] VersionParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An optional integration was invoked without its requirements loaded.
    #[error("include error: {plugin} requires {required}")]
    Unavailable { plugin: String, required: String },
}

impl Error {
    /// Builds the missing-dependency error for `plugin`, naming its
    /// requirements as an English list ("A", "A and B", "A, B, and C").
    pub fn unavailable(plugin: impl Into<String>, required: &[&str]) -> Self {
        Error::Unavailable {
            plugin: plugin.into(),
            required: requirement_list(required),
        }
    }
}

/// Returns a stub that produces the missing-dependency error each time it
/// is invoked, for wiring into integration points whose requirements
/// turned out to be absent.
pub fn unavailable(plugin: impl Into<String>, required: &[&str]) -> impl Fn() -> Error {
    let plugin = plugin.into();
    let required = requirement_list(required);
    move || Error::Unavailable {
        plugin: plugin.clone(),
        required: required.clone(),
    }
}

fn requirement_list(required: &[&str]) -> String {
    match required {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => {
            let mut list = String::new();
            for item in init {
                list.push_str(item);
                list.push_str(", ");
            }
            list.push_str("and ");
            list.push_str(last);
            list
        }
    }
}
