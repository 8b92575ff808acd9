//! # Trellis Client
//!
//! Client-side helper library for the Trellis plugin host.
//!
//! The centerpiece is version compatibility gating: plugins declare the
//! host library version they depend on, and [`is_compatible`] /
//! [`require_compatible`] decide at load time whether the running host
//! satisfies that declaration (see [`version`] for the scheme and rules).
//! Around it sit the small helpers the host's pages need: asynchronous
//! [`config`] loading by path, [`query`]-string extraction, and
//! process-unique [`ident`] generation.
pub mod config;
pub mod error;
pub mod ident;
pub mod query;
pub mod version;

pub use config::{load_config, load_config_from, ConfigError, ConfigFormat, ConfigSource, FileSource};
pub use error::{unavailable, Error, Result};
pub use ident::{unique_id, unique_id_default, IdRegistry, DEFAULT_ID_LEN};
pub use query::query_arguments;
pub use version::{
    is_compatible, parse_version, require_compatible, CompatibilityError, ParsedVersion,
    VersionParseError, VERSION,
};

#[cfg(test)]
mod tests;
