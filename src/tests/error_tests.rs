#![cfg(test)]

use crate::config::ConfigError;
use crate::error::{unavailable, Error};
use crate::version::{CompatibilityError, VersionParseError};

#[test]
fn test_unavailable_single_requirement() {
    let err = Error::unavailable("trellis.map", &["maps API"]);
    assert_eq!(err.to_string(), "include error: trellis.map requires maps API");
}

#[test]
fn test_unavailable_two_requirements() {
    let err = Error::unavailable("trellis.config", &["fetch", "JSON"]);
    assert_eq!(
        err.to_string(),
        "include error: trellis.config requires fetch and JSON"
    );
}

#[test]
fn test_unavailable_many_requirements() {
    let err = Error::unavailable("trellis.vis", &["a", "b", "c"]);
    assert_eq!(err.to_string(), "include error: trellis.vis requires a, b, and c");
}

#[test]
fn test_unavailable_stub_yields_same_error_each_call() {
    let stub = unavailable("trellis.vis", &["widgets", "charts"]);
    assert_eq!(stub().to_string(), stub().to_string());
    assert!(stub().to_string().contains("widgets and charts"));
}

#[test]
fn test_module_errors_convert_into_crate_error() {
    let err: Error = CompatibilityError::InvalidRequiredVersion("x".into()).into();
    assert!(matches!(err, Error::Compatibility(_)));

    let err: Error = VersionParseError::EmptyVersion.into();
    assert!(matches!(err, Error::VersionParse(_)));

    let err: Error = ConfigError::UnknownFormat("a.ini".into()).into();
    assert!(matches!(err, Error::Config(_)));
}
