//! Custom assertions for JSON-RPC error testing.
//!
//! This module provides assertion helpers that check the wire and display
//! contracts of [`ErrorObject`].

use rpckit_core::{ErrorObject, Reserved};
use serde_json::Value;

/// Assert that an error carries exactly the canonical pair of `kind`.
///
/// # Panics
///
/// Panics if the code or message differs from the reserved pair.
pub fn assert_reserved(err: &ErrorObject, kind: Reserved) {
    assert_eq!(
        err.code,
        kind.code(),
        "Expected code {} for {:?}, but got {}",
        kind.code(),
        kind,
        err.code
    );
    assert_eq!(
        err.message,
        kind.message(),
        "Expected message '{}' for {:?}, but got '{}'",
        kind.message(),
        kind,
        err.message
    );
}

/// Assert that an error serializes to the given JSON text.
///
/// Both sides are compared as parsed values, so member order does not
/// matter.
///
/// # Panics
///
/// Panics if serialization fails, `expected` is not JSON, or the values
/// differ.
pub fn assert_wire_json(err: &ErrorObject, expected: &str) {
    let actual = serde_json::to_value(err).expect("error object should serialize");
    let expected: Value = serde_json::from_str(expected).expect("expected text should be JSON");
    assert_eq!(
        actual, expected,
        "Wire form mismatch: expected {expected}, got {actual}"
    );
}

/// Assert that an error survives serialization and deserialization intact.
///
/// # Panics
///
/// Panics if either direction fails or any field changes.
pub fn assert_round_trip(err: &ErrorObject) {
    let text = serde_json::to_string(err).expect("error object should serialize");
    let back: ErrorObject = serde_json::from_str(&text).expect("error object should deserialize");
    assert_eq!(&back, err, "Round trip through {text} changed the error");
}

/// Assert the rendering contract between an error and its data-less twin.
///
/// The rendering without data must be a strict prefix of the rendering with
/// data.
///
/// # Panics
///
/// Panics if `err` has no data, or if the renderings do not relate as
/// described.
pub fn assert_display_contract(err: &ErrorObject) {
    assert!(err.data.is_some(), "Expected an error with data");

    let bare = ErrorObject::new(err.code, err.message.clone(), None).to_string();
    let full = err.to_string();

    assert_ne!(bare, full, "Data did not change the rendering");
    assert!(
        full.starts_with(&bare),
        "Expected '{full}' to start with '{bare}'"
    );
}
