//! Test fixtures for JSON-RPC error testing.
//!
//! This module provides pre-built values for common testing scenarios.

use rpckit_core::{ErrorCode, ErrorObject};
use serde_json::{json, Value};

/// A spread of auxiliary `data` payloads.
///
/// Returns, in order:
/// - absent data
/// - explicit JSON `null`
/// - a zero
/// - a string
/// - a nested object with an array
#[must_use]
pub fn sample_data() -> Vec<Option<Value>> {
    vec![
        None,
        Some(Value::Null),
        Some(json!(0)),
        Some(json!("expected integer, got string")),
        Some(json!({
            "field": "args.count",
            "expected": ["integer"],
            "limits": { "min": 0, "max": 100 }
        })),
    ]
}

/// An application-defined error outside the reserved band.
#[must_use]
pub fn custom_error() -> ErrorObject {
    ErrorObject::new(ErrorCode::new(42), "custom failure", Some(json!({ "retry": true })))
}
