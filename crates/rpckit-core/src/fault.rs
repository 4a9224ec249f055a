//! Packaging of protocol-level faults.
//!
//! The dispatch and transport layers detect four failures generically:
//! unparseable input, a malformed request, an unknown method, and an
//! unhandled failure inside a handler. The functions here turn the evidence
//! of each into the matching reserved [`ErrorObject`] and emit a `tracing`
//! event. Callers never choose the code or message.
//!
//! ```rust
//! use rpckit_core::error::ErrorCode;
//! use rpckit_core::fault;
//!
//! let decode = serde_json::from_str::<serde_json::Value>("{\"jsonrpc\": ");
//! let err = fault::from_decode_error(&decode.unwrap_err());
//! assert_eq!(err.code, ErrorCode::PARSE_ERROR);
//!
//! let err = fault::unknown_method("tools/frobnicate");
//! assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
//! assert_eq!(err.data.unwrap()["method"], "tools/frobnicate");
//! ```

use std::any::Any;

use serde_json::error::Category;
use serde_json::{json, Value};

use crate::error::ErrorObject;

/// Package a failure to decode an incoming message.
///
/// Input that is not JSON at all (syntax errors, truncation, I/O failures)
/// becomes a parse error. Input that is valid JSON but does not have the
/// shape of a Request becomes an invalid request error.
#[must_use]
pub fn from_decode_error(err: &serde_json::Error) -> ErrorObject {
    let data = Some(Value::String(err.to_string()));
    match err.classify() {
        Category::Data => {
            tracing::debug!(error = %err, "Message is not a valid Request object");
            ErrorObject::invalid_request(data)
        }
        Category::Syntax | Category::Eof | Category::Io => {
            tracing::debug!(
                error = %err,
                line = err.line(),
                column = err.column(),
                "Failed to parse message"
            );
            ErrorObject::parse_error(data)
        }
    }
}

/// Package a request that decoded but breaks a structural rule, e.g. a
/// `jsonrpc` member other than `"2.0"`.
#[must_use]
pub fn malformed_request(reason: impl Into<String>) -> ErrorObject {
    let reason = reason.into();
    tracing::debug!(reason = %reason, "Rejecting malformed request");
    ErrorObject::invalid_request(Some(Value::String(reason)))
}

/// Package a request for a method that is not registered.
#[must_use]
pub fn unknown_method(method: &str) -> ErrorObject {
    tracing::debug!(method = %method, "Method not found");
    ErrorObject::method_not_found(Some(json!({ "method": method })))
}

/// Package an error a handler returned that it did not map to a
/// JSON-RPC error itself.
#[must_use]
pub fn internal_fault(err: &(dyn std::error::Error + 'static)) -> ErrorObject {
    tracing::error!(error = %err, "Unhandled error while processing request");
    ErrorObject::internal_error(Some(Value::String(err.to_string())))
}

/// Package a handler panic caught with `std::panic::catch_unwind`.
///
/// String payloads (from `panic!("...")`) are kept as data; any other
/// payload type leaves `data` absent.
#[must_use]
pub fn from_panic(payload: &(dyn Any + Send)) -> ErrorObject {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());

    match message {
        Some(message) => {
            tracing::error!(panic = %message, "Handler panicked");
            ErrorObject::internal_error(Some(Value::String(message)))
        }
        None => {
            tracing::error!("Handler panicked with a non-string payload");
            ErrorObject::internal_error(None)
        }
    }
}
