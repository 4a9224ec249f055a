//! The JSON-RPC error object and its constructors.
//!
//! [`ErrorObject`] is the value carried in the `error` member of a failed
//! response. Application code builds one with [`ErrorObject::new`] or
//! [`ErrorObject::invalid_params`]. The other four protocol conditions are
//! packaged by the dispatch layer through [`crate::fault`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::codes::{ErrorCode, Reserved};

/// A JSON-RPC 2.0 error object.
///
/// Serializes as `{"code": .., "message": .., "data": ..}`. When `data` is
/// `None` the member is left out entirely. `Some(Value::Null)` is kept and
/// written as `"data": null`.
///
/// # Example
///
/// ```rust
/// use rpckit_core::error::{ErrorCode, ErrorObject};
/// use serde_json::json;
///
/// let err = ErrorObject::invalid_params(Some(json!("expected integer, got string")));
/// assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
/// assert_eq!(
///     serde_json::to_string(&err).unwrap(),
///     r#"{"code":-32602,"message":"Invalid params","data":"expected integer, got string"}"#,
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("jsonrpc error {code}: {message:?}{}", DataSuffix(.data))]
pub struct ErrorObject {
    /// Error code.
    pub code: ErrorCode,
    /// Short description of the error.
    pub message: Cow<'static, str>,
    /// Additional error data.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// Create an error with the given code, message, and data.
    ///
    /// The code and message are taken as given, even when the code is one
    /// of the reserved ones and the message is not its canonical text.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Create an "invalid params" error (-32602).
    ///
    /// Method handlers are responsible for detecting and returning this
    /// error, since only they know what valid parameters look like.
    #[must_use]
    pub fn invalid_params(data: Option<Value>) -> Self {
        Self::reserved(Reserved::InvalidParams, data)
    }

    /// Create a "parse error" (-32700).
    pub(crate) fn parse_error(data: Option<Value>) -> Self {
        Self::reserved(Reserved::ParseError, data)
    }

    /// Create an "invalid request" error (-32600).
    pub(crate) fn invalid_request(data: Option<Value>) -> Self {
        Self::reserved(Reserved::InvalidRequest, data)
    }

    /// Create a "method not found" error (-32601).
    pub(crate) fn method_not_found(data: Option<Value>) -> Self {
        Self::reserved(Reserved::MethodNotFound, data)
    }

    /// Create an "internal error" (-32603).
    pub(crate) fn internal_error(data: Option<Value>) -> Self {
        Self::reserved(Reserved::InternalError, data)
    }

    fn reserved(kind: Reserved, data: Option<Value>) -> Self {
        Self::new(kind.code(), kind.message(), data)
    }

    /// Check if this error carries auxiliary data.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data.is_some()
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)`.
///
/// Paired with `#[serde(default)]`, a missing member still becomes `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

struct DataSuffix<'a>(&'a Option<Value>);

impl fmt::Display for DataSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(data) => write!(f, ", data: {data}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_data() -> Vec<Option<Value>> {
        vec![
            None,
            Some(Value::Null),
            Some(json!(0)),
            Some(json!("oops")),
            Some(json!({"nested": {"list": [1, 2, 3]}})),
        ]
    }

    #[test]
    fn test_reserved_constructors_stamp_canonical_pair() {
        type Ctor = fn(Option<Value>) -> ErrorObject;
        let ctors: [(Ctor, i64, &str); 5] = [
            (ErrorObject::parse_error, -32700, "Parse error"),
            (ErrorObject::invalid_request, -32600, "Invalid Request"),
            (ErrorObject::method_not_found, -32601, "Method not found"),
            (ErrorObject::invalid_params, -32602, "Invalid params"),
            (ErrorObject::internal_error, -32603, "Internal error"),
        ];

        for (ctor, code, message) in ctors {
            for data in sample_data() {
                let err = ctor(data.clone());
                assert_eq!(err.code.get(), code);
                assert_eq!(err.message, message);
                assert_eq!(err.data, data);
            }
        }
    }

    #[test]
    fn test_new_does_not_enforce_pairing() {
        let err = ErrorObject::new(ErrorCode::INVALID_PARAMS, "not the canonical text", None);
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "not the canonical text");
        assert!(!err.has_data());
    }

    #[test]
    fn test_custom_error() {
        let err = ErrorObject::new(
            ErrorCode::new(42),
            "custom failure",
            Some(json!({"retry": true})),
        );
        assert_eq!(err.code.get(), 42);
        assert_eq!(err.message, "custom failure");
        assert_eq!(err.data, Some(json!({"retry": true})));
    }

    #[test]
    fn test_canonical_message_is_borrowed() {
        let err = ErrorObject::method_not_found(None);
        assert!(matches!(err.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_absent_data_omitted() {
        let json = serde_json::to_string(&ErrorObject::method_not_found(None)).unwrap();
        assert_eq!(json, r#"{"code":-32601,"message":"Method not found"}"#);
    }

    #[test]
    fn test_zero_and_null_data_kept() {
        let zero = ErrorObject::new(ErrorCode::new(1), "m", Some(json!(0)));
        assert_eq!(
            serde_json::to_string(&zero).unwrap(),
            r#"{"code":1,"message":"m","data":0}"#
        );

        let null = ErrorObject::new(ErrorCode::new(1), "m", Some(Value::Null));
        assert_eq!(
            serde_json::to_string(&null).unwrap(),
            r#"{"code":1,"message":"m","data":null}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_presence() {
        let missing: ErrorObject =
            serde_json::from_str(r#"{"code":-32603,"message":"Internal error"}"#).unwrap();
        assert_eq!(missing.data, None);

        let null: ErrorObject =
            serde_json::from_str(r#"{"code":-32603,"message":"Internal error","data":null}"#)
                .unwrap();
        assert_eq!(null.data, Some(Value::Null));
    }

    #[test]
    fn test_display_without_data() {
        let err = ErrorObject::method_not_found(None);
        assert_eq!(err.to_string(), r#"jsonrpc error -32601: "Method not found""#);
    }

    #[test]
    fn test_display_with_data_extends_plain_form() {
        let plain = ErrorObject::invalid_params(None).to_string();
        let with_data = ErrorObject::invalid_params(Some(json!("bad"))).to_string();

        assert_ne!(plain, with_data);
        assert!(with_data.starts_with(&plain));
        assert_eq!(with_data, r#"jsonrpc error -32602: "Invalid params", data: "bad""#);
    }

    #[test]
    fn test_display_null_data_is_visible() {
        let err = ErrorObject::new(ErrorCode::new(5), "m", Some(Value::Null));
        assert_eq!(err.to_string(), r#"jsonrpc error 5: "m", data: null"#);
    }

    #[test]
    fn test_display_escapes_message() {
        let err = ErrorObject::new(ErrorCode::new(7), "line\n\"quoted\"", None);
        assert_eq!(err.to_string(), r#"jsonrpc error 7: "line\n\"quoted\"""#);
    }

    #[test]
    fn test_usable_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err(ErrorObject::invalid_params(Some(json!("missing field `a`"))))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.to_string().contains("Invalid params"));
        assert!(err.downcast_ref::<ErrorObject>().is_some());
    }
}
