//! # rpckit-core
//!
//! The JSON-RPC 2.0 error model for the rpckit SDK.
//!
//! This crate provides:
//!
//! - **Error codes**: the five protocol-reserved codes with their canonical
//!   messages, plus room for application codes
//! - **Error object**: the `{code, message, data}` value carried by failed
//!   responses, with stable wire and display formats
//! - **Fault packaging**: entry points the dispatch layer uses to turn
//!   decode failures, unknown methods, and handler crashes into errors
//!
//! Envelopes, dispatch and transports live elsewhere. This crate has no
//! runtime dependency and performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use rpckit_core::{ErrorCode, ErrorObject};
//! use serde_json::json;
//!
//! let err = ErrorObject::new(ErrorCode::new(42), "custom failure", Some(json!({"retry": true})));
//! assert_eq!(
//!     serde_json::to_value(&err).unwrap(),
//!     json!({"code": 42, "message": "custom failure", "data": {"retry": true}}),
//! );
//! ```
//!
//! # Feature Flags
//!
//! - `fancy-errors`: enables `miette`'s fancy terminal rendering.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod fault;

// Re-export commonly used types at the crate root
pub use error::{ErrorCode, ErrorObject, Reserved};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use rpckit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::codes::{
        INTERNAL_ERROR_MESSAGE, INVALID_PARAMS_MESSAGE, INVALID_REQUEST_MESSAGE,
        METHOD_NOT_FOUND_MESSAGE, PARSE_ERROR_MESSAGE,
    };
    pub use crate::error::{ErrorCode, ErrorObject, Reserved};
    pub use crate::fault;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let err = ErrorObject::invalid_params(None);
        assert_eq!(err.message, INVALID_PARAMS_MESSAGE);
        assert_eq!(fault::unknown_method("x").message, METHOD_NOT_FOUND_MESSAGE);
        assert_eq!(Reserved::ALL.len(), 5);
    }

    #[test]
    fn test_root_reexports() {
        assert_eq!(ErrorCode::INTERNAL_ERROR, Reserved::InternalError.code());
    }
}
