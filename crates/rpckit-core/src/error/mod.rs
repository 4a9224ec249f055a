//! JSON-RPC 2.0 error model.
//!
//! This module provides the error object carried by failed responses, the
//! protocol-reserved error codes, and the constructors that pair each
//! reserved code with its canonical message.
//!
//! # Design Philosophy
//!
//! - **Static pairing**: reserved code/message pairs live in a `const` table
//!   ([`Reserved`]) and are never derived from caller input
//! - **Presence-preserving data**: absent `data` is omitted on the wire,
//!   while an explicit `null` survives a round trip
//! - **Scoped constructors**: method handlers get
//!   [`ErrorObject::invalid_params`]; the other protocol conditions are
//!   packaged by the dispatch layer through [`crate::fault`]
//! - **Diagnostic-friendly**: integrates with [`miette`] for detailed reports
//!
//! # Choosing a constructor
//!
//! | Situation | Use |
//! |-----------|-----|
//! | Handler rejects its parameters | [`ErrorObject::invalid_params`] |
//! | Handler fails for a domain reason | [`ErrorObject::new`] with an application code |
//! | Incoming bytes are not JSON | [`fault::from_decode_error`](crate::fault::from_decode_error) |
//! | Request names an unknown method | [`fault::unknown_method`](crate::fault::unknown_method) |
//! | Handler returned an unexpected error or panicked | [`fault::internal_fault`](crate::fault::internal_fault) |
//!
//! ```rust
//! use rpckit_core::error::{ErrorCode, ErrorObject};
//! use serde_json::json;
//!
//! fn divide(a: i64, b: i64) -> Result<i64, ErrorObject> {
//!     if b == 0 {
//!         return Err(ErrorObject::invalid_params(Some(json!("divisor must be non-zero"))));
//!     }
//!     Ok(a / b)
//! }
//!
//! let err = divide(1, 0).unwrap_err();
//! assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
//! ```

pub mod codes;
mod diagnostic;
mod object;

pub use codes::{ErrorCode, Reserved};
pub use object::ErrorObject;
