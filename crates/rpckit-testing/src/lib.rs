//! Testing utilities for rpckit.
//!
//! This crate provides fixtures and assertions for testing code that
//! produces JSON-RPC error objects. It includes:
//!
//! - Sample `data` payloads covering the shapes handlers attach
//! - Assertions for canonical reserved errors and the wire format
//!
//! # Assertions
//!
//! ```rust
//! use rpckit_core::{ErrorObject, Reserved};
//! use rpckit_testing::{assert_reserved, assert_wire_json};
//!
//! let err = ErrorObject::invalid_params(None);
//! assert_reserved(&err, Reserved::InvalidParams);
//! assert_wire_json(&err, r#"{"code":-32602,"message":"Invalid params"}"#);
//! ```
//!
//! # Fixtures
//!
//! ```rust
//! use rpckit_testing::fixtures;
//!
//! for data in fixtures::sample_data() {
//!     let _ = rpckit_core::ErrorObject::invalid_params(data);
//! }
//! ```

#![deny(missing_docs)]

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_display_contract, assert_reserved, assert_round_trip, assert_wire_json};
pub use fixtures::sample_data;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assertions::{
        assert_display_contract, assert_reserved, assert_round_trip, assert_wire_json,
    };
    pub use crate::fixtures::{custom_error, sample_data};
}
