//! Standard JSON-RPC 2.0 error codes and their canonical messages.
//!
//! The five protocol-reserved conditions are fixed by the JSON-RPC 2.0
//! specification. Their numeric values cross the wire to other
//! implementations and must match bit-for-bit.
//!
//! # Code bands
//!
//! | Range | Owner |
//! |-------|-------|
//! | `-32768..=-32000` | Reserved by the protocol |
//! | `-32099..=-32000` | Implementation-defined server errors (inside the reserved band) |
//! | anything else | Free for application use |
//!
//! Nothing here rejects an application code that lands in the reserved
//! band. Use [`ErrorCode::is_protocol_range`] to check before picking one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message paired with [`ErrorCode::PARSE_ERROR`].
pub const PARSE_ERROR_MESSAGE: &str = "Parse error";

/// Message paired with [`ErrorCode::INVALID_REQUEST`].
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid Request";

/// Message paired with [`ErrorCode::METHOD_NOT_FOUND`].
pub const METHOD_NOT_FOUND_MESSAGE: &str = "Method not found";

/// Message paired with [`ErrorCode::INVALID_PARAMS`].
pub const INVALID_PARAMS_MESSAGE: &str = "Invalid params";

/// Message paired with [`ErrorCode::INTERNAL_ERROR`].
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

/// First code of the band reserved by the protocol.
pub const RESERVED_RANGE_START: i64 = -32768;

/// Last code of the band reserved by the protocol.
pub const RESERVED_RANGE_END: i64 = -32000;

/// Server error range start.
pub const SERVER_ERROR_START: i64 = -32000;

/// Server error range end.
pub const SERVER_ERROR_END: i64 = -32099;

/// A JSON-RPC error code.
///
/// Any integer is representable. The associated constants name the five
/// codes the protocol reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i64);

impl ErrorCode {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: Self = Self(-32700);

    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: Self = Self(-32600);

    /// The method does not exist.
    pub const METHOD_NOT_FOUND: Self = Self(-32601);

    /// Invalid method parameters.
    pub const INVALID_PARAMS: Self = Self(-32602);

    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: Self = Self(-32603);

    /// Create an error code from a raw integer.
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Check if this is one of the five codes with a canonical message.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self.0, -32700 | -32600 | -32601 | -32602 | -32603)
    }

    /// Check if this code lies in the implementation-defined server band.
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.0 >= SERVER_ERROR_END && self.0 <= SERVER_ERROR_START
    }

    /// Check if this code lies anywhere in the protocol-reserved band.
    #[must_use]
    pub const fn is_protocol_range(self) -> bool {
        self.0 >= RESERVED_RANGE_START && self.0 <= RESERVED_RANGE_END
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl From<Reserved> for ErrorCode {
    fn from(kind: Reserved) -> Self {
        kind.code()
    }
}

/// The protocol-reserved error conditions.
///
/// Each variant carries exactly one code and one canonical message. The
/// pairing lives in `const fn`s so it cannot drift at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    /// Invalid JSON was received by the server.
    ParseError,
    /// The JSON sent is not a valid Request object.
    InvalidRequest,
    /// The method does not exist or is not available.
    MethodNotFound,
    /// Invalid method parameter(s).
    InvalidParams,
    /// Internal JSON-RPC error.
    InternalError,
}

impl Reserved {
    /// Every reserved condition, in code order as listed by the protocol.
    pub const ALL: [Self; 5] = [
        Self::ParseError,
        Self::InvalidRequest,
        Self::MethodNotFound,
        Self::InvalidParams,
        Self::InternalError,
    ];

    /// The wire code for this condition.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::ParseError => ErrorCode::PARSE_ERROR,
            Self::InvalidRequest => ErrorCode::INVALID_REQUEST,
            Self::MethodNotFound => ErrorCode::METHOD_NOT_FOUND,
            Self::InvalidParams => ErrorCode::INVALID_PARAMS,
            Self::InternalError => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// The canonical message for this condition.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ParseError => PARSE_ERROR_MESSAGE,
            Self::InvalidRequest => INVALID_REQUEST_MESSAGE,
            Self::MethodNotFound => METHOD_NOT_FOUND_MESSAGE,
            Self::InvalidParams => INVALID_PARAMS_MESSAGE,
            Self::InternalError => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// What the condition means, as worded by the protocol.
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::ParseError => "Invalid JSON was received by the server",
            Self::InvalidRequest => "The JSON sent is not a valid Request object",
            Self::MethodNotFound => "The method does not exist or is not available",
            Self::InvalidParams => "Invalid method parameter(s)",
            Self::InternalError => "Internal JSON-RPC error",
        }
    }

    /// Short snake_case identifier, used for diagnostic codes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ParseError => "parse_error",
            Self::InvalidRequest => "invalid_request",
            Self::MethodNotFound => "method_not_found",
            Self::InvalidParams => "invalid_params",
            Self::InternalError => "internal_error",
        }
    }
}
