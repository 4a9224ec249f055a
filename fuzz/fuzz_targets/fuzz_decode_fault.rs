//! Fuzz target for decode-failure classification.
//!
//! Whatever the input, a failed decode must package into either a parse
//! error or an invalid request error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rpckit_core::{fault, ErrorCode};

fuzz_target!(|data: &[u8]| {
    if let Err(err) = serde_json::from_slice::<std::collections::BTreeMap<String, u64>>(data) {
        let obj = fault::from_decode_error(&err);
        assert!(obj.code == ErrorCode::PARSE_ERROR || obj.code == ErrorCode::INVALID_REQUEST);
        assert!(obj.data.is_some());
    }
});
