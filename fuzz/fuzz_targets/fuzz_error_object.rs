//! Fuzz target for JSON-RPC error object parsing.
//!
//! Any error object that parses must serialize back to text that parses to
//! the same code, message and data presence. Its rendering must start with
//! the rendering of its data-less form.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rpckit_core::ErrorObject;

fuzz_target!(|data: &[u8]| {
    if let Ok(err) = serde_json::from_slice::<ErrorObject>(data) {
        let serialized = serde_json::to_string(&err).expect("parsed error must serialize");
        let reparsed: ErrorObject =
            serde_json::from_str(&serialized).expect("serialized error must parse");
        assert_eq!(reparsed.code, err.code);
        assert_eq!(reparsed.message, err.message);
        // Floats in data may shift by an ulp; presence must not.
        assert_eq!(reparsed.data.is_some(), err.data.is_some());

        let bare = ErrorObject::new(err.code, err.message.clone(), None).to_string();
        assert!(err.to_string().starts_with(&bare));
    }
});
