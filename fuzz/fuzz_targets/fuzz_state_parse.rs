//! Fuzz target for persisted state parsing.
//!
//! Stored state is untrusted; parsing must never panic, and anything it
//! accepts must serialize back to an equivalent state.

#![no_main]

use glyph_banner::state::{Validation, parse_state, serialize_state};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Validation::Valid(state) = parse_state(data) {
        let json = serialize_state(&state).expect("valid state serializes");
        assert_eq!(parse_state(&json), Validation::Valid(state));
    }
});
