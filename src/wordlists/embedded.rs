//! Embedded word lists
//!
//! Compiled into the binary at build time: a small curated pool of secrets
//! and a much larger list of accepted guesses.

include!(concat!(env!("OUT_DIR"), "/secrets.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
