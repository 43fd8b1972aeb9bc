//! jsonv - strict JSON document checking and parsing.
//!
//! This crate accepts exactly the documents conforming to the JSON object
//! grammar and rejects all others with a diagnosable failure. Input is
//! tokenized by a context-free lexer, then reduced bottom-up under the JSON
//! grammar into a [`Value`] tree.
//!
//! # Architecture
//!
//! - [`json`] - tokenizer, grammar parser, and value types
//! - [`error`] - parse failure reasons
//!
//! The sole entry point is [`parse`], which consumes a complete in-memory
//! document in one shot. Calls are independent and hold no shared state, so
//! concurrent parsing of separate documents is safe.

// Library code must avoid unwrap/expect/panic; failures propagate as
// ParseError. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ParseError, ParseResult};
pub use json::{parse, Number, Value};
