//! JSON tokenizing and parsing.
//!
//! The subsystem is organized into focused modules:
//!
//! - [`types`] - Core JSON value types
//! - [`lexer`] - Context-free tokenizer
//! - [`parser`] - Recursive descent grammar parser
//!
//! Tokenization is context free: the lexer never knows whether it is inside
//! a string, and the grammar's string production reinterprets punctuation,
//! number, and keyword tokens as literal text when they occur between quote
//! marks. Escape sequences stay literal all the way into the value tree.
//!
//! # Example
//!
//! ```
//! use jsonv::json::{parse, Number};
//!
//! let value = parse(r#"{"foo":123}"#).unwrap();
//! assert_eq!(value.get("foo").unwrap().as_number(), Some(Number::Int(123)));
//!
//! assert!(parse(r#"{"foo":123,}"#).is_err());
//! ```

pub mod lexer;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use lexer::{Lexer, Token};
pub use parser::{parse, Parser};
pub use types::{Number, Value};
