//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - Single-quoted string lexing
//! - `operator` - Operator and punctuation lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
