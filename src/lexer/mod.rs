//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into tokens for the parser. It handles:
//!
//! - Whitespace skipping
//! - Integer literals, identifiers and keywords
//! - Single- and two-character operators and punctuation
//! - Illegal characters, which surface as `Illegal` tokens instead of failing
//!
//! The token model (keyword and precedence tables) lives in `tokens`.

pub mod lexer;
pub mod tokens;
