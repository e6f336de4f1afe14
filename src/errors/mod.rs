//! Syntax error types.
//!
//! Errors never abort a parse: the parser records them in order and keeps
//! going. Each error carries:
//!
//! - The specific error variant and the tokens involved
//! - The byte offset of the offending token
//! - An optional suggestion for the front end to display

pub mod errors;

#[cfg(test)]
mod tests;
