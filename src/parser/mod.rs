//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer on
//! demand and builds the AST. It uses a Pratt parser for expressions and
//! handles:
//!
//! - Statement parsing (bindings, returns, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, `if`,
//!   function literals, calls)
//! - Error accumulation and recovery
//!
//! Expressions are parsed with prefix and infix handlers looked up by token
//! kind, combined with the precedence table from the token model.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
