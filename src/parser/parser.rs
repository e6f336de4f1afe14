//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser holds the lexer
//! and a two-token window (current and peek) over its output, and pulls the
//! next token only when it advances.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers for tokens that start an expression
//! - Infix handlers for tokens that continue one

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Precedence, Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, PrefixHandler, PrefixLookup, StmtHandler,
        StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it owns its lexer and consumes it over one call
/// to `parse_program`.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
}

impl Parser {
    /// Creates a new Parser over `lexer` with every lookup table populated.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Precedence of the lookahead token in infix position.
    pub fn peek_precedence(&self) -> Precedence {
        self.peek.precedence()
    }

    /// Shifts the window one token forward.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Consumes the lookahead if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, now current. Otherwise records an
    /// `UnexpectedToken` error, leaves the window untouched and returns `None`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            return Some(self.current.clone());
        }

        let position = self.peek.span.start;
        self.error(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            position,
        );

        None
    }

    /// Records a syntax error.
    pub fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        debug!(offset = position.0, "syntax error: {}", error);
        self.errors.push(error);
    }

    /// Returns every error recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Whether the last error was raised on the current token and that token
    /// is a `}`. Such a brace was never matched by the broken statement, so
    /// it closes the enclosing block.
    pub fn failed_on_closing_brace(&self) -> bool {
        self.current_token_is(TokenKind::CloseCurly)
            && self
                .errors
                .last()
                .is_some_and(|error| *error.get_position() == self.current.span.start)
    }

    /// Skips the rest of a statement that failed to parse.
    ///
    /// Stops on the statement's `;`, or just before a `}` that closes the
    /// enclosing block, or at end of input. Braces opened inside the broken
    /// statement are skipped as a unit. A statement that broke on the closing
    /// `}` itself leaves it current; see `failed_on_closing_brace`.
    pub fn synchronize(&mut self) {
        if self.failed_on_closing_brace() {
            return;
        }

        let mut depth = 0usize;

        loop {
            match self.current.kind {
                TokenKind::EOF => return,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly => depth = depth.saturating_sub(1),
                TokenKind::Semicolon if depth == 0 => return,
                _ => {}
            }

            if self.peek_token_is(TokenKind::EOF)
                || (depth == 0 && self.peek_token_is(TokenKind::CloseCurly))
            {
                return;
            }

            self.next_token();
        }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// errors are available from `errors`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_prefix(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Registers an infix handler for a token.
    pub fn infix(&mut self, kind: TokenKind, infix_fn: InfixHandler) {
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses one unit of source text.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// over `source` and parses every statement until end of input.
///
/// # Returns
///
/// A tuple containing:
/// - The program, which may be partial when errors are present
/// - Every syntax error message, in the order encountered
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(|error| error.to_string()).collect();

    (program, errors)
}
