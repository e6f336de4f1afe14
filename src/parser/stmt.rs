use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BindingStmt, BlockStmt, ExpressionStmt, ReturnStmt},
    },
    lexer::tokens::{Precedence, TokenKind},
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// On failure the rest of the statement is skipped, leaving the parser on
/// the statement's last token just like a successful parse would.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    let stmt = match parser.get_stmt(parser.current_token().kind) {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    };

    if stmt.is_none() {
        trace!(token = %parser.current_token(), "skipping malformed statement");
        parser.synchronize();
    }

    stmt
}

pub fn parse_binding_stmt(parser: &mut Parser) -> Option<Stmt> {
    // @ name = value;
    let token = parser.current_token().clone();

    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Binding(BindingStmt {
        token,
        name: Identifier {
            value: name_token.value.clone(),
            token: name_token,
        },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let value = if parser.peek_token_is(TokenKind::Semicolon)
        || parser.peek_token_is(TokenKind::CloseCurly)
        || parser.peek_token_is(TokenKind::EOF)
    {
        None
    } else {
        parser.next_token();
        Some(parse_expr(parser, Precedence::Lowest)?)
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    // The terminator is optional
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses statements up to the closing `}`, with the `{` as the current token.
///
/// End of input also ends the block, so a line cut off mid-block still parses.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    let mut body = Vec::new();

    parser.next_token();
    while !parser.current_token_is(TokenKind::CloseCurly) && !parser.current_token_is(TokenKind::EOF) {
        match parse_stmt(parser) {
            Some(stmt) => body.push(stmt),
            // The broken statement ran into this block's `}`
            None if parser.failed_on_closing_brace() => break,
            None => {}
        }
        parser.next_token();
    }

    BlockStmt { token, body }
}
