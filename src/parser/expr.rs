use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{Precedence, TokenKind},
};

use super::{parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    // First parse the prefix
    let Some(prefix) = parser.get_prefix(parser.current_token().kind) else {
        let token = parser.current_token();
        let (found, position) = (token.kind, token.span.start);
        parser.error(ErrorImpl::NoPrefixParseFn { found }, position);
        return None;
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than the floor, it takes `left` as its lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = parser.get_infix(parser.peek_token().kind) else {
            return Some(left);
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Identifier(current_identifier(parser)))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let position = token.span.start;
            parser.error(ErrorImpl::IntegerParseError { token: token.value }, position);
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let value = token.is(TokenKind::True);

    Some(Expr::Boolean(BooleanLiteral { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    let precedence = operator_token.precedence();
    parser.next_token();

    let right = parse_expr(parser, precedence)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    // if (condition) { ... } el { ... }
    let token = parser.current_token().clone();

    parser.expect(TokenKind::OpenParen)?;
    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::El) {
        parser.next_token();
        parser.expect(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Some(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the opening `(` as the current token.
fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(parameters);
    }

    parser.expect(TokenKind::Identifier)?;
    parameters.push(current_identifier(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.expect(TokenKind::Identifier)?;
        parameters.push(current_identifier(parser));
    }

    parser.expect(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses `x, y + 1)` with the opening `(` as the current token.
fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut arguments = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(arguments);
    }

    parser.next_token();
    arguments.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        arguments.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect(TokenKind::CloseParen)?;

    Some(arguments)
}

fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();

    Identifier {
        value: token.value.clone(),
        token,
    }
}
