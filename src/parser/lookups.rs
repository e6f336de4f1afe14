use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expr>;
pub type InfixHandler = fn(&mut Parser, Expr) -> Option<Expr>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.infix(TokenKind::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEquals, parse_infix_expr);
    parser.infix(TokenKind::Less, parse_infix_expr);
    parser.infix(TokenKind::Greater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, parse_infix_expr);
    parser.infix(TokenKind::Minus, parse_infix_expr);
    parser.infix(TokenKind::Star, parse_infix_expr);
    parser.infix(TokenKind::Slash, parse_infix_expr);

    parser.infix(TokenKind::OpenParen, parse_call_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Not, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::OpenParen, parse_grouping_expr);
    parser.prefix(TokenKind::If, parse_if_expr);
    parser.prefix(TokenKind::Function, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::At, parse_binding_stmt);
    parser.stmt(TokenKind::Ret, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
