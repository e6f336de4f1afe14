use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Literal spelling of the function keyword for this build.
pub const FUNCTION_KEYWORD: &str = if cfg!(feature = "func-keyword") { "func" } else { "fn" };

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(FUNCTION_KEYWORD, TokenKind::Function);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("el", TokenKind::El);
        map.insert("ret", TokenKind::Ret);
        map
    };

    pub static ref PRECEDENCE_LOOKUP: HashMap<&'static str, Precedence> = {
        let mut map = HashMap::new();
        map.insert("==", Precedence::Equality);
        map.insert("!=", Precedence::Equality);
        map.insert("<", Precedence::Relational);
        map.insert(">", Precedence::Relational);
        map.insert("+", Precedence::Additive);
        map.insert("-", Precedence::Additive);
        map.insert("*", Precedence::Multiplicative);
        map.insert("/", Precedence::Multiplicative);
        map.insert("(", Precedence::Call);
        map
    };
}

/// Operator binding strength, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Int,
    Identifier,

    Plus,
    Minus,
    Star,
    Slash,
    Not,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,

    Comma,
    Colon,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Quote,

    // Reserved
    Function,
    At,
    True,
    False,
    If,
    El,
    Ret,
}

impl TokenKind {
    /// The fixed spelling of symbol and keyword kinds.
    pub fn literal(&self) -> Option<&'static str> {
        let literal = match self {
            TokenKind::EOF | TokenKind::Illegal | TokenKind::Int | TokenKind::Identifier => return None,
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Not => "!",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Quote => "\"",
            TokenKind::Function => FUNCTION_KEYWORD,
            TokenKind::At => "@",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::El => "el",
            TokenKind::Ret => "ret",
        };

        Some(literal)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Illegal => write!(f, "illegal token"),
            TokenKind::Int => write!(f, "integer"),
            TokenKind::Identifier => write!(f, "identifier"),
            _ => write!(f, "`{}`", self.literal().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Int | TokenKind::Identifier | TokenKind::Illegal => {
                write!(f, "{:?} ({})", self.kind, self.value)
            }
            _ => write!(f, "{:?}", self.kind),
        }
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Precedence of this token when it appears in infix position.
    pub fn precedence(&self) -> Precedence {
        precedence_of(&self.value)
    }
}

/// Classifies scanned identifier text as a keyword or a plain identifier.
pub fn classify(identifier: &str) -> TokenKind {
    RESERVED_LOOKUP.get(identifier).copied().unwrap_or(TokenKind::Identifier)
}

/// Infix precedence of an operator literal; unknown literals are `Lowest`.
pub fn precedence_of(literal: &str) -> Precedence {
    PRECEDENCE_LOOKUP.get(literal).copied().unwrap_or(Precedence::Lowest)
}

pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
