use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{classify, is_digit, is_letter, Token, TokenKind};

/// Scans source text into tokens, one call to `next_token` at a time.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Offset of `ch`
    pos: usize,
    /// Offset of the character after `ch`
    read_pos: usize,
    /// Current byte, 0 once past the end
    ch: u8,
    done: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.to_string(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            done: false,
        };
        lexer.read_char();

        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0);
        self.pos = self.read_pos.min(self.source.len());
        self.read_pos = (self.read_pos + 1).min(self.source.len() + 1);
    }

    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }

        self.source[start..self.pos].to_string()
    }

    /// Returns the next token. Once the input is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        let token = if self.at_eof() {
            MK_TOKEN!(TokenKind::EOF, String::new(), start, start)
        } else if is_digit(self.ch) {
            let literal = self.read_while(is_digit);
            MK_TOKEN!(TokenKind::Int, literal, start, self.pos)
        } else if is_letter(self.ch) {
            let literal = self.read_while(|ch| is_letter(ch) || is_digit(ch));
            MK_TOKEN!(classify(&literal), literal, start, self.pos)
        } else {
            self.read_symbol()
        };

        trace!(kind = ?token.kind, literal = %token.value, offset = start, "scanned token");
        token
    }

    fn read_symbol(&mut self) -> Token {
        let start = self.pos;

        let kind = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::Equals
            }
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::NotEquals
            }
            b'=' => TokenKind::Assignment,
            b'!' => TokenKind::Not,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b'[' => TokenKind::OpenBracket,
            b']' => TokenKind::CloseBracket,
            b'"' => TokenKind::Quote,
            b'@' => TokenKind::At,
            _ => return self.read_illegal(),
        };
        self.read_char();

        MK_TOKEN!(kind, self.source[start..self.pos].to_string(), start, self.pos)
    }

    /// Consumes one whole character, which may span several bytes.
    fn read_illegal(&mut self) -> Token {
        let start = self.pos;
        let width = self.source[start..].chars().next().map_or(1, char::len_utf8);

        for _ in 0..width {
            self.read_char();
        }

        MK_TOKEN!(TokenKind::Illegal, self.source[start..self.pos].to_string(), start, self.pos)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            self.done = true;
            return None;
        }

        Some(token)
    }
}

/// Scans all of `source`, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(lexer.next_token());

    tokens
}
