//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind, literal and byte range
//!
//! This keeps the lexer's scanning arms down to one line each.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, String::from("42"), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: Span {
                start: Position($start as u32),
                end: Position($end as u32),
            },
        }
    };
}
