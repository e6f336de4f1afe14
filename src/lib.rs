#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::parse;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position` in `source`.
///
/// Returns the 1-based line number, the line text without its line break, and
/// the offset of `position` inside that line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.trim_end_matches(['\n', '\r']).to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // Position sits at end of input; point just past the last line.
    let last = source.lines().last().unwrap_or("");
    (line_number.saturating_sub(1).max(1), last.to_string(), last.len())
}
