#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::Diagnostic;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source buffer: byte offset, 1-based line number and the
/// logical origin name (used only for diagnostics).
#[derive(Debug, Clone)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 1,
            file: Rc::new(String::from("<null>")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing `offset` in an in-memory buffer.
///
/// Returns the 1-based line number, the line's text and the offset within
/// that line. Offsets at or past the end of the buffer resolve to the last
/// line so diagnostics raised at EOF still render.
pub fn get_line_at_offset(source: &str, offset: u32) -> (usize, String, usize) {
    let pos = (offset as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str) -> String {
    /*
        error: message
        -> contract.cws
           |
        20 | state count: #
           | ------------^
    */

    let position = &diagnostic.span.start;
    let (line, line_text, line_pos) = get_line_at_offset(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    out.push_str(&format!(
        "{}: {}\n",
        diagnostic.severity, diagnostic.message
    ));
    out.push_str(&format!("-> {}\n", position.file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_offset() {
        let source = "contract Foo {\n    state count: u64\n}\n";

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "contract Foo {\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 19);
        assert_eq!(line_number, 2);
        assert_eq!(line, "    state count: u64\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_offset_past_end() {
        let source = "state count: u64";
        let (line_number, _, _) = super::get_line_at_offset(source, 500);
        assert_eq!(line_number, 1);
    }
}
