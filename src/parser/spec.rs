//! Doc-comment binding.
//!
//! A run of `///` lines or a `/** ... */` block binds to the declaration
//! immediately following it. Binding is purely positional: the run must
//! be line-contiguous, and a blank line between the run and the
//! declaration (or inside the run) discards everything before the gap.
//! Ownership is exclusive; a comment belongs to one node or to none.
//!
//! The pending comment lives entirely in the parse call's own state, so
//! concurrent parses never share it.

use crate::{ast::items::DocComment, lexer::tokens::TokenKind, Position, Span};

use super::parser::Parser;

/// Consumes any doc-comment tokens at the cursor and returns the comment
/// to attach to the declaration that follows, if the layout says one
/// attaches.
pub fn take_spec(parser: &mut Parser) -> Option<DocComment> {
    let mut lines: Vec<String> = vec![];
    let mut block: Option<String> = None;
    let mut span_start: Option<Position> = None;
    let mut last_end: Option<Position> = None;

    while parser.current_token_kind().is_doc() {
        let token = parser.advance().clone();

        // A blank line breaks the run; only the segment after the gap
        // can still attach.
        let gap = last_end
            .as_ref()
            .is_some_and(|end| token.span.start.line > end.line + 1);
        if gap {
            lines.clear();
            block = None;
            span_start = None;
        }

        match token.kind {
            TokenKind::DocLine => {
                // A line after a block starts a fresh run.
                if block.is_some() {
                    block = None;
                    span_start = None;
                }
                if lines.is_empty() {
                    span_start = Some(token.span.start.clone());
                }
                lines.push(token.value);
            }
            TokenKind::DocBlock => {
                lines.clear();
                block = Some(token.value);
                span_start = Some(token.span.start.clone());
            }
            _ => {}
        }

        last_end = Some(token.span.end.clone());
    }

    let end = last_end?;

    // Blank line between the run and the declaration: nothing attaches.
    if parser.current_token().span.start.line > end.line + 1 {
        return None;
    }

    let start = span_start?;
    let span = Span { start, end };

    if let Some(text) = block {
        Some(DocComment::Block { text, span })
    } else if !lines.is_empty() {
        Some(DocComment::Lines { lines, span })
    } else {
        None
    }
}
