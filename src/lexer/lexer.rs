use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: i32,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            pos: 0,
            line: 1,
            tokens: vec![],
            errors: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new(r"///[^\n]*").unwrap(), handler: doc_line_handler },
                RegexPattern { regex: Regex::new(r"/\*\*[^*]*\*+([^/*][^*]*\*+)*/").unwrap(), handler: doc_block_handler },
                RegexPattern { regex: Regex::new(r"//[^\n]*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(r"/\*[^*]*\*+([^/*][^*]*\*+)*/").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[A-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new(r"[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new(r#""([^"\r\n\\]|\\.)*""#).unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new(r"\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new(r"\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonColon, "::") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new(r"\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
                RegexPattern { regex: Regex::new(r"\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
                RegexPattern { regex: Regex::new(r"\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
                RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
                RegexPattern { regex: Regex::new(r"\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
                RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
                RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
                RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
            ],
            source,
            file: file_name,
        }
    }

    /// Advances past `n` bytes, keeping the line counter in sync with any
    /// newlines in the consumed slice.
    pub fn advance_n(&mut self, n: i32) {
        let start = self.pos as usize;
        let end = (start + n as usize).min(self.source.len());
        self.line += self.source[start..end].matches('\n').count() as u32;
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn at(&self) -> char {
        self.source[self.pos as usize..]
            .chars()
            .next()
            .unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    pub fn position_here(&self) -> Position {
        Position::new(self.pos as u32, self.line, Rc::clone(&self.file))
    }

    /// Span covering `len` bytes starting at the current position, on the
    /// current line. Only valid for matches that contain no newline.
    pub fn span_here(&self, len: u32) -> Span {
        Span {
            start: Position::new(self.pos as u32, self.line, Rc::clone(&self.file)),
            end: Position::new(self.pos as u32 + len, self.line, Rc::clone(&self.file)),
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched.clone(),
        lexer.span_here(matched.len() as u32)
    ));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn doc_line_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // Text after the `///` marker, preserved verbatim.
    lexer.push(MK_TOKEN!(
        TokenKind::DocLine,
        String::from(&matched[3..]),
        lexer.span_here(matched.len() as u32)
    ));
    lexer.advance_n(matched.len() as i32);
}

fn doc_block_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let newlines = matched.matches('\n').count() as u32;

    // Inner text between `/**` and `*/`, preserved verbatim. The end
    // position lands on the block's last line so the binder's adjacency
    // check works for multi-line blocks.
    let span = Span {
        start: lexer.position_here(),
        end: Position::new(
            lexer.pos as u32 + matched.len() as u32,
            lexer.line + newlines,
            Rc::clone(&lexer.file),
        ),
    };
    lexer.push(MK_TOKEN!(
        TokenKind::DocBlock,
        String::from(&matched[3..matched.len() - 2]),
        span
    ));
    lexer.advance_n(matched.len() as i32);
}

fn string_handler(lexer: &mut Lexer, regex: Regex) {
    let matched_len = regex.find(lexer.remainder()).unwrap().end();
    let raw = lexer.remainder()[1..matched_len - 1].to_string();

    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    'x' => {
                        let mut hex = String::new();
                        chars.next();

                        for _ in 0..2 {
                            if let Some(ch) = chars.peek() {
                                if ch.is_ascii_hexdigit() {
                                    hex.push(*ch);
                                    chars.next();
                                } else {
                                    break;
                                }
                            }
                        }

                        result.push(u8::from_str_radix(&hex, 16).unwrap_or(b'?') as char);
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch); // Keep the lone backslash
            }
        } else {
            result.push(ch);
        }
    }

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        result,
        lexer.span_here(matched_len as u32)
    ));
    lexer.advance_n(matched_len as i32);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else if value.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::TypeName
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(
        kind,
        value.clone(),
        lexer.span_here(value.len() as u32)
    ));
    lexer.advance_n(value.len() as i32);
}

/// Tokenizes a source buffer.
///
/// Lexing never aborts: an unrecognised character or unterminated string is
/// recorded and lexing resumes after it, so one call can report several
/// errors and still hand the parser a usable stream.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched_idx = None;

        for (idx, pattern) in lex.patterns.iter().enumerate() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                if found.start() == 0 {
                    matched_idx = Some(idx);
                    break;
                }
            }
        }

        if let Some(idx) = matched_idx {
            let pattern = lex.patterns[idx].clone();
            (pattern.handler)(&mut lex, pattern.regex);
            continue;
        }

        if lex.at() == '"' {
            // An opening quote that the string pattern rejected: the
            // literal is unterminated on this line. Skip to the newline.
            let span = lex.span_here(0);
            lex.record_error(Error::new(ErrorImpl::UnterminatedString, span));

            let skip = lex
                .remainder()
                .find('\n')
                .unwrap_or_else(|| lex.remainder().len());
            lex.advance_n(skip as i32);
        } else {
            let offending = lex.at();
            let span = lex.span_here(offending.len_utf8() as u32);
            lex.record_error(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: offending.to_string(),
                },
                span,
            ));
            lex.advance_n(offending.len_utf8() as i32);
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        lex.span_here(0)
    ));

    (lex.tokens, lex.errors)
}
