//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse_module`
//! driver. The parser uses a Pratt approach with NUD/LED handlers for
//! expression parsing, a twin pair of tables for type expressions, and
//! specialized functions for statement and item parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers
//!
//! The driver recovers at item boundaries: a failed item records its
//! diagnostic and parsing resumes at the next recognizable keyword, so a
//! single call can report many errors and still return a best-effort
//! `Module`. Only `RecursionLimitExceeded` aborts the unit.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::items::Module,
    errors::errors::{Diagnostic, Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    items::parse_top_level_item,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDLookup, NUDLookup, StmtLookup,
        LEDHandler, NUDHandler, StmtHandler,
    },
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// Default bound on recursive nesting (expressions, types, statements and
/// items all share the counter). Deep enough for real contracts, shallow
/// enough to fail cleanly instead of overflowing the call stack.
pub const DEFAULT_MAX_DEPTH: u32 = 200;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing statements, expressions, types and items. It tracks the
/// current position in the token stream, the recursion depth, and the
/// diagnostics recovered from so far.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source unit being parsed
    file: Rc<String>,
    /// Errors recovered from during this parse
    errors: Vec<Error>,
    /// Current recursive nesting depth
    depth: u32,
    /// Bound on recursive nesting depth
    max_depth: u32,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    type_binding_power_lookup: TypeBPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>, max_depth: u32) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            errors: vec![],
            depth: 0,
            max_depth,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing. The stream always
    /// ends with EOF, which this saturates to.
    pub fn current_token(&self) -> &Token {
        self.tokens
            .get(self.pos as usize)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always holds EOF"))
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `offset` tokens ahead, saturating to
    /// EOF at the end of the stream.
    pub fn peek_kind(&self, offset: i32) -> TokenKind {
        self.tokens
            .get((self.pos + offset) as usize)
            .map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        if (self.pos as usize) < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens
            .get((self.pos - 1) as usize)
            .unwrap_or_else(|| self.tokens.last().expect("token stream always holds EOF"))
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects an identifier-like token. Identifier and TypeName both
    /// qualify: wherever the grammar says `ident`, capitalized names are
    /// legal (contract, variant and member names conventionally are).
    pub fn expect_ident(&mut self) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind.is_ident() {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("expected an identifier"),
                },
                token.span.clone(),
            ))
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        (self.pos as usize) < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_pos(&self) -> i32 {
        self.pos
    }

    /// Returns the start position of the current token, for diagnostics.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_span(&self) -> Span {
        self.current_token().span.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Enters one level of recursive nesting, failing once the
    /// configured bound is exceeded.
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded,
                self.get_span(),
            ));
        }
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Clears the nesting counter. Called on recovery, where unwinding
    /// with `?` has skipped the paired `exit` calls.
    pub fn reset_depth(&mut self) {
        self.depth = 0;
    }

    /// Records an error recovered from; it surfaces as a diagnostic.
    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type binding power lookup table.
    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Returns a reference to the type LED lookup table.
    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// The binding power entry is only filled when the token has none
    /// yet: `-` and `(` are both prefix and infix, and their infix
    /// precedence must survive.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type left denotation handler.
    pub fn type_led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        led_fn: TypeLEDHandler,
    ) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

/// Keywords that can begin a top-level item.
const TOP_LEVEL_BOUNDARY: [TokenKind; 3] =
    [TokenKind::Contract, TokenKind::Interface, TokenKind::Import];

/// Skips tokens until one of `boundaries` is reached at brace depth zero.
/// When `stop_at_close` is set, an unmatched `}` also stops the scan
/// (left for the enclosing body parser to consume); otherwise it is
/// skipped like anything else.
pub fn recover_to_boundary(parser: &mut Parser, boundaries: &[TokenKind], stop_at_close: bool) {
    let mut depth = 0;
    while parser.has_tokens() {
        let kind = parser.current_token_kind();
        if depth == 0 && boundaries.contains(&kind) {
            break;
        }
        match kind {
            TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseCurly => {
                if depth == 0 {
                    if stop_at_close {
                        break;
                    }
                } else {
                    depth -= 1;
                }
            }
            _ => {}
        }
        parser.advance();
    }
}

/// Parses a source unit into a `Module` plus its diagnostics, with the
/// default recursion bound.
///
/// A module is always returned, even in the presence of diagnostics;
/// callers decide whether any diagnostic is fatal for their purposes.
pub fn parse_module(source: &str, file: Option<String>) -> (Module, Vec<Diagnostic>) {
    parse_module_with_limit(source, file, DEFAULT_MAX_DEPTH)
}

/// `parse_module` with a caller-chosen recursion bound, for hosts that
/// parse untrusted input under tighter limits.
pub fn parse_module_with_limit(
    source: &str,
    file: Option<String>,
    max_depth: u32,
) -> (Module, Vec<Diagnostic>) {
    let file_name = Rc::new(
        file.clone()
            .unwrap_or_else(|| String::from("<input>")),
    );

    let (tokens, lex_errors) = tokenize(source.to_string(), file);

    let mut diagnostics: Vec<Diagnostic> = lex_errors
        .into_iter()
        .map(|error| error.into_diagnostic())
        .collect();

    let mut parser = Parser::new(tokens, Rc::clone(&file_name), max_depth);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut items = vec![];

    while parser.has_tokens() {
        let snapshot = parser.get_pos();
        match parse_top_level_item(&mut parser) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(error) => {
                let fatal = error.is_fatal();
                parser.record_error(error);
                if fatal {
                    break;
                }
                parser.reset_depth();
                if parser.get_pos() == snapshot {
                    parser.advance();
                }
                recover_to_boundary(&mut parser, &TOP_LEVEL_BOUNDARY, false);
            }
        }
    }

    diagnostics.extend(
        parser
            .take_errors()
            .into_iter()
            .map(|error| error.into_diagnostic()),
    );

    let module = Module {
        items,
        span: Span {
            start: Position::new(0, 1, Rc::clone(&file_name)),
            end: parser.get_position(),
        },
    };

    (module, diagnostics)
}
