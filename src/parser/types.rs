//! Type-expression parsing.
//!
//! This module handles parsing of type annotations wherever they appear:
//!
//! - Type paths (`Addr`, `Msg::Transfer`)
//! - Tuple types, including the unit type `()`
//! - Postfix shorthands `T?` and `T[]`, stacking left-to-right
//! - The inferred type `_` and builtin scalar types
//! - Inline struct/enum/alias definitions in type position
//!
//! Similar to expression parsing, it uses NUD/LED handlers with binding
//! powers, registered in a separate pair of tables.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Type, TypeWrapper},
        types::{BuiltinKind, BuiltinType, InferType, ShortOptionType, ShortVecType, TupleType, TypePath},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    items::parse_inline_type_defn,
    lookups::BindingPower,
    parser::Parser,
};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeWrapper, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, TypeWrapper, BindingPower) -> Result<TypeWrapper, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::TypeName, parse_type_path);
    parser.type_nud(TokenKind::OpenParen, parse_tuple_type);
    parser.type_nud(TokenKind::Underscore, parse_infer_type);
    parser.type_nud(TokenKind::BuiltinType, parse_builtin_type);
    parser.type_nud(TokenKind::Struct, parse_inline_type_defn);
    parser.type_nud(TokenKind::Enum, parse_inline_type_defn);
    parser.type_nud(TokenKind::Type, parse_inline_type_defn);

    parser.type_led(TokenKind::Question, BindingPower::Call, parse_short_option_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_short_vec_type);
}

/// A type name with zero or more `::member` segments. Namespacing, not
/// generics: the grammar has no angle brackets.
pub fn parse_type_path(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token = parser.expect(TokenKind::TypeName)?;
    let start = token.span.start.clone();
    let mut end = token.span.end.clone();

    let mut segments = vec![];
    while parser.current_token_kind() == TokenKind::ColonColon {
        parser.advance();
        let segment = parser.expect_ident()?;
        end = segment.span.end.clone();
        segments.push(segment.value);
    }

    Ok(TypeWrapper::new(TypePath {
        name: token.value,
        segments,
        span: Span { start, end },
    }))
}

/// `(T1, T2, ...)`; the empty tuple is the unit type.
pub fn parse_tuple_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let mut elems = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        elems.push(parse_type(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(TypeWrapper::new(TupleType {
        elems,
        span: Span { start, end },
    }))
}

pub fn parse_infer_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token = parser.advance();
    Ok(TypeWrapper::new(InferType {
        span: token.span.clone(),
    }))
}

pub fn parse_builtin_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token = parser.advance().clone();
    match BuiltinKind::from_str(&token.value) {
        Some(kind) => Ok(TypeWrapper::new(BuiltinType {
            kind,
            span: token.span,
        })),
        None => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected a builtin type name"),
            },
            token.span,
        )),
    }
}

pub fn parse_short_option_type(
    parser: &mut Parser,
    left: TypeWrapper,
    _bp: BindingPower,
) -> Result<TypeWrapper, Error> {
    let token = parser.expect(TokenKind::Question)?;

    Ok(TypeWrapper::new(ShortOptionType {
        span: Span {
            start: left.get_span().start.clone(),
            end: token.span.end,
        },
        inner: left,
    }))
}

pub fn parse_short_vec_type(
    parser: &mut Parser,
    left: TypeWrapper,
    _bp: BindingPower,
) -> Result<TypeWrapper, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let token = parser.expect(TokenKind::CloseBracket)?;

    Ok(TypeWrapper::new(ShortVecType {
        span: Span {
            start: left.get_span().start.clone(),
            end: token.span.end,
        },
        inner: left,
    }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<TypeWrapper, Error> {
    parser.enter()?;
    let result = parse_type_inner(parser, bp);
    parser.exit();
    result
}

fn parse_type_inner(parser: &mut Parser, bp: BindingPower) -> Result<TypeWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_type_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a type expression"),
            },
            parser.get_span(),
        ));
    }

    let nud = *parser.get_type_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud(parser)?;

    // Postfix `?` and `[]` apply left-to-right, greedily, any number of
    // times: `T?[]` is a vec of options. A token without a type LED
    // ends the type expression.
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }
        let Some(led) = parser.get_type_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}
