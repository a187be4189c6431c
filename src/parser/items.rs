//! Top-level and contract/interface body item parsing.
//!
//! Items dispatch on their leading keyword. The block spellings
//! (`error { ... }`, `event { ... }`, `state { ... }`, `exec { ... }`,
//! `query { ... }`) iterate the same bare-item productions as the
//! singular spellings and desugar to the same item list, so the two ways
//! of writing a group of declarations cannot drift apart.
//!
//! The parsing context selects defn vs decl forms: contract items carry
//! bodies, interface items are signatures only.

use crate::{
    ast::{
        ast::{Item, ItemWrapper, Type, TypeWrapper},
        items::{
            ContractDefn, DocComment, EnumDefn, EnumVariant, ErrorDefn, EventDefn, ExecDecl,
            ExecDefn, FnArg, ImportAll, ImportItems, ImportSymbol, InstantiateDecl,
            InstantiateDefn, InterfaceDefn, MapKey, MigrateDecl, MigrateDefn, QueryDecl,
            QueryDefn, StateItem, StateMap, StructDefn, StructMember, TypeAliasDefn, VariantKind,
        },
        types::InlineTypeDefn,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    lookups::BindingPower,
    parser::{recover_to_boundary, Parser},
    spec::take_spec,
    stmt::parse_fn_body,
    types::parse_type,
};

/// Whether body items are parsed as full definitions (contracts) or
/// signature-only declarations (interfaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemContext {
    Contract,
    Interface,
}

/// Keywords that can begin a contract/interface body item, used as
/// recovery boundaries.
const BODY_BOUNDARY: [TokenKind; 10] = [
    TokenKind::Error,
    TokenKind::Event,
    TokenKind::State,
    TokenKind::Instantiate,
    TokenKind::Exec,
    TokenKind::Query,
    TokenKind::Migrate,
    TokenKind::Struct,
    TokenKind::Enum,
    TokenKind::Type,
];

/// Parses one top-level item. Returns `None` when only trailing doc
/// comments remained before EOF (they bind to nothing).
pub fn parse_top_level_item(parser: &mut Parser) -> Result<Option<ItemWrapper>, Error> {
    let spec = take_spec(parser);

    match parser.current_token_kind() {
        TokenKind::Contract => Ok(Some(parse_contract_defn(parser, spec)?)),
        TokenKind::Interface => Ok(Some(parse_interface_defn(parser, spec)?)),
        TokenKind::Import => Ok(Some(parse_import_stmt(parser)?)),
        TokenKind::EOF => Ok(None),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `contract`, `interface` or `import`"),
            },
            parser.get_span(),
        )),
    }
}

pub fn parse_contract_defn(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect_ident()?.value;

    let bases = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        parse_ident_list(parser)?
    } else {
        vec![]
    };

    let interfaces = if parser.current_token_kind() == TokenKind::Implements {
        parser.advance();
        parse_ident_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body_items(parser, ItemContext::Contract)?;
    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(ItemWrapper::new(ContractDefn {
        spec,
        name,
        bases,
        interfaces,
        body,
        span: Span { start, end },
    }))
}

pub fn parse_interface_defn(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect_ident()?.value;

    let bases = if parser.current_token_kind() == TokenKind::Extends {
        parser.advance();
        parse_ident_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body_items(parser, ItemContext::Interface)?;
    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(ItemWrapper::new(InterfaceDefn {
        spec,
        name,
        bases,
        body,
        span: Span { start, end },
    }))
}

fn parse_ident_list(parser: &mut Parser) -> Result<Vec<String>, Error> {
    let mut names = vec![parser.expect_ident()?.value];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        names.push(parser.expect_ident()?.value);
    }

    Ok(names)
}

/// Parses import statements. The path is recorded as a string; the
/// parser never opens a file.
pub fn parse_import_stmt(parser: &mut Parser) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    if parser.current_token_kind() == TokenKind::Star {
        parser.advance();
        parser.expect(TokenKind::From)?;
        let path = parser.expect(TokenKind::String)?;

        return Ok(ItemWrapper::new(ImportAll {
            path: path.value,
            span: Span {
                start,
                end: path.span.end,
            },
        }));
    }

    let mut symbols = vec![];

    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance();
        while parser.current_token_kind() != TokenKind::CloseParen {
            symbols.push(parse_import_symbol(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
        parser.expect(TokenKind::CloseParen)?;
    } else {
        symbols.push(parse_import_symbol(parser)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            symbols.push(parse_import_symbol(parser)?);
        }
    }

    parser.expect(TokenKind::From)?;
    let path = parser.expect(TokenKind::String)?;

    Ok(ItemWrapper::new(ImportItems {
        symbols,
        path: path.value,
        span: Span {
            start,
            end: path.span.end,
        },
    }))
}

fn parse_import_symbol(parser: &mut Parser) -> Result<ImportSymbol, Error> {
    let symbol = parser.expect_ident()?.value;

    let alias = if parser.current_token_kind() == TokenKind::As {
        parser.advance();
        Some(parser.expect_ident()?.value)
    } else {
        None
    };

    Ok(ImportSymbol { symbol, alias })
}

/// Parses body items until the closing brace, recovering at item
/// boundaries: a failed item records its diagnostic and the scan resumes
/// at the next item keyword or the enclosing `}`.
pub fn parse_body_items(
    parser: &mut Parser,
    ctx: ItemContext,
) -> Result<Vec<ItemWrapper>, Error> {
    let mut items = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        let snapshot = parser.get_pos();
        match parse_body_item(parser, ctx) {
            Ok(mut new_items) => items.append(&mut new_items),
            Err(error) => {
                if error.is_fatal() {
                    return Err(error);
                }
                parser.record_error(error);
                parser.reset_depth();
                if parser.get_pos() == snapshot {
                    parser.advance();
                }
                recover_to_boundary(parser, &BODY_BOUNDARY, true);
            }
        }
    }

    Ok(items)
}

/// Parses one body item, which may desugar from a block spelling into
/// several items. An empty vec means only trailing doc comments remained.
fn parse_body_item(parser: &mut Parser, ctx: ItemContext) -> Result<Vec<ItemWrapper>, Error> {
    let spec = take_spec(parser);

    if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
        return Ok(vec![]);
    }

    match parser.current_token_kind() {
        TokenKind::Error | TokenKind::Event => parse_enum_item(parser, spec),
        TokenKind::State => parse_state_item(parser, spec),
        TokenKind::Instantiate | TokenKind::Migrate => {
            Ok(vec![parse_unnamed_entry(parser, ctx, spec)?])
        }
        TokenKind::Exec | TokenKind::Query => parse_named_entry_item(parser, ctx, spec),
        TokenKind::Struct => Ok(vec![parse_struct_defn(parser, spec)?]),
        TokenKind::Enum => Ok(vec![parse_enum_defn(parser, spec)?]),
        TokenKind::Type => Ok(vec![parse_type_alias_defn(parser, spec)?]),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: match ctx {
                    ItemContext::Contract => String::from("expected a contract body item"),
                    ItemContext::Interface => String::from("expected an interface body item"),
                },
            },
            parser.get_span(),
        )),
    }
}

fn mk_enum_item(
    keyword: TokenKind,
    spec: Option<DocComment>,
    variant: EnumVariant,
    start: Position,
) -> ItemWrapper {
    let span = Span {
        start,
        end: variant.span.end.clone(),
    };
    if keyword == TokenKind::Error {
        ItemWrapper::new(ErrorDefn {
            spec,
            variant,
            span,
        })
    } else {
        ItemWrapper::new(EventDefn {
            spec,
            variant,
            span,
        })
    }
}

/// `error`/`event`, singular or block form. Both spellings run through
/// `parse_enum_variant`, so they desugar to identical items. A doc
/// comment before a block keyword has no single owner and is dropped.
fn parse_enum_item(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<Vec<ItemWrapper>, Error> {
    let keyword = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::OpenCurly {
        parser.advance();

        let mut items = vec![];
        loop {
            let variant_spec = take_spec(parser);
            if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
                break;
            }

            let start = parser.get_position();
            let variant = parse_enum_variant(parser, None)?;
            items.push(mk_enum_item(keyword.kind, variant_spec, variant, start));

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            }
        }
        parser.expect(TokenKind::CloseCurly)?;

        return Ok(items);
    }

    let variant = parse_enum_variant(parser, None)?;
    Ok(vec![mk_enum_item(
        keyword.kind,
        spec,
        variant,
        keyword.span.start,
    )])
}

/// `state`, singular or block form.
fn parse_state_item(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<Vec<ItemWrapper>, Error> {
    let keyword = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::OpenCurly {
        parser.advance();

        let mut items = vec![];
        loop {
            let entry_spec = take_spec(parser);
            if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
                break;
            }

            let start = parser.get_position();
            items.push(parse_state_defn_one(parser, entry_spec, start)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            }
        }
        parser.expect(TokenKind::CloseCurly)?;

        return Ok(items);
    }

    Ok(vec![parse_state_defn_one(
        parser,
        spec,
        keyword.span.start,
    )?])
}

/// One state declaration: a scalar item `key: Type` or a map
/// `key[k1: T1][k2: T2]: ValueType` with at least one key component.
fn parse_state_defn_one(
    parser: &mut Parser,
    spec: Option<DocComment>,
    start: Position,
) -> Result<ItemWrapper, Error> {
    let key = parser.expect_ident()?.value;

    if parser.current_token_kind() == TokenKind::OpenBracket {
        let mut keys = vec![];
        while parser.current_token_kind() == TokenKind::OpenBracket {
            parser.advance();

            // The key name is optional: `[Addr]` and `[owner: Addr]`.
            let name = if parser.current_token_kind().is_ident()
                && parser.peek_kind(1) == TokenKind::Colon
            {
                let name = parser.expect_ident()?.value;
                parser.expect(TokenKind::Colon)?;
                Some(name)
            } else {
                None
            };

            let ty = parse_type(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseBracket)?;
            keys.push(MapKey { name, ty });
        }

        parser.expect(TokenKind::Colon)?;
        let value_ty = parse_type(parser, BindingPower::Default)?;
        let end = value_ty.get_span().end.clone();

        return Ok(ItemWrapper::new(StateMap {
            spec,
            key,
            keys,
            value_ty,
            span: Span { start, end },
        }));
    }

    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser, BindingPower::Default)?;
    let end = ty.get_span().end.clone();

    Ok(ItemWrapper::new(StateItem {
        spec,
        key,
        ty,
        span: Span { start, end },
    }))
}

fn parse_fn_signature(
    parser: &mut Parser,
) -> Result<(Vec<FnArg>, Option<TypeWrapper>), Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect_ident()?.value;

        let is_option = if parser.current_token_kind() == TokenKind::Question {
            parser.advance();
            true
        } else {
            false
        };

        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser, BindingPower::Default)?;
        args.push(FnArg {
            name,
            is_option,
            ty,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok((args, return_type))
}

fn interface_body_error(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("interface declarations do not take a body"),
        },
        parser.get_span(),
    )
}

/// `instantiate`/`migrate`: unnamed entry points. Cardinality (at most
/// one of each per contract) is not enforced here.
fn parse_unnamed_entry(
    parser: &mut Parser,
    ctx: ItemContext,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let keyword = parser.advance().clone();
    let start = keyword.span.start.clone();

    let (args, return_type) = parse_fn_signature(parser)?;

    match ctx {
        ItemContext::Contract => {
            let body = parse_fn_body(parser)?;
            let span = Span {
                start,
                end: body.span.end.clone(),
            };
            Ok(if keyword.kind == TokenKind::Instantiate {
                ItemWrapper::new(InstantiateDefn {
                    spec,
                    args,
                    return_type,
                    body,
                    span,
                })
            } else {
                ItemWrapper::new(MigrateDefn {
                    spec,
                    args,
                    return_type,
                    body,
                    span,
                })
            })
        }
        ItemContext::Interface => {
            if parser.current_token_kind() == TokenKind::OpenCurly {
                return Err(interface_body_error(parser));
            }
            let span = Span {
                start,
                end: parser.get_position(),
            };
            Ok(if keyword.kind == TokenKind::Instantiate {
                ItemWrapper::new(InstantiateDecl {
                    spec,
                    args,
                    return_type,
                    span,
                })
            } else {
                ItemWrapper::new(MigrateDecl {
                    spec,
                    args,
                    return_type,
                    span,
                })
            })
        }
    }
}

/// `exec`/`query`, singular or block form. Named entries only.
fn parse_named_entry_item(
    parser: &mut Parser,
    ctx: ItemContext,
    spec: Option<DocComment>,
) -> Result<Vec<ItemWrapper>, Error> {
    let keyword = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::OpenCurly {
        parser.advance();

        let mut items = vec![];
        loop {
            let entry_spec = take_spec(parser);
            if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
                break;
            }

            let start = parser.get_position();
            items.push(parse_named_entry(parser, ctx, keyword.kind, entry_spec, start)?);
        }
        parser.expect(TokenKind::CloseCurly)?;

        return Ok(items);
    }

    Ok(vec![parse_named_entry(
        parser,
        ctx,
        keyword.kind,
        spec,
        keyword.span.start,
    )?])
}

fn parse_named_entry(
    parser: &mut Parser,
    ctx: ItemContext,
    keyword: TokenKind,
    spec: Option<DocComment>,
    start: Position,
) -> Result<ItemWrapper, Error> {
    let name = parser.expect_ident()?.value;
    let (args, return_type) = parse_fn_signature(parser)?;

    match ctx {
        ItemContext::Contract => {
            let body = parse_fn_body(parser)?;
            let span = Span {
                start,
                end: body.span.end.clone(),
            };
            Ok(if keyword == TokenKind::Exec {
                ItemWrapper::new(ExecDefn {
                    spec,
                    name,
                    args,
                    return_type,
                    body,
                    span,
                })
            } else {
                ItemWrapper::new(QueryDefn {
                    spec,
                    name,
                    args,
                    return_type,
                    body,
                    span,
                })
            })
        }
        ItemContext::Interface => {
            if parser.current_token_kind() == TokenKind::OpenCurly {
                return Err(interface_body_error(parser));
            }
            let span = Span {
                start,
                end: parser.get_position(),
            };
            Ok(if keyword == TokenKind::Exec {
                ItemWrapper::new(ExecDecl {
                    spec,
                    name,
                    args,
                    return_type,
                    span,
                })
            } else {
                ItemWrapper::new(QueryDecl {
                    spec,
                    name,
                    args,
                    return_type,
                    span,
                })
            })
        }
    }
}

/// Whether the parser sits on a `name: Type` or `name?: Type` member.
fn at_struct_member(parser: &Parser) -> bool {
    parser.current_token_kind().is_ident()
        && (parser.peek_kind(1) == TokenKind::Colon
            || (parser.peek_kind(1) == TokenKind::Question
                && parser.peek_kind(2) == TokenKind::Colon))
}

fn parse_struct_members(
    parser: &mut Parser,
    end_kind: TokenKind,
    paren_variant: Option<&str>,
) -> Result<Vec<StructMember>, Error> {
    let mut members = vec![];

    while parser.current_token_kind() != end_kind {
        // In the parenthesized form the struct shape was chosen from the
        // first member; a later bare type cannot be resolved either way.
        if paren_variant.is_some() && !at_struct_member(parser) {
            return Err(Error::new(
                ErrorImpl::AmbiguousVariantShape {
                    variant: paren_variant.unwrap_or_default().to_string(),
                },
                parser.get_span(),
            ));
        }

        let name = parser.expect_ident()?.value;

        let is_option = if parser.current_token_kind() == TokenKind::Question {
            parser.advance();
            true
        } else {
            false
        };

        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser, BindingPower::Default)?;
        members.push(StructMember {
            name,
            is_option,
            ty,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    Ok(members)
}

/// One variant, in any of the three shapes. Parenthesized members of
/// `name: Type` shape resolve to the struct shape; bare type lists to
/// the tuple shape; a paren list mixing the two is ambiguous.
pub fn parse_enum_variant(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<EnumVariant, Error> {
    let name_token = parser.expect_ident()?;
    let name = name_token.value;
    let start = name_token.span.start;
    let mut end = name_token.span.end;

    let kind = match parser.current_token_kind() {
        TokenKind::OpenCurly => {
            parser.advance();
            let members = parse_struct_members(parser, TokenKind::CloseCurly, None)?;
            end = parser.expect(TokenKind::CloseCurly)?.span.end;
            VariantKind::Struct(members)
        }
        TokenKind::OpenParen => {
            parser.advance();

            if parser.current_token_kind() == TokenKind::CloseParen {
                end = parser.advance().span.end.clone();
                VariantKind::Tuple(vec![])
            } else if at_struct_member(parser) {
                let members = parse_struct_members(parser, TokenKind::CloseParen, Some(&name))?;
                end = parser.expect(TokenKind::CloseParen)?.span.end;
                VariantKind::Struct(members)
            } else {
                let mut types = vec![];
                while parser.current_token_kind() != TokenKind::CloseParen {
                    if at_struct_member(parser) {
                        return Err(Error::new(
                            ErrorImpl::AmbiguousVariantShape {
                                variant: name.clone(),
                            },
                            parser.get_span(),
                        ));
                    }
                    types.push(parse_type(parser, BindingPower::Default)?);

                    if parser.current_token_kind() == TokenKind::Comma {
                        parser.advance();
                    } else {
                        break;
                    }
                }
                end = parser.expect(TokenKind::CloseParen)?.span.end;
                VariantKind::Tuple(types)
            }
        }
        _ => VariantKind::Unit,
    };

    Ok(EnumVariant {
        spec,
        name,
        kind,
        span: Span { start, end },
    })
}

pub fn parse_struct_defn(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let variant = parse_enum_variant(parser, None)?;

    // A struct definition always spells out its members; the unit shape
    // only exists for enum variants.
    if matches!(variant.kind, VariantKind::Unit) {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("struct definitions require a `{...}` or `(...)` member list"),
            },
            parser.get_span(),
        ));
    }

    let end = variant.span.end.clone();

    Ok(ItemWrapper::new(StructDefn {
        spec,
        variant,
        span: Span { start, end },
    }))
}

pub fn parse_enum_defn(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect_ident()?.value;
    parser.expect(TokenKind::OpenCurly)?;

    let mut variants = vec![];
    loop {
        let variant_spec = take_spec(parser);
        if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
            break;
        }

        variants.push(parse_enum_variant(parser, variant_spec)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }
    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(ItemWrapper::new(EnumDefn {
        spec,
        name,
        variants,
        span: Span { start, end },
    }))
}

pub fn parse_type_alias_defn(
    parser: &mut Parser,
    spec: Option<DocComment>,
) -> Result<ItemWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect(TokenKind::TypeName)?.value;
    parser.expect(TokenKind::Assignment)?;
    let ty = parse_type(parser, BindingPower::Default)?;
    let end = ty.get_span().end.clone();

    Ok(ItemWrapper::new(TypeAliasDefn {
        spec,
        name,
        ty,
        span: Span { start, end },
    }))
}

/// A `struct`/`enum`/`type` keyword in type position parses the
/// definition and wraps it as a type expression.
pub fn parse_inline_type_defn(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let defn = match parser.current_token_kind() {
        TokenKind::Struct => parse_struct_defn(parser, None)?,
        TokenKind::Enum => parse_enum_defn(parser, None)?,
        TokenKind::Type => parse_type_alias_defn(parser, None)?,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected an inline type definition"),
                },
                parser.get_span(),
            ))
        }
    };

    let span = defn.get_span().clone();

    Ok(TypeWrapper::new(InlineTypeDefn { defn, span }))
}
