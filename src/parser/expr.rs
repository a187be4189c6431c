use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            BinaryExpr, BoolExpr, CallArgs, CallExpr, DecimalExpr, GroupedExpr, IntegerExpr,
            MemberAccessExpr, NamedArg, NoneExpr, PrefixExpr, QueryExpr, StringExpr,
            StructValExpr, SymbolExpr, TableLookupExpr, TupleStructValExpr, UnitExpr, VecExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.enter()?;
    let result = parse_expr_inner(parser, bp);
    parser.exit();
    result
}

fn parse_expr_inner(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected an expression"),
            },
            parser.get_span(),
        ));
    }

    let nud = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud(parser)?;

    // While the next token is an infix operator binding tighter than the
    // current power, keep extending the left side. A token without a LED
    // simply ends the expression: there are no statement terminators, so
    // whatever follows may open the next statement.
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parser.current_token().value.clone();
            if value.contains('.') {
                match value.parse::<f64>() {
                    Ok(parsed) => Ok(ExprWrapper::new(DecimalExpr {
                        value: parsed,
                        span: parser.advance().span.clone(),
                    })),
                    Err(_) => Err(Error::new(
                        ErrorImpl::NumberParseError { token: value },
                        parser.get_span(),
                    )),
                }
            } else {
                match value.parse::<u128>() {
                    Ok(parsed) => Ok(ExprWrapper::new(IntegerExpr {
                        value: parsed,
                        span: parser.advance().span.clone(),
                    })),
                    Err(_) => Err(Error::new(
                        ErrorImpl::NumberParseError { token: value },
                        parser.get_span(),
                    )),
                }
            }
        }
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::String => Ok(ExprWrapper::new(StringExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::True | TokenKind::False => Ok(ExprWrapper::new(BoolExpr {
            value: parser.current_token_kind() == TokenKind::True,
            span: parser.advance().span.clone(),
        })),
        TokenKind::None => Ok(ExprWrapper::new(NoneExpr {
            span: parser.advance().span.clone(),
        })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_span(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    // Parsing the right side at the operator's own power makes every
    // binary operator left-associative.
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator: operator_token,
        right,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance().clone();

    // The operand binds at Unary power: `-x * y` groups as `(-x) * y`,
    // while `- -x` recurses through the NUD into a double negation.
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: rhs,
    }))
}

pub fn parse_query_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let arg = parse_expr(parser, BindingPower::Query)?;

    Ok(ExprWrapper::new(QueryExpr {
        span: Span {
            start,
            end: arg.get_span().end.clone(),
        },
        arg,
    }))
}

/// `(` in prefix position: the unit value `()` or a grouped expression.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    if parser.current_token_kind() == TokenKind::CloseParen {
        let end = parser.advance().span.end.clone();
        return Ok(ExprWrapper::new(UnitExpr {
            span: Span { start, end },
        }));
    }

    let inner = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(ExprWrapper::new(GroupedExpr {
        inner,
        span: Span { start, end },
    }))
}

pub fn parse_vec_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let mut vals = vec![];

    while parser.current_token_kind() != TokenKind::CloseBracket {
        vals.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let end = parser.expect(TokenKind::CloseBracket)?.span.end;

    Ok(ExprWrapper::new(VecExpr {
        vals,
        span: Span { start, end },
    }))
}

/// A type name in value position starts a composite literal: a type
/// expression followed by `{named members}` or `(positional members)`.
/// The mandatory type prefix is what keeps these unambiguous with
/// grouped expressions and calls.
pub fn parse_composite_val_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.get_position();
    let ty = parse_type(parser, BindingPower::Default)?;

    match parser.current_token_kind() {
        TokenKind::OpenCurly => {
            parser.advance();

            let mut members = vec![];
            while parser.current_token_kind() != TokenKind::CloseCurly {
                let name = parser.expect_ident()?.value;
                parser.expect(TokenKind::Colon)?;
                let value = parse_expr(parser, BindingPower::Default)?;
                members.push((name, value));

                if parser.current_token_kind() == TokenKind::Comma {
                    parser.advance();
                } else {
                    break;
                }
            }

            let end = parser.expect(TokenKind::CloseCurly)?.span.end;

            Ok(ExprWrapper::new(StructValExpr {
                ty,
                members,
                span: Span { start, end },
            }))
        }
        TokenKind::OpenParen => {
            parser.advance();

            let mut members = vec![];
            while parser.current_token_kind() != TokenKind::CloseParen {
                members.push(parse_expr(parser, BindingPower::Default)?);

                if parser.current_token_kind() == TokenKind::Comma {
                    parser.advance();
                } else {
                    break;
                }
            }

            let end = parser.expect(TokenKind::CloseParen)?.span.end;

            Ok(ExprWrapper::new(TupleStructValExpr {
                ty,
                members,
                span: Span { start, end },
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `{` or `(` to open a composite literal"),
            },
            parser.get_span(),
        )),
    }
}

/// Whether the parser sits on a `name:`-shaped argument.
fn at_named_arg(parser: &Parser) -> bool {
    parser.current_token_kind().is_ident() && parser.peek_kind(1) == TokenKind::Colon
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();

    // The first argument decides the style; every later argument must
    // follow it, positional and named forms never mix in one call.
    let named = at_named_arg(parser);

    let args = if named {
        let mut args: Vec<NamedArg> = vec![];
        while parser.current_token_kind() != TokenKind::CloseParen {
            if !at_named_arg(parser) {
                return Err(Error::new(ErrorImpl::MixedCallArguments, parser.get_span()));
            }
            let name = parser.expect_ident()?.value;
            parser.expect(TokenKind::Colon)?;
            let value = parse_expr(parser, BindingPower::Default)?;
            args.push(NamedArg { name, value });

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
        CallArgs::Named(args)
    } else {
        let mut args: Vec<ExprWrapper> = vec![];
        while parser.current_token_kind() != TokenKind::CloseParen {
            if at_named_arg(parser) {
                return Err(Error::new(ErrorImpl::MixedCallArguments, parser.get_span()));
            }
            args.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
        CallArgs::Positional(args)
    };

    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end,
        },
        callee: left,
        args,
    }))
}

pub fn parse_member_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();
    let member = parser.expect_ident()?;

    Ok(ExprWrapper::new(MemberAccessExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: member.span.end.clone(),
        },
        lhs: left,
        member: member.value,
    }))
}

pub fn parse_table_lookup_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    parser.advance();
    let index = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseBracket)?.span.end;

    Ok(ExprWrapper::new(TableLookupExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end,
        },
        lhs: left,
        index,
    }))
}
