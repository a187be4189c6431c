use crate::{
    ast::{
        ast::{Expr, StmtWrapper},
        statements::{
            AssignStmt, Binding, BlockStmt, DirectiveKind, DirectiveStmt, ExpressionStmt,
            ForStmt, IfClause, IfStmt, LetStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    parser.enter()?;
    let result = parse_stmt_inner(parser);
    parser.exit();
    result
}

fn parse_stmt_inner(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    // No leading keyword: an expression, promoted to an assignment when
    // an assignment operator follows it.
    let expr = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind().is_assign_op() {
        let operator = parser.advance().clone();
        let rhs = parse_expr(parser, BindingPower::Default)?;

        return Ok(StmtWrapper::new(AssignStmt {
            span: Span {
                start: expr.get_span().start.clone(),
                end: rhs.get_span().end.clone(),
            },
            lhs: expr,
            operator,
            rhs,
        }));
    }

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expr.get_span().clone(),
        expression: expr,
    }))
}

/// The binding position of `let` and `for`: `{a, b}` unpacks a struct,
/// anything else is a single identifier with an optional type annotation.
pub fn parse_binding(parser: &mut Parser) -> Result<Binding, Error> {
    if parser.current_token_kind() == TokenKind::OpenCurly {
        parser.advance();

        let mut names = vec![parser.expect_ident()?.value];
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            names.push(parser.expect_ident()?.value);
        }
        parser.expect(TokenKind::CloseCurly)?;

        return Ok(Binding::StructUnpack { names });
    }

    let name = parser.expect_ident()?.value;

    let ty = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Binding::Ident { name, ty })
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let binding = parse_binding(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtWrapper::new(LetStmt {
        span: Span {
            start,
            end: rhs.get_span().end.clone(),
        },
        binding,
        rhs,
    }))
}

/// A brace-delimited statement list. Doc-comment tokens between
/// statements bind to nothing and are dropped.
pub fn parse_fn_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = vec![];
    loop {
        while parser.current_token_kind().is_doc() {
            parser.advance();
        }
        if parser.current_token_kind() == TokenKind::CloseCurly || !parser.has_tokens() {
            break;
        }
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        body,
        span: Span { start, end },
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.get_position();
    let if_clause = parse_if_clause(parser)?;

    let mut else_if_clauses = vec![];
    let mut else_body = None;

    while parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            else_if_clauses.push(parse_if_clause(parser)?);
        } else {
            // A terminal `else` closes the chain.
            else_body = Some(parse_fn_body(parser)?);
            break;
        }
    }

    let end = parser.get_position();

    Ok(StmtWrapper::new(IfStmt {
        if_clause,
        else_if_clauses,
        else_body,
        span: Span { start, end },
    }))
}

fn parse_if_clause(parser: &mut Parser) -> Result<IfClause, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    let predicate = parse_expr(parser, BindingPower::Default)?;
    let body = parse_fn_body(parser)?;
    let end = body.span.end.clone();

    Ok(IfClause {
        predicate,
        body,
        span: Span { start, end },
    })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let binding = parse_binding(parser)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected `in` after the loop binding"),
        },
        parser.get_span(),
    );
    parser.expect_error(TokenKind::In, Some(error))?;

    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_fn_body(parser)?;
    let end = body.span.end.clone();

    Ok(StmtWrapper::new(ForStmt {
        binding,
        iterable,
        body,
        span: Span { start, end },
    }))
}

/// `exec`, `emit`, `return` and `fail` take exactly one expression
/// operand.
pub fn parse_directive_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.advance().clone();

    let directive = match token.kind {
        TokenKind::Exec => DirectiveKind::Exec,
        TokenKind::Emit => DirectiveKind::Emit,
        TokenKind::Return => DirectiveKind::Return,
        TokenKind::Fail => DirectiveKind::Fail,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from("expected a directive keyword"),
                },
                token.span,
            ))
        }
    };

    let arg = parse_expr(parser, BindingPower::Default)?;

    Ok(StmtWrapper::new(DirectiveStmt {
        directive,
        span: Span {
            start: token.span.start,
            end: arg.get_span().end.clone(),
        },
        arg,
    }))
}
