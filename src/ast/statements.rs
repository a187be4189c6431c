use std::{
    any::Any,
    slice::{Iter, IterMut},
};

use crate::{lexer::tokens::Token, Span};

use super::ast::{push_indent, Expr, ExprWrapper, Stmt, StmtType, StmtWrapper, Type, TypeWrapper};

/// A brace-delimited function body.
///
/// Unlike the other statement nodes, `canon` here writes no trailing
/// newline: blocks only ever appear embedded in a definition or an
/// `if`/`for` statement, which own the line ending.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.body.iter_mut()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        out.push_str("{\n");
        for stmt in &self.body {
            stmt.canon(out, indent + 1);
        }
        push_indent(out, indent);
        out.push('}');
    }
}

/// The binding position of `let` and `for`: a single identifier with an
/// optional type annotation, or a struct-unpack list.
#[derive(Debug, Clone)]
pub enum Binding {
    Ident {
        name: String,
        ty: Option<TypeWrapper>,
    },
    StructUnpack {
        names: Vec<String>,
    },
}

impl Binding {
    pub fn canon(&self, out: &mut String) {
        match self {
            Binding::Ident { name, ty } => {
                out.push_str(name);
                if let Some(ty) = ty {
                    out.push_str(": ");
                    ty.canon(out);
                }
            }
            Binding::StructUnpack { names } => {
                out.push('{');
                for (idx, name) in names.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(name);
                }
                out.push('}');
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub binding: Binding,
    pub rhs: ExprWrapper,
    pub span: Span,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str("let ");
        self.binding.canon(out);
        out.push_str(" = ");
        self.rhs.canon(out);
        out.push('\n');
    }
}

/// Assignment statement: target expression, one of `= += -= *= /= %=`,
/// value. Assignment is a statement in this grammar, not an expression.
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub lhs: ExprWrapper,
    pub operator: Token,
    pub rhs: ExprWrapper,
    pub span: Span,
}

impl Stmt for AssignStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::AssignStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        self.lhs.canon(out);
        out.push(' ');
        out.push_str(&self.operator.value);
        out.push(' ');
        self.rhs.canon(out);
        out.push('\n');
    }
}

/// One `if`/`else if` clause: a predicate and its body.
#[derive(Debug, Clone)]
pub struct IfClause {
    pub predicate: ExprWrapper,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub if_clause: IfClause,
    pub else_if_clauses: Vec<IfClause>,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str("if ");
        self.if_clause.predicate.canon(out);
        out.push(' ');
        self.if_clause.body.canon(out, indent);
        for clause in &self.else_if_clauses {
            out.push_str(" else if ");
            clause.predicate.canon(out);
            out.push(' ');
            clause.body.canon(out, indent);
        }
        if let Some(else_body) = &self.else_body {
            out.push_str(" else ");
            else_body.canon(out, indent);
        }
        out.push('\n');
    }
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub binding: Binding,
    pub iterable: ExprWrapper,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for ForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str("for ");
        self.binding.canon(out);
        out.push_str(" in ");
        self.iterable.canon(out);
        out.push(' ');
        self.body.canon(out, indent);
        out.push('\n');
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Exec,
    Emit,
    Return,
    Fail,
}

impl DirectiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::Exec => "exec",
            DirectiveKind::Emit => "emit",
            DirectiveKind::Return => "return",
            DirectiveKind::Fail => "fail",
        }
    }
}

/// Directive statement: one of `exec`, `emit`, `return`, `fail` applied
/// to exactly one expression operand.
#[derive(Debug, Clone)]
pub struct DirectiveStmt {
    pub directive: DirectiveKind,
    pub arg: ExprWrapper,
    pub span: Span,
}

impl Stmt for DirectiveStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::DirectiveStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str(self.directive.as_str());
        out.push(' ');
        self.arg.canon(out);
        out.push('\n');
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        self.expression.canon(out);
        out.push('\n');
    }
}
