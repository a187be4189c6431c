use std::any::Any;

use crate::{
    ast::ast::{Expr, ExprType, ExprWrapper, Type, TypeWrapper},
    lexer::tokens::Token,
    Span,
};

/// Escapes a decoded string literal back into source form.
pub fn escape_string(value: &str, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

// LITERALS

/// The unit value `()`.
#[derive(Debug, Clone)]
pub struct UnitExpr {
    pub span: Span,
}

impl Expr for UnitExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Unit
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str("()");
    }
}

/// Integer literal. Negative values come from a prefix `-`.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: u128,
    pub span: Span,
}

impl Expr for IntegerExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(&self.value.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct DecimalExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for DecimalExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Decimal
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        let rendered = self.value.to_string();
        out.push_str(&rendered);
        // Decimal literals always carry a fractional part.
        if !rendered.contains('.') {
            out.push_str(".0");
        }
    }
}

/// String literal with escapes already decoded.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        escape_string(&self.value, out);
    }
}

#[derive(Debug, Clone)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BoolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Bool
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(if self.value { "true" } else { "false" });
    }
}

/// The `none` literal.
#[derive(Debug, Clone)]
pub struct NoneExpr {
    pub span: Span,
}

impl Expr for NoneExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::None
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str("none");
    }
}

/// Symbol Expression
/// Represents an identifier reference in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(&self.value);
    }
}

// COMPOSITES

/// Vector literal `[a, b, c]`.
#[derive(Debug, Clone)]
pub struct VecExpr {
    pub vals: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for VecExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Vec
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push('[');
        for (idx, val) in self.vals.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            val.canon(out);
        }
        out.push(']');
    }
}

/// Struct Value Expression
/// Represents a struct literal `Type{member: value, ...}` in the AST. The
/// type prefix is what keeps struct literals unambiguous with blocks and
/// grouped expressions.
#[derive(Debug, Clone)]
pub struct StructValExpr {
    pub ty: TypeWrapper,
    pub members: Vec<(String, ExprWrapper)>,
    pub span: Span,
}

impl Expr for StructValExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::StructVal
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.ty.canon(out);
        out.push('{');
        for (idx, (name, value)) in self.members.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push_str(": ");
            value.canon(out);
        }
        out.push('}');
    }
}

/// Tuple-struct literal `Type(a, b)`.
#[derive(Debug, Clone)]
pub struct TupleStructValExpr {
    pub ty: TypeWrapper,
    pub members: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for TupleStructValExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::TupleStructVal
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.ty.canon(out);
        out.push('(');
        for (idx, member) in self.members.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            member.canon(out);
        }
        out.push(')');
    }
}

/// A parenthesized expression, kept as its own node so canonical output
/// preserves the written grouping.
#[derive(Debug, Clone)]
pub struct GroupedExpr {
    pub inner: ExprWrapper,
    pub span: Span,
}

impl Expr for GroupedExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Grouped
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push('(');
        self.inner.canon(out);
        out.push(')');
    }
}

// OPERATORS

/// Prefix Expression
/// Represents a prefix operation (`-`, `!`) on an expression in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(&self.operator.value);
        self.right_expr.canon(out);
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST,
/// covering arithmetic, comparison, equality and `and`/`or`.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.left.canon(out);
        out.push(' ');
        out.push_str(&self.operator.value);
        out.push(' ');
        self.right.canon(out);
    }
}

/// Member access `lhs.member`.
#[derive(Debug, Clone)]
pub struct MemberAccessExpr {
    pub lhs: ExprWrapper,
    pub member: String,
    pub span: Span,
}

impl Expr for MemberAccessExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::MemberAccess
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.lhs.canon(out);
        out.push('.');
        out.push_str(&self.member);
    }
}

/// Table lookup `lhs[index]`, used for map and vector indexing.
#[derive(Debug, Clone)]
pub struct TableLookupExpr {
    pub lhs: ExprWrapper,
    pub index: ExprWrapper,
    pub span: Span,
}

impl Expr for TableLookupExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::TableLookup
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.lhs.canon(out);
        out.push('[');
        self.index.canon(out);
        out.push(']');
    }
}

/// Call arguments: a call site is consistently positional or named,
/// never mixed.
#[derive(Debug, Clone)]
pub enum CallArgs {
    Positional(Vec<ExprWrapper>),
    Named(Vec<NamedArg>),
}

#[derive(Debug, Clone)]
pub struct NamedArg {
    pub name: String,
    pub value: ExprWrapper,
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub args: CallArgs,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.callee.canon(out);
        out.push('(');
        match &self.args {
            CallArgs::Positional(args) => {
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    arg.canon(out);
                }
            }
            CallArgs::Named(args) => {
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&arg.name);
                    out.push_str(": ");
                    arg.value.canon(out);
                }
            }
        }
        out.push(')');
    }
}

/// Query Expression
/// Wraps an expression evaluated against read-only contract state.
#[derive(Debug, Clone)]
pub struct QueryExpr {
    pub arg: ExprWrapper,
    pub span: Span,
}

impl Expr for QueryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Query
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str("query ");
        self.arg.canon(out);
    }
}
