//! Type-expression nodes of the AST.
//!
//! Type syntax in cwscript covers:
//!
//! - Type paths (`Addr`, `Msg::Transfer`)
//! - Tuple types (`(A, B)`; `()` is the unit type)
//! - Postfix shorthands `T?` (option) and `T[]` (vec), which stack
//! - Inline struct/enum/alias definitions in type position
//! - The inferred type `_` and the builtin scalar types
//!
//! The parser produces these wherever a type annotation appears; no
//! resolution or well-formedness checking happens here.

use std::any::Any;

use crate::Span;

use super::{
    ast::{Item, ItemWrapper, Type, TypeType, TypeWrapper},
};

/// The fixed set of builtin scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    Byte,
}

impl BuiltinKind {
    pub fn from_str(value: &str) -> Option<BuiltinKind> {
        match value {
            "bool" => Some(BuiltinKind::Bool),
            "i8" => Some(BuiltinKind::I8),
            "i16" => Some(BuiltinKind::I16),
            "i32" => Some(BuiltinKind::I32),
            "i64" => Some(BuiltinKind::I64),
            "i128" => Some(BuiltinKind::I128),
            "u8" => Some(BuiltinKind::U8),
            "u16" => Some(BuiltinKind::U16),
            "u32" => Some(BuiltinKind::U32),
            "u64" => Some(BuiltinKind::U64),
            "u128" => Some(BuiltinKind::U128),
            "byte" => Some(BuiltinKind::Byte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinKind::Bool => "bool",
            BuiltinKind::I8 => "i8",
            BuiltinKind::I16 => "i16",
            BuiltinKind::I32 => "i32",
            BuiltinKind::I64 => "i64",
            BuiltinKind::I128 => "i128",
            BuiltinKind::U8 => "u8",
            BuiltinKind::U16 => "u16",
            BuiltinKind::U32 => "u32",
            BuiltinKind::U64 => "u64",
            BuiltinKind::U128 => "u128",
            BuiltinKind::Byte => "byte",
        }
    }
}

/// A named type reference: a type name followed by zero or more
/// `::member` segments. Namespacing only; the grammar has no generics.
#[derive(Debug, Clone)]
pub struct TypePath {
    pub name: String,
    pub segments: Vec<String>,
    pub span: Span,
}

impl Type for TypePath {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Path
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(&self.name);
        for segment in &self.segments {
            out.push_str("::");
            out.push_str(segment);
        }
    }
}

/// A tuple of types. Empty means the unit type.
#[derive(Debug, Clone)]
pub struct TupleType {
    pub elems: Vec<TypeWrapper>,
    pub span: Span,
}

impl Type for TupleType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Tuple
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push('(');
        for (idx, elem) in self.elems.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            elem.canon(out);
        }
        out.push(')');
    }
}

/// Postfix `T?`.
#[derive(Debug, Clone)]
pub struct ShortOptionType {
    pub inner: TypeWrapper,
    pub span: Span,
}

impl Type for ShortOptionType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::ShortOption
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.inner.canon(out);
        out.push('?');
    }
}

/// Postfix `T[]`.
#[derive(Debug, Clone)]
pub struct ShortVecType {
    pub inner: TypeWrapper,
    pub span: Span,
}

impl Type for ShortVecType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::ShortVec
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        self.inner.canon(out);
        out.push_str("[]");
    }
}

/// A struct/enum/alias definition appearing in type position.
#[derive(Debug, Clone)]
pub struct InlineTypeDefn {
    pub defn: ItemWrapper,
    pub span: Span,
}

impl Type for InlineTypeDefn {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::InlineDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        let mut inline = String::new();
        self.defn.canon(&mut inline, 0);
        out.push_str(inline.trim_end_matches('\n'));
    }
}

/// The inferred type `_`.
#[derive(Debug, Clone)]
pub struct InferType {
    pub span: Span,
}

impl Type for InferType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Infer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push('_');
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinType {
    pub kind: BuiltinKind,
    pub span: Span,
}

impl Type for BuiltinType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Builtin
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn canon(&self, out: &mut String) {
        out.push_str(self.kind.as_str());
    }
}
