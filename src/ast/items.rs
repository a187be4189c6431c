//! Module-level and contract/interface body items.
//!
//! A parsed source unit is a `Module` of contract definitions, interface
//! definitions and import statements. Contract and interface bodies hold
//! error/event/state declarations, entry points (instantiate, exec,
//! query, migrate) and nested type definitions. Interfaces carry
//! signature-only declarations; contracts carry full definitions.
//!
//! Block spellings (`error { ... }`, `exec { ... }` and friends) do not
//! appear in the tree: the parser desugars them to the same items as the
//! singular spellings, so consumers see one representation.

use std::any::Any;

use crate::{ast::expressions::escape_string, Span};

use super::{
    ast::{push_indent, Item, ItemType, ItemWrapper, Stmt, Type, TypeWrapper},
    statements::BlockStmt,
};

/// A documentation comment bound to the declaration that follows it:
/// either a run of `///` lines or a single `/** ... */` block. Text is
/// preserved verbatim, never interpreted.
#[derive(Debug, Clone)]
pub enum DocComment {
    Lines { lines: Vec<String>, span: Span },
    Block { text: String, span: Span },
}

impl DocComment {
    pub fn get_span(&self) -> &Span {
        match self {
            DocComment::Lines { span, .. } => span,
            DocComment::Block { span, .. } => span,
        }
    }

    pub fn canon(&self, out: &mut String, indent: usize) {
        match self {
            DocComment::Lines { lines, .. } => {
                for line in lines {
                    push_indent(out, indent);
                    out.push_str("///");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            DocComment::Block { text, .. } => {
                push_indent(out, indent);
                out.push_str("/**");
                out.push_str(text);
                out.push_str("*/\n");
            }
        }
    }
}

fn canon_spec(spec: &Option<DocComment>, out: &mut String, indent: usize) {
    if let Some(spec) = spec {
        spec.canon(out, indent);
    }
}

/// An ordered list of top-level items, one per parsed source unit.
/// Immutable after parse.
#[derive(Debug, Clone)]
pub struct Module {
    pub items: Vec<ItemWrapper>,
    pub span: Span,
}

impl Module {
    /// Canonical source text for the whole unit. Re-parsing the result
    /// yields a structurally identical module.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            item.canon(&mut out, 0);
        }
        out
    }
}

/// One symbol in an `import (...) from` list, with its optional alias.
#[derive(Debug, Clone)]
pub struct ImportSymbol {
    pub symbol: String,
    pub alias: Option<String>,
}

/// `import * from "path"`. The path is recorded as data; resolving it is
/// the module loader's job, never the parser's.
#[derive(Debug, Clone)]
pub struct ImportAll {
    pub path: String,
    pub span: Span,
}

impl Item for ImportAll {
    fn get_item_type(&self) -> ItemType {
        ItemType::ImportAll
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        None
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str("import * from ");
        escape_string(&self.path, out);
        out.push('\n');
    }
}

/// `import (a, b as c) from "path"`.
#[derive(Debug, Clone)]
pub struct ImportItems {
    pub symbols: Vec<ImportSymbol>,
    pub path: String,
    pub span: Span,
}

impl Item for ImportItems {
    fn get_item_type(&self) -> ItemType {
        ItemType::ImportItems
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        None
    }
    fn canon(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str("import (");
        for (idx, symbol) in self.symbols.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(&symbol.symbol);
            if let Some(alias) = &symbol.alias {
                out.push_str(" as ");
                out.push_str(alias);
            }
        }
        out.push_str(") from ");
        escape_string(&self.path, out);
        out.push('\n');
    }
}

/// Contract definition: name, optional `extends` bases, optional
/// `implements` interfaces, body items. Base and interface lists are
/// order-significant and not deduplicated here.
#[derive(Debug, Clone)]
pub struct ContractDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub bases: Vec<String>,
    pub interfaces: Vec<String>,
    pub body: Vec<ItemWrapper>,
    pub span: Span,
}

impl Item for ContractDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::ContractDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("contract ");
        out.push_str(&self.name);
        canon_ident_list(" extends ", &self.bases, out);
        canon_ident_list(" implements ", &self.interfaces, out);
        out.push_str(" {\n");
        for item in &self.body {
            item.canon(out, indent + 1);
        }
        push_indent(out, indent);
        out.push_str("}\n");
    }
}

/// Interface definition: like a contract, but signature-only and with no
/// `implements` clause.
#[derive(Debug, Clone)]
pub struct InterfaceDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub bases: Vec<String>,
    pub body: Vec<ItemWrapper>,
    pub span: Span,
}

impl Item for InterfaceDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::InterfaceDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("interface ");
        out.push_str(&self.name);
        canon_ident_list(" extends ", &self.bases, out);
        out.push_str(" {\n");
        for item in &self.body {
            item.canon(out, indent + 1);
        }
        push_indent(out, indent);
        out.push_str("}\n");
    }
}

fn canon_ident_list(prefix: &str, names: &[String], out: &mut String) {
    if names.is_empty() {
        return;
    }
    out.push_str(prefix);
    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
    }
}

/// A named, optionally-optional, typed member of a struct-shaped variant.
#[derive(Debug, Clone)]
pub struct StructMember {
    pub name: String,
    pub is_option: bool,
    pub ty: TypeWrapper,
}

impl StructMember {
    pub fn canon(&self, out: &mut String) {
        out.push_str(&self.name);
        if self.is_option {
            out.push('?');
        }
        out.push_str(": ");
        self.ty.canon(out);
    }
}

/// The three variant shapes: unit (bare name), tuple (ordered types) and
/// struct (named members). Shape is decided syntactically; parenthesized
/// `name: Type` members also produce the struct shape.
#[derive(Debug, Clone)]
pub enum VariantKind {
    Unit,
    Tuple(Vec<TypeWrapper>),
    Struct(Vec<StructMember>),
}

/// One enum variant, used identically by `error`, `event` and `enum`
/// bodies. `spec` is set only for variants inside an `enum` body; for
/// `error`/`event` items the doc comment lives on the item.
#[derive(Debug, Clone)]
pub struct EnumVariant {
    pub spec: Option<DocComment>,
    pub name: String,
    pub kind: VariantKind,
    pub span: Span,
}

impl EnumVariant {
    /// Name and shape, without doc comment or indentation. Struct-shaped
    /// variants canonicalize to the brace form.
    pub fn canon_inline(&self, out: &mut String) {
        out.push_str(&self.name);
        match &self.kind {
            VariantKind::Unit => {}
            VariantKind::Tuple(types) => {
                out.push('(');
                for (idx, ty) in types.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    ty.canon(out);
                }
                out.push(')');
            }
            VariantKind::Struct(members) => {
                out.push('{');
                for (idx, member) in members.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    member.canon(out);
                }
                out.push('}');
            }
        }
    }
}

/// A single error declaration. `error { A, B }` desugars to one of these
/// per variant.
#[derive(Debug, Clone)]
pub struct ErrorDefn {
    pub spec: Option<DocComment>,
    pub variant: EnumVariant,
    pub span: Span,
}

impl Item for ErrorDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::ErrorDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("error ");
        self.variant.canon_inline(out);
        out.push('\n');
    }
}

/// A single event declaration, same shape rules as `ErrorDefn`.
#[derive(Debug, Clone)]
pub struct EventDefn {
    pub spec: Option<DocComment>,
    pub variant: EnumVariant,
    pub span: Span,
}

impl Item for EventDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::EventDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("event ");
        self.variant.canon_inline(out);
        out.push('\n');
    }
}

/// Scalar persistent state: `state key: Type`.
#[derive(Debug, Clone)]
pub struct StateItem {
    pub spec: Option<DocComment>,
    pub key: String,
    pub ty: TypeWrapper,
    pub span: Span,
}

impl Item for StateItem {
    fn get_item_type(&self) -> ItemType {
        ItemType::StateItem
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("state ");
        out.push_str(&self.key);
        out.push_str(": ");
        self.ty.canon(out);
        out.push('\n');
    }
}

/// One component of a state map's composite key. The name is optional:
/// `[Addr]` and `[owner: Addr]` are both valid.
#[derive(Debug, Clone)]
pub struct MapKey {
    pub name: Option<String>,
    pub ty: TypeWrapper,
}

impl MapKey {
    pub fn canon(&self, out: &mut String) {
        out.push('[');
        if let Some(name) = &self.name {
            out.push_str(name);
            out.push_str(": ");
        }
        self.ty.canon(out);
        out.push(']');
    }
}

/// Keyed persistent state: `state key[k1: T1][k2: T2]: ValueType`, with
/// at least one key component.
#[derive(Debug, Clone)]
pub struct StateMap {
    pub spec: Option<DocComment>,
    pub key: String,
    pub keys: Vec<MapKey>,
    pub value_ty: TypeWrapper,
    pub span: Span,
}

impl Item for StateMap {
    fn get_item_type(&self) -> ItemType {
        ItemType::StateMap
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("state ");
        out.push_str(&self.key);
        for key in &self.keys {
            key.canon(out);
        }
        out.push_str(": ");
        self.value_ty.canon(out);
        out.push('\n');
    }
}

/// One typed argument of an entry-point signature, optionally marked `?`.
#[derive(Debug, Clone)]
pub struct FnArg {
    pub name: String,
    pub is_option: bool,
    pub ty: TypeWrapper,
}

impl FnArg {
    pub fn canon(&self, out: &mut String) {
        out.push_str(&self.name);
        if self.is_option {
            out.push('?');
        }
        out.push_str(": ");
        self.ty.canon(out);
    }
}

fn canon_signature(args: &[FnArg], return_type: &Option<TypeWrapper>, out: &mut String) {
    out.push('(');
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        arg.canon(out);
    }
    out.push(')');
    if let Some(return_type) = return_type {
        out.push_str(" -> ");
        return_type.canon(out);
    }
}

/// The unnamed constructor entry point. The grammar does not enforce
/// at-most-one per contract; that is a semantic-analysis concern.
#[derive(Debug, Clone)]
pub struct InstantiateDefn {
    pub spec: Option<DocComment>,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Item for InstantiateDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::InstantiateDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("instantiate");
        canon_signature(&self.args, &self.return_type, out);
        out.push(' ');
        self.body.canon(out, indent);
        out.push('\n');
    }
}

/// Signature-only `instantiate`, as written in interfaces.
#[derive(Debug, Clone)]
pub struct InstantiateDecl {
    pub spec: Option<DocComment>,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub span: Span,
}

impl Item for InstantiateDecl {
    fn get_item_type(&self) -> ItemType {
        ItemType::InstantiateDecl
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("instantiate");
        canon_signature(&self.args, &self.return_type, out);
        out.push('\n');
    }
}

/// A named, state-mutating entry point.
#[derive(Debug, Clone)]
pub struct ExecDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Item for ExecDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::ExecDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("exec ");
        out.push_str(&self.name);
        canon_signature(&self.args, &self.return_type, out);
        out.push(' ');
        self.body.canon(out, indent);
        out.push('\n');
    }
}

#[derive(Debug, Clone)]
pub struct ExecDecl {
    pub spec: Option<DocComment>,
    pub name: String,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub span: Span,
}

impl Item for ExecDecl {
    fn get_item_type(&self) -> ItemType {
        ItemType::ExecDecl
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("exec ");
        out.push_str(&self.name);
        canon_signature(&self.args, &self.return_type, out);
        out.push('\n');
    }
}

/// A named, read-only entry point.
#[derive(Debug, Clone)]
pub struct QueryDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Item for QueryDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::QueryDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("query ");
        out.push_str(&self.name);
        canon_signature(&self.args, &self.return_type, out);
        out.push(' ');
        self.body.canon(out, indent);
        out.push('\n');
    }
}

#[derive(Debug, Clone)]
pub struct QueryDecl {
    pub spec: Option<DocComment>,
    pub name: String,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub span: Span,
}

impl Item for QueryDecl {
    fn get_item_type(&self) -> ItemType {
        ItemType::QueryDecl
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("query ");
        out.push_str(&self.name);
        canon_signature(&self.args, &self.return_type, out);
        out.push('\n');
    }
}

/// The unnamed schema/logic upgrade entry point.
#[derive(Debug, Clone)]
pub struct MigrateDefn {
    pub spec: Option<DocComment>,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Item for MigrateDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::MigrateDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("migrate");
        canon_signature(&self.args, &self.return_type, out);
        out.push(' ');
        self.body.canon(out, indent);
        out.push('\n');
    }
}

#[derive(Debug, Clone)]
pub struct MigrateDecl {
    pub spec: Option<DocComment>,
    pub args: Vec<FnArg>,
    pub return_type: Option<TypeWrapper>,
    pub span: Span,
}

impl Item for MigrateDecl {
    fn get_item_type(&self) -> ItemType {
        ItemType::MigrateDecl
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("migrate");
        canon_signature(&self.args, &self.return_type, out);
        out.push('\n');
    }
}

/// Struct definition. The body reuses the variant shapes: `struct P{x:
/// u64}` is struct-shaped, `struct Wrapped(u64)` tuple-shaped.
#[derive(Debug, Clone)]
pub struct StructDefn {
    pub spec: Option<DocComment>,
    pub variant: EnumVariant,
    pub span: Span,
}

impl Item for StructDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::StructDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("struct ");
        self.variant.canon_inline(out);
        out.push('\n');
    }
}

/// Enum definition: a name and its variants, each optionally documented.
#[derive(Debug, Clone)]
pub struct EnumDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub variants: Vec<EnumVariant>,
    pub span: Span,
}

impl Item for EnumDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::EnumDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("enum ");
        out.push_str(&self.name);
        out.push_str(" {\n");
        for (idx, variant) in self.variants.iter().enumerate() {
            canon_spec(&variant.spec, out, indent + 1);
            push_indent(out, indent + 1);
            variant.canon_inline(out);
            if idx + 1 < self.variants.len() {
                out.push(',');
            }
            out.push('\n');
        }
        push_indent(out, indent);
        out.push_str("}\n");
    }
}

/// `type Name = Type`.
#[derive(Debug, Clone)]
pub struct TypeAliasDefn {
    pub spec: Option<DocComment>,
    pub name: String,
    pub ty: TypeWrapper,
    pub span: Span,
}

impl Item for TypeAliasDefn {
    fn get_item_type(&self) -> ItemType {
        ItemType::TypeAliasDefn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        ItemWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.spec.as_ref()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        canon_spec(&self.spec, out, indent);
        push_indent(out, indent);
        out.push_str("type ");
        out.push_str(&self.name);
        out.push_str(" = ");
        self.ty.canon(out);
        out.push('\n');
    }
}
