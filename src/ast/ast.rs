use std::{any::Any, fmt::Debug, ops::Deref};

use super::items::DocComment;

/// Pushes `indent` levels of four-space indentation, used by canonical
/// serialization of statements and items.
pub fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("    ");
    }
}

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    BlockStmt,
    LetStmt,
    AssignStmt,
    IfStmt,
    ForStmt,
    DirectiveStmt,
    ExpressionStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &crate::Span;
    /// Writes the statement as canonical source at the given indent level,
    /// including the trailing newline.
    fn canon(&self, out: &mut String, indent: usize);
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        self.0.canon(out, indent)
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Unit,
    Integer,
    Decimal,
    String,
    Bool,
    None,
    Symbol,
    Vec,
    StructVal,
    TupleStructVal,
    Grouped,
    Prefix,
    Binary,
    MemberAccess,
    TableLookup,
    Call,
    Query,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
    /// Writes the expression as canonical source.
    fn canon(&self, out: &mut String);
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
    fn canon(&self, out: &mut String) {
        self.0.canon(out)
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Type Types
///
/// Defines the various kinds of type expressions in the AST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeType {
    Path,
    Tuple,
    ShortOption,
    ShortVec,
    InlineDefn,
    Infer,
    Builtin,
}

/// Type Trait
///
/// Defines the behavior of all type-expression kinds in the AST.
pub trait Type: Debug {
    /// Clones the type into a TypeWrapper.
    fn clone_wrapper(&self) -> TypeWrapper;
    /// Returns the type type of the type.
    fn get_type_type(&self) -> TypeType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Returns the span of the type expression.
    fn get_span(&self) -> &crate::Span;
    /// Writes the type expression as canonical source.
    fn canon(&self, out: &mut String);
}

/// Type Wrapper
///
/// A wrapper that allows for any type kind to be stored with helper methods
#[derive(Debug)]
pub struct TypeWrapper(Box<dyn Type>);

impl TypeWrapper {
    pub fn new<T: Type + 'static>(type_: T) -> Self {
        TypeWrapper(Box::new(type_))
    }
}

impl Type for TypeWrapper {
    fn clone_wrapper(&self) -> TypeWrapper {
        self.0.clone_wrapper()
    }
    fn get_type_type(&self) -> TypeType {
        self.0.get_type_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
    fn canon(&self, out: &mut String) {
        self.0.canon(out)
    }
}

impl Clone for TypeWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Item Types
///
/// Defines the kinds of top-level and contract/interface body items.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ItemType {
    ContractDefn,
    InterfaceDefn,
    ImportAll,
    ImportItems,
    ErrorDefn,
    EventDefn,
    StateItem,
    StateMap,
    InstantiateDefn,
    InstantiateDecl,
    ExecDefn,
    ExecDecl,
    QueryDefn,
    QueryDecl,
    MigrateDefn,
    MigrateDecl,
    StructDefn,
    EnumDefn,
    TypeAliasDefn,
}

/// Item Trait
///
/// Defines the behavior of module-level and body-level declarations.
pub trait Item: Debug {
    /// Returns the type of the item.
    fn get_item_type(&self) -> ItemType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the item into an ItemWrapper.
    fn clone_wrapper(&self) -> ItemWrapper;
    /// Returns the span of the item.
    fn get_span(&self) -> &crate::Span;
    /// Returns the doc comment bound to this item, if any. Imports never
    /// carry one.
    fn get_spec(&self) -> Option<&DocComment>;
    /// Writes the item as canonical source at the given indent level,
    /// including the trailing newline.
    fn canon(&self, out: &mut String, indent: usize);
}

/// Item Wrapper
///
/// A wrapper that allows for any item kind to be stored with helper methods
#[derive(Debug)]
pub struct ItemWrapper(Box<dyn Item>);

impl ItemWrapper {
    pub fn new<T: Item + 'static>(item: T) -> Self {
        ItemWrapper(Box::new(item))
    }
}

impl Item for ItemWrapper {
    fn get_item_type(&self) -> ItemType {
        self.0.get_item_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ItemWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
    fn get_spec(&self) -> Option<&DocComment> {
        self.0.get_spec()
    }
    fn canon(&self, out: &mut String, indent: usize) {
        self.0.canon(out, indent)
    }
}

impl Clone for ItemWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
