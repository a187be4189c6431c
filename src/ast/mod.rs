/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits, wrappers and discriminants
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for type expressions in the AST
/// - items: Module, contract/interface and body item definitions
pub mod ast;
pub mod expressions;
pub mod items;
pub mod statements;
pub mod types;
