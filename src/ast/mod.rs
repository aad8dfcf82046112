/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Root node, borrowed node views and display information
/// - display: Flat and indented text serialization of a tree
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
pub mod ast;
pub mod display;
pub mod expressions;
pub mod statements;
