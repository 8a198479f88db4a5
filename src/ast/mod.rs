/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Every node owns its children and carries the location of its own text.
///
/// Submodules:
/// - ast: Node kinds, identifiers and the location trait
/// - declarations: Top-level declarations and the source file root
/// - expressions: Definitions for the expression variants
/// - statements: Blocks and the statement variants
/// - types: Definitions for type annotations in the AST
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;
