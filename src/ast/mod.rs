/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root, the statement and expression sum types and the `Node` trait
/// - expressions: Definitions for the expression node shapes
/// - statements: Definitions for the statement node shapes
pub mod ast;
pub mod expressions;
pub mod statements;
