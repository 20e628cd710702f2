/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root, statement list and program markers
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
