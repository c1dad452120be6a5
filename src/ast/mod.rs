/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` enum and its kind tags
/// - expressions: Node structs for operators, calls, aggregates and conditionals
/// - names: Name nodes and the name-resolution capability
/// - ops: Operator, quantifier and iteration tags
/// - dump: Structural tree dump
/// - unparse: Source text re-serialization
pub mod ast;
pub mod dump;
pub mod expressions;
pub mod names;
pub mod ops;
pub mod unparse;
