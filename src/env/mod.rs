//! Lexical environments consulted by name resolution.
//!
//! The parser never populates environments. A later declaration pass (or a
//! test) fills an [`env::EnvTable`], and the name nodes of the tree query it
//! through [`crate::ast::names::Resolvable`].

pub mod env;

#[cfg(test)]
mod tests;
