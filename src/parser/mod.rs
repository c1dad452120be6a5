//! Parser module for building expression trees.
//!
//! This module turns a token stream into an `Expr` tree. It is a
//! recursive-descent parser over ordered choices:
//!
//! - Precedence ladder (`expression` down to `primary`)
//! - Names and their postfix forms (calls, selections, attributes, qualifications)
//! - Aggregates, choices and discrete ranges
//! - Conditional, quantified and raise expressions, and allocators
//!
//! Every rule is a public `parse_*` function and can be used as an entry point.

pub mod aggregates;
pub mod conditionals;
pub mod expr;
pub mod lookups;
pub mod names;
pub mod parser;

#[cfg(test)]
mod tests;
