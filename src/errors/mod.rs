//! Error types and error handling for the parser.
//!
//! This module defines the errors raised while tokenizing and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, rule failure and operator legality
//! - Error names and tips used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
