//! Lexical analysis for Ada source text.
//!
//! Converts source text into the token stream consumed by the parser:
//!
//! - Case-insensitive reserved words and identifiers
//! - Numeric literals, including based (`16#FF#`) and exponent forms
//! - String literals (`""` doubling) and character literals, kept verbatim
//! - Ticks, disambiguated from character literals by the preceding token
//! - `--` comments and whitespace are skipped

pub mod lexer;
pub mod tokens;
