use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, keyed by their lower-case spelling (Ada is case-insensitive).
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("abs", TokenKind::Abs);
        map.insert("access", TokenKind::Access);
        map.insert("all", TokenKind::All);
        map.insert("and", TokenKind::And);
        map.insert("case", TokenKind::Case);
        map.insert("delta", TokenKind::Delta);
        map.insert("digits", TokenKind::Digits);
        map.insert("else", TokenKind::Else);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("is", TokenKind::Is);
        map.insert("mod", TokenKind::Mod);
        map.insert("new", TokenKind::New);
        map.insert("not", TokenKind::Not);
        map.insert("null", TokenKind::Null);
        map.insert("of", TokenKind::Of);
        map.insert("or", TokenKind::Or);
        map.insert("others", TokenKind::Others);
        map.insert("raise", TokenKind::Raise);
        map.insert("range", TokenKind::Range);
        map.insert("record", TokenKind::Record);
        map.insert("rem", TokenKind::Rem);
        map.insert("reverse", TokenKind::Reverse);
        map.insert("some", TokenKind::Some);
        map.insert("then", TokenKind::Then);
        map.insert("when", TokenKind::When);
        map.insert("with", TokenKind::With);
        map.insert("xor", TokenKind::Xor);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Char,
    Identifier,

    OpenParen,
    CloseParen,

    Tick,       // '
    Dot,        // .
    DotDot,     // ..
    Comma,
    Semicolon,
    Colon,
    Pipe,       // |
    Arrow,      // =>
    Assignment, // :=
    Diamond,    // <>

    Equals,    // =
    NotEquals, // /=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Pow,       // **
    Ampersand, // &

    // Reserved
    Abs,
    Access,
    All,
    And,
    Case,
    Delta,
    Digits,
    Else,
    Elsif,
    For,
    If,
    In,
    Is,
    Mod,
    New,
    Not,
    Null,
    Of,
    Or,
    Others,
    Raise,
    Range,
    Record,
    Rem,
    Reverse,
    Some,
    Then,
    When,
    With,
    Xor,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    /// Whether a `'` following a token of this kind starts an attribute or qualification
    /// rather than a character literal. Reserved attribute designators are excluded,
    /// so `range 'a' .. 'z'` keeps its character bounds.
    pub fn precedes_tick(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::CloseParen | TokenKind::All
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source spelling of the token; string and character literals keep their quotes.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    /// Lookup key for environments: identifiers fold case, operator symbols keep their spelling.
    pub fn symbol(&self) -> String {
        match self.kind {
            TokenKind::Identifier => self.value.to_lowercase(),
            _ => self.value.clone(),
        }
    }
}
