use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {}:{}", .position.1, .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Committed errors stop ordered choice: no sibling alternative is tried after one.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::ChainedRelation { .. } | ErrorImpl::MixedLogicalOperators { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NoViableAlternative { .. } => "NoViableAlternative",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
            ErrorImpl::ChainedRelation { .. } => "ChainedRelation",
            ErrorImpl::MixedLogicalOperators { .. } => "MixedLogicalOperators",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NoViableAlternative {
                rule,
                alternatives,
                token,
            } => ErrorTip::Suggestion(format!(
                "Expected {} ({}) but found `{}`",
                rule,
                alternatives.join(", "),
                token
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Expression ends before `{}`, is an operator or parenthesis missing?",
                token
            )),
            ErrorImpl::ChainedRelation { operator } => ErrorTip::Suggestion(format!(
                "Relation already compared, parenthesize before `{}`",
                operator
            )),
            ErrorImpl::MixedLogicalOperators { first, second } => ErrorTip::Suggestion(format!(
                "`{}` and `{}` cannot be mixed without parentheses",
                first, second
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("no alternative of {rule} matches {token:?} (tried {alternatives:?})")]
    NoViableAlternative {
        rule: &'static str,
        alternatives: Vec<&'static str>,
        token: String,
    },
    #[error("unexpected token after expression: {token:?}")]
    TrailingTokens { token: String },
    #[error("chained relational operator {operator:?}")]
    ChainedRelation { operator: String },
    #[error("logical operators {first:?} and {second:?} mixed without parentheses")]
    MixedLogicalOperators { first: String, second: String },
}
