use std::fmt::Display;

/// Operator tags, decoupled from their surface spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    And,
    Or,
    OrElse,
    AndThen,
    Xor,
    In,
    NotIn,
    Abs,
    Not,
    Pow,
    Mult,
    Div,
    Mod,
    Rem,
    Plus,
    Minus,
    BinAnd,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Ellipsis,
}

impl Op {
    /// Tag name used in tree dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Op::And => "and",
            Op::Or => "or",
            Op::OrElse => "or_else",
            Op::AndThen => "and_then",
            Op::Xor => "xor",
            Op::In => "in",
            Op::NotIn => "not_in",
            Op::Abs => "abs",
            Op::Not => "not",
            Op::Pow => "pow",
            Op::Mult => "mult",
            Op::Div => "div",
            Op::Mod => "mod",
            Op::Rem => "rem",
            Op::Plus => "plus",
            Op::Minus => "minus",
            Op::BinAnd => "bin_and",
            Op::Eq => "eq",
            Op::Neq => "neq",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Ellipsis => "ellipsis",
        }
    }

    /// Canonical source spelling.
    pub fn spelling(&self) -> &'static str {
        match self {
            Op::And => "and",
            Op::Or => "or",
            Op::OrElse => "or else",
            Op::AndThen => "and then",
            Op::Xor => "xor",
            Op::In => "in",
            Op::NotIn => "not in",
            Op::Abs => "abs",
            Op::Not => "not",
            Op::Pow => "**",
            Op::Mult => "*",
            Op::Div => "/",
            Op::Mod => "mod",
            Op::Rem => "rem",
            Op::Plus => "+",
            Op::Minus => "-",
            Op::BinAnd => "&",
            Op::Eq => "=",
            Op::Neq => "/=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Ellipsis => "..",
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    All,
    Some,
}

impl Quantifier {
    pub fn spelling(&self) -> &'static str {
        match self {
            Quantifier::All => "all",
            Quantifier::Some => "some",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterType {
    In,
    Of,
}

impl IterType {
    pub fn spelling(&self) -> &'static str {
        match self {
            IterType::In => "in",
            IterType::Of => "of",
        }
    }
}
