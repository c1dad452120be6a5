use lazy_static::lazy_static;

use crate::{
    ast::{ast::Expr, ops::Op},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    aggregates::parse_aggregate,
    conditionals::{
        parse_allocator, parse_case_expression, parse_conditional_expression, parse_if_expression,
        parse_quantified_expression, parse_raise_expression,
    },
    expr::{
        parse_char_literal, parse_identifier, parse_null_literal, parse_num_literal,
        parse_paren_expression, parse_string_literal,
    },
    names::{
        parse_access_deref, parse_attribute_suffix, parse_call_postfix, parse_keyword_attribute,
        parse_name, parse_qualification_suffix, parse_selector_suffix, NameSuffix,
    },
    parser::Parser,
};

/// Operator table: token sequences paired with the tag they produce.
/// Entries are tried in order, so multi-token operators come before their prefixes.
pub type OpTable = Vec<(Vec<TokenKind>, Op)>;

pub type ExprRule = fn(&mut Parser) -> Result<Expr, Error>;
pub type SuffixRule = fn(&mut Parser) -> Result<NameSuffix, Error>;

lazy_static! {
    pub static ref BOOLEAN_OPS: OpTable = vec![
        (vec![TokenKind::Xor], Op::Xor),
        (vec![TokenKind::And, TokenKind::Then], Op::AndThen),
        (vec![TokenKind::And], Op::And),
        (vec![TokenKind::Or, TokenKind::Else], Op::OrElse),
        (vec![TokenKind::Or], Op::Or),
    ];

    pub static ref MEMBERSHIP_OPS: OpTable = vec![
        (vec![TokenKind::Not, TokenKind::In], Op::NotIn),
        (vec![TokenKind::In], Op::In),
    ];

    pub static ref RELATIONAL_OPS: OpTable = vec![
        (vec![TokenKind::Equals], Op::Eq),
        (vec![TokenKind::NotEquals], Op::Neq),
        (vec![TokenKind::Less], Op::Lt),
        (vec![TokenKind::LessEquals], Op::Lte),
        (vec![TokenKind::Greater], Op::Gt),
        (vec![TokenKind::GreaterEquals], Op::Gte),
    ];

    pub static ref ADDING_OPS: OpTable = vec![
        (vec![TokenKind::Plus], Op::Plus),
        (vec![TokenKind::Dash], Op::Minus),
        (vec![TokenKind::Ampersand], Op::BinAnd),
    ];

    pub static ref UNARY_ADDING_OPS: OpTable = vec![
        (vec![TokenKind::Plus], Op::Plus),
        (vec![TokenKind::Dash], Op::Minus),
    ];

    pub static ref MULTIPLYING_OPS: OpTable = vec![
        (vec![TokenKind::Star], Op::Mult),
        (vec![TokenKind::Slash], Op::Div),
        (vec![TokenKind::Mod], Op::Mod),
        (vec![TokenKind::Rem], Op::Rem),
    ];

    pub static ref HIGHEST_PRECEDENCE_UNARY_OPS: OpTable = vec![
        (vec![TokenKind::Abs], Op::Abs),
        (vec![TokenKind::Not], Op::Not),
    ];

    pub static ref EXPONENT_OPS: OpTable = vec![(vec![TokenKind::Pow], Op::Pow)];
}

// Ordered choices. The first alternative that matches wins.

pub static PRIMARY_RULES: &[(&str, ExprRule)] = &[
    ("num_literal", parse_num_literal as ExprRule),
    ("null_literal", parse_null_literal as ExprRule),
    ("name", parse_name as ExprRule),
    ("allocator", parse_allocator as ExprRule),
    ("conditional_expression", parse_conditional_expression as ExprRule),
    ("raise_expression", parse_raise_expression as ExprRule),
    ("parenthesized expression", parse_paren_expression as ExprRule),
    ("aggregate", parse_aggregate as ExprRule),
];

pub static CONDITIONAL_RULES: &[(&str, ExprRule)] = &[
    ("if_expression", parse_if_expression as ExprRule),
    ("case_expression", parse_case_expression as ExprRule),
    ("quantified_expression", parse_quantified_expression as ExprRule),
];

pub static DIRECT_NAME_RULES: &[(&str, ExprRule)] = &[
    ("identifier", parse_identifier as ExprRule),
    ("string_literal", parse_string_literal as ExprRule),
    ("char_literal", parse_char_literal as ExprRule),
    ("access_deref", parse_access_deref as ExprRule),
    ("attribute", parse_keyword_attribute as ExprRule),
];

/// Postfix forms of `name`, in the order they are tried after each step.
pub static NAME_SUFFIX_RULES: &[(&str, SuffixRule)] = &[
    ("call", parse_call_postfix as SuffixRule),
    ("selected component", parse_selector_suffix as SuffixRule),
    ("attribute reference", parse_attribute_suffix as SuffixRule),
    ("qualified expression", parse_qualification_suffix as SuffixRule),
];

/// Matches the first operator of `table` at the current position and consumes it.
pub fn match_operator(parser: &mut Parser, table: &OpTable) -> Option<(Op, Span)> {
    for (kinds, op) in table.iter() {
        let matches = kinds
            .iter()
            .enumerate()
            .all(|(offset, kind)| parser.peek_kind(offset) == *kind);

        if matches {
            let start = parser.current_token().span.clone();
            for _ in kinds {
                parser.advance();
            }
            let end = parser.previous_span();

            return Some((*op, Span::join(&start, &end)));
        }
    }

    None
}

/// Runs the alternatives of an ordered choice, returning the first match.
pub fn first_match(
    parser: &mut Parser,
    rule: &'static str,
    alternatives: &[(&'static str, ExprRule)],
) -> Result<Expr, Error> {
    for (_, alternative) in alternatives {
        if let Some(expr) = parser.attempt(*alternative)? {
            return Ok(expr);
        }
    }

    let labels = alternatives
        .iter()
        .map(|(label, _)| *label)
        .collect::<Vec<&'static str>>();
    Err(parser.no_alternative(rule, &labels))
}
