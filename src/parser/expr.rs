use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinOp, MembershipExpr, SingleTokKind, SingleTokNode, UnOp},
        names::{BaseId, BaseIdKind, BaseName},
        ops::Op,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    aggregates::parse_choice_list,
    conditionals::parse_conditional_expression,
    lookups::{
        first_match, match_operator, ADDING_OPS, BOOLEAN_OPS, EXPONENT_OPS,
        HIGHEST_PRECEDENCE_UNARY_OPS, MEMBERSHIP_OPS, MULTIPLYING_OPS, PRIMARY_RULES,
        RELATIONAL_OPS, UNARY_ADDING_OPS,
    },
    parser::{Parser, Rule},
};

/// `expression → relation (boolean_op relation)*`, folded left.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parser.memoized(Rule::Expression, parse_logical_chain)
}

fn parse_logical_chain(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("expression at {}", parser.get_position().0);
    let mut left = parse_relation(parser)?;
    let mut previous: Option<Op> = None;

    loop {
        let start = parser.mark();
        let Some((op, op_span)) = match_operator(parser, &BOOLEAN_OPS) else {
            break;
        };

        let Some(right) = parser.attempt(parse_relation)? else {
            parser.reset(start);
            break;
        };

        if let Some(previous) = previous {
            if previous != op && parser.get_options().reject_mixed_logical_operators {
                return Err(Error::new(
                    ErrorImpl::MixedLogicalOperators {
                        first: previous.spelling().to_string(),
                        second: op.spelling().to_string(),
                    },
                    op_span.start,
                ));
            }
        }

        previous = Some(op);
        left = Expr::BinOp(BinOp::new(left, op, right));
    }

    Ok(left)
}

/// `relation → simple_expr (rel_op choice_list | cmp_op relation)?`
///
/// Comparisons nest to the right (`A = B = C` is `A = (B = C)`). A
/// membership test applies to the last operand and ends the chain.
pub fn parse_relation(parser: &mut Parser) -> Result<Expr, Error> {
    // Operands already followed by a comparison, with that comparison
    let mut compared: Vec<(Expr, Op)> = vec![];
    let mut last = parse_simple_expr(parser)?;

    loop {
        let start = parser.mark();

        if let Some((op, op_span)) = match_operator(parser, &MEMBERSHIP_OPS) {
            let Some(choices) = parser.attempt(parse_choice_list)? else {
                parser.reset(start);
                break;
            };
            check_chained_relation(parser, &compared, op, &op_span)?;

            let span = match choices.last() {
                Some(choice) => Span::join(last.get_span(), choice.get_span()),
                None => Span::join(last.get_span(), &op_span),
            };
            last = Expr::Membership(MembershipExpr {
                expr: Box::new(last),
                op,
                choices,
                span,
            });
            break;
        }

        let Some((op, op_span)) = match_operator(parser, &RELATIONAL_OPS) else {
            break;
        };
        let Some(right) = parser.attempt(parse_simple_expr)? else {
            parser.reset(start);
            break;
        };
        check_chained_relation(parser, &compared, op, &op_span)?;

        compared.push((last, op));
        last = right;
    }

    // Fold right: the last operand is the innermost relation
    let mut relation = last;
    while let Some((left, op)) = compared.pop() {
        relation = Expr::BinOp(BinOp::new(left, op, relation));
    }

    Ok(relation)
}

fn check_chained_relation(
    parser: &Parser,
    compared: &[(Expr, Op)],
    op: Op,
    op_span: &Span,
) -> Result<(), Error> {
    if !compared.is_empty() && parser.get_options().reject_chained_relations {
        return Err(Error::new(
            ErrorImpl::ChainedRelation {
                operator: op.spelling().to_string(),
            },
            op_span.start.clone(),
        ));
    }

    Ok(())
}

/// `simple_expr → unop_term ((+|-|&) term)*`, folded left.
pub fn parse_simple_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.memoized(Rule::SimpleExpr, parse_adding_chain)
}

fn parse_adding_chain(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_unop_term(parser)?;

    loop {
        let start = parser.mark();
        let Some((op, _)) = match_operator(parser, &ADDING_OPS) else {
            break;
        };
        let Some(right) = parser.attempt(parse_term)? else {
            parser.reset(start);
            break;
        };

        left = Expr::BinOp(BinOp::new(left, op, right));
    }

    Ok(left)
}

/// `unop_term → (+|-) term | term`
pub fn parse_unop_term(parser: &mut Parser) -> Result<Expr, Error> {
    match match_operator(parser, &UNARY_ADDING_OPS) {
        Some((op, op_span)) => {
            let operand = parse_term(parser)?;
            Ok(Expr::UnOp(UnOp::new(op, operand, &op_span)))
        }
        None => parse_term(parser),
    }
}

/// `term → factor ((*|/|mod|rem) factor)*`, folded left.
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    loop {
        let start = parser.mark();
        let Some((op, _)) = match_operator(parser, &MULTIPLYING_OPS) else {
            break;
        };
        let Some(right) = parser.attempt(parse_factor)? else {
            parser.reset(start);
            break;
        };

        left = Expr::BinOp(BinOp::new(left, op, right));
    }

    Ok(left)
}

/// `factor → (abs|not) primary | primary (** primary)?`
///
/// `**` does not associate: `2 ** 3 ** 2` stops before the second operator.
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some((op, op_span)) = match_operator(parser, &HIGHEST_PRECEDENCE_UNARY_OPS) {
        let operand = parse_primary(parser)?;
        return Ok(Expr::UnOp(UnOp::new(op, operand, &op_span)));
    }

    let base = parse_primary(parser)?;

    let start = parser.mark();
    let Some((op, _)) = match_operator(parser, &EXPONENT_OPS) else {
        return Ok(base);
    };
    match parser.attempt(parse_primary)? {
        Some(exponent) => Ok(Expr::BinOp(BinOp::new(base, op, exponent))),
        None => {
            parser.reset(start);
            Ok(base)
        }
    }
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    parser.memoized(Rule::Primary, |parser| {
        trace!("primary at {}", parser.get_position().0);
        first_match(parser, "primary", PRIMARY_RULES)
    })
}

/// `( conditional_expression | expression )`. The parentheses leave no node.
pub fn parse_paren_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let expr = match parser.attempt(parse_conditional_expression)? {
        Some(conditional) => conditional,
        None => parse_expression(parser)?,
    };

    parser.expect(TokenKind::CloseParen)?;
    Ok(expr)
}

// LITERALS

fn parse_single_tok(
    parser: &mut Parser,
    kind: TokenKind,
    node_kind: SingleTokKind,
) -> Result<Expr, Error> {
    let token = parser.expect(kind)?;
    Ok(Expr::SingleTok(SingleTokNode {
        kind: node_kind,
        token,
    }))
}

pub fn parse_num_literal(parser: &mut Parser) -> Result<Expr, Error> {
    parse_single_tok(parser, TokenKind::Number, SingleTokKind::NumLiteral)
}

pub fn parse_null_literal(parser: &mut Parser) -> Result<Expr, Error> {
    parse_single_tok(parser, TokenKind::Null, SingleTokKind::NullLiteral)
}

pub fn parse_char_literal(parser: &mut Parser) -> Result<Expr, Error> {
    parse_single_tok(parser, TokenKind::Char, SingleTokKind::CharLiteral)
}

pub fn parse_base_id(parser: &mut Parser, kind: BaseIdKind) -> Result<BaseId, Error> {
    let token_kind = match kind {
        BaseIdKind::StringLiteral => TokenKind::String,
        BaseIdKind::Identifier | BaseIdKind::EnumIdentifier => TokenKind::Identifier,
    };

    Ok(BaseId::new(kind, parser.expect(token_kind)?))
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let id = parse_base_id(parser, BaseIdKind::Identifier)?;
    Ok(Expr::Name(BaseName::BaseId(id)))
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let id = parse_base_id(parser, BaseIdKind::StringLiteral)?;
    Ok(Expr::Name(BaseName::BaseId(id)))
}

/// Identifier naming an enumeration literal. Only declarations reach this rule.
pub fn parse_enum_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let id = parse_base_id(parser, BaseIdKind::EnumIdentifier)?;
    Ok(Expr::Name(BaseName::BaseId(id)))
}
