use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            Aggregate, AggregateAssoc, AggregateContent, AggregateContents, AggregateMember,
            BinOp, Choice, Designator, DiamondExpr, OthersDesignator,
        },
        ops::Op,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_expression, parse_simple_expr},
    parser::Parser,
};

/// `aggregate → ( [expression with] (null record | aggregate_assoc {, aggregate_assoc}) )`
pub fn parse_aggregate(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("aggregate at {}", parser.get_position().0);
    let open = parser.expect(TokenKind::OpenParen)?;

    let ancestor_expr = parser.attempt(|parser| {
        let ancestor = parse_expression(parser)?;
        parser.expect(TokenKind::With)?;
        Ok(Box::new(ancestor))
    })?;

    let content = if parser.current_token_kind() == TokenKind::Null
        && parser.peek_kind(1) == TokenKind::Record
    {
        let start = parser.advance().span.clone();
        let end = parser.advance().span.clone();
        AggregateContents::NullRecord(Span::join(&start, &end))
    } else {
        AggregateContents::Fields(parse_aggregate_content(parser)?)
    };

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Aggregate(Aggregate {
        ancestor_expr,
        content,
        span: Span::join(&open.span, &close.span),
    }))
}

fn parse_aggregate_content(parser: &mut Parser) -> Result<AggregateContent, Error> {
    let mut fields = vec![parse_aggregate_assoc(parser)?];

    loop {
        let start = parser.mark();
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();

        let Some(assoc) = parser.attempt(parse_aggregate_assoc)? else {
            parser.reset(start);
            break;
        };
        fields.push(assoc);
    }

    let span = match (fields.first(), fields.last()) {
        (Some(first), Some(last)) => Span::join(&first.span, &last.span),
        _ => parser.previous_span(),
    };

    Ok(AggregateContent { fields, span })
}

/// `aggregate_assoc → [choice_list =>] (<> | expression)`
///
/// A designator made of `others` alone is an `OthersDesignator`, any other
/// choice list an `AggregateMember`.
pub fn parse_aggregate_assoc(parser: &mut Parser) -> Result<AggregateAssoc, Error> {
    let designator = parser.attempt(|parser| {
        let first = parser.current_token().span.clone();
        let choice_list = parse_choice_list(parser)?;
        let span = Span::join(&first, &parser.previous_span());
        parser.expect(TokenKind::Arrow)?;

        Ok(match choice_list.as_slice() {
            [Choice::Others(others)] => Designator::Others(others.clone()),
            _ => Designator::Choices(AggregateMember { choice_list, span }),
        })
    })?;

    let expr = if parser.current_token_kind() == TokenKind::Diamond {
        Expr::Diamond(DiamondExpr {
            span: parser.advance().span.clone(),
        })
    } else {
        parse_expression(parser)?
    };

    let span = match &designator {
        Some(designator) => Span::join(designator.get_span(), expr.get_span()),
        None => expr.get_span().clone(),
    };

    Ok(AggregateAssoc {
        designator,
        expr: Box::new(expr),
        span,
    })
}

/// `choice_list → choice {| choice}`
pub fn parse_choice_list(parser: &mut Parser) -> Result<Vec<Choice>, Error> {
    let mut choices = vec![parse_choice(parser)?];

    loop {
        let start = parser.mark();
        if parser.current_token_kind() != TokenKind::Pipe {
            break;
        }
        parser.advance();

        let Some(choice) = parser.attempt(parse_choice)? else {
            parser.reset(start);
            break;
        };
        choices.push(choice);
    }

    Ok(choices)
}

/// `choice → discrete_range | expression | others`
pub fn parse_choice(parser: &mut Parser) -> Result<Choice, Error> {
    if let Some(range) = parser.attempt(parse_discrete_range)? {
        return Ok(Choice::Expr(range));
    }

    if let Some(expr) = parser.attempt(parse_expression)? {
        return Ok(Choice::Expr(expr));
    }

    if parser.current_token_kind() == TokenKind::Others {
        return Ok(Choice::Others(OthersDesignator {
            span: parser.advance().span.clone(),
        }));
    }

    Err(parser.no_alternative("choice", &["discrete_range", "expression", "others"]))
}

/// `discrete_range → simple_expr .. simple_expr`
pub fn parse_discrete_range(parser: &mut Parser) -> Result<Expr, Error> {
    let low = parse_simple_expr(parser)?;
    parser.expect(TokenKind::DotDot)?;
    let high = parse_simple_expr(parser)?;

    Ok(Expr::BinOp(BinOp::new(low, Op::Ellipsis, high)))
}
