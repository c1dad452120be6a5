use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            Allocator, CaseExpr, CaseExprAlternative, ConstrainedSubtype, ElsifExprPart,
            ForLoopSpec, IfExpr, IterSource, LoopSpec, QuantifiedExpr, RaiseExpression,
        },
        names::BaseIdKind,
        ops::{IterType, Quantifier},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    aggregates::{parse_choice_list, parse_discrete_range},
    expr::{parse_base_id, parse_expression},
    lookups::{first_match, CONDITIONAL_RULES},
    names::parse_name,
    parser::Parser,
};

/// `conditional_expression → if_expression | case_expression | quantified_expression`
pub fn parse_conditional_expression(parser: &mut Parser) -> Result<Expr, Error> {
    first_match(parser, "conditional_expression", CONDITIONAL_RULES)
}

/// `if expr then expr {elsif expr then expr} [else expr]`
pub fn parse_if_expression(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("if_expression at {}", parser.get_position().0);
    let start = parser.expect(TokenKind::If)?.span;
    let cond = parse_expression(parser)?;
    parser.expect(TokenKind::Then)?;
    let then = parse_expression(parser)?;

    let mut elsif_list = vec![];
    while parser.current_token_kind() == TokenKind::Elsif {
        let elsif = parser.advance().span.clone();
        let cond = parse_expression(parser)?;
        parser.expect(TokenKind::Then)?;
        let then = parse_expression(parser)?;

        elsif_list.push(ElsifExprPart {
            span: Span::join(&elsif, then.get_span()),
            cond: Box::new(cond),
            then: Box::new(then),
        });
    }

    let else_expr = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_expression(parser)?))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        span: Span::join(&start, &parser.previous_span()),
        cond: Box::new(cond),
        then: Box::new(then),
        elsif_list,
        else_expr,
    }))
}

/// `case expr is when choice_list => expr {, when choice_list => expr}`
pub fn parse_case_expression(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("case_expression at {}", parser.get_position().0);
    let start = parser.expect(TokenKind::Case)?.span;
    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::Is)?;

    let mut alternatives = vec![parse_case_alternative(parser)?];
    loop {
        let mark = parser.mark();
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();

        let Some(alternative) = parser.attempt(parse_case_alternative)? else {
            parser.reset(mark);
            break;
        };
        alternatives.push(alternative);
    }

    Ok(Expr::Case(CaseExpr {
        span: Span::join(&start, &parser.previous_span()),
        expr: Box::new(expr),
        alternatives,
    }))
}

fn parse_case_alternative(parser: &mut Parser) -> Result<CaseExprAlternative, Error> {
    let when = parser.expect(TokenKind::When)?.span;
    let choices = parse_choice_list(parser)?;
    parser.expect(TokenKind::Arrow)?;
    let expr = parse_expression(parser)?;

    Ok(CaseExprAlternative {
        span: Span::join(&when, expr.get_span()),
        choices,
        expr: Box::new(expr),
    })
}

/// `for (all | some) for_loop_parameter_spec => (discrete_range | expression)`
pub fn parse_quantified_expression(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("quantified_expression at {}", parser.get_position().0);
    let start = parser.expect(TokenKind::For)?.span;

    let quantifier = match parser.current_token_kind() {
        TokenKind::All => Quantifier::All,
        TokenKind::Some => Quantifier::Some,
        _ => return Err(parser.no_alternative("quantifier", &["all", "some"])),
    };
    parser.advance();

    let loop_spec = parse_for_loop_parameter_spec(parser)?;
    parser.expect(TokenKind::Arrow)?;

    let expr = match parser.attempt(parse_discrete_range)? {
        Some(range) => range,
        None => parse_expression(parser)?,
    };

    Ok(Expr::Quantified(QuantifiedExpr {
        span: Span::join(&start, expr.get_span()),
        quantifier,
        loop_spec: LoopSpec::For(loop_spec),
        expr: Box::new(expr),
    }))
}

/// `identifier (in | of) [reverse] (subtype_mark range discrete_range | discrete_range | expression)`
pub fn parse_for_loop_parameter_spec(parser: &mut Parser) -> Result<ForLoopSpec, Error> {
    let id = parse_base_id(parser, BaseIdKind::Identifier)?;

    let iter_kind = match parser.current_token_kind() {
        TokenKind::In => IterType::In,
        TokenKind::Of => IterType::Of,
        _ => return Err(parser.no_alternative("iteration kind", &["in", "of"])),
    };
    parser.advance();

    let is_reverse = parser.current_token_kind() == TokenKind::Reverse;
    if is_reverse {
        parser.advance();
    }

    let iter_expr = if let Some(subtype) = parser.attempt(parse_constrained_subtype)? {
        IterSource::Subtype(subtype)
    } else if let Some(range) = parser.attempt(parse_discrete_range)? {
        IterSource::Expr(Box::new(range))
    } else {
        IterSource::Expr(Box::new(parse_expression(parser)?))
    };

    Ok(ForLoopSpec {
        span: Span::join(&id.token.span, iter_expr.get_span()),
        id,
        iter_kind,
        is_reverse,
        iter_expr,
    })
}

fn parse_constrained_subtype(parser: &mut Parser) -> Result<ConstrainedSubtype, Error> {
    let subtype_mark = parse_name(parser)?;
    parser.expect(TokenKind::Range)?;
    let constraint = parse_discrete_range(parser)?;

    Ok(ConstrainedSubtype {
        span: Span::join(subtype_mark.get_span(), constraint.get_span()),
        subtype_mark: Box::new(subtype_mark),
        constraint: Box::new(constraint),
    })
}

/// `new [( name )] name`
pub fn parse_allocator(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::New)?.span;

    let subpool = parser.attempt(|parser| {
        parser.expect(TokenKind::OpenParen)?;
        let subpool = parse_name(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        Ok(Box::new(subpool))
    })?;

    let inner = parse_name(parser)?;

    Ok(Expr::Allocator(Allocator {
        span: Span::join(&start, inner.get_span()),
        subpool,
        inner: Box::new(inner),
    }))
}

/// `raise [name [with expression]]`
pub fn parse_raise_expression(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Raise)?.span;

    let Some(exception_name) = parser.attempt(parse_name)? else {
        return Ok(Expr::Raise(RaiseExpression {
            span: start,
            exception_name: None,
            message: None,
        }));
    };

    let message = parser
        .attempt(|parser| {
            parser.expect(TokenKind::With)?;
            parse_expression(parser)
        })?
        .map(Box::new);

    Ok(Expr::Raise(RaiseExpression {
        span: Span::join(&start, &parser.previous_span()),
        exception_name: Some(Box::new(exception_name)),
        message,
    }))
}
