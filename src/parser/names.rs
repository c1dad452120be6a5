use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AccessDeref, AttributeRef, CallExpr, CallSuffix, Designator, DiamondExpr,
            OthersDesignator, ParamAssoc, ParamList, Prefix, QualExpr, SingleTokKind,
            SingleTokNode,
        },
        names::{BaseId, BaseIdKind, BaseName, NamePrefix},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    aggregates::{parse_aggregate, parse_discrete_range},
    expr::{parse_base_id, parse_expression, parse_identifier},
    lookups::{first_match, DIRECT_NAME_RULES, NAME_SUFFIX_RULES},
    parser::Parser,
};

/// One postfix step of `name`, parsed without its prefix.
pub enum NameSuffix {
    /// `( call_suffix )`, with the span of the closing parenthesis
    Call(CallSuffix, Span),
    /// `. direct_name`
    Select(Expr),
    /// `' attribute [( call_suffix )]`
    Attribute(Expr, Option<CallSuffix>, Span),
    /// `' ( expression )` or `' aggregate`
    Qualify(Expr, Span),
}

/// `name → direct_name { postfix }`
///
/// After the first direct name, postfix forms are tried in the fixed order of
/// `NAME_SUFFIX_RULES` until none applies. Calls, indexing, slices and type
/// conversions all become `CallExpr`.
pub fn parse_name(parser: &mut Parser) -> Result<Expr, Error> {
    trace!("name at {}", parser.get_position().0);
    let mut name = parse_direct_name(parser)?;

    'postfix: loop {
        for (_, rule) in NAME_SUFFIX_RULES {
            if let Some(suffix) = parser.attempt(*rule)? {
                name = apply_suffix(name, suffix);
                continue 'postfix;
            }
        }

        break;
    }

    Ok(name)
}

fn apply_suffix(prefix: Expr, suffix: NameSuffix) -> Expr {
    match suffix {
        NameSuffix::Call(arguments, close) => Expr::Call(CallExpr {
            span: Span::join(prefix.get_span(), &close),
            name: Box::new(prefix),
            arguments,
        }),
        NameSuffix::Select(selector) => select(prefix, selector),
        NameSuffix::Attribute(attribute, args, end) => Expr::AttributeRef(AttributeRef {
            span: Span::join(prefix.get_span(), &end),
            prefix: Box::new(prefix),
            attribute: Box::new(attribute),
            args,
        }),
        NameSuffix::Qualify(suffix, end) => Expr::Qual(QualExpr {
            span: Span::join(prefix.get_span(), &end),
            prefix: Box::new(prefix),
            suffix: Box::new(suffix),
        }),
    }
}

/// Builds `prefix.selector`. Selecting an identifier or operator symbol out of
/// a name gives a `NamePrefix`, which takes part in name resolution.
fn select(prefix: Expr, selector: Expr) -> Expr {
    match (prefix, selector) {
        (Expr::Name(base), Expr::Name(BaseName::BaseId(id)))
            if matches!(id.kind, BaseIdKind::Identifier | BaseIdKind::StringLiteral) =>
        {
            Expr::Name(BaseName::NamePrefix(NamePrefix::new(base, id)))
        }
        (prefix, selector) => Expr::Prefix(Prefix {
            span: Span::join(prefix.get_span(), selector.get_span()),
            prefix: Box::new(prefix),
            suffix: Box::new(selector),
        }),
    }
}

/// `direct_name → identifier | string_literal | char_literal | all | attribute`
pub fn parse_direct_name(parser: &mut Parser) -> Result<Expr, Error> {
    first_match(parser, "direct_name", DIRECT_NAME_RULES)
}

pub fn parse_access_deref(parser: &mut Parser) -> Result<Expr, Error> {
    let span = parser.expect(TokenKind::All)?.span;
    Ok(Expr::AccessDeref(AccessDeref { span }))
}

/// Attribute designators that are reserved words.
pub fn parse_keyword_attribute(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Access
        | TokenKind::Delta
        | TokenKind::Digits
        | TokenKind::Mod
        | TokenKind::Range => Ok(Expr::SingleTok(SingleTokNode {
            kind: SingleTokKind::Attribute,
            token: parser.advance().clone(),
        })),
        _ => Err(parser.no_alternative(
            "attribute",
            &["access", "delta", "digits", "mod", "range"],
        )),
    }
}

/// `attribute → access | delta | digits | mod | range | identifier`
pub fn parse_attribute(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(attribute) = parser.attempt(parse_keyword_attribute)? {
        return Ok(attribute);
    }

    parse_identifier(parser)
}

/// `static_name → (identifier | string_literal) {. (identifier | string_literal)}`,
/// folded left into `NamePrefix` nodes.
pub fn parse_static_name(parser: &mut Parser) -> Result<Expr, Error> {
    let mut name = BaseName::BaseId(parse_static_name_part(parser)?);

    loop {
        let start = parser.mark();
        if parser.current_token_kind() != TokenKind::Dot {
            break;
        }
        parser.advance();

        let Some(suffix) = parser.attempt(parse_static_name_part)? else {
            parser.reset(start);
            break;
        };
        name = BaseName::NamePrefix(NamePrefix::new(name, suffix));
    }

    Ok(Expr::Name(name))
}

fn parse_static_name_part(parser: &mut Parser) -> Result<BaseId, Error> {
    match parser.current_token_kind() {
        TokenKind::String => parse_base_id(parser, BaseIdKind::StringLiteral),
        _ => parse_base_id(parser, BaseIdKind::Identifier),
    }
}

// POSTFIX FORMS

pub fn parse_call_postfix(parser: &mut Parser) -> Result<NameSuffix, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_call_suffix(parser)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(NameSuffix::Call(arguments, close.span))
}

pub fn parse_selector_suffix(parser: &mut Parser) -> Result<NameSuffix, Error> {
    parser.expect(TokenKind::Dot)?;
    Ok(NameSuffix::Select(parse_direct_name(parser)?))
}

pub fn parse_attribute_suffix(parser: &mut Parser) -> Result<NameSuffix, Error> {
    parser.expect(TokenKind::Tick)?;
    let attribute = parse_attribute(parser)?;

    let args = parser.attempt(|parser| {
        parser.expect(TokenKind::OpenParen)?;
        let args = parse_call_suffix(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        Ok(args)
    })?;

    Ok(NameSuffix::Attribute(attribute, args, parser.previous_span()))
}

pub fn parse_qualification_suffix(parser: &mut Parser) -> Result<NameSuffix, Error> {
    parser.expect(TokenKind::Tick)?;

    let parenthesized = parser.attempt(|parser| {
        parser.expect(TokenKind::OpenParen)?;
        let expr = parse_expression(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        Ok(expr)
    })?;

    let suffix = match parenthesized {
        Some(expr) => expr,
        None => parse_aggregate(parser)?,
    };

    Ok(NameSuffix::Qualify(suffix, parser.previous_span()))
}

// CALL SUFFIXES

/// `call_suffix → discrete_range | param_assoc {, param_assoc}`
///
/// A slice is tried first and, once matched, is not reconsidered as a
/// parameter list.
pub fn parse_call_suffix(parser: &mut Parser) -> Result<CallSuffix, Error> {
    if let Some(range) = parser.attempt(parse_discrete_range)? {
        return Ok(CallSuffix::Range(Box::new(range)));
    }

    let mut params = vec![parse_param_assoc(parser)?];

    loop {
        let start = parser.mark();
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();

        let Some(param) = parser.attempt(parse_param_assoc)? else {
            parser.reset(start);
            break;
        };
        params.push(param);
    }

    let span = match (params.first(), params.last()) {
        (Some(first), Some(last)) => Span::join(&first.span, &last.span),
        _ => parser.previous_span(),
    };

    Ok(CallSuffix::Params(ParamList { params, span }))
}

/// `param_assoc → [(identifier | others | string_literal) =>] (expression | <>)`
pub fn parse_param_assoc(parser: &mut Parser) -> Result<ParamAssoc, Error> {
    let designator = parser.attempt(|parser| {
        let designator = match parser.current_token_kind() {
            TokenKind::Others => Designator::Others(OthersDesignator {
                span: parser.advance().span.clone(),
            }),
            TokenKind::String => {
                Designator::Name(parse_base_id(parser, BaseIdKind::StringLiteral)?)
            }
            _ => Designator::Name(parse_base_id(parser, BaseIdKind::Identifier)?),
        };
        parser.expect(TokenKind::Arrow)?;
        Ok(designator)
    })?;

    let expr = match parser.attempt(parse_expression)? {
        Some(expr) => expr,
        None => Expr::Diamond(DiamondExpr {
            span: parser.expect(TokenKind::Diamond)?.span,
        }),
    };

    let span = match &designator {
        Some(designator) => Span::join(designator.get_span(), expr.get_span()),
        None => expr.get_span().clone(),
    };

    Ok(ParamAssoc {
        designator,
        expr: Box::new(expr),
        span,
    })
}
