//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the expression sub-grammar:
//! - Operator precedence and associativity
//! - Names and their postfix forms
//! - Aggregates and choices
//! - Conditional, quantified and raise expressions, allocators
//! - Diagnostics and strict operator checks

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprType},
        names::Resolvable,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
};

use super::{
    expr::{parse_enum_identifier, parse_term},
    names::{parse_call_suffix, parse_static_name},
    parser::{parse, parse_with_options, ParseOptions, Parser},
};

fn parse_source(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some("test.adb".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.adb".to_string()));
    result
}

fn parse_strict(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some("test.adb".to_string())).unwrap();
    let (_, result) = parse_with_options(
        tokens,
        Rc::new("test.adb".to_string()),
        ParseOptions::strict(),
    );
    result
}

fn dump(source: &str) -> String {
    parse_source(source).unwrap().dump()
}

fn parser_for(source: &str) -> Parser {
    let tokens = tokenize(source.to_string(), Some("test.adb".to_string())).unwrap();
    Parser::new(tokens, Rc::new("test.adb".to_string()), ParseOptions::default())
}

// PRECEDENCE

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        dump("1 + 2 * 3"),
        "BinOp(Num(1), plus, BinOp(Num(2), mult, Num(3)))"
    );
}

#[test]
fn test_unary_minus_applies_to_power() {
    assert_eq!(dump("-2**2"), "UnOp(minus, BinOp(Num(2), pow, Num(2)))");
}

#[test]
fn test_additive_chain_folds_left() {
    assert_eq!(
        dump("1 - 2 - 3"),
        "BinOp(BinOp(Num(1), minus, Num(2)), minus, Num(3))"
    );
    assert_eq!(
        dump("A & \"x\" & B"),
        "BinOp(BinOp(Id(A), bin_and, Str(\"x\")), bin_and, Id(B))"
    );
}

#[test]
fn test_multiplicative_chain_folds_left() {
    assert_eq!(
        dump("A / B * C rem D"),
        "BinOp(BinOp(BinOp(Id(A), div, Id(B)), mult, Id(C)), rem, Id(D))"
    );
}

#[test]
fn test_logical_chain_folds_left() {
    assert_eq!(
        dump("A and B and C"),
        "BinOp(BinOp(Id(A), and, Id(B)), and, Id(C))"
    );
    assert_eq!(
        dump("A and then B or else C"),
        "BinOp(BinOp(Id(A), and_then, Id(B)), or_else, Id(C))"
    );
}

#[test]
fn test_relations_nest_right() {
    assert_eq!(
        dump("A = B = C"),
        "BinOp(Id(A), eq, BinOp(Id(B), eq, Id(C)))"
    );
    assert_eq!(
        dump("X mod 3 = 0"),
        "BinOp(BinOp(Id(X), mod, Num(3)), eq, Num(0))"
    );
}

#[test]
fn test_highest_precedence_unary() {
    assert_eq!(
        dump("not A and B"),
        "BinOp(UnOp(not, Id(A)), and, Id(B))"
    );
    assert_eq!(dump("abs X + 1"), "BinOp(UnOp(abs, Id(X)), plus, Num(1))");
}

#[test]
fn test_power_does_not_chain() {
    let error = parse_source("2**3**2").unwrap_err();

    assert_eq!(error.get_error_name(), "TrailingTokens");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_parentheses_leave_no_node() {
    assert_eq!(
        dump("(1 + 2) * 3"),
        "BinOp(BinOp(Num(1), plus, Num(2)), mult, Num(3))"
    );
}

// MEMBERSHIP

#[test]
fn test_membership_with_range() {
    assert_eq!(
        dump("X in 1 .. 10"),
        "MembershipExpr(Id(X), in, [BinOp(Num(1), ellipsis, Num(10))])"
    );
}

#[test]
fn test_membership_with_choice_list() {
    assert_eq!(
        dump("X not in A | B"),
        "MembershipExpr(Id(X), not_in, [Id(A), Id(B)])"
    );
}

#[test]
fn test_membership_ends_relation() {
    assert_eq!(
        dump("X in 1 .. 10 and Y"),
        "BinOp(MembershipExpr(Id(X), in, [BinOp(Num(1), ellipsis, Num(10))]), and, Id(Y))"
    );
}

// NAMES

#[test]
fn test_attribute_reference_with_arguments() {
    let expr = parse_source("X'Range(1)").unwrap();

    assert_eq!(expr.get_expr_type(), ExprType::AttributeRef);
    assert_eq!(
        expr.dump(),
        "AttributeRef(Id(X), Attr(Range), ParamList[ParamAssoc(None, Num(1))])"
    );
}

#[test]
fn test_attribute_reference_with_identifier() {
    assert_eq!(
        dump("X'First + 1"),
        "BinOp(AttributeRef(Id(X), Id(First), None), plus, Num(1))"
    );
}

#[test]
fn test_qualified_expression() {
    assert_eq!(dump("T'(1)"), "QualExpr(Id(T), Num(1))");
    assert_eq!(dump("Character'('a')"), "QualExpr(Id(Character), Chr('a'))");
    assert_eq!(
        dump("T'(1, 2)"),
        "QualExpr(Id(T), Aggregate(None, AggregateContent[AggregateAssoc(None, Num(1)), AggregateAssoc(None, Num(2))]))"
    );
}

#[test]
fn test_call_with_named_parameter() {
    assert_eq!(
        dump("F(1, X => 2)"),
        "CallExpr(Id(F), ParamList[ParamAssoc(None, Num(1)), ParamAssoc(Id(X), Num(2))])"
    );
}

#[test]
fn test_call_with_box_and_others() {
    assert_eq!(
        dump("F (X => <>, others => 0)"),
        "CallExpr(Id(F), ParamList[ParamAssoc(Id(X), DiamondExpr), ParamAssoc(OthersDesignator, Num(0))])"
    );
}

#[test]
fn test_slice() {
    assert_eq!(
        dump("A (1 .. 3)"),
        "CallExpr(Id(A), BinOp(Num(1), ellipsis, Num(3)))"
    );
}

#[test]
fn test_slice_is_not_reconsidered_as_parameters() {
    let error = parse_source("F (1 .. 2, 3)").unwrap_err();

    assert_eq!(error.get_position().0, 9);
}

#[test]
fn test_selected_names_fold_into_name_prefix() {
    let expr = parse_source("A.B.C").unwrap();

    assert_eq!(expr.dump(), "NamePrefix(NamePrefix(Id(A), Id(B)), Id(C))");
    assert_eq!(expr.as_name().unwrap().name().value, "C");
}

#[test]
fn test_operator_symbol_selection() {
    assert_eq!(dump("Pkg.\"=\""), "NamePrefix(Id(Pkg), Str(\"=\"))");
    assert_eq!(
        dump("\"+\" (A, B)"),
        "CallExpr(Str(\"+\"), ParamList[ParamAssoc(None, Id(A)), ParamAssoc(None, Id(B))])"
    );
}

#[test]
fn test_selection_after_call_is_prefix() {
    assert_eq!(
        dump("Rec.Field (2).X"),
        "Prefix(CallExpr(NamePrefix(Id(Rec), Id(Field)), ParamList[ParamAssoc(None, Num(2))]), Id(X))"
    );
    assert_eq!(dump("Ptr.all"), "Prefix(Id(Ptr), AccessDeref)");
}

#[test]
fn test_leaf_literals() {
    assert_eq!(dump("'a'"), "Chr('a')");
    assert_eq!(dump("null"), "Null");
    assert_eq!(dump("16#FF#"), "Num(16#FF#)");

    assert_eq!(parse_source("'a'").unwrap().get_expr_type(), ExprType::CharLiteral);
    assert_eq!(parse_source("null").unwrap().get_expr_type(), ExprType::NullLiteral);
}

// AGGREGATES

#[test]
fn test_positional_aggregate_with_others() {
    assert_eq!(
        dump("(1, 2, others => 0)"),
        "Aggregate(None, AggregateContent[AggregateAssoc(None, Num(1)), AggregateAssoc(None, Num(2)), AggregateAssoc(OthersDesignator, Num(0))])"
    );
}

#[test]
fn test_named_aggregate_members() {
    assert_eq!(
        dump("(1 | 3 => A, 1 .. 3 => 0, X => <>)"),
        "Aggregate(None, AggregateContent[AggregateAssoc(AggregateMember[Num(1), Num(3)], Id(A)), AggregateAssoc(AggregateMember[BinOp(Num(1), ellipsis, Num(3))], Num(0)), AggregateAssoc(AggregateMember[Id(X)], DiamondExpr)])"
    );
}

#[test]
fn test_extension_aggregate() {
    assert_eq!(
        dump("(X with Y => 1)"),
        "Aggregate(Id(X), AggregateContent[AggregateAssoc(AggregateMember[Id(Y)], Num(1))])"
    );
    assert_eq!(dump("(null record)"), "Aggregate(None, NullRecord)");
    assert_eq!(dump("(Parent with null record)"), "Aggregate(Id(Parent), NullRecord)");
}

// CONDITIONALS

#[test]
fn test_if_expression() {
    assert_eq!(
        dump("(if A then 1 elsif B then 2 else 3)"),
        "IfExpr(Id(A), Num(1), [ElsifExprPart(Id(B), Num(2))], Num(3))"
    );
    assert_eq!(dump("(if A then B)"), "IfExpr(Id(A), Id(B), [], None)");
}

#[test]
fn test_case_expression() {
    assert_eq!(
        dump("(case X is when 1 | 2 => A, when others => B)"),
        "CaseExpr(Id(X), [CaseExprAlternative([Num(1), Num(2)], Id(A)), CaseExprAlternative([OthersDesignator], Id(B))])"
    );
}

#[test]
fn test_quantified_expression() {
    assert_eq!(
        dump("(for all I in A'Range => A (I) > 0)"),
        "QuantifiedExpr(all, ForLoopSpec(Id(I), in, AttributeRef(Id(A), Attr(Range), None)), BinOp(CallExpr(Id(A), ParamList[ParamAssoc(None, Id(I))]), gt, Num(0)))"
    );
    assert_eq!(
        dump("(for some X of reverse Items => X = 0)"),
        "QuantifiedExpr(some, ForLoopSpec(Id(X), of reverse, Id(Items)), BinOp(Id(X), eq, Num(0)))"
    );
}

#[test]
fn test_quantified_over_constrained_subtype() {
    assert_eq!(
        dump("(for all I in Integer range 1 .. 10 => I > 0)"),
        "QuantifiedExpr(all, ForLoopSpec(Id(I), in, ConstrainedSubtype(Id(Integer), BinOp(Num(1), ellipsis, Num(10)))), BinOp(Id(I), gt, Num(0)))"
    );
}

#[test]
fn test_constrained_subtype_with_char_bounds() {
    assert_eq!(
        dump("(for all C in Character range 'a' .. 'z' => C /= ' ')"),
        "QuantifiedExpr(all, ForLoopSpec(Id(C), in, ConstrainedSubtype(Id(Character), BinOp(Chr('a'), ellipsis, Chr('z')))), BinOp(Id(C), neq, Chr(' ')))"
    );
}

#[test]
fn test_membership_as_choice() {
    assert_eq!(
        dump("X in (Y in A | B) | C"),
        "MembershipExpr(Id(X), in, [MembershipExpr(Id(Y), in, [Id(A), Id(B)]), Id(C)])"
    );
}

#[test]
fn test_allocator() {
    assert_eq!(dump("new T"), "Allocator(None, Id(T))");
    assert_eq!(
        dump("new (Pool) T'(1)"),
        "Allocator(Id(Pool), QualExpr(Id(T), Num(1)))"
    );
}

#[test]
fn test_raise_expression() {
    assert_eq!(dump("raise"), "RaiseExpression(None, None)");
    assert_eq!(dump("raise E"), "RaiseExpression(Id(E), None)");
    assert_eq!(
        dump("raise E with \"boom\""),
        "RaiseExpression(Id(E), Str(\"boom\"))"
    );
}

// ENTRY POINTS

#[test]
fn test_static_name_entry_point() {
    let mut parser = parser_for("Ada.Containers.\"=\" (1)");
    let name = parse_static_name(&mut parser).unwrap();

    assert_eq!(
        name.dump(),
        "NamePrefix(NamePrefix(Id(Ada), Id(Containers)), Str(\"=\"))"
    );
    assert_eq!(parser.current_token().value, "(");
}

#[test]
fn test_term_entry_point_stops_at_adding_operator() {
    let mut parser = parser_for("2 * 3 + 1");
    let term = parse_term(&mut parser).unwrap();

    assert_eq!(term.dump(), "BinOp(Num(2), mult, Num(3))");
    assert_eq!(parser.current_token().value, "+");
}

#[test]
fn test_enum_identifier_entry_point() {
    let mut parser = parser_for("Red");
    let literal = parse_enum_identifier(&mut parser).unwrap();

    assert_eq!(literal.dump(), "EnumId(Red)");
    assert_eq!(literal.get_expr_type(), ExprType::EnumIdentifier);
}

#[test]
fn test_call_suffix_entry_point() {
    let mut parser = parser_for("X => 1, 2");
    let suffix = parse_call_suffix(&mut parser).unwrap();

    assert_eq!(suffix.get_span().start.0, 0);
    assert_eq!(suffix.get_span().end.0, 9);
    assert!(!parser.has_tokens());
}

#[test]
fn test_spans_cover_children() {
    let expr = parse_source("F (X) + 1").unwrap();

    assert_eq!(expr.get_span().start.0, 0);
    assert_eq!(expr.get_span().end.0, 9);
}

// DIAGNOSTICS

#[test]
fn test_empty_input_has_no_alternative() {
    let error = parse_source("").unwrap_err();

    assert_eq!(error.get_error_name(), "NoViableAlternative");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_furthest_failure_is_reported() {
    let error = parse_source("A + * B").unwrap_err();

    assert_eq!(error.get_position().0, 4);
    match error.get_impl() {
        ErrorImpl::NoViableAlternative { rule, token, .. } => {
            assert_eq!(*rule, "primary");
            assert_eq!(token, "*");
        }
        other => panic!("Expected NoViableAlternative, got {:?}", other),
    }
}

#[test]
fn test_unclosed_call_points_at_end() {
    let error = parse_source("F (1, 2").unwrap_err();

    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_strict_rejects_chained_relations() {
    let error = parse_strict("A = B = C").unwrap_err();

    assert_eq!(error.get_error_name(), "ChainedRelation");
    assert_eq!(error.get_position().0, 6);

    let error = parse_strict("A < B in C").unwrap_err();
    assert_eq!(error.get_error_name(), "ChainedRelation");

    assert!(parse_strict("A = (B = C)").is_ok());
}

#[test]
fn test_strict_rejects_mixed_logical_operators() {
    let error = parse_strict("A and then B or else C").unwrap_err();

    assert_eq!(error.get_error_name(), "MixedLogicalOperators");
    assert_eq!(error.get_position().0, 13);

    assert!(parse_strict("A and B and C").is_ok());
    assert!(parse_strict("(A and B) or C").is_ok());
}

#[test]
fn test_memo_is_filled() {
    let tokens = tokenize("F (1) + G (2)".to_string(), None).unwrap();
    let (parser, result) = parse(tokens, Rc::new("shell".to_string()));

    assert!(result.is_ok());
    assert!(parser.memo_len() > 0);
}
