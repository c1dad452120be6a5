use crate::Span;

use super::{
    expressions::{
        AccessDeref, Aggregate, Allocator, AttributeRef, BinOp, CallExpr, CaseExpr, DiamondExpr,
        IfExpr, MembershipExpr, Prefix, QualExpr, QuantifiedExpr, RaiseExpression, SingleTokNode,
        SingleTokKind, UnOp,
    },
    names::{BaseIdKind, BaseName},
};

/// Expression Types
///
/// Defines the concrete kinds of expressions in the AST, leaf variants included.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    UnOp,
    BinOp,
    MembershipExpr,
    Aggregate,
    CallExpr,
    AccessDeref,
    DiamondExpr,
    IfExpr,
    CaseExpr,
    QuantifiedExpr,
    Allocator,
    QualExpr,
    AttributeRef,
    RaiseExpression,
    Prefix,
    NamePrefix,
    Identifier,
    StringLiteral,
    EnumIdentifier,
    CharLiteral,
    NumLiteral,
    NullLiteral,
    Attribute,
}

/// Expression
///
/// Closed hierarchy of expression nodes. Every child is owned by exactly one parent.
#[derive(Debug, Clone)]
pub enum Expr {
    UnOp(UnOp),
    BinOp(BinOp),
    Membership(MembershipExpr),
    Aggregate(Aggregate),
    Call(CallExpr),
    AccessDeref(AccessDeref),
    Diamond(DiamondExpr),
    If(IfExpr),
    Case(CaseExpr),
    Quantified(QuantifiedExpr),
    Allocator(Allocator),
    Qual(QualExpr),
    AttributeRef(AttributeRef),
    Raise(RaiseExpression),
    Prefix(Prefix),
    Name(BaseName),
    SingleTok(SingleTokNode),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::UnOp(_) => ExprType::UnOp,
            Expr::BinOp(_) => ExprType::BinOp,
            Expr::Membership(_) => ExprType::MembershipExpr,
            Expr::Aggregate(_) => ExprType::Aggregate,
            Expr::Call(_) => ExprType::CallExpr,
            Expr::AccessDeref(_) => ExprType::AccessDeref,
            Expr::Diamond(_) => ExprType::DiamondExpr,
            Expr::If(_) => ExprType::IfExpr,
            Expr::Case(_) => ExprType::CaseExpr,
            Expr::Quantified(_) => ExprType::QuantifiedExpr,
            Expr::Allocator(_) => ExprType::Allocator,
            Expr::Qual(_) => ExprType::QualExpr,
            Expr::AttributeRef(_) => ExprType::AttributeRef,
            Expr::Raise(_) => ExprType::RaiseExpression,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Name(BaseName::NamePrefix(_)) => ExprType::NamePrefix,
            Expr::Name(BaseName::BaseId(id)) => match id.kind {
                BaseIdKind::Identifier => ExprType::Identifier,
                BaseIdKind::StringLiteral => ExprType::StringLiteral,
                BaseIdKind::EnumIdentifier => ExprType::EnumIdentifier,
            },
            Expr::SingleTok(node) => match node.kind {
                SingleTokKind::CharLiteral => ExprType::CharLiteral,
                SingleTokKind::NumLiteral => ExprType::NumLiteral,
                SingleTokKind::NullLiteral => ExprType::NullLiteral,
                SingleTokKind::Attribute => ExprType::Attribute,
            },
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::UnOp(node) => &node.span,
            Expr::BinOp(node) => &node.span,
            Expr::Membership(node) => &node.span,
            Expr::Aggregate(node) => &node.span,
            Expr::Call(node) => &node.span,
            Expr::AccessDeref(node) => &node.span,
            Expr::Diamond(node) => &node.span,
            Expr::If(node) => &node.span,
            Expr::Case(node) => &node.span,
            Expr::Quantified(node) => &node.span,
            Expr::Allocator(node) => &node.span,
            Expr::Qual(node) => &node.span,
            Expr::AttributeRef(node) => &node.span,
            Expr::Raise(node) => &node.span,
            Expr::Prefix(node) => &node.span,
            Expr::Name(name) => name.get_span(),
            Expr::SingleTok(node) => &node.token.span,
        }
    }

    /// The name-resolution view of this expression, for `BaseName` variants.
    pub fn as_name(&self) -> Option<&BaseName> {
        match self {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Whether the node is one of the range-producing `BinOp(ellipsis)` forms.
    pub fn is_range(&self) -> bool {
        matches!(self, Expr::BinOp(bin_op) if bin_op.op == super::ops::Op::Ellipsis)
    }
}
