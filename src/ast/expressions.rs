use crate::{lexer::tokens::Token, Span};

use super::{
    ast::Expr,
    names::BaseId,
    ops::{IterType, Op, Quantifier},
};

// LEAVES

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleTokKind {
    CharLiteral,
    NumLiteral,
    NullLiteral,
    /// Attribute designator spelled with a reserved word (`access`, `delta`, `digits`, `mod`, `range`)
    Attribute,
}

/// Single Token Node
/// Leaf expression made of exactly one token.
#[derive(Debug, Clone)]
pub struct SingleTokNode {
    pub kind: SingleTokKind,
    pub token: Token,
}

/// Access Dereference
/// The `all` selector of `Ptr.all`, or `all` used as a direct name.
#[derive(Debug, Clone)]
pub struct AccessDeref {
    pub span: Span,
}

/// Diamond Expression
/// The `<>` default-value placeholder.
#[derive(Debug, Clone)]
pub struct DiamondExpr {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct OthersDesignator {
    pub span: Span,
}

// OPERATORS

/// Unary Operation
/// `+`, `-`, `abs` and `not` applied to one operand.
#[derive(Debug, Clone)]
pub struct UnOp {
    pub op: Op,
    pub operand: Box<Expr>,
    pub span: Span,
}

impl UnOp {
    pub fn new(op: Op, operand: Expr, op_span: &Span) -> Self {
        UnOp {
            span: Span::join(op_span, operand.get_span()),
            op,
            operand: Box::new(operand),
        }
    }
}

/// Binary Operation
/// Every infix operator, including the `..` of discrete ranges.
#[derive(Debug, Clone)]
pub struct BinOp {
    pub left: Box<Expr>,
    pub op: Op,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinOp {
    pub fn new(left: Expr, op: Op, right: Expr) -> Self {
        BinOp {
            span: Span::join(left.get_span(), right.get_span()),
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Membership Test
/// `X in A | B .. C` and `X not in ...`. The choices are never a further relation.
#[derive(Debug, Clone)]
pub struct MembershipExpr {
    pub expr: Box<Expr>,
    pub op: Op,
    pub choices: Vec<Choice>,
    pub span: Span,
}

// CHOICES AND DESIGNATORS

/// One entry of a `|`-separated choice list: a discrete range, an expression or `others`.
#[derive(Debug, Clone)]
pub enum Choice {
    Expr(Expr),
    Others(OthersDesignator),
}

impl Choice {
    pub fn get_span(&self) -> &Span {
        match self {
            Choice::Expr(expr) => expr.get_span(),
            Choice::Others(others) => &others.span,
        }
    }
}

/// Aggregate Member
/// Choice list used as an aggregate designator (`1 | 3 => ...`).
#[derive(Debug, Clone)]
pub struct AggregateMember {
    pub choice_list: Vec<Choice>,
    pub span: Span,
}

/// The part of an association before `=>`.
#[derive(Debug, Clone)]
pub enum Designator {
    Name(BaseId),
    Others(OthersDesignator),
    Choices(AggregateMember),
}

impl Designator {
    pub fn get_span(&self) -> &Span {
        match self {
            Designator::Name(id) => &id.token.span,
            Designator::Others(others) => &others.span,
            Designator::Choices(member) => &member.span,
        }
    }
}

// CALLS AND NAMES

/// Parameter Association
/// Positional (`designator` is `None`) or named argument of a call-like suffix.
#[derive(Debug, Clone)]
pub struct ParamAssoc {
    pub designator: Option<Designator>,
    pub expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ParamList {
    pub params: Vec<ParamAssoc>,
    pub span: Span,
}

/// Parenthesized suffix of a call, index, slice or conversion.
#[derive(Debug, Clone)]
pub enum CallSuffix {
    /// Slice form, `A (1 .. 3)`
    Range(Box<Expr>),
    Params(ParamList),
}

impl CallSuffix {
    pub fn get_span(&self) -> &Span {
        match self {
            CallSuffix::Range(range) => range.get_span(),
            CallSuffix::Params(list) => &list.span,
        }
    }
}

/// Call Expression
/// `Name (...)`. Function calls, array indexing, slicing and type conversions all
/// share this node; telling them apart needs semantic information.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub name: Box<Expr>,
    pub arguments: CallSuffix,
    pub span: Span,
}

/// Selected Component
/// `Prefix.Suffix` where the pair cannot be folded into a `NamePrefix`.
#[derive(Debug, Clone)]
pub struct Prefix {
    pub prefix: Box<Expr>,
    pub suffix: Box<Expr>,
    pub span: Span,
}

/// Attribute Reference
/// `X'First`, `X'Range (2)`.
#[derive(Debug, Clone)]
pub struct AttributeRef {
    pub prefix: Box<Expr>,
    pub attribute: Box<Expr>,
    pub args: Option<CallSuffix>,
    pub span: Span,
}

/// Qualified Expression
/// `T'(Expr)` or `T'(Aggregate)`.
#[derive(Debug, Clone)]
pub struct QualExpr {
    pub prefix: Box<Expr>,
    pub suffix: Box<Expr>,
    pub span: Span,
}

// AGGREGATES

#[derive(Debug, Clone)]
pub struct AggregateAssoc {
    pub designator: Option<Designator>,
    pub expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct AggregateContent {
    pub fields: Vec<AggregateAssoc>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum AggregateContents {
    Fields(AggregateContent),
    /// `null record`, an aggregate with no content
    NullRecord(Span),
}

/// Aggregate
/// `(1, 2, others => 0)`, `(Parent with X => 1)`, `(null record)`.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub ancestor_expr: Option<Box<Expr>>,
    pub content: AggregateContents,
    pub span: Span,
}

// CONDITIONAL AND QUANTIFIED

#[derive(Debug, Clone)]
pub struct ElsifExprPart {
    pub cond: Box<Expr>,
    pub then: Box<Expr>,
    pub span: Span,
}

/// If Expression
/// `if C then A elsif D then B else E`.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub cond: Box<Expr>,
    pub then: Box<Expr>,
    pub elsif_list: Vec<ElsifExprPart>,
    pub else_expr: Option<Box<Expr>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CaseExprAlternative {
    pub choices: Vec<Choice>,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Case Expression
/// `case X is when A => 1, when others => 2`.
#[derive(Debug, Clone)]
pub struct CaseExpr {
    pub expr: Box<Expr>,
    pub alternatives: Vec<CaseExprAlternative>,
    pub span: Span,
}

/// Subtype mark with a range constraint, `Integer range 1 .. 10`.
#[derive(Debug, Clone)]
pub struct ConstrainedSubtype {
    pub subtype_mark: Box<Expr>,
    pub constraint: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum IterSource {
    Subtype(ConstrainedSubtype),
    Expr(Box<Expr>),
}

impl IterSource {
    pub fn get_span(&self) -> &Span {
        match self {
            IterSource::Subtype(subtype) => &subtype.span,
            IterSource::Expr(expr) => expr.get_span(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForLoopSpec {
    pub id: BaseId,
    pub iter_kind: IterType,
    pub is_reverse: bool,
    pub iter_expr: IterSource,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum LoopSpec {
    For(ForLoopSpec),
}

/// Quantified Expression
/// `for all I in A'Range => A (I) > 0`.
#[derive(Debug, Clone)]
pub struct QuantifiedExpr {
    pub quantifier: Quantifier,
    pub loop_spec: LoopSpec,
    pub expr: Box<Expr>,
    pub span: Span,
}

// OTHERS

/// Allocator
/// `new T`, `new (Pool) T'(...)`.
#[derive(Debug, Clone)]
pub struct Allocator {
    pub subpool: Option<Box<Expr>>,
    pub inner: Box<Expr>,
    pub span: Span,
}

/// Raise Expression
/// `raise`, `raise E`, `raise E with "message"`.
#[derive(Debug, Clone)]
pub struct RaiseExpression {
    pub exception_name: Option<Box<Expr>>,
    pub message: Option<Box<Expr>>,
    pub span: Span,
}
