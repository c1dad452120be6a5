//! Structural dump of expression trees.
//!
//! The dump names every node and operator tag, ignoring spans and
//! parentheses, so two trees with equal dumps have the same shape:
//!
//! ```text
//! 1 + 2 * 3  =>  BinOp(Num(1), plus, BinOp(Num(2), mult, Num(3)))
//! ```

use super::{
    ast::Expr,
    expressions::{
        AggregateContents, CallSuffix, Choice, Designator, IterSource, LoopSpec, SingleTokKind,
    },
    names::{BaseId, BaseIdKind, BaseName},
};

impl Expr {
    pub fn dump(&self) -> String {
        match self {
            Expr::UnOp(node) => format!("UnOp({}, {})", node.op.name(), node.operand.dump()),
            Expr::BinOp(node) => format!(
                "BinOp({}, {}, {})",
                node.left.dump(),
                node.op.name(),
                node.right.dump()
            ),
            Expr::Membership(node) => format!(
                "MembershipExpr({}, {}, {})",
                node.expr.dump(),
                node.op.name(),
                dump_choices(&node.choices)
            ),
            Expr::Aggregate(node) => {
                let content = match &node.content {
                    AggregateContents::Fields(content) => format!(
                        "AggregateContent[{}]",
                        content
                            .fields
                            .iter()
                            .map(|assoc| format!(
                                "AggregateAssoc({}, {})",
                                dump_designator(&assoc.designator),
                                assoc.expr.dump()
                            ))
                            .collect::<Vec<String>>()
                            .join(", ")
                    ),
                    AggregateContents::NullRecord(_) => String::from("NullRecord"),
                };

                format!("Aggregate({}, {})", dump_optional(&node.ancestor_expr), content)
            }
            Expr::Call(node) => format!(
                "CallExpr({}, {})",
                node.name.dump(),
                dump_call_suffix(&node.arguments)
            ),
            Expr::AccessDeref(_) => String::from("AccessDeref"),
            Expr::Diamond(_) => String::from("DiamondExpr"),
            Expr::If(node) => format!(
                "IfExpr({}, {}, [{}], {})",
                node.cond.dump(),
                node.then.dump(),
                node.elsif_list
                    .iter()
                    .map(|part| format!("ElsifExprPart({}, {})", part.cond.dump(), part.then.dump()))
                    .collect::<Vec<String>>()
                    .join(", "),
                dump_optional(&node.else_expr)
            ),
            Expr::Case(node) => format!(
                "CaseExpr({}, [{}])",
                node.expr.dump(),
                node.alternatives
                    .iter()
                    .map(|alt| format!(
                        "CaseExprAlternative({}, {})",
                        dump_choices(&alt.choices),
                        alt.expr.dump()
                    ))
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Expr::Quantified(node) => {
                let LoopSpec::For(spec) = &node.loop_spec;
                let iter_kind = if spec.is_reverse {
                    format!("{} reverse", spec.iter_kind.spelling())
                } else {
                    spec.iter_kind.spelling().to_string()
                };
                let source = match &spec.iter_expr {
                    IterSource::Subtype(subtype) => format!(
                        "ConstrainedSubtype({}, {})",
                        subtype.subtype_mark.dump(),
                        subtype.constraint.dump()
                    ),
                    IterSource::Expr(expr) => expr.dump(),
                };

                format!(
                    "QuantifiedExpr({}, ForLoopSpec({}, {}, {}), {})",
                    node.quantifier.spelling(),
                    dump_base_id(&spec.id),
                    iter_kind,
                    source,
                    node.expr.dump()
                )
            }
            Expr::Allocator(node) => format!(
                "Allocator({}, {})",
                dump_optional(&node.subpool),
                node.inner.dump()
            ),
            Expr::Qual(node) => format!("QualExpr({}, {})", node.prefix.dump(), node.suffix.dump()),
            Expr::AttributeRef(node) => format!(
                "AttributeRef({}, {}, {})",
                node.prefix.dump(),
                node.attribute.dump(),
                node.args
                    .as_ref()
                    .map(dump_call_suffix)
                    .unwrap_or_else(|| String::from("None"))
            ),
            Expr::Raise(node) => format!(
                "RaiseExpression({}, {})",
                dump_optional(&node.exception_name),
                dump_optional(&node.message)
            ),
            Expr::Prefix(node) => format!("Prefix({}, {})", node.prefix.dump(), node.suffix.dump()),
            Expr::Name(name) => dump_name(name),
            Expr::SingleTok(node) => match node.kind {
                SingleTokKind::CharLiteral => format!("Chr({})", node.token.value),
                SingleTokKind::NumLiteral => format!("Num({})", node.token.value),
                SingleTokKind::NullLiteral => String::from("Null"),
                SingleTokKind::Attribute => format!("Attr({})", node.token.value),
            },
        }
    }
}

fn dump_name(name: &BaseName) -> String {
    match name {
        BaseName::NamePrefix(name_prefix) => format!(
            "NamePrefix({}, {})",
            dump_name(&name_prefix.prefix),
            dump_base_id(&name_prefix.suffix)
        ),
        BaseName::BaseId(id) => dump_base_id(id),
    }
}

fn dump_base_id(id: &BaseId) -> String {
    match id.kind {
        BaseIdKind::Identifier => format!("Id({})", id.token.value),
        BaseIdKind::StringLiteral => format!("Str({})", id.token.value),
        BaseIdKind::EnumIdentifier => format!("EnumId({})", id.token.value),
    }
}

fn dump_optional(expr: &Option<Box<Expr>>) -> String {
    match expr {
        Some(expr) => expr.dump(),
        None => String::from("None"),
    }
}

fn dump_choices(choices: &[Choice]) -> String {
    let choices = choices
        .iter()
        .map(|choice| match choice {
            Choice::Expr(expr) => expr.dump(),
            Choice::Others(_) => String::from("OthersDesignator"),
        })
        .collect::<Vec<String>>();

    format!("[{}]", choices.join(", "))
}

fn dump_designator(designator: &Option<Designator>) -> String {
    match designator {
        None => String::from("None"),
        Some(Designator::Name(id)) => dump_base_id(id),
        Some(Designator::Others(_)) => String::from("OthersDesignator"),
        Some(Designator::Choices(member)) => {
            format!("AggregateMember{}", dump_choices(&member.choice_list))
        }
    }
}

fn dump_call_suffix(suffix: &CallSuffix) -> String {
    match suffix {
        CallSuffix::Range(range) => range.dump(),
        CallSuffix::Params(list) => format!(
            "ParamList[{}]",
            list.params
                .iter()
                .map(|assoc| format!(
                    "ParamAssoc({}, {})",
                    dump_designator(&assoc.designator),
                    assoc.expr.dump()
                ))
                .collect::<Vec<String>>()
                .join(", ")
        ),
    }
}
