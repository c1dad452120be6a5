//! Source text re-serialization.
//!
//! `Display for Expr` prints Ada source that parses back to the same tree.
//! Compound operands are always parenthesized, since parentheses leave no
//! node behind. Conditional expressions carry their own parentheses.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::Expr,
    expressions::{AggregateContents, CallSuffix, Choice, Designator, IterSource, LoopSpec},
    names::BaseName,
    ops::Op,
};

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::UnOp(node) => {
                match node.op {
                    Op::Abs | Op::Not => write!(f, "{} ", node.op)?,
                    _ => write!(f, "{}", node.op)?,
                }
                write_operand(f, &node.operand)
            }
            Expr::BinOp(node) => {
                write_operand(f, &node.left)?;
                write!(f, " {} ", node.op)?;
                write_operand(f, &node.right)
            }
            Expr::Membership(node) => {
                write_operand(f, &node.expr)?;
                write!(f, " {} ", node.op)?;
                write_choices(f, &node.choices)
            }
            Expr::Aggregate(node) => {
                write!(f, "(")?;
                if let Some(ancestor) = &node.ancestor_expr {
                    write!(f, "{} with ", ancestor)?;
                }
                match &node.content {
                    AggregateContents::NullRecord(_) => write!(f, "null record")?,
                    AggregateContents::Fields(content) => {
                        for (i, assoc) in content.fields.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write_designator(f, &assoc.designator)?;
                            write!(f, "{}", assoc.expr)?;
                        }
                    }
                }
                write!(f, ")")
            }
            Expr::Call(node) => {
                write!(f, "{} ", node.name)?;
                write_call_suffix(f, &node.arguments)
            }
            Expr::AccessDeref(_) => write!(f, "all"),
            Expr::Diamond(_) => write!(f, "<>"),
            Expr::If(node) => {
                write!(f, "(if {} then {}", node.cond, node.then)?;
                for part in &node.elsif_list {
                    write!(f, " elsif {} then {}", part.cond, part.then)?;
                }
                if let Some(else_expr) = &node.else_expr {
                    write!(f, " else {}", else_expr)?;
                }
                write!(f, ")")
            }
            Expr::Case(node) => {
                write!(f, "(case {} is", node.expr)?;
                for (i, alt) in node.alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " when ")?;
                    write_choices(f, &alt.choices)?;
                    write!(f, " => {}", alt.expr)?;
                }
                write!(f, ")")
            }
            Expr::Quantified(node) => {
                let LoopSpec::For(spec) = &node.loop_spec;
                write!(
                    f,
                    "(for {} {} {} ",
                    node.quantifier.spelling(),
                    spec.id.token,
                    spec.iter_kind.spelling()
                )?;
                if spec.is_reverse {
                    write!(f, "reverse ")?;
                }
                match &spec.iter_expr {
                    IterSource::Subtype(subtype) => write!(
                        f,
                        "{} range {}",
                        subtype.subtype_mark, subtype.constraint
                    )?,
                    IterSource::Expr(expr) => write!(f, "{}", expr)?,
                }
                write!(f, " => {})", node.expr)
            }
            Expr::Allocator(node) => {
                write!(f, "new ")?;
                if let Some(subpool) = &node.subpool {
                    write!(f, "({}) ", subpool)?;
                }
                write!(f, "{}", node.inner)
            }
            Expr::Qual(node) => match node.suffix.as_ref() {
                Expr::Aggregate(_) => write!(f, "{}'{}", node.prefix, node.suffix),
                suffix => write!(f, "{}'({})", node.prefix, suffix),
            },
            Expr::AttributeRef(node) => {
                write!(f, "{}'{}", node.prefix, node.attribute)?;
                if let Some(args) = &node.args {
                    write!(f, " ")?;
                    write_call_suffix(f, args)?;
                }
                Ok(())
            }
            Expr::Raise(node) => {
                write!(f, "raise")?;
                if let Some(name) = &node.exception_name {
                    write!(f, " {}", name)?;
                }
                if let Some(message) = &node.message {
                    write!(f, " with {}", message)?;
                }
                Ok(())
            }
            Expr::Prefix(node) => write!(f, "{}.{}", node.prefix, node.suffix),
            Expr::Name(name) => write_name(f, name),
            Expr::SingleTok(node) => write!(f, "{}", node.token),
        }
    }
}

fn needs_parens(expr: &Expr) -> bool {
    match expr {
        Expr::BinOp(_) => !expr.is_range(),
        Expr::UnOp(_) | Expr::Membership(_) | Expr::Raise(_) => true,
        _ => false,
    }
}

fn write_operand(f: &mut Formatter<'_>, expr: &Expr) -> Result {
    if needs_parens(expr) {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn write_name(f: &mut Formatter<'_>, name: &BaseName) -> Result {
    match name {
        BaseName::NamePrefix(name_prefix) => {
            write_name(f, &name_prefix.prefix)?;
            write!(f, ".{}", name_prefix.suffix.token)
        }
        BaseName::BaseId(id) => write!(f, "{}", id.token),
    }
}

fn write_choices(f: &mut Formatter<'_>, choices: &[Choice]) -> Result {
    for (i, choice) in choices.iter().enumerate() {
        if i > 0 {
            write!(f, " | ")?;
        }
        match choice {
            Choice::Expr(expr) => write_operand(f, expr)?,
            Choice::Others(_) => write!(f, "others")?,
        }
    }
    Ok(())
}

/// Writes `designator => `, or nothing for positional associations.
fn write_designator(f: &mut Formatter<'_>, designator: &Option<Designator>) -> Result {
    match designator {
        None => Ok(()),
        Some(Designator::Name(id)) => write!(f, "{} => ", id.token),
        Some(Designator::Others(_)) => write!(f, "others => "),
        Some(Designator::Choices(member)) => {
            write_choices(f, &member.choice_list)?;
            write!(f, " => ")
        }
    }
}

fn write_call_suffix(f: &mut Formatter<'_>, suffix: &CallSuffix) -> Result {
    match suffix {
        CallSuffix::Range(range) => write!(f, "({})", range),
        CallSuffix::Params(list) => {
            write!(f, "(")?;
            for (i, assoc) in list.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_designator(f, &assoc.designator)?;
                write!(f, "{}", assoc.expr)?;
            }
            write!(f, ")")
        }
    }
}
