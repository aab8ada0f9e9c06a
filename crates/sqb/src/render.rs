//! SQL rendering.
//!
//! A single recursive walk over the expression tree. Parenthesization is
//! driven by operator precedence: a child is wrapped when its precedence is
//! strictly lower than its parent's, or equal when it sits on the right of a
//! non-associative operator (`-`, `/`).

use std::collections::HashMap;
use std::fmt;

use crate::criterion::{BoolOp, Criterion};
use crate::query::QueryBuilder;
use crate::table::Table;
use crate::term::{ArithOp, Term, TermKind};

/// Precedence classes, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,
    OrXor,
    And,
    Cmp,
    AddSub,
    MulDiv,
    Atom,
}

/// Alias scope for one render pass. Populated only for multi-table queries;
/// standalone terms and single-table queries render references unqualified.
#[derive(Default)]
struct Scope<'a> {
    aliases: HashMap<&'a Table, String>,
}

impl Scope<'_> {
    fn qualifier(&self, table: &Table) -> Option<&str> {
        self.aliases.get(table).map(String::as_str)
    }
}

/// Render a term standalone, without alias scope or SELECT-list alias.
pub(crate) fn term_to_sql(term: &Term) -> String {
    let mut out = String::new();
    write_term(&mut out, &Scope::default(), term, Prec::Lowest, false);
    out
}

/// Render a criterion standalone, without alias scope.
pub(crate) fn criterion_to_sql(criterion: &Criterion) -> String {
    let mut out = String::new();
    write_criterion(&mut out, &Scope::default(), criterion, Prec::Lowest, false);
    out
}

/// Render a full SELECT statement in deterministic clause order.
pub(crate) fn render_query(query: &QueryBuilder) -> String {
    let mut scope = Scope::default();
    if !query.joins.is_empty() {
        scope.aliases.insert(&query.source, "t0".to_string());
        for (index, join) in query.joins.iter().enumerate() {
            scope.aliases.insert(&join.table, format!("t{}", index + 1));
        }
    }

    let mut out = String::from("SELECT ");
    if query.distinct {
        out.push_str("DISTINCT ");
    }
    if query.selects.is_empty() {
        out.push('*');
    } else {
        for (index, term) in query.selects.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            write_term(&mut out, &scope, term, Prec::Lowest, false);
            if let Some(alias) = term.alias() {
                out.push(' ');
                out.push_str(alias);
            }
        }
    }

    out.push_str(" FROM ");
    write_table(&mut out, &scope, &query.source);

    for join in &query.joins {
        out.push(' ');
        out.push_str(join.kind.keyword());
        out.push(' ');
        write_table(&mut out, &scope, &join.table);
        out.push_str(" ON ");
        write_criterion(&mut out, &scope, &join.on, Prec::Lowest, false);
    }

    if !query.wheres.is_empty() {
        out.push_str(" WHERE ");
        // Entries are implicitly AND-combined, so each one renders as an
        // operand of AND when there is more than one.
        let parent = if query.wheres.len() > 1 {
            Prec::And
        } else {
            Prec::Lowest
        };
        for (index, criterion) in query.wheres.iter().enumerate() {
            if index > 0 {
                out.push_str(" AND ");
            }
            write_criterion(&mut out, &scope, criterion, parent, false);
        }
    }

    if !query.group_by.is_empty() {
        out.push_str(" GROUP BY ");
        for (index, term) in query.group_by.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            write_term(&mut out, &scope, term, Prec::Lowest, false);
        }
    }

    if !query.order_by.is_empty() {
        out.push_str(" ORDER BY ");
        for (index, (term, order)) in query.order_by.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            write_term(&mut out, &scope, term, Prec::Lowest, false);
            out.push(' ');
            out.push_str(order.keyword());
        }
    }

    out
}

fn write_table(out: &mut String, scope: &Scope, table: &Table) {
    out.push_str(table.name());
    if let Some(alias) = scope.qualifier(table) {
        out.push(' ');
        out.push_str(alias);
    }
}

fn term_prec(term: &Term) -> Prec {
    match &term.kind {
        TermKind::Arithmetic { op, .. } => match op {
            ArithOp::Add | ArithOp::Sub => Prec::AddSub,
            ArithOp::Mul | ArithOp::Div => Prec::MulDiv,
        },
        // A leading minus binds like subtraction. Without this, a negative
        // literal on the right of `-` would render adjacent hyphens, which
        // SQL parses as a line comment.
        TermKind::Value(v) if v.is_negative() => Prec::AddSub,
        _ => Prec::Atom,
    }
}

fn criterion_prec(criterion: &Criterion) -> Prec {
    match criterion {
        Criterion::BoolOp { op: BoolOp::And, .. } => Prec::And,
        Criterion::BoolOp { .. } => Prec::OrXor,
        _ => Prec::Cmp,
    }
}

/// `strict` marks the right operand of a non-associative parent, where an
/// equal-precedence child still needs parentheses.
fn write_term(out: &mut String, scope: &Scope, term: &Term, parent: Prec, strict: bool) {
    let prec = term_prec(term);
    let wrap = prec < parent || (strict && prec == parent);
    if wrap {
        out.push('(');
    }
    match &term.kind {
        TermKind::Field { table, name } => {
            if let Some(alias) = table.as_ref().and_then(|t| scope.qualifier(t)) {
                out.push_str(alias);
                out.push('.');
            }
            out.push_str(name);
        }
        TermKind::Star { table } => {
            if let Some(alias) = table.as_ref().and_then(|t| scope.qualifier(t)) {
                out.push_str(alias);
                out.push('.');
            }
            out.push('*');
        }
        TermKind::Value(value) => value.write_sql(out),
        TermKind::Arithmetic { op, left, right } => {
            write_term(out, scope, left, prec, false);
            out.push(op.symbol());
            write_term(out, scope, right, prec, op.non_associative());
        }
        TermKind::Function { name, args } => {
            out.push_str(&name.to_uppercase());
            out.push('(');
            for (index, arg) in args.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_term(out, scope, arg, Prec::Lowest, false);
            }
            out.push(')');
        }
        TermKind::Interval { value, unit } => {
            out.push_str("INTERVAL ");
            out.push_str(&value.to_string());
            out.push(' ');
            out.push_str(unit);
        }
        TermKind::Case {
            branches,
            otherwise,
        } => {
            out.push_str("CASE");
            for (when, then) in branches {
                out.push_str(" WHEN ");
                write_criterion(out, scope, when, Prec::Lowest, false);
                out.push_str(" THEN ");
                write_term(out, scope, then, Prec::Lowest, false);
            }
            if let Some(otherwise) = otherwise {
                out.push_str(" ELSE ");
                write_term(out, scope, otherwise, Prec::Lowest, false);
            }
            out.push_str(" END");
        }
    }
    if wrap {
        out.push(')');
    }
}

fn write_criterion(
    out: &mut String,
    scope: &Scope,
    criterion: &Criterion,
    parent: Prec,
    strict: bool,
) {
    let prec = criterion_prec(criterion);
    let wrap = prec < parent || (strict && prec == parent);
    if wrap {
        out.push('(');
    }
    match criterion {
        Criterion::Comparison { op, left, right } => {
            write_term(out, scope, left, Prec::Cmp, false);
            out.push_str(op.symbol());
            write_term(out, scope, right, Prec::Cmp, false);
        }
        Criterion::Between { target, low, high } => {
            write_term(out, scope, target, Prec::Cmp, false);
            out.push_str(" BETWEEN ");
            write_term(out, scope, low, Prec::Cmp, false);
            out.push_str(" AND ");
            write_term(out, scope, high, Prec::Cmp, false);
        }
        Criterion::In { target, candidates } => {
            write_term(out, scope, target, Prec::Cmp, false);
            out.push_str(" IN (");
            for (index, candidate) in candidates.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_term(out, scope, candidate, Prec::Lowest, false);
            }
            out.push(')');
        }
        Criterion::BoolOp { op, left, right } => {
            write_criterion(out, scope, left, prec, false);
            out.push_str(op.keyword());
            write_criterion(out, scope, right, prec, false);
        }
    }
    if wrap {
        out.push(')');
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&term_to_sql(self))
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&criterion_to_sql(self))
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_query(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::table::Table;
    use crate::term::Term;

    #[test]
    fn equal_precedence_on_the_right_of_sub_is_wrapped() {
        let a = Term::field("a");
        let b = Term::field("b");
        let c = Term::field("c");
        assert_eq!(a.sub(b.sub(c)).to_sql(), "a-(b-c)");
    }

    #[test]
    fn equal_precedence_on_the_left_is_not_wrapped() {
        let a = Term::field("a");
        let b = Term::field("b");
        let c = Term::field("c");
        assert_eq!(a.sub(b).sub(c).to_sql(), "a-b-c");
    }

    #[test]
    fn lower_precedence_child_is_wrapped_on_either_side() {
        let a = Term::field("a");
        let b = Term::field("b");
        let c = Term::field("c");
        assert_eq!(
            a.add(b).mul(c.clone()).to_sql(),
            "(a+b)*c"
        );
        assert_eq!(
            c.mul(Term::field("a").add(Term::field("b"))).to_sql(),
            "c*(a+b)"
        );
    }

    #[test]
    fn negative_literal_operands_never_render_adjacent_hyphens() {
        assert_eq!(Term::field("a").sub(-7).to_sql(), "a-(-7)");
        assert_eq!(Term::field("a").mul(-2).to_sql(), "a*(-2)");
        assert_eq!(Term::field("a").add(-7).to_sql(), "a+-7");
        assert_eq!(Term::value(-7).to_sql(), "-7");
    }

    #[test]
    fn or_under_and_is_wrapped() {
        let t = Table::new("customers");
        let criterion = t
            .field("fname")
            .eq("Max")
            .or(t.field("lname").eq("Mustermann"))
            .and(t.field("id").gt(1));
        assert_eq!(
            criterion.to_sql(),
            "(fname='Max' OR lname='Mustermann') AND id>1"
        );
    }

    #[test]
    fn comparison_under_boolean_needs_no_parens() {
        let t = Table::new("customers");
        let criterion = t.field("a").eq(1).and(t.field("b").eq(2));
        assert_eq!(criterion.to_sql(), "a=1 AND b=2");
    }
}
