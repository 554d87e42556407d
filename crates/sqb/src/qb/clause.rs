//! Clause state shared by the statement builders.
//!
//! - [`WhereClause`]: top-level conditions, implicitly ANDed (SELECT/UPDATE/DELETE)
//! - [`Assignments`]: ordered column assignments, bound or raw (INSERT/UPDATE)
//! - [`Joins`]: ordered JOIN fragments (SELECT)

use crate::condition::{Condition, Joiner, write_group};
use crate::ident::QuoteStyle;
use crate::value::Value;

/// Top-level WHERE conditions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WhereClause {
    conditions: Vec<Condition>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no condition would produce any SQL text.
    pub fn is_empty(&self) -> bool {
        self.conditions.iter().all(Condition::is_empty)
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn extend(&mut self, conditions: impl IntoIterator<Item = Condition>) {
        self.conditions.extend(conditions);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Build the clause body (without the `WHERE` keyword).
    ///
    /// Identical to building `Condition::and(conditions)`.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut args = Vec::new();
        write_group(Joiner::And, &self.conditions, &mut sql, &mut args);
        (sql, args)
    }

    /// Append ` WHERE ...` if there is anything to filter on.
    pub(crate) fn write_to(&self, sql: &mut String, args: &mut Vec<Value>) {
        if self.is_empty() {
            return;
        }
        sql.push_str(" WHERE ");
        write_group(Joiner::And, &self.conditions, sql, args);
    }
}

/// Right-hand side of a column assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum Assignment {
    /// Emitted as `?`, value appended to the arguments
    Bound(Value),
    /// Emitted verbatim (e.g. `NOW()`), no argument
    Raw(String),
}

/// Ordered column assignments for INSERT and UPDATE.
///
/// Columns keep the order in which they were first set. Setting a column
/// again replaces its assignment in place, so a column is never emitted twice
/// and never both bound and raw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    entries: Vec<(String, Assignment)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, column: &str) -> Option<&Assignment> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Assignment)> {
        self.entries.iter().map(|(c, a)| (c.as_str(), a))
    }

    /// Set a column to a bound value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assign(column.into(), Assignment::Bound(value.into()));
    }

    /// Set a column to a raw SQL expression.
    pub fn set_raw(&mut self, column: impl Into<String>, expr: impl Into<String>) {
        self.assign(column.into(), Assignment::Raw(expr.into()));
    }

    fn assign(&mut self, column: String, assignment: Assignment) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = assignment,
            None => self.entries.push((column, assignment)),
        }
    }

    /// Write `col=?,col=raw,...` for UPDATE.
    pub(crate) fn write_set_list(&self, quote: QuoteStyle, sql: &mut String, args: &mut Vec<Value>) {
        for (i, (column, assignment)) in self.entries.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            quote.write_ident(sql, column);
            sql.push('=');
            write_assignment(assignment, sql, args);
        }
    }

    /// Write `(col,...) VALUES (?,raw,...)` for INSERT.
    pub(crate) fn write_values_list(
        &self,
        quote: QuoteStyle,
        sql: &mut String,
        args: &mut Vec<Value>,
    ) {
        sql.push_str(" (");
        for (i, (column, _)) in self.entries.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            quote.write_ident(sql, column);
        }
        sql.push_str(") VALUES (");
        for (i, (_, assignment)) in self.entries.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            write_assignment(assignment, sql, args);
        }
        sql.push(')');
    }
}

fn write_assignment(assignment: &Assignment, sql: &mut String, args: &mut Vec<Value>) {
    match assignment {
        Assignment::Bound(value) => {
            sql.push('?');
            args.push(value.clone());
        }
        Assignment::Raw(expr) => sql.push_str(expr),
    }
}

/// Ordered JOIN fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Joins {
    clauses: Vec<String>,
}

impl Joins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Add a complete join fragment, e.g. `LEFT JOIN t4 ON t4.cid = t1.cid`.
    pub fn join(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            self.clauses.push(fragment.to_string());
        }
    }

    pub fn inner_join(&mut self, table: &str, on: &str) {
        self.clauses.push(format!("INNER JOIN {table} ON {on}"));
    }

    pub fn left_join(&mut self, table: &str, on: &str) {
        self.clauses.push(format!("LEFT JOIN {table} ON {on}"));
    }

    pub fn right_join(&mut self, table: &str, on: &str) {
        self.clauses.push(format!("RIGHT JOIN {table} ON {on}"));
    }

    pub(crate) fn write_to(&self, sql: &mut String) {
        for clause in &self.clauses {
            sql.push(' ');
            sql.push_str(clause);
        }
    }
}
