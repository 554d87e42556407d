//! Condition tree for WHERE clauses.
//!
//! A [`Condition`] is either a leaf (comparison, NULL test, pattern match,
//! set membership, template, raw fragment) or a group of child conditions
//! joined with AND/OR. Building a condition walks the tree once, left to
//! right, and produces the SQL fragment together with the argument list.
//!
//! The fragment contains one `?` per argument and the Nth `?` belongs to the
//! Nth argument. Every variant upholds this, so it holds for any tree built
//! from them. The only text that escapes the count is caller-supplied literal
//! SQL: [`Condition::raw`] fragments and [`Condition::like`] patterns.
//!
//! # Example
//! ```
//! use sqb::{Condition, Value};
//!
//! let cond = Condition::or([
//!     Condition::eq("a", 1),
//!     Condition::in_list("b", [2, 3]),
//! ]);
//! let (sql, args) = cond.build();
//! assert_eq!(sql, "(a=?) OR (b IN (?,?))");
//! assert_eq!(args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
//! ```

use crate::error::{SqbError, SqbResult};
use crate::value::Value;

/// Binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
        }
    }
}

/// Boolean connective of a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    And,
    Or,
}

impl Joiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

/// A node of the condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `<expr><op>?`
    Compare {
        expr: String,
        op: CompareOp,
        value: Value,
    },

    /// `<expr> IS NULL` / `<expr> IS NOT NULL`
    NullCheck { expr: String, is_null: bool },

    /// `<expr> [NOT] LIKE '<pattern>'` with the pattern inlined verbatim.
    Like {
        expr: String,
        pattern: String,
        negated: bool,
    },

    /// `<expr> [NOT] LIKE ?` with the pattern bound as an argument.
    LikeBound {
        expr: String,
        pattern: Value,
        negated: bool,
    },

    /// `<expr> [NOT] IN (?,?,...)`, one placeholder per value.
    InList {
        expr: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// Children joined by AND/OR, each wrapped in parentheses.
    Group {
        joiner: Joiner,
        children: Vec<Condition>,
    },

    /// `NOT (<inner>)`
    Not(Box<Condition>),

    /// Caller SQL whose `?` count was checked against `values` at construction.
    Template { sql: String, values: Vec<Value> },

    /// Caller SQL without arguments.
    Raw(String),
}

impl Condition {
    // ==================== Comparisons ====================

    /// `expr=?`
    pub fn eq(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Eq, value)
    }

    /// `expr<>?`
    pub fn ne(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Ne, value)
    }

    /// `expr<?`
    pub fn lt(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Lt, value)
    }

    /// `expr<=?`
    pub fn lte(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Lte, value)
    }

    /// `expr>?`
    pub fn gt(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Gt, value)
    }

    /// `expr>=?`
    pub fn gte(expr: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(expr, CompareOp::Gte, value)
    }

    pub fn compare(expr: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Condition::Compare {
            expr: expr.into(),
            op,
            value: value.into(),
        }
    }

    // ==================== NULL checks ====================

    pub fn is_null(expr: impl Into<String>) -> Self {
        Condition::NullCheck {
            expr: expr.into(),
            is_null: true,
        }
    }

    pub fn is_not_null(expr: impl Into<String>) -> Self {
        Condition::NullCheck {
            expr: expr.into(),
            is_null: false,
        }
    }

    // ==================== Pattern matching ====================

    /// `expr LIKE '<pattern>'`
    ///
    /// # Safety
    ///
    /// The pattern is written into the SQL text as-is: no escaping, no binding.
    /// Never pass user input here; use [`Condition::like_bound`] instead.
    pub fn like(expr: impl Into<String>, pattern: impl Into<String>) -> Self {
        Condition::Like {
            expr: expr.into(),
            pattern: pattern.into(),
            negated: false,
        }
    }

    /// `expr NOT LIKE '<pattern>'`
    ///
    /// # Safety
    ///
    /// Same caveat as [`Condition::like`]: the pattern is inlined unescaped.
    pub fn not_like(expr: impl Into<String>, pattern: impl Into<String>) -> Self {
        Condition::Like {
            expr: expr.into(),
            pattern: pattern.into(),
            negated: true,
        }
    }

    /// `expr LIKE ?` with the pattern bound as an argument.
    pub fn like_bound(expr: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Condition::LikeBound {
            expr: expr.into(),
            pattern: pattern.into(),
            negated: false,
        }
    }

    /// `expr NOT LIKE ?` with the pattern bound as an argument.
    pub fn not_like_bound(expr: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Condition::LikeBound {
            expr: expr.into(),
            pattern: pattern.into(),
            negated: true,
        }
    }

    // ==================== Set membership ====================

    /// `expr IN (?,?,...)`
    ///
    /// An empty list yields `expr IN ()`, which matches nothing.
    pub fn in_list<I, T>(expr: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Condition::InList {
            expr: expr.into(),
            values: crate::value::values(values),
            negated: false,
        }
    }

    /// `expr NOT IN (?,?,...)`
    pub fn not_in<I, T>(expr: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Condition::InList {
            expr: expr.into(),
            values: crate::value::values(values),
            negated: true,
        }
    }

    /// `expr IN (...)` from an opaque sequence value.
    ///
    /// Fails with [`SqbError::TypeMismatch`] unless `values` is a list, a JSON
    /// array or a byte string (one argument per byte).
    pub fn in_value(expr: impl Into<String>, values: impl Into<Value>) -> SqbResult<Self> {
        Ok(Condition::InList {
            expr: expr.into(),
            values: values.into().into_list()?,
            negated: false,
        })
    }

    /// `expr NOT IN (...)` from an opaque sequence value.
    pub fn not_in_value(expr: impl Into<String>, values: impl Into<Value>) -> SqbResult<Self> {
        Ok(Condition::InList {
            expr: expr.into(),
            values: values.into().into_list()?,
            negated: true,
        })
    }

    // ==================== Groups ====================

    /// AND group: `(c1) AND (c2) AND ...`
    pub fn and(children: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Group {
            joiner: Joiner::And,
            children: children.into_iter().collect(),
        }
    }

    /// OR group: `(c1) OR (c2) OR ...`
    pub fn or(children: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Group {
            joiner: Joiner::Or,
            children: children.into_iter().collect(),
        }
    }

    /// `NOT (inner)`
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    // ==================== Escape hatches ====================

    /// Caller SQL with `?` placeholders and matching values.
    ///
    /// # Example
    /// ```
    /// use sqb::Condition;
    ///
    /// let cond = Condition::template("a = ? OR b = ?", [1, 2])?;
    /// assert_eq!(cond.build().0, "a = ? OR b = ?");
    /// assert!(Condition::template("a = ?", [1, 2]).is_err());
    /// # Ok::<(), sqb::SqbError>(())
    /// ```
    pub fn template<I, T>(sql: impl Into<String>, values: I) -> SqbResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let sql = sql.into();
        let values = crate::value::values(values);
        let placeholders = count_placeholders(&sql);
        if placeholders != values.len() {
            return Err(SqbError::PlaceholderMismatch {
                sql,
                placeholders,
                values: values.len(),
            });
        }
        Ok(Condition::Template { sql, values })
    }

    /// Caller SQL without arguments.
    ///
    /// # Safety
    ///
    /// Inlined verbatim. Be careful with SQL injection.
    pub fn raw(sql: impl Into<String>) -> Self {
        Condition::Raw(sql.into())
    }

    // ==================== Build ====================

    /// Whether this condition produces no SQL text.
    ///
    /// Empty groups (or groups of empty groups) are skipped by their parent
    /// and by WHERE clauses.
    pub fn is_empty(&self) -> bool {
        match self {
            Condition::Group { children, .. } => children.iter().all(Condition::is_empty),
            Condition::Not(inner) => inner.is_empty(),
            Condition::Raw(sql) => sql.is_empty(),
            Condition::Template { sql, .. } => sql.is_empty(),
            _ => false,
        }
    }

    /// Build the SQL fragment and its positional arguments.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut args = Vec::new();
        self.write_to(&mut sql, &mut args);
        (sql, args)
    }

    /// Append this condition to `sql`, pushing its arguments in the same order
    /// as the placeholders it writes.
    pub(crate) fn write_to(&self, sql: &mut String, args: &mut Vec<Value>) {
        match self {
            Condition::Compare { expr, op, value } => {
                sql.push_str(expr);
                sql.push_str(op.as_str());
                sql.push('?');
                args.push(value.clone());
            }
            Condition::NullCheck { expr, is_null } => {
                sql.push_str(expr);
                sql.push_str(if *is_null { " IS NULL" } else { " IS NOT NULL" });
            }
            Condition::Like {
                expr,
                pattern,
                negated,
            } => {
                sql.push_str(expr);
                sql.push_str(if *negated { " NOT LIKE '" } else { " LIKE '" });
                sql.push_str(pattern);
                sql.push('\'');
            }
            Condition::LikeBound {
                expr,
                pattern,
                negated,
            } => {
                sql.push_str(expr);
                sql.push_str(if *negated { " NOT LIKE ?" } else { " LIKE ?" });
                args.push(pattern.clone());
            }
            Condition::InList {
                expr,
                values,
                negated,
            } => {
                sql.push_str(expr);
                sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    sql.push('?');
                    args.push(v.clone());
                }
                sql.push(')');
            }
            Condition::Group { joiner, children } => {
                write_group(*joiner, children, sql, args);
            }
            Condition::Not(inner) => {
                if inner.is_empty() {
                    return;
                }
                sql.push_str("NOT (");
                inner.write_to(sql, args);
                sql.push(')');
            }
            Condition::Template { sql: tpl, values } => {
                sql.push_str(tpl);
                args.extend(values.iter().cloned());
            }
            Condition::Raw(raw) => sql.push_str(raw),
        }
    }
}

/// Write `(c1) <joiner> (c2) ...`, skipping empty children.
///
/// No parentheses go around the group itself; a parent group (or the WHERE
/// clause) adds them when it wraps this one as a child.
pub(crate) fn write_group(
    joiner: Joiner,
    children: &[Condition],
    sql: &mut String,
    args: &mut Vec<Value>,
) {
    let mut first = true;
    for child in children.iter().filter(|c| !c.is_empty()) {
        if !first {
            sql.push(' ');
            sql.push_str(joiner.as_str());
            sql.push(' ');
        }
        sql.push('(');
        child.write_to(sql, args);
        sql.push(')');
        first = false;
    }
}

/// Number of `?` characters in `sql`.
pub fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}
