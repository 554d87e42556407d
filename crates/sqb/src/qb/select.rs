//! SELECT statement builder.

use crate::config::BuildConfig;
use crate::ident::QuoteStyle;
use crate::qb::clause::{Joins, WhereClause};
use crate::qb::statement::Verb;
use crate::qb::traits::{BuiltQuery, SqlQb, finish};

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// SELECT statement builder.
///
/// Clauses are emitted in a fixed order and each one is left out when it has
/// nothing to say:
///
/// `SELECT [DISTINCT] fields FROM table [joins] [WHERE] [GROUP BY] [HAVING] [ORDER BY] [LIMIT] [OFFSET]`
#[derive(Clone, Debug)]
pub struct SelectQb {
    /// Table name
    table: String,
    /// Projection (default `*`)
    fields: String,
    distinct: bool,
    joins: Joins,
    where_clause: WhereClause,
    group_bys: Vec<String>,
    /// HAVING literal
    having: Option<String>,
    order_bys: Vec<(String, Direction)>,
    /// LIMIT, emitted only when > 0
    limit: Option<i64>,
    /// OFFSET, emitted only when > 0
    offset: Option<i64>,
    config: BuildConfig,
}

impl SelectQb {
    /// Create a new SELECT builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            fields: "*".to_string(),
            distinct: false,
            joins: Joins::new(),
            where_clause: WhereClause::new(),
            group_bys: Vec::new(),
            having: None,
            order_bys: Vec::new(),
            limit: None,
            offset: None,
            config: BuildConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the quoting applied to the table name.
    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.config.quote_style = style;
        self
    }

    // ==================== Projection ====================

    /// Set the field list (raw SQL, e.g. `"id, COUNT(*) AS n"`).
    pub fn fields(mut self, fields: &str) -> Self {
        self.fields = fields.to_string();
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn no_distinct(mut self) -> Self {
        self.distinct = false;
        self
    }

    // ==================== JOIN ====================

    /// Add a complete join fragment.
    pub fn join(mut self, fragment: &str) -> Self {
        self.joins.join(fragment);
        self
    }

    pub fn inner_join(mut self, table: &str, on: &str) -> Self {
        self.joins.inner_join(table, on);
        self
    }

    pub fn left_join(mut self, table: &str, on: &str) -> Self {
        self.joins.left_join(table, on);
        self
    }

    pub fn right_join(mut self, table: &str, on: &str) -> Self {
        self.joins.right_join(table, on);
        self
    }

    // ==================== WHERE ====================

    impl_where_methods!();

    // ==================== Grouping & ordering ====================

    /// Append a GROUP BY expression.
    pub fn group_by(mut self, expr: &str) -> Self {
        self.group_bys.push(expr.to_string());
        self
    }

    /// Set the HAVING clause (raw SQL, no arguments).
    pub fn having(mut self, expr: &str) -> Self {
        self.having = Some(expr.to_string());
        self
    }

    pub fn order_by(mut self, expr: &str, direction: Direction) -> Self {
        self.order_bys.push((expr.to_string(), direction));
        self
    }

    /// Add ORDER BY expr ASC.
    pub fn asc(self, expr: &str) -> Self {
        self.order_by(expr, Direction::Asc)
    }

    /// Add ORDER BY expr DESC.
    pub fn desc(self, expr: &str) -> Self {
        self.order_by(expr, Direction::Desc)
    }

    // ==================== Pagination ====================

    /// Set LIMIT. Values <= 0 clear it.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = (n > 0).then_some(n);
        self
    }

    /// Set OFFSET. Values <= 0 clear it.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = (n > 0).then_some(n);
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    /// The offset saturates at `i64::MAX` for very large pages.
    pub fn paginate(self, page: i64, per_page: i64) -> Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit(size).offset((p - 1).saturating_mul(size))
    }
}

impl SqlQb for SelectQb {
    fn verb(&self) -> Verb {
        Verb::Select
    }

    fn build(&self) -> BuiltQuery {
        let mut sql = String::from("SELECT ");
        let mut args = Vec::new();

        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.fields);
        sql.push_str(" FROM ");
        self.config.quote_style.write_ident(&mut sql, &self.table);

        self.joins.write_to(&mut sql);
        self.where_clause.write_to(&mut sql, &mut args);

        if !self.group_bys.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_bys.join(","));
        }

        if let Some(having) = self.having.as_deref().filter(|h| !h.is_empty()) {
            sql.push_str(" HAVING ");
            sql.push_str(having);
        }

        if !self.order_bys.is_empty() {
            sql.push_str(" ORDER BY ");
            for (i, (expr, direction)) in self.order_bys.iter().enumerate() {
                if i > 0 {
                    sql.push(',');
                }
                sql.push_str(expr);
                sql.push(' ');
                sql.push_str(direction.as_str());
            }
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        finish(&self.config, Verb::Select, sql, args)
    }
}
