//! UPDATE statement builder.

use crate::config::BuildConfig;
use crate::error::{SqbError, SqbResult};
use crate::ident::QuoteStyle;
use crate::qb::clause::{Assignments, WhereClause};
use crate::qb::statement::Verb;
use crate::qb::traits::{BuiltQuery, SqlQb, finish};
use crate::value::Value;

/// UPDATE statement builder.
///
/// `UPDATE table SET col=?,col=raw,... [WHERE ...]`
///
/// Arguments are the SET values in column order followed by the WHERE arguments.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    table: String,
    assignments: Assignments,
    where_clause: WhereClause,
    config: BuildConfig,
}

impl UpdateQb {
    /// Create a new UPDATE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            assignments: Assignments::new(),
            where_clause: WhereClause::new(),
            config: BuildConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the quoting applied to the table and column names.
    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.config.quote_style = style;
        self
    }

    // ==================== SET ====================

    /// Set a column to a bound value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.assignments.set(column, value);
        self
    }

    /// Set an optional column value (None => skip).
    pub fn set_opt<T: Into<Value>>(self, column: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Set a column to a raw SQL expression, e.g. `NOW()` or `hits+1`.
    pub fn set_raw(mut self, column: &str, expr: &str) -> Self {
        self.assignments.set_raw(column, expr);
        self
    }

    /// Set several bound columns; iteration order becomes column order.
    pub fn set_data<K, V>(mut self, data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (k, v) in data {
            self.assignments.set(k, v);
        }
        self
    }

    /// Set several raw columns; iteration order becomes column order.
    pub fn set_raw_data<K, E>(mut self, data: impl IntoIterator<Item = (K, E)>) -> Self
    where
        K: Into<String>,
        E: Into<String>,
    {
        for (k, e) in data {
            self.assignments.set_raw(k, e);
        }
        self
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    // ==================== WHERE ====================

    impl_where_methods!();
}

impl SqlQb for UpdateQb {
    fn verb(&self) -> Verb {
        Verb::Update
    }

    fn build(&self) -> BuiltQuery {
        let quote = self.config.quote_style;
        let mut sql = String::from("UPDATE ");
        let mut args = Vec::new();

        quote.write_ident(&mut sql, &self.table);
        sql.push_str(" SET ");
        self.assignments.write_set_list(quote, &mut sql, &mut args);
        self.where_clause.write_to(&mut sql, &mut args);

        finish(&self.config, Verb::Update, sql, args)
    }

    fn validate(&self) -> SqbResult<()> {
        if self.assignments.is_empty() {
            return Err(SqbError::validation(format!(
                "UPDATE {} has no SET assignments",
                self.table
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;

    #[test]
    fn test_update_basic() {
        let built = UpdateQb::new("users").set("status", "inactive").eq("id", 1).build();
        assert_eq!(built.sql, "UPDATE users SET status=? WHERE (id=?)");
        assert_eq!(built.args, vec![Value::from("inactive"), Value::Int(1)]);
    }

    #[test]
    fn test_update_mixed_bound_raw() {
        let built = UpdateQb::new("t")
            .set("x", 5)
            .set_raw("y", "NOW()")
            .and_where(Condition::eq("id", 7))
            .build();
        assert_eq!(built.sql, "UPDATE t SET x=?,y=NOW() WHERE (id=?)");
        assert_eq!(built.args, vec![Value::Int(5), Value::Int(7)]);
    }

    #[test]
    fn test_update_without_where_keeps_set_args() {
        let built = UpdateQb::new("t").set("a", 1).set("b", 2).build();
        assert_eq!(built.sql, "UPDATE t SET a=?,b=?");
        assert_eq!(built.args, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_update_multiple_where() {
        let built = UpdateQb::new("table1")
            .set("field1", 1)
            .set("field2", 2.2)
            .set_raw("updated_at", "NOW()")
            .and_where_all([
                Condition::eq("`status`", "normal"),
                Condition::gte("created_at", 11111111),
            ])
            .build();
        assert_eq!(
            built.sql,
            "UPDATE table1 SET field1=?,field2=?,updated_at=NOW() WHERE (`status`=?) AND (created_at>=?)"
        );
        assert_eq!(built.args.len(), 4);
        assert_eq!(built.placeholder_count(), 4);
    }

    #[test]
    fn test_update_backtick() {
        let qb = UpdateQb::new("t").quote_style(QuoteStyle::Backtick).set("x", 1);
        assert_eq!(qb.to_sql(), "UPDATE `t` SET `x`=?");
    }

    #[test]
    fn test_update_validate_no_set() {
        let qb = UpdateQb::new("t").eq("id", 1);
        let err = qb.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: UPDATE t has no SET assignments");
    }
}
