//! INSERT statement builder.

use crate::config::BuildConfig;
use crate::error::{SqbError, SqbResult};
use crate::ident::QuoteStyle;
use crate::qb::clause::Assignments;
use crate::qb::statement::Verb;
use crate::qb::traits::{BuiltQuery, SqlQb, finish};
use crate::value::Value;

/// INSERT statement builder.
///
/// `INSERT INTO table (col,...) VALUES (?,raw,...)`
///
/// The table and columns are backtick-quoted by default; switch with
/// [`InsertQb::quote_style`].
#[derive(Clone, Debug)]
pub struct InsertQb {
    table: String,
    assignments: Assignments,
    config: BuildConfig,
}

impl InsertQb {
    /// Create a new INSERT builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            assignments: Assignments::new(),
            config: BuildConfig::default().with_quote_style(QuoteStyle::Backtick),
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

    /// Set a column to a raw SQL expression, e.g. `NOW()`.
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
}

impl SqlQb for InsertQb {
    fn verb(&self) -> Verb {
        Verb::Insert
    }

    fn build(&self) -> BuiltQuery {
        let quote = self.config.quote_style;
        let mut sql = String::from("INSERT INTO ");
        let mut args = Vec::with_capacity(self.assignments.len());

        quote.write_ident(&mut sql, &self.table);
        self.assignments.write_values_list(quote, &mut sql, &mut args);

        finish(&self.config, Verb::Insert, sql, args)
    }

    fn validate(&self) -> SqbResult<()> {
        if self.assignments.is_empty() {
            return Err(SqbError::validation(format!(
                "INSERT INTO {} has no columns",
                self.table
            )));
        }
        Ok(())
    }
}
