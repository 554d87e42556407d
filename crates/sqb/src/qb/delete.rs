//! DELETE statement builder.

use crate::config::BuildConfig;
use crate::ident::QuoteStyle;
use crate::qb::clause::WhereClause;
use crate::qb::statement::Verb;
use crate::qb::traits::{BuiltQuery, SqlQb, finish};

/// DELETE statement builder.
///
/// `DELETE FROM table [WHERE ...]`. Without conditions no WHERE clause is
/// emitted and the statement affects every row.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    table: String,
    where_clause: WhereClause,
    config: BuildConfig,
}

impl DeleteQb {
    /// Create a new DELETE builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            where_clause: WhereClause::new(),
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

    impl_where_methods!();
}

impl SqlQb for DeleteQb {
    fn verb(&self) -> Verb {
        Verb::Delete
    }

    fn build(&self) -> BuiltQuery {
        let mut sql = String::from("DELETE FROM ");
        let mut args = Vec::new();

        self.config.quote_style.write_ident(&mut sql, &self.table);
        self.where_clause.write_to(&mut sql, &mut args);

        finish(&self.config, Verb::Delete, sql, args)
    }
}
