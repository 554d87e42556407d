//! Trait definitions for statement builders.

use crate::config::BuildConfig;
use crate::error::SqbResult;
use crate::qb::statement::Verb;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Base trait for all statement builders.
///
/// `build` reads the accumulated state and never mutates it, so it can be
/// called any number of times with the same result.
pub trait SqlQb {
    /// The statement verb this builder emits.
    fn verb(&self) -> Verb;

    /// Build the SQL text and its positional arguments.
    fn build(&self) -> BuiltQuery;

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build().sql
    }

    /// Validate builder state before handing the statement to a driver.
    fn validate(&self) -> SqbResult<()> {
        Ok(())
    }

    /// `validate` followed by `build`.
    fn try_build(&self) -> SqbResult<BuiltQuery> {
        self.validate()?;
        Ok(self.build())
    }
}

/// The result of building a statement.
///
/// `sql` contains one `?` per entry of `args`, matched left to right
/// (literal SQL supplied by the caller excepted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

impl BuiltQuery {
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Number of `?` in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        crate::condition::count_placeholders(&self.sql)
    }

    /// Substitute the arguments into the placeholders as SQL literals.
    ///
    /// For logs only. Placeholders without a matching argument are kept.
    ///
    /// # Example
    /// ```
    /// use sqb::{delete, Condition, SqlQb};
    ///
    /// let built = delete("t").and_where(Condition::eq("name", "o'hara")).build();
    /// assert_eq!(built.to_inline_sql(), "DELETE FROM t WHERE (name='o''hara')");
    /// ```
    pub fn to_inline_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + self.args.len() * 8);
        let mut args = self.args.iter();
        for ch in self.sql.chars() {
            if ch == '?' {
                match args.next() {
                    Some(v) => out.push_str(&v.to_sql_literal()),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Wrap up a build: package the parts and emit the optional log event.
pub(crate) fn finish(
    config: &BuildConfig,
    verb: Verb,
    sql: String,
    args: Vec<Value>,
) -> BuiltQuery {
    let built = BuiltQuery::new(sql, args);

    #[cfg(feature = "tracing")]
    if config.log_statements {
        tracing::debug!(
            target: "sqb.sql",
            verb = %verb,
            arg_count = built.args.len(),
            sql = %config.truncate_sql(&built.sql),
            "built statement"
        );
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (config, verb);

    built
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::qb::{delete, update};
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    #[derive(Debug)]
    struct Captured {
        target: String,
        level: Level,
        fields: BTreeMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureSubscriber {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    impl Subscriber for CaptureSubscriber {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut fields = BTreeMap::new();
            event.record(&mut FieldVisitor(&mut fields));
            let meta = event.metadata();
            if let Ok(mut events) = self.events.lock() {
                events.push(Captured {
                    target: meta.target().to_string(),
                    level: *meta.level(),
                    fields,
                });
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
        let subscriber = CaptureSubscriber::default();
        let events = subscriber.events.clone();
        tracing::subscriber::with_default(subscriber, f);
        let mut guard = events.lock().unwrap();
        std::mem::take(&mut *guard)
    }

    fn sql_events(events: Vec<Captured>) -> Vec<Captured> {
        events.into_iter().filter(|e| e.target == "sqb.sql").collect()
    }

    #[test]
    fn test_logging_enabled_emits_one_event() {
        let config = BuildConfig::new().enable_logging();
        let events = sql_events(capture(|| {
            update("t").config(config).set("a", 1).eq("id", 2).build();
        }));

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Level::DEBUG);
        assert_eq!(event.fields["verb"], "UPDATE");
        assert_eq!(event.fields["arg_count"], "2");
        assert_eq!(event.fields["sql"], "UPDATE t SET a=? WHERE (id=?)");
        assert_eq!(event.fields["message"], "built statement");
    }

    #[test]
    fn test_logged_sql_is_truncated() {
        let config = BuildConfig::new()
            .enable_logging()
            .with_max_log_sql_length(11);
        let events = sql_events(capture(|| {
            delete("users").config(config).eq("id", 1).build();
        }));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fields["verb"], "DELETE");
        assert_eq!(events[0].fields["sql"], "DELETE FROM...");
    }

    #[test]
    fn test_logging_disabled_by_default() {
        let events = sql_events(capture(|| {
            update("t").set("a", 1).build();
            delete("t").build();
        }));
        assert!(events.is_empty());
    }
}
