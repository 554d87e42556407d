//! Verb-selected statements.
//!
//! [`Statement`] picks one of the four builders from a [`Verb`], for callers
//! that only learn the statement kind at runtime.

use std::fmt;
use std::str::FromStr;

use crate::condition::Condition;
use crate::error::{SqbError, SqbResult};
use crate::qb::delete::DeleteQb;
use crate::qb::insert::InsertQb;
use crate::qb::select::SelectQb;
use crate::qb::traits::{BuiltQuery, SqlQb};
use crate::qb::update::UpdateQb;
use crate::value::Value;

/// Statement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Select,
    Insert,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Select => "SELECT",
            Verb::Insert => "INSERT",
            Verb::Update => "UPDATE",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = SqbError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = s.trim();
        [Verb::Select, Verb::Insert, Verb::Update, Verb::Delete]
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(verb))
            .ok_or_else(|| SqbError::UnknownVerb(s.to_string()))
    }
}

/// A builder whose statement kind was chosen at runtime.
///
/// Operations that make no sense for the selected verb are ignored:
/// conditions on an INSERT, assignments on a SELECT or DELETE.
#[derive(Clone, Debug)]
pub enum Statement {
    Select(SelectQb),
    Insert(InsertQb),
    Update(UpdateQb),
    Delete(DeleteQb),
}

impl Statement {
    pub fn new(verb: Verb, table: &str) -> Self {
        match verb {
            Verb::Select => Statement::Select(SelectQb::new(table)),
            Verb::Insert => Statement::Insert(InsertQb::new(table)),
            Verb::Update => Statement::Update(UpdateQb::new(table)),
            Verb::Delete => Statement::Delete(DeleteQb::new(table)),
        }
    }

    /// Create a statement from a verb string such as `"select"`.
    ///
    /// # Example
    /// ```
    /// use sqb::{Statement, SqlQb};
    ///
    /// let stmt = Statement::parse("update", "t")?.set("a", 1);
    /// assert_eq!(stmt.to_sql(), "UPDATE t SET a=?");
    /// assert!(Statement::parse("merge", "t").is_err());
    /// # Ok::<(), sqb::SqbError>(())
    /// ```
    pub fn parse(verb: &str, table: &str) -> SqbResult<Self> {
        Ok(Self::new(verb.parse()?, table))
    }

    /// Add a top-level condition. Ignored for INSERT.
    pub fn and_where(self, condition: Condition) -> Self {
        match self {
            Statement::Select(qb) => Statement::Select(qb.and_where(condition)),
            Statement::Update(qb) => Statement::Update(qb.and_where(condition)),
            Statement::Delete(qb) => Statement::Delete(qb.and_where(condition)),
            other @ Statement::Insert(_) => other,
        }
    }

    /// Assign a bound value. Ignored for SELECT and DELETE.
    pub fn set(self, column: &str, value: impl Into<Value>) -> Self {
        match self {
            Statement::Insert(qb) => Statement::Insert(qb.set(column, value)),
            Statement::Update(qb) => Statement::Update(qb.set(column, value)),
            other @ (Statement::Select(_) | Statement::Delete(_)) => other,
        }
    }

    /// Assign a raw expression. Ignored for SELECT and DELETE.
    pub fn set_raw(self, column: &str, expr: &str) -> Self {
        match self {
            Statement::Insert(qb) => Statement::Insert(qb.set_raw(column, expr)),
            Statement::Update(qb) => Statement::Update(qb.set_raw(column, expr)),
            other @ (Statement::Select(_) | Statement::Delete(_)) => other,
        }
    }
}

impl SqlQb for Statement {
    fn verb(&self) -> Verb {
        match self {
            Statement::Select(qb) => qb.verb(),
            Statement::Insert(qb) => qb.verb(),
            Statement::Update(qb) => qb.verb(),
            Statement::Delete(qb) => qb.verb(),
        }
    }

    fn build(&self) -> BuiltQuery {
        match self {
            Statement::Select(qb) => qb.build(),
            Statement::Insert(qb) => qb.build(),
            Statement::Update(qb) => qb.build(),
            Statement::Delete(qb) => qb.build(),
        }
    }

    fn validate(&self) -> SqbResult<()> {
        match self {
            Statement::Select(qb) => qb.validate(),
            Statement::Insert(qb) => qb.validate(),
            Statement::Update(qb) => qb.validate(),
            Statement::Delete(qb) => qb.validate(),
        }
    }
}

impl From<SelectQb> for Statement {
    fn from(qb: SelectQb) -> Self {
        Statement::Select(qb)
    }
}

impl From<InsertQb> for Statement {
    fn from(qb: InsertQb) -> Self {
        Statement::Insert(qb)
    }
}

impl From<UpdateQb> for Statement {
    fn from(qb: UpdateQb) -> Self {
        Statement::Update(qb)
    }
}

impl From<DeleteQb> for Statement {
    fn from(qb: DeleteQb) -> Self {
        Statement::Delete(qb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_parse_case_insensitive() {
        assert_eq!("select".parse::<Verb>().unwrap(), Verb::Select);
        assert_eq!(" Insert ".parse::<Verb>().unwrap(), Verb::Insert);
        assert_eq!("UPDATE".parse::<Verb>().unwrap(), Verb::Update);
        assert_eq!("delete".parse::<Verb>().unwrap(), Verb::Delete);
    }

    #[test]
    fn verb_parse_unknown() {
        let err = "upsert".parse::<Verb>().unwrap_err();
        assert!(matches!(err, SqbError::UnknownVerb(ref v) if v == "upsert"));
        assert_eq!(err.to_string(), "Unknown statement verb: 'upsert'");
    }

    #[test]
    fn verb_display() {
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn statement_dispatch() {
        let stmt = Statement::new(Verb::Select, "t").and_where(Condition::eq("a", 1));
        assert_eq!(stmt.verb(), Verb::Select);
        assert_eq!(stmt.to_sql(), "SELECT * FROM t WHERE (a=?)");

        let stmt = Statement::new(Verb::Insert, "t")
            .set("a", 1)
            .set_raw("b", "NOW()")
            .and_where(Condition::eq("ignored", 1));
        let built = stmt.build();
        assert_eq!(built.sql, "INSERT INTO `t` (`a`,`b`) VALUES (?,NOW())");
        assert_eq!(built.args, vec![Value::Int(1)]);
    }

    #[test]
    fn statement_ignores_set_on_delete() {
        let stmt = Statement::parse("DELETE", "t")
            .unwrap()
            .set("a", 1)
            .and_where(Condition::is_null("b"));
        let built = stmt.build();
        assert_eq!(built.sql, "DELETE FROM t WHERE (b IS NULL)");
        assert!(built.args.is_empty());
    }

    #[test]
    fn statement_validate_delegates() {
        let stmt: Statement = UpdateQb::new("t").into();
        assert!(stmt.validate().is_err());
        assert!(stmt.set("a", 1).validate().is_ok());
    }
}
