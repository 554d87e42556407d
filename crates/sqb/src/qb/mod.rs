//! Statement builders.
//!
//! Each builder accumulates clause state through consuming `mut self -> Self`
//! methods and renders it with [`SqlQb::build`] into SQL text with `?`
//! placeholders plus the positional arguments, in placeholder order.
//!
//! # Usage
//!
//! ```
//! use sqb::{qb, Condition, SqlQb};
//!
//! // SELECT
//! let built = qb::select("users")
//!     .fields("id, name")
//!     .eq("status", "active")
//!     .desc("created_at")
//!     .limit(10)
//!     .build();
//! assert_eq!(
//!     built.sql,
//!     "SELECT id, name FROM users WHERE (status=?) ORDER BY created_at DESC LIMIT 10"
//! );
//!
//! // INSERT
//! let built = qb::insert("users")
//!     .set("username", "alice")
//!     .set_raw("created_at", "NOW()")
//!     .build();
//! assert_eq!(built.sql, "INSERT INTO `users` (`username`,`created_at`) VALUES (?,NOW())");
//!
//! // UPDATE
//! let built = qb::update("users").set("status", "inactive").eq("id", 7).build();
//! assert_eq!(built.args.len(), 2);
//!
//! // DELETE
//! let built = qb::delete("users")
//!     .and_where(Condition::or([Condition::eq("a", 1), Condition::in_list("b", [2, 3])]))
//!     .build();
//! assert_eq!(built.sql, "DELETE FROM users WHERE ((a=?) OR (b IN (?,?)))");
//! ```

#[macro_use]
mod macros;

mod clause;
mod delete;
mod insert;
mod select;
mod statement;
mod traits;
mod update;

pub use clause::{Assignment, Assignments, Joins, WhereClause};
pub use delete::DeleteQb;
pub use insert::InsertQb;
pub use select::{Direction, SelectQb};
pub use statement::{Statement, Verb};
pub use traits::{BuiltQuery, SqlQb};
pub use update::UpdateQb;

/// Create a SELECT builder for the given table.
///
/// # Example
/// ```
/// use sqb::SqlQb;
///
/// let qb = sqb::qb::select("users").eq("id", 1);
/// assert_eq!(qb.to_sql(), "SELECT * FROM users WHERE (id=?)");
/// ```
pub fn select(table: &str) -> SelectQb {
    SelectQb::new(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> InsertQb {
    InsertQb::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder for the given table.
///
/// Without conditions the statement has no WHERE clause and removes every row.
pub fn delete(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}
