//! # sqb
//!
//! A parameterized SQL statement builder.
//!
//! ## Features
//!
//! - **Placeholders only**: values never enter the SQL text; every `?` has one argument
//! - **Condition trees**: comparisons, null checks, LIKE, IN and nested AND/OR/NOT groups
//! - **Four statements**: SELECT, INSERT, UPDATE and DELETE builders with one `build()` contract
//! - **Deterministic output**: columns keep insertion order, `build()` is repeatable
//! - **Optional logging**: `tracing` events for built statements behind the `tracing` feature
//!
//! ## Conditions
//!
//! ```
//! use sqb::{Condition, Value};
//!
//! let (sql, args) = Condition::or([
//!     Condition::eq("a", 1),
//!     Condition::and([Condition::gt("b", 2), Condition::is_null("c")]),
//! ])
//! .build();
//!
//! assert_eq!(sql, "(a=?) OR ((b>?) AND (c IS NULL))");
//! assert_eq!(args, vec![Value::Int(1), Value::Int(2)]);
//! ```
//!
//! ## Statements
//!
//! ```
//! use sqb::{qb, SqlQb};
//!
//! let built = qb::update("users")
//!     .set("status", "inactive")
//!     .set_raw("updated_at", "NOW()")
//!     .eq("id", 42)
//!     .build();
//!
//! assert_eq!(built.sql, "UPDATE users SET status=?,updated_at=NOW() WHERE (id=?)");
//! assert_eq!(built.args.len(), built.placeholder_count());
//! ```

pub mod condition;
pub mod config;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod qb;
pub mod value;

pub use condition::{CompareOp, Condition, Joiner, count_placeholders};
pub use config::BuildConfig;
pub use error::{SqbError, SqbResult};
pub use ident::QuoteStyle;
pub use value::{Value, values};

// Re-export qb module for easy access
pub use qb::{
    BuiltQuery, DeleteQb, Direction, InsertQb, SelectQb, SqlQb, Statement, UpdateQb, Verb, delete,
    insert, select, update,
};
