//! Glob-importable names for building statements.
//!
//! ```
//! use sqb::prelude::*;
//!
//! let built = select("t").and_where(Condition::is_not_null("a")).build();
//! assert_eq!(built.sql, "SELECT * FROM t WHERE (a IS NOT NULL)");
//! ```

pub use crate::condition::Condition;
pub use crate::error::{SqbError, SqbResult};
pub use crate::qb::{SqlQb, delete, insert, select, update};
pub use crate::value::{Value, values};
