//! Bound argument values.
//!
//! [`Value`] is the closed set of argument kinds a built statement can carry.
//! Builders accept anything that converts into a `Value`, so callers write
//! `Condition::eq("id", 7)` and get `Value::Int(7)` in the argument list.

use crate::error::{SqbError, SqbResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A driver-agnostic bound argument.
///
/// # Example
/// ```
/// use sqb::Value;
///
/// assert_eq!(Value::from(42_i32), Value::Int(42));
/// assert_eq!(Value::from("hello"), Value::Text("hello".to_string()));
/// assert_eq!(Value::from(None::<i64>), Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// SQL NULL.
    Null,
    Bool(bool),
    /// Signed integers of any width.
    Int(i64),
    /// Unsigned integers that may not fit in `i64`.
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    /// Date and time without timezone.
    DateTime(chrono::NaiveDateTime),
    /// Date and time in UTC.
    DateTimeTz(chrono::DateTime<chrono::Utc>),
    Uuid(uuid::Uuid),
    Json(serde_json::Value),
    /// A sequence bound as a single argument (array columns, driver-side expansion).
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::DateTimeTz(_) => "datetimetz",
            Self::Uuid(_) => "uuid",
            Self::Json(serde_json::Value::Array(_)) => "json array",
            Self::Json(_) => "json",
            Self::List(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert a JSON scalar into the matching variant.
    ///
    /// Arrays and objects stay wrapped in [`Value::Json`].
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    // Non-integral numbers always have an f64 form.
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }

    /// Unpack a sequence value into its elements.
    ///
    /// Accepts [`Value::List`], JSON arrays and [`Value::Bytes`] (one
    /// [`Value::Int`] per byte); anything else is a [`SqbError::TypeMismatch`]. This is how opaque, dynamically typed
    /// input reaches the set-membership constructors.
    pub fn into_list(self) -> SqbResult<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            Self::Json(serde_json::Value::Array(items)) => {
                Ok(items.into_iter().map(Value::from_json).collect())
            }
            Self::Bytes(bytes) => Ok(bytes.into_iter().map(Value::from).collect()),
            other => Err(SqbError::type_mismatch("list", other.type_name())),
        }
    }

    /// Render the value as an SQL literal.
    ///
    /// Only meant for logs and debugging output; statements handed to a
    /// driver must keep their placeholders and bind arguments separately.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Int(i) => i.to_string(),
            Self::UInt(u) => u.to_string(),
            Self::Float(f) if f.is_finite() => f.to_string(),
            Self::Float(f) => quote_literal(&f.to_string()),
            Self::Text(s) => quote_literal(s),
            Self::Bytes(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2 + 3);
                out.push_str("X'");
                for b in bytes {
                    out.push_str(&format!("{b:02X}"));
                }
                out.push('\'');
                out
            }
            Self::Date(d) => quote_literal(&d.to_string()),
            Self::Time(t) => quote_literal(&t.to_string()),
            Self::DateTime(dt) => quote_literal(&dt.to_string()),
            Self::DateTimeTz(dt) => quote_literal(&dt.to_rfc3339()),
            Self::Uuid(u) => quote_literal(&u.to_string()),
            Self::Json(j) => quote_literal(&j.to_string()),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_sql_literal).collect();
                format!("({})", parts.join(","))
            }
        }
    }
}

fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_literal())
    }
}

/// Convert any typed collection into an ordered argument list.
///
/// # Example
/// ```
/// use sqb::{values, Value};
///
/// let ids = [1_i64, 2, 3];
/// assert_eq!(values(ids), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
/// ```
pub fn values<I, T>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    items.into_iter().map(Into::into).collect()
}

// ── From implementations ───────────────────────────────────────────────

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<chrono::NaiveTime> for Value {
    fn from(v: chrono::NaiveTime) -> Self {
        Self::Time(v)
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Self::DateTimeTz(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
