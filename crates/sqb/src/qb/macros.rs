/// Generate the WHERE shorthand methods for a consuming builder that owns a
/// `where_clause: WhereClause` field.
///
/// Usage:
/// ```ignore
/// impl SelectQb {
///     impl_where_methods!();
/// }
/// ```
macro_rules! impl_where_methods {
    () => {
        /// Add a condition; all top-level conditions are ANDed.
        pub fn and_where(mut self, condition: $crate::condition::Condition) -> Self {
            self.where_clause.push(condition);
            self
        }

        /// Add several conditions at once.
        pub fn and_where_all(
            mut self,
            conditions: impl IntoIterator<Item = $crate::condition::Condition>,
        ) -> Self {
            self.where_clause.extend(conditions);
            self
        }

        /// Add WHERE: column=value
        pub fn eq(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::eq(column, value))
        }

        /// Add WHERE: column<>value
        pub fn ne(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::ne(column, value))
        }

        /// Add WHERE: column<value
        pub fn lt(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::lt(column, value))
        }

        /// Add WHERE: column<=value
        pub fn lte(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::lte(column, value))
        }

        /// Add WHERE: column>value
        pub fn gt(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::gt(column, value))
        }

        /// Add WHERE: column>=value
        pub fn gte(self, column: &str, value: impl Into<$crate::value::Value>) -> Self {
            self.and_where($crate::condition::Condition::gte(column, value))
        }

        /// Add WHERE: column IS NULL
        pub fn is_null(self, column: &str) -> Self {
            self.and_where($crate::condition::Condition::is_null(column))
        }

        /// Add WHERE: column IS NOT NULL
        pub fn is_not_null(self, column: &str) -> Self {
            self.and_where($crate::condition::Condition::is_not_null(column))
        }

        /// Add WHERE: column IN (values...)
        pub fn in_list<I, T>(self, column: &str, values: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<$crate::value::Value>,
        {
            self.and_where($crate::condition::Condition::in_list(column, values))
        }

        /// Add WHERE: column NOT IN (values...)
        pub fn not_in<I, T>(self, column: &str, values: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<$crate::value::Value>,
        {
            self.and_where($crate::condition::Condition::not_in(column, values))
        }

        /// Add WHERE if value is Some: column=value
        pub fn eq_opt<T: Into<$crate::value::Value>>(self, column: &str, value: Option<T>) -> Self {
            match value {
                Some(v) => self.eq(column, v),
                None => self,
            }
        }
    };
}
