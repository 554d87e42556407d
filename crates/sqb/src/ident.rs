//! Identifier quoting.
//!
//! Table names and INSERT/UPDATE column names go through a [`QuoteStyle`].
//! Dotted names are quoted part by part (`db.users` -> `` `db`.`users` ``),
//! and a part that is already properly quoted is left alone. A trailing alias
//! (`users u`, `users AS u`) is kept verbatim after the quoted name.

use serde::{Deserialize, Serialize};

/// How identifiers are quoted in emitted SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Emit identifiers verbatim.
    #[default]
    None,
    /// MySQL-style: `` `name` ``, embedded backticks doubled.
    Backtick,
    /// ANSI-style: `"name"`, embedded double quotes doubled.
    DoubleQuote,
}

impl QuoteStyle {
    fn quote_char(self) -> Option<char> {
        match self {
            QuoteStyle::None => None,
            QuoteStyle::Backtick => Some('`'),
            QuoteStyle::DoubleQuote => Some('"'),
        }
    }

    /// Quote an identifier.
    ///
    /// # Example
    /// ```
    /// use sqb::QuoteStyle;
    ///
    /// assert_eq!(QuoteStyle::Backtick.quote("users"), "`users`");
    /// assert_eq!(QuoteStyle::DoubleQuote.quote("public.users"), r#""public"."users""#);
    /// assert_eq!(QuoteStyle::None.quote("users"), "users");
    /// ```
    pub fn quote(self, ident: &str) -> String {
        let mut out = String::with_capacity(ident.len() + 2);
        self.write_ident(&mut out, ident);
        out
    }

    pub(crate) fn write_ident(self, out: &mut String, ident: &str) {
        let Some(q) = self.quote_char() else {
            out.push_str(ident);
            return;
        };

        // `users u` / `users AS u`: quote the name, keep the alias as written.
        let ident = ident.trim();
        match split_alias(ident, q) {
            Some((name, alias)) => {
                write_name(out, name, q);
                out.push(' ');
                out.push_str(alias);
            }
            None => write_name(out, ident, q),
        }
    }
}

fn write_name(out: &mut String, name: &str, q: char) {
    // Already quoted as a whole, e.g. a caller passing "`status`".
    if is_quoted(name, q) {
        out.push_str(name);
        return;
    }

    for (i, part) in name.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        if is_quoted(part, q) {
            out.push_str(part);
            continue;
        }
        out.push(q);
        for ch in part.chars() {
            if ch == q {
                out.push(q);
            }
            out.push(ch);
        }
        out.push(q);
    }
}

/// Split at the first whitespace outside quotes.
fn split_alias(ident: &str, q: char) -> Option<(&str, &str)> {
    let mut in_quote = false;
    for (i, ch) in ident.char_indices() {
        if ch == q {
            in_quote = !in_quote;
        } else if ch.is_whitespace() && !in_quote {
            let alias = ident[i..].trim_start();
            return (!alias.is_empty()).then_some((&ident[..i], alias));
        }
    }
    None
}

/// Wrapped in `q` with every embedded `q` doubled.
fn is_quoted(s: &str, q: char) -> bool {
    let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) else {
        return false;
    };
    let mut run = 0;
    for ch in inner.chars() {
        if ch == q {
            run += 1;
        } else if run % 2 == 1 {
            return false;
        } else {
            run = 0;
        }
    }
    run % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_none_is_verbatim() {
        assert_eq!(QuoteStyle::None.quote("my table"), "my table");
    }

    #[test]
    fn quote_backtick_simple() {
        assert_eq!(QuoteStyle::Backtick.quote("field1"), "`field1`");
    }

    #[test]
    fn quote_backtick_dotted() {
        assert_eq!(QuoteStyle::Backtick.quote("db.users"), "`db`.`users`");
    }

    #[test]
    fn quote_backtick_escapes_embedded() {
        assert_eq!(QuoteStyle::Backtick.quote("we`ird"), "`we``ird`");
    }

    #[test]
    fn quote_double_escapes_embedded() {
        assert_eq!(QuoteStyle::DoubleQuote.quote(r#"has"quote"#), r#""has""quote""#);
    }

    #[test]
    fn quote_skips_prequoted() {
        assert_eq!(QuoteStyle::Backtick.quote("`status`"), "`status`");
        assert_eq!(QuoteStyle::Backtick.quote("db.`users`"), "`db`.`users`");
    }

    #[test]
    fn quote_keeps_alias() {
        assert_eq!(QuoteStyle::Backtick.quote("users u"), "`users` u");
        assert_eq!(QuoteStyle::Backtick.quote("db.users AS u"), "`db`.`users` AS u");
        assert_eq!(QuoteStyle::DoubleQuote.quote(r#""my table" t"#), r#""my table" t"#);
        assert_eq!(QuoteStyle::Backtick.quote(" users "), "`users`");
    }

    #[test]
    fn quote_escapes_badly_wrapped() {
        // embedded quote not doubled: requote the whole part
        assert_eq!(QuoteStyle::Backtick.quote("`a`b`"), "```a``b```");
        assert_eq!(QuoteStyle::Backtick.quote("`a``b`"), "`a``b`");
        assert_eq!(QuoteStyle::Backtick.quote("`db`.`users`"), "`db`.`users`");
    }

    #[test]
    fn quote_style_serde() {
        let style: QuoteStyle = serde_json::from_str(r#""double_quote""#).unwrap();
        assert_eq!(style, QuoteStyle::DoubleQuote);
    }
}
