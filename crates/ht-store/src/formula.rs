//! Filter formula construction.
//!
//! The remote store evaluates boolean predicate strings over record fields.
//! Formulas are never assembled by raw concatenation of caller input: every
//! literal goes through [`Formula::eq`]/[`Formula::eq_fold`], which escape
//! the value so that a quote or backslash inside it (e.g., in an email)
//! cannot terminate the predicate.

use std::fmt;

/// An opaque, safely-constructed filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula(String);

impl Formula {
    /// Exact field equality: `{Field}="value"`
    pub fn eq(field: &str, value: &str) -> Self {
        Self(format!("{}={}", field_ref(field), string_literal(value)))
    }

    /// Case-insensitive field equality: `LOWER({Field})=LOWER("value")`
    pub fn eq_fold(field: &str, value: &str) -> Self {
        Self(format!(
            "LOWER({})=LOWER({})",
            field_ref(field),
            string_literal(value)
        ))
    }

    /// Field truthiness: `{Field}` (checkbox fields evaluate to 0/1)
    pub fn is_set(field: &str) -> Self {
        Self(field_ref(field))
    }

    /// Negation: `NOT(inner)`
    pub fn not(inner: Formula) -> Self {
        Self(format!("NOT({})", inner.0))
    }

    /// Conjunction: `AND(a, b, ...)`
    pub fn and<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        let joined = parts
            .into_iter()
            .map(|f| f.0)
            .collect::<Vec<_>>()
            .join(", ");
        Self(format!("AND({})", joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a `{Field}` reference.
///
/// Braces cannot be escaped inside a field reference, so names containing
/// them are rejected outright. Field names here are compile-time constants
/// in the repositories, never caller input.
fn field_ref(name: &str) -> String {
    assert!(
        !name.contains(['{', '}']),
        "field name must not contain braces: {name}"
    );
    format!("{{{}}}", name)
}

/// Render a double-quoted string literal with `\` and `"` escaped.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
