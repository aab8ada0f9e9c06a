//! Literal values and their SQL text form.
//!
//! Rendering is textual-only: string literals are single-quoted with internal
//! quotes doubled, and no execution-time parameter binding is offered.

use chrono::{NaiveDate, NaiveDateTime};

/// A literal value embedded in an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean, rendered `TRUE` / `FALSE`
    Bool(bool),
    /// Integer, rendered in canonical decimal form
    Int(i64),
    /// Floating point, rendered via the shortest round-trip form
    Float(f64),
    /// String, rendered single-quoted with `'` doubled
    Str(String),
    /// Calendar date, rendered `'YYYY-MM-DD'`
    Date(NaiveDate),
    /// Date and time, rendered `'YYYY-MM-DD HH:MM:SS'`
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Render the literal as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    /// Whether the literal renders with a leading minus sign.
    pub(crate) fn is_negative(&self) -> bool {
        match self {
            Value::Int(n) => *n < 0,
            Value::Float(n) => *n < 0.0,
            _ => false,
        }
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("NULL"),
            Value::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(n) => out.push_str(&n.to_string()),
            Value::Str(s) => write_quoted(s, out),
            Value::Date(d) => write_quoted(&d.format("%Y-%m-%d").to_string(), out),
            Value::Timestamp(t) => write_quoted(&t.format("%Y-%m-%d %H:%M:%S").to_string(), out),
        }
    }
}

/// Write a single-quoted literal, doubling embedded quotes.
fn write_quoted(s: &str, out: &mut String) {
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
            out.push('\'');
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::Timestamp(t)
    }
}
