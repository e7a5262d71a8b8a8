//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

/// A dynamic value held by a [`Record`](super::Record) field.
///
/// Values arrive from JSON list responses, so the variants mirror what JSON
/// can carry plus a timestamp variant for callers that build records in code.
///
/// # Display
///
/// `Display` follows the table's export and search conventions: `Null`
/// formats as an empty string, everything else as its natural text form.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Value;
///
/// assert_eq!(Value::from("active").to_string(), "active");
/// assert_eq!(Value::from(42i64).to_string(), "42");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time.
    DateTime(DateTime<Utc>),
    /// Arrays and objects, kept as raw JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a number.
    ///
    /// Strings are parsed, so `"12.5"` yields `Some(12.5)`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the calendar date of the value.
    ///
    /// Accepts timestamps, RFC 3339 strings and plain `YYYY-MM-DD` strings
    /// (a longer string is accepted if it starts with a date).
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::DateTime(dt) => Some(dt.date_naive()),
            Value::String(s) => parse_date(s),
            _ => None,
        }
    }

    /// Total ordering used for client-side sorting.
    ///
    /// Values of different kinds order as null < bool < number < datetime <
    /// string < json. Strings compare case-insensitively first.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Value::Json(a), Value::Json(b)) => a.to_string().cmp(&b.to_string()),
            (a, b) if a.rank() == 2 && b.rank() == 2 => {
                let (x, y) = (a.as_f64().unwrap_or_default(), b.as_f64().unwrap_or_default());
                x.total_cmp(&y)
            }
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::DateTime(_) => 3,
            Value::String(_) => 4,
            Value::Json(_) => 5,
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    s.get(..10)
        .or(Some(s))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(2.0).to_string(), "2");
        assert_eq!(Value::from(serde_json::json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from(serde_json::json!(7.25)), Value::Float(7.25));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
        assert_eq!(Value::from(serde_json::json!("x")), Value::from("x"));
    }

    #[test]
    fn test_as_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(Value::from("2024-03-09").as_date(), expected);
        assert_eq!(Value::from("2024-03-09T10:00:00Z").as_date(), expected);
        assert_eq!(Value::from("2024-03-09 10:00").as_date(), expected);
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
        assert_eq!(Value::from(dt).as_date(), expected);
        assert_eq!(Value::from("soon").as_date(), None);
    }

    #[test]
    fn test_sort_cmp_mixed_numbers() {
        assert_eq!(Value::Int(2).sort_cmp(&Value::Float(10.0)), Ordering::Less);
        assert_eq!(Value::Float(3.5).sort_cmp(&Value::Int(3)), Ordering::Greater);
    }

    #[test]
    fn test_sort_cmp_strings_case_insensitive() {
        assert_eq!(Value::from("apple").sort_cmp(&Value::from("Banana")), Ordering::Less);
        assert_eq!(Value::Null.sort_cmp(&Value::from("a")), Ordering::Less);
    }
}
