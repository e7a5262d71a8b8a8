//! Row record

use std::collections::HashMap;

use super::Value;
use crate::error::RecordError;

/// A table row.
///
/// Every record carries a unique string id, used for selection and row
/// actions, plus a dynamic field map keyed by column key. The `id` is also
/// available as the `"id"` field so it can be shown as a column.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Record;
///
/// let record = Record::new("42")
///     .set("name", "Contoso")
///     .set("status", "active");
///
/// assert_eq!(record.id(), "42");
/// assert_eq!(record.display("name"), "Contoso");
/// assert_eq!(record.display("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a record with the given id and no other fields.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), Value::String(id.clone()));
        Self { id, fields }
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field value in place.
    ///
    /// The `"id"` field cannot be overwritten; it always mirrors [`Record::id`].
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if field == "id" {
            return;
        }
        self.fields.insert(field, value.into());
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the display form of a field, or an empty string when the
    /// field is missing or null.
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(Value::to_string).unwrap_or_default()
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Builds a record from a JSON object.
    ///
    /// The object must contain an `id` that is a string or a number; numbers
    /// are converted to their decimal string form.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RecordError> {
        let serde_json::Value::Object(map) = value else {
            return Err(RecordError::NotAnObject(json_type_name(&value)));
        };

        let id = match map.get("id") {
            None | Some(serde_json::Value::Null) => return Err(RecordError::MissingId),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => return Err(RecordError::InvalidId(json_type_name(other))),
        };

        let mut record = Record::new(id);
        for (key, value) in map {
            record.insert(key, Value::from(value));
        }
        Ok(record)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Record::from_json(value)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json() {
        let record = Record::from_json(json!({
            "id": "u-1",
            "name": "Ana",
            "age": 31,
            "manager": null,
        }))
        .unwrap();

        assert_eq!(record.id(), "u-1");
        assert_eq!(record.get("age"), Some(&Value::Int(31)));
        assert_eq!(record.get("manager"), Some(&Value::Null));
        assert_eq!(record.display("id"), "u-1");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let record = Record::from_json(json!({ "id": 17 })).unwrap();
        assert_eq!(record.id(), "17");
        assert_eq!(record.get("id"), Some(&Value::from("17")));
    }

    #[test]
    fn test_invalid_records() {
        assert_eq!(Record::from_json(json!({ "name": "x" })), Err(RecordError::MissingId));
        assert_eq!(Record::from_json(json!({ "id": null })), Err(RecordError::MissingId));
        assert_eq!(
            Record::from_json(json!({ "id": [1] })),
            Err(RecordError::InvalidId("array"))
        );
        assert_eq!(Record::from_json(json!("x")), Err(RecordError::NotAnObject("string")));
    }

    #[test]
    fn test_id_field_is_read_only() {
        let record = Record::new("a").set("id", "b");
        assert_eq!(record.display("id"), "a");
    }
}
