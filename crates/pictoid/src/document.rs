//! In-memory form of a picto list.
//!
//! A [`Document`] is an ordered list of [`Record`]s. Records are open-ended
//! JSON objects; the only key this crate touches is [`ID_FIELD`].

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Key that receives the sequential identifier.
pub const ID_FIELD: &str = "id";

/// One picto entry. Key order is preserved from the input.
pub type Record = Map<String, Value>;

/// An ordered sequence of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseText`] if the text is not valid JSON, or a shape
    /// error from [`Document::from_value`].
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| Error::ParseText { source })?;
        Self::from_value(value)
    }

    /// Build a document from an already parsed JSON value.
    ///
    /// The root must be an array and every element must be an object. The
    /// first offending element is reported by index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAList`] or [`Error::ElementNotObject`].
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::NotAList {
                    found: kind_of(&other),
                })
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(Error::ElementNotObject {
                    index,
                    found: kind_of(&other),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = records.len(), "validated document shape");
        Ok(Self { records })
    }

    /// Stamp every record with `id = position + 1`, replacing any old value.
    ///
    /// Returns the number of records stamped.
    pub fn assign_ids(&mut self) -> usize {
        for (index, record) in self.records.iter_mut().enumerate() {
            let id = index + 1;
            if let Some(previous) = record.insert(ID_FIELD.to_string(), Value::from(id)) {
                trace!(id, %previous, "replaced existing id");
            }
        }
        debug!(count = self.records.len(), "assigned ids");
        self.records.len()
    }

    /// Render as JSON with 2-space indentation.
    ///
    /// Non-ASCII characters are written as-is, not escaped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if rendering fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// The records, in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Name of a JSON value's kind, for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(document: &Document) -> Vec<Value> {
        document
            .records()
            .iter()
            .map(|r| r[ID_FIELD].clone())
            .collect()
    }

    #[test]
    fn test_assign_ids_sequential() {
        let mut doc = Document::parse(r#"[{"name":"cat"},{"name":"dog"},{"name":"owl"}]"#).unwrap();
        assert_eq!(doc.assign_ids(), 3);
        assert_eq!(ids(&doc), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_assign_ids_preserves_order_and_fields() {
        let mut doc = Document::parse(r#"[{"name":"cat","tags":["a"]},{"name":"dog"}]"#).unwrap();
        doc.assign_ids();

        let value: Value = serde_json::from_str(&doc.to_pretty_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!([
                {"name": "cat", "tags": ["a"], "id": 1},
                {"name": "dog", "id": 2}
            ])
        );
    }

    #[test]
    fn test_assign_ids_overwrites_existing() {
        let mut doc = Document::parse(r#"[{"name":"cat","id":99},{"id":"x","name":"dog"}]"#).unwrap();
        doc.assign_ids();

        assert_eq!(ids(&doc), vec![json!(1), json!(2)]);
        // Overwritten keys stay where they were.
        let keys: Vec<&str> = doc.records()[1].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name"]);
    }

    #[test]
    fn test_new_id_appended_last() {
        let mut doc = Document::parse(r#"[{"b":1,"a":2}]"#).unwrap();
        doc.assign_ids();
        let keys: Vec<&str> = doc.records()[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "id"]);
    }

    #[test]
    fn test_empty_document() {
        let mut doc = Document::parse("[]").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.assign_ids(), 0);
        assert_eq!(doc.to_pretty_json().unwrap(), "[]");
    }

    #[test]
    fn test_root_not_a_list() {
        for (text, kind) in [
            (r#"{"name":"cat"}"#, "object"),
            ("42", "number"),
            (r#""cat""#, "string"),
            ("null", "null"),
            ("true", "boolean"),
        ] {
            let err = Document::parse(text).unwrap_err();
            assert!(
                matches!(err, Error::NotAList { found } if found == kind),
                "unexpected error for {text}: {err}"
            );
            assert!(err.to_string().contains("root value is not a list"));
        }
    }

    #[test]
    fn test_element_not_object() {
        let err = Document::parse(r#"[{"name":"cat"}, 7, "dog"]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::ElementNotObject {
                index: 1,
                found: "number"
            }
        ));
    }

    #[test]
    fn test_nested_array_element_rejected() {
        let err = Document::parse(r"[[1, 2]]").unwrap_err();
        assert!(matches!(
            err,
            Error::ElementNotObject {
                index: 0,
                found: "array"
            }
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = Document::parse("[{").unwrap_err();
        assert!(matches!(err, Error::ParseText { .. }));
        assert!(err.to_string().starts_with("failed to parse JSON"));
    }

    #[test]
    fn test_pretty_json_format() {
        let mut doc = Document::parse(r#"[{"name":"café"}]"#).unwrap();
        doc.assign_ids();
        let text = doc.to_pretty_json().unwrap();
        assert_eq!(text, "[\n  {\n    \"name\": \"café\",\n    \"id\": 1\n  }\n]");
    }

    #[test]
    fn test_wide_numbers_render_unchanged() {
        let text = r#"[{"n":123456789012345678901234567890,"m":-99999999999999999999,"f":0.1}]"#;
        let mut doc = Document::parse(text).unwrap();
        doc.assign_ids();

        let out = doc.to_pretty_json().unwrap();
        assert!(out.contains("\"n\": 123456789012345678901234567890"));
        assert!(out.contains("\"m\": -99999999999999999999"));
        assert!(out.contains("\"f\": 0.1"));
        assert!(out.contains("\"id\": 1"));
    }

    #[test]
    fn test_len() {
        let doc = Document::parse(r"[{}, {}]").unwrap();
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(false)), "boolean");
        assert_eq!(kind_of(&json!(1.5)), "number");
        assert_eq!(kind_of(&json!("s")), "string");
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
    }
}
