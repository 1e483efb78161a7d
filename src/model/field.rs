//! Form field types.

use serde::{Deserialize, Serialize};

/// Semantic type of a form field, inferred from its name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    #[default]
    Text,
    /// Date picker
    Date,
    /// Drop-down or radio choice
    Select,
    /// Numeric input
    Number,
    /// Checkbox
    Checkbox,
    /// Multi-line text input
    Textarea,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Date,
        FieldType::Select,
        FieldType::Number,
        FieldType::Checkbox,
        FieldType::Textarea,
    ];

    /// Lowercase name as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Number => "number",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the document a placeholder was first found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Heading or paragraph text
    InlineText,
    /// Table cell text
    TableCell,
}

/// A classified, deduplicated placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Field id, `field_<n>` in first-seen order
    pub id: String,

    /// Placeholder name (trimmed)
    pub name: String,

    /// Inferred semantic type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Structural origin of the first occurrence
    pub source_type: SourceType,
}

impl FormField {
    /// Create a new form field.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        field_type: FieldType,
        source_type: SourceType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            source_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_json_shape() {
        let field = FormField::new("field_0", "amount", FieldType::Text, SourceType::TableCell);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(
            json,
            r#"{"id":"field_0","name":"amount","type":"text","sourceType":"table_cell"}"#
        );

        let back: FormField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_field_type_names() {
        for field_type in FieldType::ALL {
            let json = serde_json::to_string(&field_type).unwrap();
            assert_eq!(json, format!("\"{}\"", field_type.as_str()));
        }
        assert_eq!(FieldType::default(), FieldType::Text);
    }
}
