//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::serialize_sections;
use super::{FormField, Section};

/// Schema version written to every document.
pub const SCHEMA_VERSION: &str = "1.0";

/// Timestamp format of `metadata.createTime` (UTC, millisecond precision).
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A parsed Word template: ordered sections, form fields and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Sections in document order, serialized as an object keyed by id
    #[serde(serialize_with = "serialize_sections")]
    pub sections: Vec<Section>,

    /// Form fields in first-seen order
    pub form_fields: Vec<FormField>,

    /// Schema metadata
    pub metadata: Metadata,
}

impl ParsedDocument {
    /// Get a section by its key.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Get a form field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.form_fields.iter().find(|f| f.name == name)
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has neither sections nor fields.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.form_fields.is_empty()
    }
}

/// Schema metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Schema version
    #[serde(rename = "version")]
    pub schema_version: String,

    /// Assembly time
    #[serde(rename = "createTime", with = "create_time")]
    pub created_at: DateTime<Utc>,
}

impl Metadata {
    /// Create metadata stamped with the given time.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            created_at,
        }
    }

    /// Create metadata stamped with the current time.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

mod create_time {
    use super::CREATE_TIME_FORMAT;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(CREATE_TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, SourceType};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_metadata_json() {
        let metadata = Metadata::new(fixed_time());
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(
            json,
            r#"{"version":"1.0","createTime":"2024-03-01T08:30:00.000Z"}"#
        );

        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_document_key_order() {
        let doc = ParsedDocument {
            sections: vec![
                Section::Paragraph {
                    id: "paragraph_1".into(),
                    text: "b".into(),
                },
                Section::Heading {
                    id: "heading_0".into(),
                    text: "a".into(),
                    level: 1,
                },
            ],
            form_fields: vec![FormField::new(
                "field_0",
                "name",
                FieldType::Text,
                SourceType::InlineText,
            )],
            metadata: Metadata::new(fixed_time()),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let sections_at = json.find("\"sections\"").unwrap();
        let fields_at = json.find("\"formFields\"").unwrap();
        let metadata_at = json.find("\"metadata\"").unwrap();
        assert!(sections_at < fields_at && fields_at < metadata_at);

        // sections keep insertion order, not key order
        assert!(json.find("paragraph_1").unwrap() < json.find("heading_0").unwrap());

        assert!(doc.section("heading_0").is_some());
        assert!(doc.field("name").is_some());
        assert_eq!(doc.section_count(), 2);
        assert!(!doc.is_empty());
    }
}
