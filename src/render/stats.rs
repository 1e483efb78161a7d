//! Field statistics over an assembled schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{FieldType, FormField, ParsedDocument};

/// Form field totals, grouped by type.
///
/// `field_type_count` only holds types that occur; its values always sum
/// to `total_fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatistics {
    /// Number of form fields
    pub total_fields: usize,

    /// Number of form fields per type
    pub field_type_count: BTreeMap<FieldType, usize>,
}

/// The part of a schema the statistics need.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaFields {
    #[serde(default)]
    form_fields: Vec<FormField>,
}

impl FieldStatistics {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a list of form fields.
    pub fn from_fields(fields: &[FormField]) -> Self {
        let mut stats = Self::new();
        for field in fields {
            stats.add_field(field.field_type);
        }
        stats
    }

    /// Count the form fields of an assembled document.
    pub fn from_document(doc: &ParsedDocument) -> Self {
        Self::from_fields(&doc.form_fields)
    }

    /// Count the form fields of a schema given as JSON text.
    ///
    /// A schema without `formFields` yields zero totals.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: SchemaFields = serde_json::from_str(json)?;
        Ok(Self::from_fields(&schema.form_fields))
    }

    /// Increment the count for a field type.
    pub fn add_field(&mut self, field_type: FieldType) {
        self.total_fields += 1;
        *self.field_type_count.entry(field_type).or_insert(0) += 1;
    }

    /// Get the count for a field type.
    pub fn count(&self, field_type: FieldType) -> usize {
        self.field_type_count.get(&field_type).copied().unwrap_or(0)
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &FieldStatistics) {
        self.total_fields += other.total_fields;
        for (field_type, count) in &other.field_type_count {
            *self.field_type_count.entry(*field_type).or_insert(0) += count;
        }
    }
}
