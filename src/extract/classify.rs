//! Field type classification by name keywords.

use crate::model::FieldType;

/// Keyword rules, evaluated in order; the first rule with a keyword
/// contained in the lower-cased name wins. The order is significant:
/// `approval_date_value` is a date, not a number.
const RULES: &[(&[&str], FieldType)] = &[
    (&["date"], FieldType::Date),
    (&["select", "option", "radio"], FieldType::Select),
    (&["checkbox"], FieldType::Checkbox),
    (&["textarea", "content"], FieldType::Textarea),
    (&["number", "num", "value"], FieldType::Number),
];

/// Classify a field by its name. Never fails; unmatched names are `Text`.
pub fn classify(name: &str) -> FieldType {
    let lower = name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, field_type)| *field_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("start_date"), FieldType::Date);
        assert_eq!(classify("agree_checkbox"), FieldType::Checkbox);
        assert_eq!(classify("comments_textarea"), FieldType::Textarea);
        assert_eq!(classify("retry_count_value"), FieldType::Number);
        assert_eq!(classify("foo"), FieldType::Text);
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("approval_date_value"), FieldType::Date);
        assert_eq!(classify("select_option"), FieldType::Select);
        assert_eq!(classify("radio_option"), FieldType::Select);
        assert_eq!(classify("checkbox_content"), FieldType::Checkbox);
        assert_eq!(classify("textarea_content"), FieldType::Textarea);
        assert_eq!(classify("content_number"), FieldType::Textarea);
    }

    #[test]
    fn test_classify_form_fixture_names() {
        assert_eq!(classify("date_field"), FieldType::Date);
        assert_eq!(classify("number_value"), FieldType::Number);
        assert_eq!(classify("checkbox_item"), FieldType::Checkbox);
        assert_eq!(classify("text_input"), FieldType::Text);
        assert_eq!(classify("id_number"), FieldType::Number);
        assert_eq!(classify("amount"), FieldType::Text);
        assert_eq!(classify("name"), FieldType::Text);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("BirthDate"), FieldType::Date);
        assert_eq!(classify("PHONE_NUM"), FieldType::Number);
    }
}
