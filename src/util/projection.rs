use serde_json::Value;

use crate::validation::query::FieldSelection;

/// Applies a validated field selection to a serialized document.
///
/// Include mode keeps the listed fields plus `id` (the document identity is
/// always returned unless explicitly excluded); exclude mode removes the
/// listed fields. Non-object values are left untouched.
///
/// # Arguments
/// - `document` - Serialized document to project in place
/// - `selection` - Validated field selection from the query string
pub fn apply(document: &mut Value, selection: &FieldSelection) {
    let Value::Object(map) = document else {
        return;
    };

    if selection.exclude {
        for field in &selection.fields {
            map.remove(field);
        }
    } else {
        map.retain(|key, _| key == "id" || selection.fields.iter().any(|f| f == key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn include_mode_keeps_listed_fields_and_id() {
        let mut doc = json!({"id": 1, "name": "a", "price": 9.0, "summary": "s"});
        let selection = FieldSelection {
            exclude: false,
            fields: vec!["name".to_string(), "price".to_string()],
        };

        apply(&mut doc, &selection);

        assert_eq!(doc, json!({"id": 1, "name": "a", "price": 9.0}));
    }

    #[test]
    fn exclude_mode_removes_listed_fields() {
        let mut doc = json!({"id": 1, "name": "a", "price": 9.0});
        let selection = FieldSelection {
            exclude: true,
            fields: vec!["price".to_string()],
        };

        apply(&mut doc, &selection);

        assert_eq!(doc, json!({"id": 1, "name": "a"}));
    }
}
