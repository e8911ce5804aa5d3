//! Single description of the menu output contract.
//!
//! The prompt's field rules, its worked JSON example and the response schema
//! handed to the model are all generated from the field lists below, which
//! mirror [`ParsedMenu`](super::entities::ParsedMenu) field for field.

use serde_json::{Map, Value, json};

pub const DETECTED_LANGUAGE: &str = "detected_language";
pub const TARGET_LANGUAGE: &str = "target_language";
pub const MENU: &str = "menu";
pub const ITEMS: &str = "items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Value shown for a field in the worked example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Example {
    /// Rendered as "`<label>` in original language", and as
    /// "`<label>` in `<target>`" for the translated twin.
    Localized(&'static str),
    Literal(&'static str),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub example: Example,
    /// Extraction rule listed in the prompt's task description.
    pub rule: Option<&'static str>,
    /// What the translated twin holds, when the field has one.
    pub translated_as: Option<&'static str>,
}

pub const CATEGORY_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "category",
    kind: FieldKind::Text,
    required: true,
    example: Example::Localized("Category"),
    rule: None,
    translated_as: Some("category name"),
}];

pub const ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        required: true,
        example: Example::Localized("Dish name"),
        rule: Some("the dish name in original language"),
        translated_as: Some("dish name"),
    },
    FieldSpec {
        name: "price",
        kind: FieldKind::Number,
        required: false,
        example: Example::Number(12.5),
        rule: Some("NUMERIC price ONLY (e.g., 12.5, 800, 45.99)"),
        translated_as: None,
    },
    FieldSpec {
        name: "price_original",
        kind: FieldKind::Text,
        required: false,
        example: Example::Literal("¥1250"),
        rule: Some(r#"the EXACT price text from image (e.g., "八百円", "$12.50", "¥800")"#),
        translated_as: None,
    },
    FieldSpec {
        name: "currency",
        kind: FieldKind::Text,
        required: false,
        example: Example::Literal("¥"),
        rule: Some(r#"currency symbol or code (e.g., "$", "¥", "€", "USD", "JPY")"#),
        translated_as: None,
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::Text,
        required: false,
        example: Example::Localized("Description"),
        rule: Some("ingredient or preparation text in original language (if present)"),
        translated_as: Some("description"),
    },
];

pub fn translated_field_name(name: &str) -> String {
    format!("{name}_translated")
}

/// Worked example of the expected output, with the translated fields present
/// only when a target language is given.
pub fn example_menu(target_language: Option<&str>) -> Value {
    let mut item = Map::new();
    insert_examples(&mut item, ITEM_FIELDS, target_language);

    let mut category = Map::new();
    insert_examples(&mut category, CATEGORY_FIELDS, target_language);
    category.insert(ITEMS.to_string(), Value::Array(vec![Value::Object(item)]));

    let mut root = Map::new();
    root.insert(
        DETECTED_LANGUAGE.to_string(),
        json!("Language Name (e.g., Japanese, Chinese, Korean, English, etc.)"),
    );
    root.insert(
        TARGET_LANGUAGE.to_string(),
        target_language.map_or(Value::Null, |target| json!(target)),
    );
    root.insert(
        MENU.to_string(),
        Value::Array(vec![Value::Object(category)]),
    );

    Value::Object(root)
}

fn insert_examples(map: &mut Map<String, Value>, fields: &[FieldSpec], target: Option<&str>) {
    for field in fields {
        let value = match field.example {
            Example::Localized(label) => json!(format!("{label} in original language")),
            Example::Literal(text) => json!(text),
            Example::Number(number) => json!(number),
        };
        map.insert(field.name.to_string(), value);

        if let (Some(target), Some(_), Example::Localized(label)) =
            (target, field.translated_as, field.example)
        {
            map.insert(
                translated_field_name(field.name),
                json!(format!("{label} in {target}")),
            );
        }
    }
}

/// Response schema for structured model output, in the OpenAPI subset the
/// model endpoint accepts.
pub fn menu_response_schema(target_language: Option<&str>) -> Value {
    let item = object_schema(ITEM_FIELDS, target_language, None);
    let category = object_schema(
        CATEGORY_FIELDS,
        target_language,
        Some(json!({ "type": "array", "items": item })),
    );

    json!({
        "type": "object",
        "properties": {
            DETECTED_LANGUAGE: { "type": "string", "nullable": true },
            TARGET_LANGUAGE: { "type": "string", "nullable": true },
            MENU: { "type": "array", "items": category }
        },
        "propertyOrdering": [DETECTED_LANGUAGE, TARGET_LANGUAGE, MENU],
        "required": [MENU]
    })
}

fn object_schema(fields: &[FieldSpec], target: Option<&str>, items: Option<Value>) -> Value {
    let mut properties = Map::new();
    let mut ordering = Vec::new();
    let mut required = Vec::new();

    for field in fields {
        let kind = match field.kind {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
        };
        properties.insert(
            field.name.to_string(),
            json!({ "type": kind, "nullable": !field.required }),
        );
        ordering.push(json!(field.name));
        if field.required {
            required.push(json!(field.name));
        }

        if target.is_some() && field.translated_as.is_some() {
            let translated = translated_field_name(field.name);
            properties.insert(
                translated.clone(),
                json!({ "type": "string", "nullable": true }),
            );
            ordering.push(json!(translated));
        }
    }

    if let Some(items) = items {
        properties.insert(ITEMS.to_string(), items);
        ordering.push(json!(ITEMS));
        required.push(json!(ITEMS));
    }

    json!({
        "type": "object",
        "properties": properties,
        "propertyOrdering": ordering,
        "required": required
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_keys(example: &Value) -> Vec<String> {
        example["menu"][0]["items"][0]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_example_without_translation_has_no_translated_fields() {
        let example = example_menu(None);

        assert_eq!(example["target_language"], Value::Null);
        assert!(example["menu"][0].get("category_translated").is_none());
        assert_eq!(
            item_keys(&example),
            vec!["name", "price", "price_original", "currency", "description"]
        );
    }

    #[test]
    fn test_example_with_translation_places_twins_after_originals() {
        let example = example_menu(Some("English"));

        assert_eq!(example["target_language"], "English");
        assert_eq!(
            example["menu"][0]["category_translated"],
            "Category in English"
        );
        assert_eq!(
            item_keys(&example),
            vec![
                "name",
                "name_translated",
                "price",
                "price_original",
                "currency",
                "description",
                "description_translated"
            ]
        );
        assert_eq!(
            example["menu"][0]["items"][0]["name_translated"],
            "Dish name in English"
        );
        assert_eq!(example["menu"][0]["items"][0]["price"], 12.5);
    }

    #[test]
    fn test_response_schema_marks_required_fields() {
        let schema = menu_response_schema(None);
        let category = &schema["properties"]["menu"]["items"];
        let item = &category["properties"]["items"]["items"];

        assert_eq!(category["required"], json!(["category", "items"]));
        assert_eq!(item["required"], json!(["name"]));
        assert_eq!(item["properties"]["price"]["type"], "number");
        assert_eq!(item["properties"]["price"]["nullable"], true);
        assert!(item["properties"].get("name_translated").is_none());
    }

    #[test]
    fn test_response_schema_includes_translated_fields_on_request() {
        let schema = menu_response_schema(Some("Spanish"));
        let category = &schema["properties"]["menu"]["items"];
        let item = &category["properties"]["items"]["items"];

        assert_eq!(
            category["propertyOrdering"],
            json!(["category", "category_translated", "items"])
        );
        assert_eq!(item["properties"]["description_translated"]["type"], "string");
    }
}
