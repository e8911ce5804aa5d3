use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuCategory, MenuItem, ParsedMenu, Reported},
        schema::{DETECTED_LANGUAGE, ITEMS, MENU, TARGET_LANGUAGE},
    },
};

/// Maps a recovered JSON value onto the typed menu tree.
///
/// Categories and items keep the order the model emitted them in. Missing
/// `category` or item `name` values, or values that are not non-empty strings,
/// reject the whole menu; optional fields of the wrong type become null.
pub fn assemble_menu(value: Value) -> Result<ParsedMenu, CoreError> {
    let Value::Object(mut root) = value else {
        return Err(CoreError::UpstreamSchemaViolation(
            "menu response is not a JSON object".to_string(),
        ));
    };

    let categories = take_array(&mut root, MENU, "menu")?
        .into_iter()
        .enumerate()
        .map(|(index, category)| assemble_category(index, category))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedMenu {
        detected_language: optional_text(&mut root, DETECTED_LANGUAGE),
        target_language: optional_text(&mut root, TARGET_LANGUAGE),
        menu: categories,
    })
}

fn assemble_category(index: usize, value: Value) -> Result<MenuCategory, CoreError> {
    let path = format!("menu[{index}]");
    let mut fields = into_object(value, &path)?;

    let category = required_text(&mut fields, "category", &path)?;
    let items = take_array(&mut fields, ITEMS, &format!("{path}.items"))?
        .into_iter()
        .enumerate()
        .map(|(item_index, item)| assemble_item(item, &format!("{path}.items[{item_index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MenuCategory {
        category,
        category_translated: optional_text(&mut fields, "category_translated"),
        items,
    })
}

fn assemble_item(value: Value, path: &str) -> Result<MenuItem, CoreError> {
    let mut fields = into_object(value, path)?;

    Ok(MenuItem {
        name: required_text(&mut fields, "name", path)?,
        name_translated: optional_text(&mut fields, "name_translated"),
        price: optional_price(&mut fields, path),
        price_original: optional_text(&mut fields, "price_original"),
        currency: optional_text(&mut fields, "currency"),
        description: optional_text(&mut fields, "description"),
        description_translated: optional_text(&mut fields, "description_translated"),
    })
}

fn into_object(value: Value, path: &str) -> Result<Map<String, Value>, CoreError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(CoreError::UpstreamSchemaViolation(format!(
            "{path} must be an object, got {}",
            type_name(&other)
        ))),
    }
}

/// Absent or null arrays default to empty.
fn take_array(
    fields: &mut Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<Value>, CoreError> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(CoreError::UpstreamSchemaViolation(format!(
            "{path} must be an array, got {}",
            type_name(&other)
        ))),
    }
}

fn required_text(
    fields: &mut Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, CoreError> {
    match fields.remove(key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text),
        Some(Value::String(_)) => Err(CoreError::UpstreamSchemaViolation(format!(
            "{path}.{key} must not be empty"
        ))),
        None => Err(CoreError::UpstreamSchemaViolation(format!(
            "{path}.{key} is required"
        ))),
        Some(other) => Err(CoreError::UpstreamSchemaViolation(format!(
            "{path}.{key} must be a string, got {}",
            type_name(&other)
        ))),
    }
}

fn optional_text(fields: &mut Map<String, Value>, key: &str) -> Reported<String> {
    match fields.remove(key) {
        None => Reported::Absent,
        Some(Value::String(text)) => Reported::Value(text),
        Some(_) => Reported::Null,
    }
}

/// Numbers pass through untouched and numeric strings are converted; anything
/// else (e.g. "market price") becomes null rather than a guess.
fn optional_price(fields: &mut Map<String, Value>, path: &str) -> Reported<Number> {
    match fields.remove("price") {
        None => Reported::Absent,
        Some(Value::Null) => Reported::Null,
        Some(Value::Number(number)) => Reported::Value(number),
        Some(Value::String(text)) => match parse_price(&text) {
            Some(price) => Reported::Value(price),
            None => {
                debug!(path, price = %text, "Discarding non-numeric price");
                Reported::Null
            }
        },
        Some(other) => {
            debug!(path, kind = type_name(&other), "Discarding non-numeric price");
            Reported::Null
        }
    }
}

/// Integers stay integers; `Number::from_f64` rejects NaN and infinities.
fn parse_price(text: &str) -> Option<Number> {
    let text = text.trim();
    text.parse::<i64>()
        .map(Number::from)
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(Number::from_f64))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
