use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::domain::common::{entities::app_errors::CoreError, truncate_chars};

/// Number of characters of model output kept in a parse error.
pub const ERROR_PREVIEW_CHARS: usize = 500;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("trailing comma pattern is valid"));

static MISSING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\s*\n\s*""#).expect("missing comma pattern is valid"));

/// Top-level JSON kind the caller expects from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    fn brackets(self) -> (char, char) {
        match self {
            JsonShape::Object => ('{', '}'),
            JsonShape::Array => ('[', ']'),
        }
    }

    fn repairs(self) -> &'static [Repair] {
        match self {
            JsonShape::Object => OBJECT_REPAIRS,
            JsonShape::Array => ARRAY_REPAIRS,
        }
    }
}

/// A textual repair applied on top of the previous candidate before re-parsing.
struct Repair {
    name: &'static str,
    apply: fn(&str) -> Cow<'_, str>,
}

const TRAILING_COMMA_REPAIR: Repair = Repair {
    name: "trailing_comma",
    apply: remove_trailing_commas,
};

const MISSING_COMMA_REPAIR: Repair = Repair {
    name: "missing_comma",
    apply: insert_missing_commas,
};

const OBJECT_REPAIRS: &[Repair] = &[TRAILING_COMMA_REPAIR, MISSING_COMMA_REPAIR];

// Arrays hold bare strings, so a quote-newline-quote run is not a field boundary.
const ARRAY_REPAIRS: &[Repair] = &[TRAILING_COMMA_REPAIR];

/// Converts raw model output into a JSON value, repairing the handful of
/// mistakes the model is known to make.
///
/// Attempts run in order and stop at the first successful parse: strict parse
/// of the unfenced, bracket-isolated text, then each repair allowed for
/// `shape`, applied cumulatively. Repairs never run on text that already
/// parses.
pub fn recover_json(raw: &str, shape: JsonShape) -> Result<Value, CoreError> {
    let isolated = isolate_brackets(strip_fencing(raw), shape);

    let mut last_error = match parse_strict(isolated) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let mut candidate = Cow::Borrowed(isolated);
    for repair in shape.repairs() {
        candidate = Cow::Owned((repair.apply)(&candidate).into_owned());

        match parse_strict(&candidate) {
            Ok(value) => {
                debug!(repair = repair.name, "Recovered model output after repair");
                return Ok(value);
            }
            Err(e) => last_error = e,
        }
    }

    Err(CoreError::MalformedUpstreamResponse {
        preview: truncate_chars(isolated, ERROR_PREVIEW_CHARS).to_string(),
        reason: last_error.to_string(),
    })
}

/// Removes a leading ```` ```json ```` (or bare ```` ``` ````) fence and a
/// trailing ```` ``` ```` fence. Only the ends of the text are touched.
pub fn strip_fencing(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}

/// Keeps the span between the first opening and the last closing bracket of
/// `shape`. Text without both brackets in that order is returned unchanged so
/// the strict parse reports the real error.
pub fn isolate_brackets(text: &str, shape: JsonShape) -> &str {
    let (open, close) = shape.brackets();

    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Drops any comma followed (ignoring whitespace) by `}` or `]`.
pub fn remove_trailing_commas(text: &str) -> Cow<'_, str> {
    TRAILING_COMMA.replace_all(text, "$1")
}

/// Inserts a comma between a closing quote and an opening quote separated
/// only by a line break.
pub fn insert_missing_commas(text: &str) -> Cow<'_, str> {
    MISSING_COMMA.replace_all(text, "\",\n\"")
}

fn parse_strict(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_is_returned_as_is() {
        let inputs = [
            r#"{"menu": [], "detected_language": "Japanese"}"#,
            r#"{"a": [1, 2.5e3, -0.1], "b": {"c": null, "d": [[], {}]}}"#,
            r#"{"text": "comma, then brace }", "list": "a,]"}"#,
        ];

        for input in inputs {
            let expected: Value = serde_json::from_str(input).unwrap();
            assert_eq!(recover_json(input, JsonShape::Object).unwrap(), expected);
        }

        let array = r#"["Ramen", "Sushi"]"#;
        assert_eq!(
            recover_json(array, JsonShape::Array).unwrap(),
            json!(["Ramen", "Sushi"])
        );
    }

    #[test]
    fn test_repairs_do_not_touch_string_contents_of_valid_json() {
        // Would be altered by the trailing comma repair if it ran.
        let input = r#"{"note": "a ,}"}"#;
        assert_eq!(
            recover_json(input, JsonShape::Object).unwrap(),
            json!({"note": "a ,}"})
        );
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let inner = r#"{"menu": [{"category": "Ramen", "items": []}]}"#;
        let fenced = format!("```json\n{inner}\n```");

        assert_eq!(
            recover_json(&fenced, JsonShape::Object).unwrap(),
            recover_json(inner, JsonShape::Object).unwrap()
        );
    }

    #[test]
    fn test_bare_fence_is_stripped() {
        assert_eq!(strip_fencing("```\n[\"Gyoza\"]\n```"), "[\"Gyoza\"]");
        assert_eq!(strip_fencing("  ```json{\"a\":1}```  "), "{\"a\":1}");
    }

    #[test]
    fn test_strip_fencing_keeps_embedded_backticks() {
        let text = r#"{"description": "served ```hot```"}"#;
        assert_eq!(strip_fencing(text), text);
    }

    #[test]
    fn test_prose_around_object_is_discarded() {
        let raw = "Sure! Here is the menu:\n{\"menu\": [{\"category\": \"Drinks\"}]}\nEnjoy {your meal}!";
        // Last closing brace belongs to the trailing prose, so the strict parse
        // fails and no repair can fix it.
        assert!(recover_json(raw, JsonShape::Object).is_err());

        let raw = "Sure! Here is the menu:\n{\"menu\": [{\"category\": \"Drinks\"}]}\nEnjoy!";
        assert_eq!(
            recover_json(raw, JsonShape::Object).unwrap(),
            json!({"menu": [{"category": "Drinks"}]})
        );
    }

    #[test]
    fn test_isolation_uses_first_open_and_last_close() {
        let text = "x {\"a\": {\"b\": 1}} y";
        assert_eq!(
            isolate_brackets(text, JsonShape::Object),
            "{\"a\": {\"b\": 1}}"
        );
        assert_eq!(
            isolate_brackets("dishes: [\"A\", [\"B\"]] done", JsonShape::Array),
            "[\"A\", [\"B\"]]"
        );
    }

    #[test]
    fn test_isolation_skipped_without_expected_brackets() {
        assert_eq!(isolate_brackets("no json here", JsonShape::Object), "no json here");
        assert_eq!(isolate_brackets("} backwards {", JsonShape::Object), "} backwards {");
        assert_eq!(isolate_brackets("{\"a\": 1}", JsonShape::Array), "{\"a\": 1}");
    }

    #[test]
    fn test_trailing_comma_before_brace_is_removed() {
        let with_comma = r#"{"category": "Soups", "items": [],}"#;
        let without = r#"{"category": "Soups", "items": []}"#;

        assert_eq!(
            recover_json(with_comma, JsonShape::Object).unwrap(),
            serde_json::from_str::<Value>(without).unwrap()
        );
    }

    #[test]
    fn test_trailing_comma_before_bracket_is_removed() {
        let raw = "[\n  \"Ramen\",\n  \"Sushi\",\n]";
        assert_eq!(
            recover_json(raw, JsonShape::Array).unwrap(),
            json!(["Ramen", "Sushi"])
        );
    }

    #[test]
    fn test_missing_comma_between_lines_is_inserted() {
        let raw = "{\n  \"name\": \"Tonkatsu\"\n  \"description\": \"Breaded pork\"\n}";
        assert_eq!(
            recover_json(raw, JsonShape::Object).unwrap(),
            json!({"name": "Tonkatsu", "description": "Breaded pork"})
        );
    }

    #[test]
    fn test_trailing_and_missing_commas_combined() {
        let raw = "```json\n{\n  \"name\": \"Udon\"\n  \"price_original\": \"¥900\",\n}\n```";
        assert_eq!(
            recover_json(raw, JsonShape::Object).unwrap(),
            json!({"name": "Udon", "price_original": "¥900"})
        );
    }

    #[test]
    fn test_missing_comma_repair_not_applied_to_arrays() {
        let raw = "[\"Ramen\"\n\"Sushi\"]";
        assert!(matches!(
            recover_json(raw, JsonShape::Array),
            Err(CoreError::MalformedUpstreamResponse { .. })
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        for raw in ["", "   ", "```json\n```"] {
            assert!(matches!(
                recover_json(raw, JsonShape::Object),
                Err(CoreError::MalformedUpstreamResponse { .. })
            ));
        }
    }

    #[test]
    fn test_unrecoverable_input_fails_with_preview() {
        let raw = "Sure! Here is the menu: {\"menu\": [}";

        match recover_json(raw, JsonShape::Object) {
            Err(CoreError::MalformedUpstreamResponse { preview, reason }) => {
                assert_eq!(preview, "{\"menu\": [}");
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed response error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_preview_is_truncated() {
        let raw = format!("{{\"menu\": \"{}", "x".repeat(2_000));

        match recover_json(&raw, JsonShape::Object) {
            Err(CoreError::MalformedUpstreamResponse { preview, .. }) => {
                assert_eq!(preview.chars().count(), ERROR_PREVIEW_CHARS);
            }
            other => panic!("expected malformed response error, got {other:?}"),
        }
    }

    #[test]
    fn test_text_without_brackets_reports_real_error() {
        match recover_json("I could not read this menu.", JsonShape::Object) {
            Err(CoreError::MalformedUpstreamResponse { preview, reason }) => {
                assert_eq!(preview, "I could not read this menu.");
                assert!(reason.contains("expected value"));
            }
            other => panic!("expected malformed response error, got {other:?}"),
        }
    }
}
