use std::fmt::Write as _;

use crate::domain::menu::schema::{
    CATEGORY_FIELDS, ITEM_FIELDS, example_menu, translated_field_name,
};

const TASK_INTRO: &str = "You are an expert at understanding restaurant menus in any language.

Analyze the menu in this image and extract a structured representation of all the dishes.

Your tasks:
1. Detect the language of the menu text automatically
2. Read all visible text from the image (OCR) in the original language
3. Identify and group the content into categories
4. For each dish, extract:
";

const TASK_OUTRO: &str = "5. Preserve the order from top to bottom and left to right
6. Skip irrelevant text (phone numbers, URLs, social media, etc.)

PRICE HANDLING RULES:
- If price is in words/native language (e.g., \"八百円\"=800yen, \"十块\"=10yuan), convert to number
- Always preserve EXACT original price text in price_original
- If price is unclear or handwritten and you can't read it, set price to null but keep price_original
- Extract currency symbol (¥, $, €, etc.) separately
- Examples:
  * \"八百円\" → price: 800, price_original: \"八百円\", currency: \"¥\"
  * \"$12.50\" → price: 12.5, price_original: \"$12.50\", currency: \"$\"
  * \"market price\" → price: null, price_original: \"market price\", currency: null";

const FORMATTING_RULES: &str = "CRITICAL JSON FORMATTING RULES:
- Output ONLY valid JSON, nothing else (no markdown, no explanations, no ```json blocks)
- NO trailing commas before ] or }
- Use double quotes for all strings, not single quotes
- Escape special characters in strings (quotes, backslashes, newlines)
- If description contains quotes, escape them: \\\"
- Ensure all brackets and braces are balanced
- Test your JSON is valid before returning

OTHER RULES:
- Preserve original text exactly as it appears
- Normalize capitalization while keeping names readable
- For Asian languages (Chinese, Japanese, Korean), preserve character accuracy
- Detect language based on the actual text in the image, not assumptions
";

/// Builds the menu vision instruction, including the worked JSON example the
/// model must follow. Translation instructions and `*_translated` fields are
/// only present when `target_language` is given.
pub fn build_menu_prompt(target_language: Option<&str>) -> String {
    let mut prompt = String::from(TASK_INTRO);

    for field in ITEM_FIELDS {
        if let Some(rule) = field.rule {
            let _ = writeln!(prompt, "   - {}: {}", field.name, rule);
        }
    }
    prompt.push_str(TASK_OUTRO);

    if let Some(target) = target_language {
        let _ = write!(prompt, "\n7. Translate ALL text to {target}:\n");
        for field in CATEGORY_FIELDS.iter().chain(ITEM_FIELDS) {
            if let Some(noun) = field.translated_as {
                let _ = writeln!(
                    prompt,
                    "   - {}: Translate {} to {}",
                    translated_field_name(field.name),
                    noun,
                    target
                );
            }
        }
        prompt.push_str("   Keep translations natural and culturally appropriate.");
    }

    let example = serde_json::to_string_pretty(&example_menu(target_language))
        .unwrap_or_default();

    let _ = write!(
        prompt,
        "\n\nReturn a **valid JSON** object with this EXACT structure:\n{example}\n\n{FORMATTING_RULES}"
    );

    prompt
}
