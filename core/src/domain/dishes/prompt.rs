const DISH_EXTRACTION_PROMPT: &str = r#"Analyze these restaurant reviews and extract all dish names mentioned.

Return ONLY a JSON array of dish names, nothing else. No explanations, no markdown.

Rules:
- Extract complete dish names (e.g., "Classic Poutine", not just "Poutine")
- Normalize spelling and capitalization (e.g., "tonkatsu" → "Tonkatsu")
- Skip vague terms like "food", "meal", "dish", "order"
- Skip standalone adjectives (e.g., "delicious", "amazing") without dish names
- Include only actual menu items, not ingredients alone
- If a dish is mentioned multiple times, include it each time
- Keep dish names concise (e.g., "BBQ Pulled Pork Poutine" not "the amazing BBQ Pulled Pork Poutine")

Reviews:
{reviews}

Output format (ONLY this, nothing else):
["Dish Name 1", "Dish Name 2", "Dish Name 3", ...]
"#;

/// Builds the dish extraction instruction with the reviews numbered from 1.
pub fn build_dish_extraction_prompt<S: AsRef<str>>(reviews: &[S]) -> String {
    let reviews_text = reviews
        .iter()
        .enumerate()
        .map(|(i, review)| format!("Review {}: {}", i + 1, review.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n");

    DISH_EXTRACTION_PROMPT.replace("{reviews}", &reviews_text)
}

pub fn dish_list_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": { "type": "string" }
    })
}
