use std::collections::HashMap;

use crate::domain::dishes::entities::PopularDish;

/// Counts dish mentions by exact name and returns the `top_n` most mentioned.
///
/// Names are compared verbatim; normalisation is left to the model. Dishes with
/// the same count keep the order in which they were first mentioned.
pub fn aggregate_dish_mentions<S: AsRef<str>>(mentions: &[S], top_n: usize) -> Vec<PopularDish> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for mention in mentions {
        let name = mention.as_ref();
        let next = counts.len();
        let position = *positions.entry(name).or_insert(next);
        if position == next {
            counts.push((name, 0));
        }
        counts[position].1 += 1;
    }

    // stable: ties stay in first-mention order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(top_n)
        .map(|(name, count)| PopularDish::new(name.to_string(), count))
        .collect()
}
