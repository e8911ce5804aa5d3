use tracing::info;

/// Score given when one name contains the other, e.g. "Poutine" in "Classic Poutine".
pub const SUBSTRING_SCORE: f64 = 0.9;

/// Finds the menu item name closest to `dish_name`.
///
/// Case-insensitive equality wins immediately. Otherwise each item scores
/// [`SUBSTRING_SCORE`] when either lower-cased name contains the other, or
/// its [`similarity_ratio`] when not; the best positive score (first item on
/// ties) is returned if it reaches `threshold`.
pub fn match_dish_to_menu<'a, S: AsRef<str>>(
    dish_name: &str,
    menu_items: &'a [S],
    threshold: f64,
) -> Option<&'a str> {
    let dish_lower = dish_name.to_lowercase();
    let mut best_match: Option<&'a str> = None;
    let mut best_score = 0.0;

    for menu_item in menu_items {
        let menu_item = menu_item.as_ref();
        let menu_lower = menu_item.to_lowercase();

        if dish_lower == menu_lower {
            return Some(menu_item);
        }

        let score = if menu_lower.contains(&dish_lower) || dish_lower.contains(&menu_lower) {
            SUBSTRING_SCORE
        } else {
            similarity_ratio(&dish_lower, &menu_lower)
        };

        if score > best_score {
            best_match = Some(menu_item);
            best_score = score;
        }
    }

    // a zero score never counts as a match, whatever the threshold
    let menu_item = best_match?;
    if best_score >= threshold {
        info!("Matched '{}' to '{}' (score: {:.2})", dish_name, menu_item, best_score);
        Some(menu_item)
    } else {
        None
    }
}

/// Character-sequence similarity in `[0, 1]`: twice the number of characters
/// in matching blocks divided by the total length of both strings.
///
/// Matching blocks are found by taking the longest common run and recursing
/// on both sides of it, the Ratcliff/Obershelp scheme.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_common_run(a, b, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest run shared by `a[alo..ahi]` and `b[blo..bhi]` as `(start_a, start_b, len)`.
/// Ties resolve to the run starting earliest in `a`, then earliest in `b`.
fn longest_common_run(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // previous[j - blo + 1]: length of the run ending at (i - 1, j)
    let mut previous = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut current = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let length = previous[j - blo] + 1;
                current[j - blo + 1] = length;
                if length > best.2 {
                    best = (i + 1 - length, j + 1 - length, length);
                }
            }
        }
        previous = current;
    }

    best
}
