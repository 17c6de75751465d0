//! Heuristic splitter for concatenated parent+child names.
//!
//! WhatsApp click-to-chat leads often arrive with both names glued together
//! ("kumarvaishnavi"). The splitter scores every plausible boundary around an
//! ideal parent share of the total length and keeps the best one.

use super::normalize::capitalize_first;

const MIN_PARENT: usize = 4;
const MIN_KID: usize = 4;
const PARENT_RATIO: f64 = 0.36;
const FALLBACK_RATIO: f64 = 0.35;

/// Pick the parent/kid boundary, in characters. Candidates within two of the
/// ideal boundary are scored; when none fits, a flat ratio of the length is
/// used instead.
pub(crate) fn split_point(total: usize) -> usize {
    let optimal = (total as f64 * PARENT_RATIO).floor() as usize;
    let lower = optimal.saturating_sub(2).max(MIN_PARENT);
    let upper = (optimal + 2).min(total.saturating_sub(MIN_KID));

    let mut best: Option<(usize, u32)> = None;
    if lower <= upper {
        for candidate in lower..=upper {
            let score = score_split(candidate, total);
            best = match best {
                Some((held, held_score))
                    if score < held_score
                        || (score == held_score && !closer_to_ideal(candidate, held, total)) =>
                {
                    Some((held, held_score))
                }
                _ => Some((candidate, score)),
            };
        }
    }

    match best {
        Some((candidate, _)) => candidate,
        None => ((total as f64 * FALLBACK_RATIO).floor() as usize).max(MIN_PARENT),
    }
}

/// Score a candidate boundary. Mid-length parent names are the most common
/// in the lead stream, long kid names second; a parent share near the ideal
/// ratio breaks near-ties.
pub(crate) fn score_split(parent_len: usize, total: usize) -> u32 {
    let kid_len = total - parent_len;
    let mut score = 0;

    score += match parent_len {
        5 => 30,
        6 => 25,
        4 => 15,
        7 => 10,
        3 | 8 => 5,
        _ => 0,
    };

    score += if kid_len >= 9 {
        15
    } else if kid_len >= 8 {
        10
    } else if kid_len >= 6 {
        5
    } else {
        0
    };

    let ratio_diff = (parent_len as f64 / total as f64 - PARENT_RATIO).abs();
    if ratio_diff < 0.02 {
        score += 10;
    } else if ratio_diff < 0.05 {
        score += 5;
    }

    score
}

fn closer_to_ideal(candidate: usize, held: usize, total: usize) -> bool {
    let target = total as f64 * PARENT_RATIO;
    (candidate as f64 - target).abs() < (held as f64 - target).abs()
}

/// Split `name` (already trimmed and lowercased) into parent and kid halves,
/// each with only its first character capitalized. Blobs of six characters
/// or fewer are treated as the parent name alone.
pub(crate) fn split_concatenated(name: &str) -> (String, String) {
    let chars: Vec<char> = name.chars().collect();
    if chars.is_empty() {
        return ("Parent".to_string(), "Child".to_string());
    }
    if chars.len() <= 6 {
        return (capitalize_first(name), "Child".to_string());
    }
    let split = split_point(chars.len()).min(chars.len());
    let parent: String = chars[..split].iter().collect();
    let kid: String = chars[split..].iter().collect();
    (capitalize_first(&parent), capitalize_first(&kid))
}
