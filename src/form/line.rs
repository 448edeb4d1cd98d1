use lazy_static::lazy_static;
use regex::Regex;

use crate::payload::sanitizer::SENTINEL;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Split a free-text entry line into positional field values, right-padded
/// with empty strings to `field_count`.
pub fn split_values(text: &str, field_count: usize) -> Vec<String> {
    let trimmed = text.trim();
    let mut values: Vec<String> = if trimmed.is_empty() {
        Vec::new()
    } else {
        WHITESPACE_RUN
            .split(trimmed)
            .map(|token| token.to_string())
            .collect()
    };
    while values.len() < field_count {
        values.push(String::new());
    }
    values
}

/// Collapse whitespace runs to dashes and lowercase, so a token never
/// breaks the positional encoding of the line.
pub fn sanitize_token(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, "-").to_lowercase()
}

/// Write a new value into field `idx` and rebuild the entry line.
///
/// Editing a field beyond the current last non-empty position fills every
/// intervening empty slot with the `_` placeholder so later fields keep
/// their positions. The rebuilt line is truncated after the last non-empty
/// value.
pub fn apply_edit(values: &[String], idx: usize, raw: &str) -> String {
    let mut edited: Vec<String> = values.to_vec();
    if idx >= edited.len() {
        edited.resize(idx + 1, String::new());
    }

    let mut last_non_empty = edited.len() - 1;
    while last_non_empty > 0 && edited[last_non_empty].is_empty() {
        last_non_empty -= 1;
    }
    if idx > last_non_empty {
        for slot in edited.iter_mut().take(idx).skip(last_non_empty + 1) {
            *slot = SENTINEL.to_string();
        }
    }
    edited[idx] = sanitize_token(raw);

    let mut end = edited.len() - 1;
    while end > 0 && edited[end].is_empty() {
        end -= 1;
    }
    edited[..=end].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pads_to_field_count() {
        assert_eq!(split_values("a b", 4), vec!["a", "b", "", ""]);
    }

    #[test]
    fn test_split_blank_text_is_all_empty() {
        assert_eq!(split_values("   ", 2), vec!["", ""]);
        assert_eq!(split_values("", 3), vec!["", "", ""]);
    }

    #[test]
    fn test_split_collapses_whitespace_runs() {
        assert_eq!(split_values("a   b\tc", 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_extra_tokens() {
        assert_eq!(split_values("a b c", 2), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sanitize_token() {
        assert_eq!(sanitize_token("Albert  Heijn"), "albert-heijn");
        assert_eq!(sanitize_token("tesco"), "tesco");
    }

    #[test]
    fn test_edit_adjacent_field_fills_no_gaps() {
        let values = split_values("banana 42", 7);
        let line = apply_edit(&values, 2, "500");
        assert_eq!(line, "banana 42 500");
    }

    #[test]
    fn test_edit_beyond_last_fills_gaps_with_sentinels() {
        let values = split_values("banana 42", 7);
        let line = apply_edit(&values, 4, "tesco");
        assert_eq!(line, "banana 42 _ _ tesco");
    }

    #[test]
    fn test_edit_round_trips_through_split() {
        let values = split_values("banana 42", 7);
        let line = apply_edit(&values, 4, "tesco");
        let reparsed = split_values(&line, 7);
        assert_eq!(reparsed[2], "_");
        assert_eq!(reparsed[4], "tesco");
        assert_eq!(reparsed[5], "");
    }

    #[test]
    fn test_edit_truncates_trailing_empties() {
        let values = split_values("banana 42 500 g tesco", 7);
        let line = apply_edit(&values, 1, "45");
        assert_eq!(line, "banana 45 500 g tesco");
    }

    #[test]
    fn test_edit_extends_short_value_vector() {
        let line = apply_edit(&[], 2, "x");
        assert_eq!(line, " _ x");
    }
}
