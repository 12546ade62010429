//! Category index for the dependent main group / sub group choice lists

use crate::core::record::Record;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sorted, deduplicated, non-empty main group values
pub fn category_a_options(records: &[Record]) -> Vec<String> {
    unique_sorted(records.iter().map(|r| r.category_a.as_str()))
}

/// Sorted, deduplicated, non-empty sub group values available under
/// `category_a` (every record when no main group is selected)
pub fn category_b_options(records: &[Record], category_a: Option<&str>) -> Vec<String> {
    unique_sorted(
        records
            .iter()
            .filter(|r| category_a.is_none_or(|a| r.category_a == a))
            .map(|r| r.category_b.as_str()),
    )
}

/// Rebuild the sub group choice list after a main group change
///
/// The prior sub group selection survives only if it is still offered;
/// otherwise the selection resets to `None`.
pub fn derive_category_b_options(
    records: &[Record],
    category_a: Option<&str>,
    prior: Option<&str>,
) -> (Vec<String>, Option<String>) {
    let options = category_b_options(records, category_a);
    let selection = prior
        .filter(|p| options.iter().any(|o| o == p))
        .map(str::to_string);
    (options, selection)
}

/// Locale-style ordering: case-insensitive first, code points break ties
///
/// No collation tables: accented letters sort after `z` (`"Éclair"` comes
/// after `"Zebra"`) and punctuation such as `_` sorts by code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect();
    unique.sort_by(|a, b| locale_cmp(a, b));
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("1", "", "Bricks", "Bricks 2 x"),
            Record::new("2", "", "Plates", "Plates 1 x"),
            Record::new("3", "", "Bricks", "Bricks 1 x"),
            Record::new("4", "", "bricks", "arches"),
            Record::new("5", "", "Bricks", "Bricks 2 x"),
            Record::new("6", "", "", ""),
        ]
    }

    #[test]
    fn test_category_a_options_sorted_unique_non_empty() {
        let options = category_a_options(&sample());
        assert_eq!(options, vec!["bricks", "Bricks", "Plates"]);
    }

    #[test]
    fn test_category_b_options_for_selection() {
        let options = category_b_options(&sample(), Some("Bricks"));
        assert_eq!(options, vec!["Bricks 1 x", "Bricks 2 x"]);
    }

    #[test]
    fn test_category_b_options_without_selection() {
        let options = category_b_options(&sample(), None);
        assert_eq!(
            options,
            vec!["arches", "Bricks 1 x", "Bricks 2 x", "Plates 1 x"]
        );
    }

    #[test]
    fn test_derive_preserves_valid_selection() {
        let (options, selection) =
            derive_category_b_options(&sample(), Some("Bricks"), Some("Bricks 1 x"));
        assert_eq!(options.len(), 2);
        assert_eq!(selection.as_deref(), Some("Bricks 1 x"));
    }

    #[test]
    fn test_derive_resets_invalid_selection() {
        let (_, selection) =
            derive_category_b_options(&sample(), Some("Plates"), Some("Bricks 1 x"));
        assert_eq!(selection, None);
    }

    #[test]
    fn test_locale_cmp_is_case_insensitive_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_without_collation_tables() {
        let mut names = vec!["Éclair", "zebra", "Arch", "_misc"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, ["_misc", "Arch", "zebra", "Éclair"]);
    }
}
