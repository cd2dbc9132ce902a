use super::model::Dataset;
use crate::view::display_name;

// ---------------------------------------------------------------------------
// Search filter over the creature list
// ---------------------------------------------------------------------------

/// Substring test of an already lower-cased `needle` against a list label,
/// ignoring the label's case. An empty needle matches everything.
pub fn matches(label: &str, needle: &str) -> bool {
    label.to_lowercase().contains(needle)
}

/// Positions in `dataset.sorted_keys` whose display name matches `query`.
///
/// Hidden rows are only left out of the returned view; the dataset and the
/// list order are untouched, so an empty query restores every row.
pub fn filtered_indices(dataset: &Dataset, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    dataset
        .sorted_keys
        .iter()
        .enumerate()
        .filter(|(_, key)| matches(&display_name(key), &needle))
        .map(|(i, _)| i)
        .collect()
}
