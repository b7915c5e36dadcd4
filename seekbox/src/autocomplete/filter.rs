//! Case-insensitive substring filtering of option labels.

/// Indices of the labels that contain `query`, ignoring case.
///
/// Order follows `labels`. An empty query matches every label.
pub fn substring_filter<'a>(query: &str, labels: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
    let needle = query.to_lowercase();
    labels
        .into_iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
