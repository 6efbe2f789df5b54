//! Host list filtering.

/// Keep, in their original order, the aliases whose lowercase form contains
/// the lowercase `query`. An empty query keeps everything.
pub(crate) fn filter_hosts(aliases: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return aliases.to_vec();
    }

    let query_lower = query.to_lowercase();
    aliases
        .iter()
        .filter(|alias| alias.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "../../../test/tui/features/host_browser/filter.rs"]
mod tests;
