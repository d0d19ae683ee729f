//! Search projection over the employee collection.

use entity::Employee;

/// Returns the items whose name or email contains `search` as a
/// case-insensitive substring, preserving order.
///
/// Blank or whitespace-only input returns the whole collection. The input is
/// never mutated; matches are borrowed. Recomputed on demand, no caching.
pub fn filtered<'a>(items: &'a [Employee], search: &str) -> Vec<&'a Employee> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|it| {
            it.name.to_lowercase().contains(&needle) || it.email.to_lowercase().contains(&needle)
        })
        .collect()
}
