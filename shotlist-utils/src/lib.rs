use std::collections::HashSet;
use std::hash::Hash;

pub const FRAGMENT_SEPARATOR: &str = ", ";

/// Joins prompt fragments with `", "`, dropping empty or whitespace-only parts.
pub fn join_fragments<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filtered = Vec::new();

    for part in parts {
        let part = part.as_ref();
        if !part.trim().is_empty() {
            filtered.push(part.to_string());
        }
    }

    filtered.join(FRAGMENT_SEPARATOR)
}

pub fn trimmed_or_none(input: Option<&str>) -> Option<&str> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

/// Removes repeated items, keeping the first occurrence of each.
pub fn dedup_preserving_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}
