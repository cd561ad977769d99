//! String utilities for the domain layer.

/// Capitalize a string: first character upper-cased, the rest lower-cased
/// (UTF-8 safe)
///
/// Quadrant display names are normalized this way regardless of the
/// casing used in the dataset.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
