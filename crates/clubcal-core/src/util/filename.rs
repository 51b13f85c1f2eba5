//! Filename helpers for downloadable documents.

/// Replaces every character that is not an ASCII letter or digit with `_`.
///
/// Examples:
/// - "Lions Club of Ottawa" -> "`Lions_Club_of_Ottawa`"
/// - "St. John's / East" -> "`St__John_s___East`"
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
