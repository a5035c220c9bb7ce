//! Name normalization for lookups.

/// Normalizes an employee name for matching: trims leading/trailing
/// whitespace and lowercases. Applied to both the query and the stored
/// value so matching is case- and padding-insensitive.
pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}
