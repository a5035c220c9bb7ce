//! Whitelist validation for backing-store identifiers.
//!
//! SQL engines parameterize values, not identifiers, so a configured table
//! (or column) name ends up interpolated verbatim into query text. Anything
//! outside the `[A-Za-z0-9_]+` whitelist is refused before a query is built.

use regex::Regex;
use std::sync::LazyLock;

static SAFE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern is valid"));

/// Returns true iff `s` is non-empty and contains only ASCII alphanumerics
/// and underscores.
///
/// Checked at configuration time and re-checked at every query build; the
/// recheck is cheap and covers runtime reconfiguration.
pub fn is_safe_identifier(s: &str) -> bool {
    SAFE_IDENTIFIER.is_match(s)
}
