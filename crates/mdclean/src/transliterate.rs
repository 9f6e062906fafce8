//! Unicode to closest-ASCII transliteration.

use deunicode::deunicode_with_tofu;

/// Map arbitrary Unicode text to its nearest ASCII approximation.
///
/// Pure and total: never fails, never panics. Characters with no reasonable
/// ASCII equivalent are dropped.
pub fn transliterate(text: &str) -> String {
    deunicode_with_tofu(text, "")
}
