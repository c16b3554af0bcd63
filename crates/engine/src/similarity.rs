use crate::model::FieldValue;

/// Fuzzy similarity between two strings as a percentage in [0, 100].
///
/// Normalized Levenshtein ratio: symmetric, deterministic, and 100 exactly
/// when the inputs are equal.
pub fn ratio(a: &str, b: &str) -> u8 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Score the raw string casts of two fields. A missing operand scores 0.
pub fn ratio_values(a: &FieldValue, b: &FieldValue) -> u8 {
    if a.is_null() || b.is_null() {
        return 0;
    }
    ratio(&a.raw_display(), &b.raw_display())
}
