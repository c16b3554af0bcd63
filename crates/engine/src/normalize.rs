use crate::model::FieldValue;

/// Canonicalize a raw string for comparison: lowercase, drop every character
/// that is not alphanumeric or whitespace, trim the ends.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_str(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.trim().to_string()
}

/// Normalize a field. Missing values normalize to the empty string.
pub fn normalize(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => String::new(),
        other => normalize_str(&other.raw_display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(normalize_str("ACME Inc."), "acme inc");
        assert_eq!(normalize_str("  Glo-bex, S.A. "), "globex sa");
    }

    #[test]
    fn keeps_interior_whitespace() {
        assert_eq!(normalize_str("a  b"), "a  b");
    }

    #[test]
    fn missing_is_empty() {
        assert_eq!(normalize(&FieldValue::Null), "");
    }

    #[test]
    fn numbers_cast_before_normalizing() {
        assert_eq!(normalize(&FieldValue::Number(1000.0)), "1000");
    }

    #[test]
    fn idempotent() {
        for s in ["ACME Inc.", "déjà-vu!", "  spaced  out  ", "", "42"] {
            let once = normalize_str(s);
            assert_eq!(normalize_str(&once), once);
        }
    }
}
