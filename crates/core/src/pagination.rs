//! Offset/limit clamping shared by every paginated listing.

/// Default page size for entity listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Hard cap on page size, enforced regardless of what the caller asks for.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a caller-supplied limit into `1..=max`, falling back to `default`
/// when absent or non-positive.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(max),
        _ => default,
    }
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_when_absent() {
        assert_eq!(clamp_limit(None, 100, 100), 100);
    }

    #[test]
    fn limit_defaults_when_non_positive() {
        assert_eq!(clamp_limit(Some(0), 100, 100), 100);
        assert_eq!(clamp_limit(Some(-5), 100, 100), 100);
    }

    #[test]
    fn limit_is_capped() {
        assert_eq!(clamp_limit(Some(500), 100, 100), 100);
        assert_eq!(clamp_limit(Some(7), 100, 100), 7);
    }

    #[test]
    fn offset_is_never_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(Some(42)), 42);
    }
}
