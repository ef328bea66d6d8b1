//! Seed selection for callers that do not bring their own.

use rand::Rng;

/// Upper bound (exclusive) for randomly chosen seeds.
pub const MAX_SEED_VALUE: i64 = 1_000_000;

/// Draws a fresh seed in `[0, MAX_SEED_VALUE)`.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(0..MAX_SEED_VALUE)
}

/// Parses a user-supplied seed, such as a `?seed=` query value.
///
/// Returns `None` for empty or non-integer text so the caller can pick a
/// random seed instead.
#[must_use]
pub fn parse_seed(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_seed_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let seed = random_seed(&mut rng);
            assert!((0..MAX_SEED_VALUE).contains(&seed));
        }
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" -3 "), Some(-3));
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("   "), None);
        assert_eq!(parse_seed("twelve"), None);
        assert_eq!(parse_seed("1e3"), None);
    }
}
