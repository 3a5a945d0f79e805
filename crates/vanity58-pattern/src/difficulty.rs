//! Difficulty estimation for vanity patterns

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Typical P2PKH address length, used for the unanchored estimate
const ADDRESS_LEN: f64 = 34.0;

/// Estimate the expected number of attempts for a pattern.
///
/// Only literal patterns (optionally anchored with '^') get an estimate;
/// general regexes return `None`. Anchored estimates treat a fixed leading
/// '1' as free, which models mainnet P2PKH addresses; testnet prefixes
/// ('m'/'n') are not modeled, so anchored testnet estimates skew high.
pub fn estimate_difficulty(pattern: &str) -> Option<f64> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Some(1.0);
    }

    let (anchored, literal) = match trimmed.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if literal.is_empty() || !literal.chars().all(|c| BASE58_ALPHABET.contains(c)) {
        return None;
    }

    if anchored {
        let paid = literal.strip_prefix('1').unwrap_or(literal);
        Some(58.0_f64.powi(paid.len() as i32))
    } else {
        // Substring match: the pattern can start at any position
        let positions = (ADDRESS_LEN - literal.len() as f64 + 1.0).max(1.0);
        Some((58.0_f64.powi(literal.len() as i32) / positions).max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_prefix() {
        // Leading '1' is free, 'A' costs one base58 character
        assert_eq!(estimate_difficulty("^1A"), Some(58.0));
        assert_eq!(estimate_difficulty("^1AB"), Some(58.0 * 58.0));
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(estimate_difficulty(""), Some(1.0));
    }

    #[test]
    fn test_substring_cheaper_than_prefix() {
        let substring = estimate_difficulty("AB").unwrap();
        let prefix = estimate_difficulty("^AB").unwrap();
        assert!(substring < prefix);
    }

    #[test]
    fn test_general_regex_has_no_estimate() {
        assert_eq!(estimate_difficulty("^1[AB]"), None);
        assert_eq!(estimate_difficulty("^1A|^1B"), None);
    }
}
