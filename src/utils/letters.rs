use once_cell::sync::Lazy;
use rand::Rng;

/// Letters used to fill cells that no placed word touched.
pub static ALPHABET: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Canonical matching form of a word: uppercase with all whitespace removed.
///
/// Placement and match comparison both go through this function, so the two
/// can never disagree on a word's identity. `"SEA LION"` and `"sealion"`
/// normalize to the same target string.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Pick a uniformly random filler letter.
pub fn random_filler_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_normalize_uppercases_and_strips_whitespace() {
        assert_eq!(normalize_word("cat"), "CAT");
        assert_eq!(normalize_word("SEA LION"), "SEALION");
        assert_eq!(normalize_word("sealion"), "SEALION");
        assert_eq!(normalize_word("  tab\tand space "), "TABANDSPACE");
    }

    #[test]
    fn test_normalize_empty_and_whitespace_only() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn test_filler_letter_is_uppercase_ascii() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let letter = random_filler_letter(&mut rng);
            assert!(letter.is_ascii_uppercase());
        }
    }
}
