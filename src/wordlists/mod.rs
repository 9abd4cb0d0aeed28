//! Word lists and dictionary lookup
//!
//! Provides the embedded secrets and accepted guesses, file loading, and the
//! [`WordSource`] and [`Validator`] capabilities the game depends on.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, Validator, WordSource};
pub use embedded::{ALLOWED, ALLOWED_COUNT, SECRETS, SECRETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
    use rustc_hash::FxHashSet;

    #[test]
    fn counts_match_consts() {
        assert_eq!(SECRETS.len(), SECRETS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in SECRETS.iter().chain(ALLOWED) {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not playable");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn secrets_subset_of_allowed() {
        let allowed: FxHashSet<&str> = ALLOWED.iter().copied().collect();
        for &secret in SECRETS {
            assert!(allowed.contains(secret), "Secret '{secret}' is not an allowed guess");
        }
    }

    #[test]
    fn embedded_dictionary_covers_every_length() {
        let dictionary = Dictionary::embedded();
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            let secrets = dictionary.words_of_length(length).len();
            let allowed = ALLOWED.iter().filter(|w| w.len() == length).count();
            assert!(secrets > 0, "No {length}-letter secrets embedded");
            assert!(allowed > secrets, "Too few {length}-letter guesses embedded");
        }
        assert_eq!(dictionary.secret_count(), SECRETS_COUNT);
        assert_eq!(dictionary.allowed_count(), ALLOWED_COUNT);
    }
}
