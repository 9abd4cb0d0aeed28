//! In-memory dictionary: secrets grouped by length plus accepted guesses

use super::{ALLOWED, SECRETS};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Supplies candidate secret words
pub trait WordSource {
    /// All secrets of exactly `length` letters
    fn words_of_length(&self, length: usize) -> &[Word];

    /// Pick a secret of `length` letters uniformly at random
    ///
    /// Returns None if no word of that length is known.
    fn pick_secret<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.words_of_length(length).choose(rng)
    }
}

/// Decides whether a guess is an accepted dictionary word
pub trait Validator {
    fn is_valid_word(&self, word: &str, length: usize) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str, usize) -> bool,
{
    fn is_valid_word(&self, word: &str, length: usize) -> bool {
        self(word, length)
    }
}

/// Secret pool bucketed by length, and the set of accepted guesses
///
/// Every secret is also an accepted guess.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    secrets: FxHashMap<usize, Vec<Word>>,
    allowed: FxHashSet<Word>,
    secret_count: usize,
}

/// Parse raw entries, skipping anything that is not a playable word
fn parse_words<I, S>(words: I) -> impl Iterator<Item = Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|raw| match Word::new(raw.as_ref()) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("Skipping dictionary entry {:?}: {e}", raw.as_ref());
                None
            }
        })
}

impl Dictionary {
    /// Build a dictionary whose secrets are also its only accepted guesses
    ///
    /// Entries that are not playable words are skipped, duplicates are
    /// dropped, and each length bucket keeps first-seen order.
    ///
    /// # Examples
    /// ```
    /// use wordmaster::wordlists::{Dictionary, Validator, WordSource};
    ///
    /// let dictionary = Dictionary::from_words(["crane", "Slate", "cat", "x", "crane"]);
    /// assert_eq!(dictionary.secret_count(), 3);
    /// assert_eq!(dictionary.words_of_length(5).len(), 2);
    /// assert!(dictionary.is_valid_word("SLATE", 5));
    /// assert!(!dictionary.is_valid_word("slate", 3));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();

        for word in parse_words(words) {
            if dictionary.allowed.insert(word.clone()) {
                dictionary.secrets.entry(word.len()).or_default().push(word);
                dictionary.secret_count += 1;
            }
        }

        dictionary
    }

    /// Accept `words` as guesses too, without adding them to the secrets
    ///
    /// # Examples
    /// ```
    /// use wordmaster::wordlists::{Dictionary, Validator, WordSource};
    ///
    /// let dictionary = Dictionary::from_words(["crane"]).with_allowed(["hello", "world"]);
    /// assert!(dictionary.is_valid_word("hello", 5));
    /// assert_eq!(dictionary.words_of_length(5).len(), 1);
    /// ```
    #[must_use]
    pub fn with_allowed<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.allowed.len();
        self.allowed.extend(parse_words(words));
        log::debug!(
            "Accepted guesses grew from {before} to {}",
            self.allowed.len()
        );
        self
    }

    /// The secrets and accepted guesses compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(SECRETS).with_allowed(ALLOWED)
    }

    /// Number of distinct secrets across all lengths
    #[must_use]
    pub fn secret_count(&self) -> usize {
        self.secret_count
    }

    /// Number of distinct accepted guesses, secrets included
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Check whether `word` is an accepted guess
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}

impl WordSource for Dictionary {
    fn words_of_length(&self, length: usize) -> &[Word] {
        self.secrets.get(&length).map_or(&[], Vec::as_slice)
    }
}

impl Validator for Dictionary {
    fn is_valid_word(&self, word: &str, length: usize) -> bool {
        Word::new(word).is_ok_and(|w| w.len() == length && self.is_allowed(&w))
    }
}
