//! Per-letter feedback calculation and representation
//!
//! Feedback classifies every letter of a guess against the secret:
//! - Correct: letter in the right position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word, or all of its occurrences already used

use super::Word;
use std::fmt;
use std::ops::Index;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when feedback is requested for words of different lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Cannot compare a {guess}-letter guess with a {secret}-letter secret"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess, aligned index-for-index with the guessed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's rules for duplicate letters: a letter never gets
    /// more Correct and Present marks combined than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark remaining letters Present while the pool has them
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordmaster::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.as_slice(), &[Absent, Correct, Present, Present, Correct]);
    /// ```
    pub fn calculate(secret: &Word, guess: &Word) -> Result<Self, FeedbackError> {
        if secret.len() != guess.len() {
            return Err(FeedbackError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut result = vec![LetterFeedback::Absent; guess.len()];
        let mut secret_available = secret.char_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, letter still available
        for (slot, &letter) in result.iter_mut().zip(guess.chars()) {
            if *slot == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&letter)
                && *count > 0
            {
                *slot = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Number of Correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Number of Present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[LetterFeedback] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.0.iter()
    }

    /// Convert feedback to an emoji string like "⬜🟩🟨🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute feedback for `guess` against `secret`
///
/// Free-function form of [`Feedback::calculate`].
///
/// # Errors
/// Returns `FeedbackError::LengthMismatch` if the words differ in length.
pub fn compute_feedback(secret: &Word, guess: &Word) -> Result<Feedback, FeedbackError> {
    Feedback::calculate(secret, guess)
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    fn feedback(secret: &str, guess: &str) -> Feedback {
        compute_feedback(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn feedback_all_correct_for_identical_words() {
        for word in ["cat", "bird", "crane", "speed", "aaaaa", "elephant"] {
            let f = feedback(word, word);
            assert!(f.is_perfect(), "{word} against itself");
            assert_eq!(f.count_correct(), word.len());
        }
    }

    #[test]
    fn feedback_all_absent_for_disjoint_words() {
        let f = feedback("abcde", "fghij");
        assert!(f.iter().all(|&l| l == Absent));
        assert_eq!(f.count_correct(), 0);
        assert_eq!(f.count_present(), 0);
    }

    #[test]
    fn feedback_crane_trace() {
        let f = feedback("crane", "trace");
        assert_eq!(f.as_slice(), &[Absent, Correct, Present, Present, Correct]);
    }

    #[test]
    fn feedback_speed_erase_limits_duplicate_marks() {
        // Secret SPEED has two E's and one S; guess ERASE has two E's and one S
        let f = feedback("speed", "erase");
        assert_eq!(f.as_slice(), &[Present, Absent, Absent, Present, Present]);

        let e_marks = f
            .iter()
            .zip(b"erase")
            .filter(|&(&l, &c)| c == b'e' && l != Absent)
            .count();
        assert!(e_marks <= 2);
    }

    #[test]
    fn feedback_single_secret_letter_guessed_twice() {
        // One L in the secret: the exact match wins, the other is absent
        let f = feedback("world", "hello");
        assert_eq!(f.as_slice(), &[Absent, Absent, Absent, Correct, Present]);

        // Exact matches consume the only L and the only A
        let f = feedback("plant", "llama");
        assert_eq!(f.as_slice(), &[Absent, Correct, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_correct_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: the second O is exact, the first O takes the other
        let f = feedback("floor", "robot");
        assert_eq!(f.as_slice(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn feedback_more_guess_duplicates_than_secret() {
        let f = feedback("abbey", "bbbbb");
        assert_eq!(f.as_slice(), &[Absent, Correct, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_length_mismatch() {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("cat").unwrap();
        assert_eq!(
            compute_feedback(&secret, &guess),
            Err(FeedbackError::LengthMismatch {
                secret: 5,
                guess: 3
            })
        );
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(feedback("crane", "trace").to_emoji(), "⬜🟩🟨🟨🟩");
    }

    #[test]
    fn letter_feedback_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
