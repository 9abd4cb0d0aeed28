//! Virtual QWERTY keyboard tracking which letters have been tried

use super::{Feedback, LetterFeedback, Word};
use rustc_hash::FxHashMap;

/// Keyboard rows, top to bottom
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best feedback seen so far for every guessed letter
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    states: FxHashMap<u8, LetterFeedback>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter's feedback, keeping the strongest result
    ///
    /// Precedence is Correct > Present > Absent; a key is never downgraded.
    pub fn mark(&mut self, letter: u8, feedback: LetterFeedback) {
        let letter = letter.to_ascii_lowercase();
        self.states
            .entry(letter)
            .and_modify(|current| *current = (*current).max(feedback))
            .or_insert(feedback);
    }

    /// Record every letter of a scored guess
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &f) in guess.chars().iter().zip(feedback) {
            self.mark(letter, f);
        }
    }

    /// State of a key, or None if it has not been used
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<LetterFeedback> {
        self.states.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Forget every recorded key
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_starts_unused() {
        let kb = Keyboard::new();
        for row in KEY_ROWS {
            for key in row.bytes() {
                assert_eq!(kb.state(key), None);
            }
        }
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<u8> = KEY_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut kb = Keyboard::new();
        kb.mark(b'a', LetterFeedback::Correct);
        kb.mark(b'a', LetterFeedback::Absent);
        kb.mark(b'a', LetterFeedback::Present);
        assert_eq!(kb.state(b'a'), Some(LetterFeedback::Correct));

        kb.mark(b'b', LetterFeedback::Absent);
        kb.mark(b'b', LetterFeedback::Present);
        assert_eq!(kb.state(b'B'), Some(LetterFeedback::Present));
    }

    #[test]
    fn keyboard_records_guess() {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("trace").unwrap();
        let feedback = Feedback::calculate(&secret, &guess).unwrap();

        let mut kb = Keyboard::new();
        kb.record(&guess, &feedback);

        assert_eq!(kb.state(b't'), Some(LetterFeedback::Absent));
        assert_eq!(kb.state(b'r'), Some(LetterFeedback::Correct));
        assert_eq!(kb.state(b'a'), Some(LetterFeedback::Present));
        assert_eq!(kb.state(b'c'), Some(LetterFeedback::Present));
        assert_eq!(kb.state(b'e'), Some(LetterFeedback::Correct));
        assert_eq!(kb.state(b'z'), None);

        kb.clear();
        assert_eq!(kb.state(b'r'), None);
    }
}
