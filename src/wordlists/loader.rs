//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or embedded constants.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// Blank lines and lines starting with `#` are ignored; entries that are not
/// playable words are skipped. Every loaded word is both a secret and an
/// accepted guess; widen the guesses with [`Dictionary::with_allowed`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordmaster::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/secrets.txt").unwrap();
/// println!("Loaded {} words", dictionary.secret_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = load_from_str(&content);

    log::info!(
        "Loaded {} words from {}",
        dictionary.secret_count(),
        path.display()
    );

    Ok(dictionary)
}

/// Parse a newline-delimited word list
#[must_use]
pub fn load_from_str(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Validator, WordSource};

    #[test]
    fn load_from_str_groups_words() {
        let dictionary = load_from_str("# header\ncrane\n\nslate\n  cat  \nbird\n");

        assert_eq!(dictionary.secret_count(), 4);
        assert_eq!(dictionary.words_of_length(5).len(), 2);
        assert!(dictionary.is_valid_word("cat", 3));
        assert!(dictionary.is_valid_word("bird", 4));
    }

    #[test]
    fn load_from_str_skips_invalid() {
        let dictionary = load_from_str("crane\ntoolongword\nab\nsl4te\nslate");
        assert_eq!(dictionary.secret_count(), 2);
    }

    #[test]
    fn load_from_str_empty() {
        assert_eq!(load_from_str("").secret_count(), 0);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordmaster-loader-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane\nslate\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.secret_count(), 2);
    }
}
