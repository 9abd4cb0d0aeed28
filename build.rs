//! Build script to generate the embedded word lists
//!
//! Reads the secret and allowed-guess files, checks every entry is a
//! lowercase 3 to 8 letter word, and writes one const array per list.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SECRETS_PATH: &str = "data/secrets.txt";
const ALLOWED_PATH: &str = "data/allowed.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    let secrets = read_word_list(SECRETS_PATH);
    let allowed = read_word_list(ALLOWED_PATH);

    // Secrets must be guessable, or a player could never win
    let allowed_set: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    let missing: Vec<&str> = secrets
        .iter()
        .map(String::as_str)
        .filter(|word| !allowed_set.contains(word))
        .collect();
    assert!(
        missing.is_empty(),
        "{SECRETS_PATH} has words missing from {ALLOWED_PATH}: {missing:?}"
    );

    write_word_list(
        &out_dir.join("secrets.rs"),
        "SECRETS",
        "Words the game picks secrets from",
        &secrets,
    );
    write_word_list(
        &out_dir.join("allowed.rs"),
        "ALLOWED",
        "Every word accepted as a guess, secrets included",
        &allowed,
    );

    println!("cargo:rerun-if-changed={SECRETS_PATH}");
    println!("cargo:rerun-if-changed={ALLOWED_PATH}");
}

/// Entries of a newline-delimited list, ignoring blanks and `#` comments
fn read_word_list(path: &str) -> Vec<String> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            (3..=8).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{path}:{}: {word:?} is not a lowercase 3 to 8 letter word",
            number + 1
        );
        if seen.insert(word) {
            words.push(word.to_string());
        }
    }

    words
}

fn write_word_list(output_path: &Path, const_name: &str, doc_comment: &str, words: &[String]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut per_length = [0usize; 9];
    for word in words {
        per_length[word.len()] += 1;
    }
    let breakdown: Vec<String> = (3..=8)
        .map(|length| format!("{length}: {}", per_length[length]))
        .collect();

    writeln!(output, "// Generated by build.rs, do not edit").unwrap();
    writeln!(output, "// Words per length: {}", breakdown.join(", ")).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in [`{const_name}`]").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
}
