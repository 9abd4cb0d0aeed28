// End-to-end games against the embedded dictionary, driven by scripted input

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use wordmaster::commands::run_play;
use wordmaster::core::{Feedback, LetterFeedback, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use wordmaster::game::{GameState, GameStatus, MAX_ATTEMPTS};
use wordmaster::interactive::Console;
use wordmaster::wordlists::{Dictionary, Validator, WordSource};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    colored::control::set_override(false);
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// The secret a session seeded with `seed` will pick first
fn first_secret(dictionary: &Dictionary, length: usize, seed: u64) -> Word {
    dictionary
        .pick_secret(length, &mut StdRng::seed_from_u64(seed))
        .unwrap()
        .clone()
}

#[test]
fn every_length_can_be_won_first_try() {
    let dictionary = Dictionary::embedded();

    for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
        let secret = first_secret(&dictionary, length, 11);
        let input = format!("{length}\n{secret}\nn\n");
        let mut c = console(&input);

        let results = run_play(&mut c, &dictionary, None, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(results, vec![GameStatus::Won], "length {length}");
        let out = String::from_utf8(c.into_writer()).unwrap();
        assert!(out.contains("Correct guess! Number of tries = 1"));
    }
}

#[test]
fn six_wrong_guesses_lose() {
    let dictionary = Dictionary::embedded();
    let secret = first_secret(&dictionary, 5, 5);

    let wrong: Vec<&Word> = dictionary
        .words_of_length(5)
        .iter()
        .filter(|w| **w != secret)
        .take(MAX_ATTEMPTS + 1)
        .collect();
    let mut input: String = wrong.iter().map(|w| format!("{w}\n")).collect();
    input.push_str("n\n");

    let mut c = console(&input);
    let results = run_play(&mut c, &dictionary, Some(5), &mut StdRng::seed_from_u64(5)).unwrap();

    assert_eq!(results, vec![GameStatus::Lost]);
    let out = String::from_utf8(c.into_writer()).unwrap();
    assert!(out.contains(&format!("The word was {}", secret.text().to_uppercase())));
}

#[test]
fn invalid_guesses_never_use_attempts() {
    let dictionary = Dictionary::embedded();
    let mut state = GameState::new(Word::new("crane").unwrap());

    for bad in ["cat", "qqqqq", "cr@ne", "elephant", ""] {
        assert!(state.submit_guess(bad, &dictionary).is_err(), "{bad}");
    }
    assert_eq!(state.attempts_used(), 0);

    let turn = state.submit_guess("trace", &dictionary).unwrap();
    assert_eq!(
        turn.feedback.as_slice(),
        &[
            LetterFeedback::Absent,
            LetterFeedback::Correct,
            LetterFeedback::Present,
            LetterFeedback::Present,
            LetterFeedback::Correct,
        ]
    );
    assert_eq!(state.attempts_used(), 1);
}

#[test]
fn embedded_dictionary_validates_its_own_words() {
    let dictionary = Dictionary::embedded();
    for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
        for word in dictionary.words_of_length(length) {
            assert!(dictionary.is_valid_word(word.text(), length));
            assert!(Feedback::calculate(word, word).unwrap().is_perfect());
        }
    }
}

#[test]
fn common_words_outside_the_secrets_are_playable_guesses() {
    let dictionary = Dictionary::embedded();
    let secret = first_secret(&dictionary, 5, 9);
    let guess = ["hello", "world", "audio", "adieu", "about", "there", "which"]
        .into_iter()
        .find(|&w| w != secret.text())
        .unwrap();
    assert!(dictionary.words_of_length(5).iter().all(|w| w.text() != guess));

    let input = format!("{guess}\n{secret}\nn\n");
    let mut c = console(&input);
    let results = run_play(&mut c, &dictionary, Some(5), &mut StdRng::seed_from_u64(9)).unwrap();

    assert_eq!(results, vec![GameStatus::Won]);
    let out = String::from_utf8(c.into_writer()).unwrap();
    assert!(!out.contains("Word not recognised"));
    assert!(out.contains("Correct guess! Number of tries = 2"));
}
