// Integration tests for the impiccato application
// These tests verify that all modules work together correctly

use impiccato::cli::ConsoleInterface;
use impiccato::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

#[test]
fn test_end_to_end_win_from_console_input() {
    // Full game over the console interface: the player spells out
    // "gatto" letter by letter and acknowledges the win with ENTER.
    let mut session = Session::new("gatto");
    let input = "t\ng\no\na\n\n";
    let mut interface = ConsoleInterface::new(Cursor::new(input));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(session.revealed(), &['g', 'a', 't', 't', 'o']);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
}

#[test]
fn test_end_to_end_loss_from_console_input() {
    // Six straight misses on "villa" exhaust the attempt budget.
    let mut session = Session::new("villa");
    let input = "x\ny\nz\nq\nw\nk\n\n";
    let mut interface = ConsoleInterface::new(Cursor::new(input));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::Lost);
    assert_eq!(session.attempts_left(), 0);
    assert!(session.revealed().iter().all(|&c| c == '_'));
}

#[test]
fn test_end_to_end_mixed_game() {
    let mut session = Session::new("villa");
    // Two misses mixed with the four distinct letters of the word.
    let input = "e\nv\ni\nr\nl\na\n\n";
    let mut interface = ConsoleInterface::new(Cursor::new(input));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS - 2);
}

#[test]
fn test_uppercase_input_is_normalized() {
    let mut session = Session::new("gatto");
    let input = "T\nG\nO\nA\n\n";
    let mut interface = ConsoleInterface::new(Cursor::new(input));

    assert_eq!(session_loop(&mut session, &mut interface), Outcome::Won);
}

#[test]
fn test_closed_input_ends_the_session() {
    // The stream closes after two misses; the loop must stop instead
    // of spinning, leaving the session unresolved.
    let mut session = Session::new("gatto");
    let mut interface = ConsoleInterface::new(Cursor::new("x\ny\n"));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS - 2);
}

#[test]
fn test_empty_guess_line_never_costs_an_attempt() {
    // An empty line is contained in any word, so it is a "hit" that
    // reveals nothing. After three of them the budget is untouched.
    let mut session = Session::new("gatto");
    let mut interface = ConsoleInterface::new(Cursor::new("\n\n\n"));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
    assert!(session.revealed().iter().all(|&c| c == '_'));
}

#[test]
fn test_substring_guess_is_a_free_hit() {
    let mut session = Session::new("gatto");
    let mut interface = ConsoleInterface::new(Cursor::new("att\n"));

    let outcome = session_loop(&mut session, &mut interface);

    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
}

#[test]
fn test_whole_word_guess_reveals_nothing_on_multiletter_words() {
    // Guessing the full word is a containment hit, but the reveal
    // logic works letter by letter, so nothing is uncovered.
    let mut session = Session::new("gatto");
    let mut interface = ConsoleInterface::new(Cursor::new("gatto\n"));

    session_loop(&mut session, &mut interface);

    assert!(session.revealed().iter().all(|&c| c == '_'));
}

#[test]
fn test_seeded_target_from_embedded_bank_plays_out() {
    // A seeded pick is reproducible, so the same seed must produce
    // the same target, and spelling out that target wins the game.
    let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let target = choose_target(&words, &mut StdRng::seed_from_u64(99))
        .unwrap()
        .to_string();
    assert_eq!(
        choose_target(&words, &mut StdRng::seed_from_u64(99)),
        Some(target.as_str())
    );

    let mut script = String::new();
    for c in target.chars() {
        script.push(c);
        script.push('\n');
    }
    script.push('\n');

    let mut session = Session::new(&target);
    let mut interface = ConsoleInterface::new(Cursor::new(script));
    assert_eq!(session_loop(&mut session, &mut interface), Outcome::Won);
    let revealed: String = session.revealed().iter().collect();
    assert_eq!(revealed, target);
}

#[test]
fn test_every_embedded_word_is_winnable_within_its_letters() {
    // Each word has at most 7 distinct letters, well inside the
    // attempt budget when every guess is correct.
    let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
    for word in &words {
        let mut session = Session::new(word);
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        for letter in letters {
            session.apply_guess(&letter.to_string());
        }
        assert_eq!(session.outcome(), Outcome::Won, "word: {word}");
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS, "word: {word}");
    }
}

#[test]
fn test_external_wordbank_file_round_trip() {
    let dir = std::env::temp_dir().join("impiccato_test_bank");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("parole.txt");
    std::fs::write(&path, "GATTO\nvilla\n\nmais\nc4ne\n").unwrap();

    let words = load_wordbank_from_file(&path).unwrap();
    assert_eq!(words, vec!["gatto", "villa", "mais"]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_wordbank_file_is_an_error() {
    assert!(load_wordbank_from_file("/no/such/parole.txt").is_err());
}
