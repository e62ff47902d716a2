use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// The word list of the original game, verbatim: mixed 4-7 letter
/// entries and one duplicate ("luogo") included.
pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Parse a newline-delimited word list. Lines are lowercased; blank or
/// non-alphabetic lines are skipped. Order, duplicates, and word
/// lengths are kept as-is.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick the target word uniformly at random. The RNG is passed in so
/// callers can seed it (`--seed`, tests).
pub fn choose_target<'a, R: Rng>(words: &'a [String], rng: &mut R) -> Option<&'a str> {
    words.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_embedded_wordbank_loads() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert_eq!(words.len(), 303);
        assert!(words.iter().all(|w| (4..=7).contains(&w.len())));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_embedded_wordbank_keeps_duplicates_and_order() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert_eq!(words.first().map(String::as_str), Some("abito"));
        assert_eq!(words.last().map(String::as_str), Some("zitto"));
        let luogo = words.iter().filter(|w| *w == "luogo").count();
        assert_eq!(luogo, 2);
    }

    #[test]
    fn test_load_from_str_filters_and_lowercases() {
        let data = "GATTO\n  villa  \n\nca5a\nmais\n";
        let words = load_wordbank_from_str(data);
        assert_eq!(words, vec!["gatto", "villa", "mais"]);
    }

    #[test]
    fn test_choose_target_is_uniform_member() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let target = choose_target(&words, &mut rng).unwrap();
            assert!(words.iter().any(|w| w == target));
        }
    }

    #[test]
    fn test_choose_target_deterministic_with_seed() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        let first = choose_target(&words, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = choose_target(&words, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_choose_target_empty_bank() {
        let words: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_target(&words, &mut rng), None);
    }
}
