use crate::session::SessionInterface;
use clap::Parser;
use std::io::{BufRead, Write, stdout};

/// Impiccato CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Seed for the word selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented front-end over any buffered reader. Stdout is written
/// directly; the reader is generic so tests can drive the game from a
/// `Cursor`.
pub struct ConsoleInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one line, stripping only the line terminator. Returns
    /// `None` once the stream is closed. The guess is not trimmed or
    /// validated further; an empty or multi-character line is a legal
    /// guess.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while input.ends_with('\n') || input.ends_with('\r') {
                    input.pop();
                }
                Some(input)
            }
        }
    }
}

impl<R: BufRead> SessionInterface for ConsoleInterface<R> {
    fn show_progress(&mut self, revealed: &[char]) {
        let joined: Vec<String> = revealed.iter().map(char::to_string).collect();
        println!("\nCurrent word: {}", joined.join(" "));
    }

    fn read_guess(&mut self) -> Option<String> {
        print!("Guess a letter: ");
        let _ = stdout().flush();
        self.read_line().map(|line| line.to_lowercase())
    }

    fn show_hit(&mut self) {
        println!("Great guess!");
    }

    fn show_miss(&mut self, remaining: u32) {
        println!("Wrong guess! Attempts left: {remaining}");
    }

    fn show_win(&mut self, word: &str) {
        println!("\nCongratulations!! You guessed the word: {word}");
    }

    fn show_loss(&mut self, word: &str) {
        println!("\nYou've run out of attempts! The word was: {word}");
    }

    fn wait_for_exit(&mut self) {
        print!("\nPremi INVIO per uscire...");
        let _ = stdout().flush();
        let _ = self.read_line();
    }
}
