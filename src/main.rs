mod cli;
mod session;
mod tui;
mod wordbank;

use cli::{Cli, ConsoleInterface, parse_cli};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use session::{Session, session_loop};
use std::io;
use tui::TuiInterface;
use wordbank::{EMBEDDED_WORDBANK, choose_target, load_wordbank_from_file, load_wordbank_from_str};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };

    let Some(target) = pick_target(&wordbank, &cli) else {
        eprintln!("The word bank is empty; nothing to guess.");
        return;
    };
    debug!("target word chosen ({} letters)", target.chars().count());

    let mut session = Session::new(target);
    let outcome = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => session_loop(&mut session, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = ConsoleInterface::new(stdin.lock());
        session_loop(&mut session, &mut interface)
    };

    // EOF mid-game leaves the outcome InProgress; either way the
    // session is over and we exit normally.
    debug!("session ended: {outcome:?}");
}

fn pick_target<'a>(wordbank: &'a [String], cli: &Cli) -> Option<&'a str> {
    match cli.seed {
        Some(seed) => choose_target(wordbank, &mut StdRng::seed_from_u64(seed)),
        None => choose_target(wordbank, &mut rand::rng()),
    }
}
