use log::debug;

/// Wrong guesses allowed before the session is lost.
pub const MAX_ATTEMPTS: u32 = 6;

/// Placeholder shown for letters not yet revealed.
pub const BLANK: char = '_';

/// Derived state of a session. Both `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Result of applying a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    Hit,
    Miss { remaining: u32 },
}

/// A single game: the target word, the per-position reveal buffer, and
/// the wrong-guess budget. Constructed once at startup and passed
/// explicitly; there is no other game state.
pub struct Session {
    target: String,
    revealed: Vec<char>,
    attempts: u32,
}

impl Session {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            revealed: vec![BLANK; target.chars().count()],
            attempts: MAX_ATTEMPTS,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts
    }

    /// Apply one normalized (lowercased) guess.
    ///
    /// A guess hits when it is contained anywhere in the target word.
    /// This is deliberately a substring check, not a single-letter
    /// check: a multi-character guess that happens to be a substring
    /// counts as a hit without revealing anything, and the empty
    /// string always hits. Matches the behavior of the original game.
    /// On a hit, every position whose letter equals the guess is
    /// revealed at once. On a miss the attempt budget shrinks by one.
    pub fn apply_guess(&mut self, guess: &str) -> GuessResult {
        if self.target.contains(guess) {
            let mut single = guess.chars();
            if let (Some(letter), None) = (single.next(), single.next()) {
                for (i, c) in self.target.chars().enumerate() {
                    if c == letter {
                        self.revealed[i] = c;
                    }
                }
            }
            debug!("hit: '{}' revealed {:?}", guess, self.revealed);
            GuessResult::Hit
        } else {
            self.attempts = self.attempts.saturating_sub(1);
            debug!("miss: '{}', {} attempts left", guess, self.attempts);
            GuessResult::Miss {
                remaining: self.attempts,
            }
        }
    }

    pub fn outcome(&self) -> Outcome {
        if !self.revealed.contains(&BLANK) {
            Outcome::Won
        } else if self.attempts == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}

/// Everything the session loop needs from a front-end. Implemented by
/// the line-oriented console interface and by the ratatui interface.
pub trait SessionInterface {
    /// Show the current reveal buffer before each guess.
    fn show_progress(&mut self, revealed: &[char]);

    /// Read one guess, already lowercased. `None` means the input
    /// stream is closed and the session should end immediately.
    fn read_guess(&mut self) -> Option<String>;

    fn show_hit(&mut self);

    fn show_miss(&mut self, remaining: u32);

    fn show_win(&mut self, word: &str);

    fn show_loss(&mut self, word: &str);

    /// Block until the player acknowledges a terminal outcome.
    fn wait_for_exit(&mut self);
}

/// Drive a session to completion against the given front-end.
///
/// Returns the final outcome; `InProgress` only when the input stream
/// closed mid-game.
pub fn session_loop<I: SessionInterface>(session: &mut Session, interface: &mut I) -> Outcome {
    while session.attempts_left() > 0 {
        interface.show_progress(session.revealed());

        let Some(guess) = interface.read_guess() else {
            debug!("input stream closed, ending session");
            return session.outcome();
        };

        match session.apply_guess(&guess) {
            GuessResult::Hit => interface.show_hit(),
            GuessResult::Miss { remaining } => interface.show_miss(remaining),
        }

        if session.outcome() == Outcome::Won {
            interface.show_win(session.target());
            interface.wait_for_exit();
            return Outcome::Won;
        }
    }

    interface.show_loss(session.target());
    interface.wait_for_exit();
    Outcome::Lost
}
