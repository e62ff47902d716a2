// Library interface for impiccato
// This allows integration tests to access internal modules

pub mod cli;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use session::{MAX_ATTEMPTS, Outcome, Session, SessionInterface, session_loop};
pub use wordbank::{EMBEDDED_WORDBANK, choose_target, load_wordbank_from_file, load_wordbank_from_str};
