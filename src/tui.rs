//! Full-screen terminal interface for the game, built on Ratatui.
//!
//! Renders the revealed word as letter cells, the remaining attempts,
//! and an A-Z row marking every guessed letter as a hit or a miss.
//! Input is one letter at a time, submitted with ENTER.
//!
//! # State Machine
//! - `EnteringGuess`: the board accepts letter input
//! - `GameOver`: terminal outcome shown, waiting for ENTER/ESC

use crate::session::{BLANK, MAX_ATTEMPTS, SessionInterface};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::collections::HashMap;
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// How a guessed letter fared, for the A-Z status row.
#[derive(Clone, Copy, Debug)]
enum LetterMark {
    Hit,
    Miss,
}

impl LetterMark {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Hit => (Color::Green, Color::Black),
            Self::Miss => (Color::DarkGray, Color::White),
        }
    }
}

#[derive(Debug)]
enum TuiState {
    EnteringGuess,
    GameOver { won: bool },
}

/// Groups the render inputs so the draw closure borrows one value.
struct RenderContext<'a> {
    revealed: &'a [char],
    attempts_left: u32,
    current_input: &'a str,
    marks: &'a HashMap<char, LetterMark>,
    message: &'a str,
    state: &'a TuiState,
}

/// Ratatui implementation of [`SessionInterface`].
///
/// Owns the terminal for the lifetime of the game; raw mode and the
/// alternate screen are restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    revealed: Vec<char>,
    attempts_left: u32,
    current_input: String,
    last_guess: Option<char>,
    marks: HashMap<char, LetterMark>,
    message: String,
    state: TuiState,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        debug!("TuiInterface::new() - entering raw mode");
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            revealed: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
            current_input: String::new(),
            last_guess: None,
            marks: HashMap::new(),
            message: "Inserisci una lettera per iniziare.".to_string(),
            state: TuiState::EnteringGuess,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            revealed: &self.revealed,
            attempts_left: self.attempts_left,
            current_input: &self.current_input,
            marks: &self.marks,
            message: &self.message,
            state: &self.state,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug!("draw error: {e}");
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(6), // Word board
                Constraint::Length(4), // Letter status row
                Constraint::Min(4),    // Message
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_letters(f, chunks[2], ctx.marks);
        Self::render_message(f, chunks[3], ctx);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("IMPICCATO")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Parola").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut word_spans = vec![Span::raw("  ")];
        for &c in ctx.revealed {
            let style = if c == BLANK {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Black).bg(Color::Green)
            };
            word_spans.push(Span::styled(format!(" {c} "), style));
            word_spans.push(Span::raw(" "));
        }

        let input_display = if ctx.current_input.is_empty() {
            "_".to_string()
        } else {
            ctx.current_input.to_string()
        };

        let lines = vec![
            Line::from(word_spans),
            Line::from(""),
            Line::from(format!("  Attempts left: {}", ctx.attempts_left)),
            Line::from(format!("  Your letter: {input_display}")),
        ];
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_letters(f: &mut Frame, area: Rect, marks: &HashMap<char, LetterMark>) {
        let mut spans = vec![Span::raw(" ")];
        for c in 'a'..='z' {
            let style = match marks.get(&c) {
                Some(mark) => {
                    let (bg, fg) = mark.colors();
                    Style::default().fg(fg).bg(bg)
                }
                None => Style::default().fg(Color::Gray),
            };
            spans.push(Span::styled(c.to_string(), style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Lettere").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_message(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let style = match ctx.state {
            TuiState::GameOver { won: true } => WIN_STYLE,
            TuiState::GameOver { won: false } => LOSS_STYLE,
            TuiState::EnteringGuess => MESSAGE_STYLE,
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(ctx.message, style)))
            .block(Block::default().title("Messaggio").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type a letter | ENTER: Submit | ESC: Quit",
            TuiState::GameOver { .. } => "Premi INVIO per uscire... | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Block on the next key press, skipping every other event kind.
    fn next_key_press(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                if Self::has_modifier_keys(&key) {
                    debug!("ignoring key with modifier: {:?}", key.modifiers);
                    Ok(None)
                } else {
                    Ok(Some(key))
                }
            }
            other => {
                debug!("ignoring event: {other:?}");
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    /// Apply one key while entering a guess. Returns the submitted
    /// guess, or `Some(None)` on ESC, or `None` while still editing.
    fn handle_guess_key(&mut self, key: KeyEvent) -> Option<Option<String>> {
        match key.code {
            // Single-letter input: a new letter replaces the buffer,
            // like the text box of the original game.
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.current_input = c.to_ascii_lowercase().to_string();
            }
            KeyCode::Backspace => {
                self.current_input.clear();
            }
            KeyCode::Enter if !self.current_input.is_empty() => {
                let guess = std::mem::take(&mut self.current_input);
                self.last_guess = guess.chars().next();
                debug!("guess submitted: '{guess}'");
                return Some(Some(guess));
            }
            KeyCode::Enter => {
                self.message = "Inserisci una lettera prima di inviare.".to_string();
            }
            KeyCode::Esc => {
                debug!("ESC pressed, quitting");
                return Some(None);
            }
            _ => {}
        }
        None
    }
}

impl SessionInterface for TuiInterface {
    fn show_progress(&mut self, revealed: &[char]) {
        self.revealed = revealed.to_vec();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<String> {
        loop {
            if self.draw().is_err() {
                debug!("read_guess() - draw failed, quitting");
                return None;
            }

            match self.next_key_press() {
                Ok(Some(key)) => {
                    if let Some(submitted) = self.handle_guess_key(key) {
                        return submitted;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug!("read_guess() - input error: {e}");
                    return None;
                }
            }
        }
    }

    fn show_hit(&mut self) {
        if let Some(c) = self.last_guess {
            self.marks.insert(c, LetterMark::Hit);
        }
        self.message = "Ottima lettera!".to_string();
        self.draw_or_log();
    }

    fn show_miss(&mut self, remaining: u32) {
        self.attempts_left = remaining;
        if let Some(c) = self.last_guess {
            self.marks.insert(c, LetterMark::Miss);
        }
        self.message = format!("Lettera errata! Tentativi rimasti: {remaining}");
        self.draw_or_log();
    }

    fn show_win(&mut self, word: &str) {
        // The last progress update preceded the winning guess, so the
        // board still shows a blank there.
        self.revealed = word.chars().collect();
        self.state = TuiState::GameOver { won: true };
        self.message = format!("Complimenti!! Hai indovinato la parola: {word}");
        self.draw_or_log();
    }

    fn show_loss(&mut self, word: &str) {
        self.state = TuiState::GameOver { won: false };
        self.message = format!("Hai finito i tentativi! La parola era: {word}");
        self.draw_or_log();
    }

    fn wait_for_exit(&mut self) {
        loop {
            if self.draw().is_err() {
                return;
            }
            match self.next_key_press() {
                Ok(Some(key)) if matches!(key.code, KeyCode::Enter | KeyCode::Esc) => return,
                Ok(_) => {}
                Err(_) => return,
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
