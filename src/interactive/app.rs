//! TUI application state and logic

use crate::core::{Letter, Player, SpinOutcome};
use crate::game::{FollowUp, GameConfig, GameError, GameEvent, Interaction, TurnView, run_sessions};
use crate::output::formatters::{format_money, spin_label};
use crate::phrases::PhraseCatalog;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 8;

/// Longest line the input box accepts
const INPUT_LIMIT: usize = 64;

/// Application state
pub struct App {
    pub board: String,
    pub category: Option<String>,
    /// Current round and total rounds
    pub round: Option<(usize, usize)>,
    pub revealed_ratio: f64,
    pub current_player: Option<Player>,
    pub last_spin: Option<SpinOutcome>,
    pub standings: Vec<Player>,
    pub guessed: Vec<Letter>,
    pub messages: Vec<Message>,
    pub prompt: String,
    pub input_buffer: String,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Nothing is being asked; keys are ignored
    Idle,
    Typing,
    /// Waiting for Enter between rounds
    Paused,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press did to the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Submit(String),
    Quit,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: String::new(),
            category: None,
            round: None,
            revealed_ratio: 0.0,
            current_player: None,
            last_spin: None,
            standings: Vec::new(),
            guessed: Vec::new(),
            messages: Vec::new(),
            prompt: String::new(),
            input_buffer: String::new(),
            input_mode: InputMode::Idle,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Start asking for a line of input
    pub fn begin_prompt(&mut self, prompt: &str, mode: InputMode) {
        self.prompt = prompt.to_string();
        self.input_buffer.clear();
        self.input_mode = mode;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyAction::Quit;
            }
            KeyCode::Esc => return KeyAction::Quit,
            _ => {}
        }

        match (self.input_mode, key.code) {
            (InputMode::Typing | InputMode::GameOver, KeyCode::Char(c)) => {
                if self.input_buffer.chars().count() < INPUT_LIMIT {
                    self.input_buffer.push(c);
                }
                KeyAction::Continue
            }
            (InputMode::Typing | InputMode::GameOver, KeyCode::Backspace) => {
                self.input_buffer.pop();
                KeyAction::Continue
            }
            (InputMode::Typing | InputMode::GameOver | InputMode::Paused, KeyCode::Enter) => {
                let line = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Idle;
                KeyAction::Submit(line)
            }
            _ => KeyAction::Continue,
        }
    }

    fn update_player(&mut self, player: &Player) {
        if let Some(slot) = self.standings.iter_mut().find(|p| p.id() == player.id()) {
            *slot = player.clone();
        }
        if self
            .current_player
            .as_ref()
            .is_some_and(|p| p.id() == player.id())
        {
            self.current_player = Some(player.clone());
        }
    }

    fn note_letter(&mut self, letter: Letter) {
        if !self.guessed.contains(&letter) {
            self.guessed.push(letter);
            self.guessed.sort_unstable();
        }
    }

    /// Fold a game event into the screen state
    #[allow(clippy::too_many_lines)] // One arm per event
    pub fn apply(&mut self, event: &GameEvent<'_>) {
        match event {
            GameEvent::Welcome => {
                *self = Self::new();
                self.add_message("Welcome to Wheel of Fortune!", MessageStyle::Info);
            }
            GameEvent::PlayersSeated { players } => {
                self.standings = players.to_vec();
                self.add_message(
                    &format!("Starting with {} player(s)!", players.len()),
                    MessageStyle::Info,
                );
            }
            GameEvent::RoundStarted {
                number,
                total,
                puzzle,
            } => {
                self.round = Some((*number, *total));
                self.board = puzzle.display();
                self.category = puzzle.category().map(str::to_string);
                self.revealed_ratio = puzzle.revealed_ratio();
                self.guessed.clear();
                self.last_spin = None;
                self.add_message(&format!("Round {number} of {total}"), MessageStyle::Info);
            }
            GameEvent::TurnStarted {
                player,
                puzzle,
                standings,
            } => {
                self.current_player = Some((*player).clone());
                self.standings = standings.to_vec();
                self.board = puzzle.display();
                self.last_spin = None;
                self.add_message(
                    &format!("{}'s turn", player.name()),
                    MessageStyle::Info,
                );
            }
            GameEvent::Spun { player, outcome } => {
                self.last_spin = Some(*outcome);
                self.update_player(player);
                let style = match outcome {
                    SpinOutcome::Cash(_) => MessageStyle::Info,
                    SpinOutcome::Bankrupt | SpinOutcome::SkipTurn => MessageStyle::Error,
                };
                self.add_message(
                    &format!("{} spun {}", player.name(), spin_label(*outcome)),
                    style,
                );
            }
            GameEvent::VowelPurchased {
                player,
                letter,
                cost,
            } => {
                self.update_player(player);
                self.add_message(
                    &format!("Bought {letter} for {}", format_money(*cost)),
                    MessageStyle::Info,
                );
            }
            GameEvent::LetterRevealed {
                player,
                letter,
                matches,
                credited,
                puzzle,
            } => {
                self.board = puzzle.display();
                self.revealed_ratio = puzzle.revealed_ratio();
                self.note_letter(*letter);
                self.update_player(player);
                if *matches == 0 {
                    self.add_message(&format!("No {letter} in the puzzle"), MessageStyle::Error);
                } else {
                    self.add_message(
                        &format!("{matches} × {letter}, won {}", format_money(*credited)),
                        MessageStyle::Success,
                    );
                }
            }
            GameEvent::NoPlayableLetters { .. } => {
                self.add_message(
                    "No letters left to call. Time to solve!",
                    MessageStyle::Info,
                );
            }
            GameEvent::SolveAttempted {
                guess,
                solved,
                puzzle,
                ..
            } => {
                self.board = puzzle.display();
                self.revealed_ratio = puzzle.revealed_ratio();
                if *solved {
                    self.add_message("Solved it!", MessageStyle::Success);
                } else {
                    self.add_message(
                        &format!("\"{guess}\" is not it"),
                        MessageStyle::Error,
                    );
                }
            }
            GameEvent::TurnEnded { solo, .. } => {
                let text = if *solo {
                    "It's okay, you may try again."
                } else {
                    "On to the next player."
                };
                self.add_message(text, MessageStyle::Info);
            }
            GameEvent::RoundWon {
                number,
                winner,
                winnings,
                puzzle,
                standings,
            } => {
                self.board = puzzle.display();
                self.revealed_ratio = puzzle.revealed_ratio();
                self.standings = standings.to_vec();
                self.add_message(
                    &format!(
                        "{} wins round {number} and banks {}",
                        winner.name(),
                        format_money(*winnings)
                    ),
                    MessageStyle::Success,
                );
            }
            GameEvent::GameOver { winner, standings } => {
                self.standings = standings.to_vec();
                self.current_player = None;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "🏆 {} wins the game with {}!",
                        winner.name(),
                        format_money(winner.total_money())
                    ),
                    MessageStyle::Success,
                );
            }
            GameEvent::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
        }
    }
}

/// [`Interaction`] over a ratatui terminal
pub struct TuiSurface<B: Backend> {
    terminal: Terminal<B>,
    app: App,
}

impl<B: Backend> TuiSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            app: App::new(),
        }
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    fn draw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| super::rendering::ui(f, &self.app))?;
        Ok(())
    }

    /// Draw, then collect keys until Enter
    fn read_line(&mut self, prompt: &str, mode: InputMode) -> io::Result<String> {
        self.app.begin_prompt(prompt, mode);

        loop {
            self.draw()?;

            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.app.handle_key(key) {
                    KeyAction::Continue => {}
                    KeyAction::Submit(line) => return Ok(line),
                    KeyAction::Quit => {
                        return Err(io::Error::new(io::ErrorKind::Interrupted, "quit"));
                    }
                }
            }
        }
    }
}

impl<B: Backend> Interaction for TuiSurface<B> {
    fn prompt_player_count(&mut self, max: usize) -> io::Result<String> {
        self.read_line(
            &format!(" How many players? (1-{max}) "),
            InputMode::Typing,
        )
    }

    fn prompt_player_name(&mut self, seat: usize) -> io::Result<String> {
        self.read_line(
            &format!(" Name for player {} ", seat + 1),
            InputMode::Typing,
        )
    }

    fn prompt_letter(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        self.app.guessed = view.round.guessed();
        let value = view.spin.map(format_money).unwrap_or_default();
        self.read_line(
            &format!(
                " Call a letter for {value} each (vowels cost {}) ",
                format_money(view.vowel_cost)
            ),
            InputMode::Typing,
        )
    }

    fn prompt_follow_up(
        &mut self,
        _view: &TurnView<'_>,
        options: &[FollowUp],
    ) -> io::Result<String> {
        let choices = options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}) {option}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        self.read_line(&format!(" {choices} "), InputMode::Typing)
    }

    fn prompt_solve(&mut self, _view: &TurnView<'_>) -> io::Result<String> {
        self.read_line(" Type the full phrase ", InputMode::Typing)
    }

    fn prompt_play_again(&mut self) -> io::Result<String> {
        self.read_line(" Play again? (yes/no) ", InputMode::GameOver)
    }

    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        self.app.apply(event);
        self.draw()
    }

    fn pause(&mut self) -> io::Result<()> {
        self.read_line(" Press Enter for the next round ", InputMode::Paused)?;
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the phrase catalog runs short.
pub fn run_tui(catalog: &PhraseCatalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Run app
    let mut surface = TuiSurface::new(terminal);
    let res = run_sessions(&mut surface, catalog, config, seed);

    // Restore terminal
    let mut terminal = surface.into_terminal();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(summaries) => {
            info!(games = summaries.len(), "tui session ended");
            Ok(())
        }
        Err(GameError::Interaction(e)) if e.kind() == io::ErrorKind::Interrupted => {
            info!("tui session quit");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
