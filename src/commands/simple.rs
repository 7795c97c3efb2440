//! Simple interactive CLI mode
//!
//! Line-based console play without the TUI.

use crate::core::{Player, SpinOutcome};
use crate::game::{FollowUp, GameConfig, GameError, GameEvent, Interaction, TurnView, run_sessions};
use crate::output::formatters::{board_tiles, format_money, letter_strip, spin_label};
use crate::phrases::PhraseCatalog;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console implementation of [`Interaction`] over any line reader and writer
pub struct ConsoleSurface<R, W> {
    input: R,
    output: W,
}

impl ConsoleSurface<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSurface<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Get user input with a prompt
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let prompt = format!("{prompt}:");
        write!(self.output, "{} ", prompt.bright_white().bold())?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(input.trim().to_string())
    }

    fn print_board(&mut self, display: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "\n    {}\n",
            board_tiles(display).bright_yellow().bold()
        )
    }

    fn print_standings(&mut self, standings: &[Player]) -> io::Result<()> {
        for player in standings {
            writeln!(
                self.output,
                "  {:<20} round {:>8}   total {:>9}",
                player.name(),
                format_money(player.round_money()),
                format_money(player.total_money()).green()
            )?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleSurface<R, W> {
    fn prompt_player_count(&mut self, max: usize) -> io::Result<String> {
        self.ask(&format!("How many players would you like to begin with? (1-{max})"))
    }

    fn prompt_player_name(&mut self, seat: usize) -> io::Result<String> {
        self.ask(&format!("Hey player {}, what's your name?", seat + 1))
    }

    fn prompt_letter(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        writeln!(
            self.output,
            "  Called: {}",
            letter_strip(&view.round.guessed()).bright_black()
        )?;
        let value = view.spin.map(format_money).unwrap_or_default();
        self.ask(&format!(
            "Guess a letter for {value} each (vowels cost {})",
            format_money(view.vowel_cost)
        ))
    }

    fn prompt_follow_up(
        &mut self,
        _view: &TurnView<'_>,
        options: &[FollowUp],
    ) -> io::Result<String> {
        writeln!(
            self.output,
            "Since you guessed correctly, spin again or attempt to solve!"
        )?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }
        self.ask("Choose")
    }

    fn prompt_solve(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        self.print_board(&view.puzzle().display())?;
        self.ask("Enter the full phrase")
    }

    fn prompt_play_again(&mut self) -> io::Result<String> {
        self.ask("Play again? (yes/no)")
    }

    #[allow(clippy::too_many_lines)] // One arm per event
    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        match event {
            GameEvent::Welcome => {
                writeln!(
                    self.output,
                    "\n╔══════════════════════════════════════════════════════════════╗"
                )?;
                writeln!(
                    self.output,
                    "║                  W H E E L   O F   F O R T U N E             ║"
                )?;
                writeln!(
                    self.output,
                    "╚══════════════════════════════════════════════════════════════╝\n"
                )?;
                writeln!(self.output, "Welcome to Wheel of Fortune!")?;
            }
            GameEvent::PlayersSeated { players } => {
                writeln!(
                    self.output,
                    "\nAlright, starting with {} player(s)!",
                    players.len()
                )?;
            }
            GameEvent::RoundStarted {
                number,
                total,
                puzzle,
            } => {
                writeln!(self.output, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    self.output,
                    " {}   Category: {}",
                    format!("ROUND {number} of {total}").bright_cyan().bold(),
                    puzzle.category().unwrap_or("?").bright_yellow()
                )?;
                writeln!(self.output, "{}", "═".repeat(60).bright_cyan())?;
            }
            GameEvent::TurnStarted {
                player, puzzle, ..
            } => {
                writeln!(self.output, "{}", "─".repeat(60).cyan())?;
                writeln!(
                    self.output,
                    "Hey {}! It's your turn. Round money: {}",
                    player.name().bright_white().bold(),
                    format_money(player.round_money())
                )?;
                self.print_board(&puzzle.display())?;
            }
            GameEvent::Spun { player, outcome } => {
                let label = spin_label(*outcome);
                let label = match outcome {
                    SpinOutcome::Cash(_) => label.green().bold(),
                    SpinOutcome::Bankrupt => label.red().bold(),
                    SpinOutcome::SkipTurn => label.yellow().bold(),
                };
                writeln!(self.output, "🎡 {} spun {label}", player.name())?;
            }
            GameEvent::VowelPurchased { letter, cost, .. } => {
                writeln!(
                    self.output,
                    "Bought the vowel {letter} for {}",
                    format_money(*cost)
                )?;
            }
            GameEvent::LetterRevealed {
                letter,
                matches,
                credited,
                puzzle,
                ..
            } => {
                if *matches == 0 {
                    let miss = format!("Sorry, there is no {letter}.");
                    writeln!(self.output, "{}", miss.red())?;
                } else {
                    writeln!(
                        self.output,
                        "{}",
                        format!(
                            "Correct! {matches} × {letter}. You won {}!",
                            format_money(*credited)
                        )
                        .green()
                    )?;
                }
                self.print_board(&puzzle.display())?;
            }
            GameEvent::NoPlayableLetters { .. } => {
                writeln!(
                    self.output,
                    "{}",
                    "No letters left that you can call. Time to solve!".yellow()
                )?;
            }
            GameEvent::SolveAttempted { solved, puzzle, .. } => {
                if *solved {
                    writeln!(
                        self.output,
                        "{}",
                        "YAYYYY! You solved it!".bright_green().bold()
                    )?;
                    self.print_board(&puzzle.display())?;
                } else {
                    writeln!(self.output, "{}", "Sorry, that's not it.".red())?;
                }
            }
            GameEvent::TurnEnded { solo, .. } => {
                if *solo {
                    writeln!(self.output, "It's okay, you may try again.\n")?;
                } else {
                    writeln!(self.output, "Let's move on to the next player.\n")?;
                }
            }
            GameEvent::RoundWon {
                number,
                winner,
                winnings,
                puzzle,
                standings,
            } => {
                writeln!(
                    self.output,
                    "\n🎉 {} wins round {number} and banks {}!",
                    winner.name().bright_white().bold(),
                    format_money(*winnings).bright_green().bold()
                )?;
                writeln!(self.output, "   The answer was: {}\n", puzzle.phrase())?;
                self.print_standings(standings)?;
            }
            GameEvent::GameOver { winner, standings } => {
                writeln!(self.output, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    self.output,
                    "{}",
                    "    🎉 🎊 ✨  G A M E   O V E R  ✨ 🎊 🎉    "
                        .bright_green()
                        .bold()
                )?;
                writeln!(self.output, "{}", "═".repeat(60).bright_cyan())?;
                self.print_standings(standings)?;
                writeln!(
                    self.output,
                    "\n🏆 {} wins the game with {}!\n",
                    winner.name().bright_yellow().bold(),
                    format_money(winner.total_money())
                )?;
            }
            GameEvent::Rejected(rejection) => {
                writeln!(self.output, "{}", format!("❌ {rejection}").red())?;
            }
        }
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        let mut discard = String::new();
        self.input.read_line(&mut discard)?;
        Ok(())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the phrase bank runs short or stdin/stdout fail.
pub fn run_simple(
    catalog: &PhraseCatalog,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<(), GameError> {
    let mut surface = ConsoleSurface::stdio();
    let result = run_sessions(&mut surface, catalog, config, seed);

    match result {
        Ok(_) => {
            println!("\n👋 Thanks for playing!\n");
            Ok(())
        }
        Err(GameError::Interaction(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            println!("\n👋 Input closed. Thanks for playing!\n");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
