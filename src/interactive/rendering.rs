//! TUI rendering with ratatui
//!
//! Board, standings and message panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Letter, SpinOutcome};
use crate::output::formatters::{board_tiles, format_money, spin_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Standings and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎡 WHEEL OF FORTUNE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Revealed gauge
            Constraint::Length(4), // Letter board
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_revealed(f, app, chunks[1]);
    render_letters(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let title = match (app.round, app.category.as_deref()) {
        (Some((number, total)), Some(category)) => {
            format!(" Round {number} of {total} | {category} ")
        }
        (Some((number, total)), None) => format!(" Round {number} of {total} "),
        _ => " Puzzle ".to_string(),
    };

    let content = if app.board.is_empty() {
        vec![Line::from("Waiting for players...")]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                board_tiles(&app.board),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_revealed(f: &mut Frame, app: &App, area: Rect) {
    // Cast is safe: ratio is within [0, 1]
    let percent = (app.revealed_ratio.clamp(0.0, 1.0) * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Revealed ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{percent}% of letters showing"));
    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = Letter::alphabet()
        .map(|letter| {
            let style = if app.guessed.contains(&letter) {
                Style::default().fg(Color::DarkGray)
            } else if letter.is_vowel() {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Standings
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_standings(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_standings(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_player.as_ref().map(crate::core::Player::id);

    let items: Vec<ListItem> = app
        .standings
        .iter()
        .map(|player| {
            let (marker, style) = if Some(player.id()) == current {
                (
                    "▶ ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{:<12}", player.name()), style),
                Span::raw(format!("{:>8}", format_money(player.round_money()))),
                Span::styled(
                    format!("{:>10}", format_money(player.total_money())),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let standings = List::new(items).block(
        Block::default()
            .title(" Standings (round / total) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(standings, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.input_mode {
        InputMode::Idle => Color::DarkGray,
        InputMode::Typing => Color::Yellow,
        InputMode::Paused => Color::Cyan,
        InputMode::GameOver => Color::Green,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(app.prompt.as_str())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let player_text = app
        .current_player
        .as_ref()
        .map_or_else(String::new, |p| format!("Turn: {}", p.name()));
    let player = Paragraph::new(player_text).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let (spin_text, spin_color) = match app.last_spin {
        Some(outcome @ SpinOutcome::Cash(_)) => (spin_label(outcome), Color::Green),
        Some(outcome) => (spin_label(outcome), Color::Red),
        None => (String::new(), Color::White),
    };
    let spin = Paragraph::new(spin_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(spin_color));
    f.render_widget(spin, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdentityGenerator, Player, Puzzle};
    use crate::game::GameEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_standings() {
        let mut ids = IdentityGenerator::new();
        let players = vec![Player::new(ids.next_id(), "Ann"), Player::new(ids.next_id(), "Bob")];
        let puzzle = Puzzle::with_category("Dog", "ANIMALS");

        let mut app = App::new();
        app.apply(&GameEvent::PlayersSeated { players: &players });
        app.apply(&GameEvent::RoundStarted {
            number: 2,
            total: 3,
            puzzle: &puzzle,
        });
        app.apply(&GameEvent::TurnStarted {
            player: &players[0],
            puzzle: &puzzle,
            standings: &players,
        });
        app.begin_prompt(" Name ", InputMode::Typing);

        let text = screen_text(&app);
        assert!(text.contains("WHEEL OF FORTUNE"));
        assert!(text.contains("Round 2 of 3 | ANIMALS"));
        assert!(text.contains("_ _ _"));
        assert!(text.contains("Ann"));
        assert!(text.contains("Bob"));
        assert!(text.contains("Turn: Ann"));
    }

    #[test]
    fn draws_empty_screen() {
        let text = screen_text(&App::new());
        assert!(text.contains("Waiting for players"));
    }
}
