//! Results of finished rounds and games

use crate::core::{Player, PlayerId};

/// How a round went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub number: usize,
    pub category: Option<String>,
    pub phrase: String,
    pub winner: PlayerId,
    /// Round money the winner banked
    pub winnings: u32,
    pub turns: usize,
    pub bankruptcies: usize,
}

/// Final state of a game session
#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Players in seat order with their final totals
    pub players: Vec<Player>,
    pub rounds: Vec<RoundSummary>,
}

impl GameSummary {
    /// The game winner (see [`game_winner`])
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        game_winner(&self.players)
    }

    /// Seat index of the game winner
    #[must_use]
    pub fn winner_seat(&self) -> Option<usize> {
        let winner = self.winner()?;
        self.players.iter().position(|p| p == winner)
    }
}

/// Player with the highest total money; ties go to the earliest seat
#[must_use]
pub fn game_winner(players: &[Player]) -> Option<&Player> {
    players.iter().reduce(|best, player| {
        if player.total_money() > best.total_money() {
            player
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdentityGenerator;

    fn players_with_totals(totals: &[u32]) -> Vec<Player> {
        let mut ids = IdentityGenerator::new();
        totals
            .iter()
            .enumerate()
            .map(|(seat, &total)| {
                let mut player = Player::new(ids.next_id(), format!("Player {}", seat + 1));
                player.apply_letter_result(1, total);
                player.win_round();
                player.new_round();
                player
            })
            .collect()
    }

    #[test]
    fn tie_goes_to_lower_seat() {
        let players = players_with_totals(&[100, 300, 300]);
        let winner = game_winner(&players).unwrap();
        assert_eq!(winner.name(), "Player 2");
        assert_eq!(winner.total_money(), 300);
    }

    #[test]
    fn clear_winner() {
        let players = players_with_totals(&[700, 300, 900]);
        assert_eq!(game_winner(&players).unwrap().name(), "Player 3");
    }

    #[test]
    fn all_zero_goes_to_first_seat() {
        let players = players_with_totals(&[0, 0]);
        assert_eq!(game_winner(&players).unwrap().name(), "Player 1");
    }

    #[test]
    fn no_players_no_winner() {
        assert!(game_winner(&[]).is_none());
    }

    #[test]
    fn summary_winner_seat() {
        let summary = GameSummary {
            players: players_with_totals(&[100, 300, 300]),
            rounds: Vec::new(),
        };
        assert_eq!(summary.winner_seat(), Some(1));
    }
}
