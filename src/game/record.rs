use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    MoveLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win => f.write_str("win"),
            GameOutcome::Loss => f.write_str("loss"),
            GameOutcome::MoveLimit => f.write_str("move limit"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub score: f64,
    pub outcome: GameOutcome,
    pub pacman_moves: usize,
    pub total_moves: usize,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with score {} after {} Pacman moves",
            self.outcome, self.score, self.pacman_moves
        )
    }
}

/// Totals over a series of games.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub games: usize,
    pub wins: usize,
    pub average_score: f64,
}

impl GameSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let games = records.len();
        let wins = records
            .iter()
            .filter(|record| record.outcome == GameOutcome::Win)
            .count();
        let total: f64 = records.iter().map(|record| record.score).sum();
        let average_score = if games == 0 {
            0.0
        } else {
            total / games as f64
        };

        Self {
            games,
            wins,
            average_score,
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average score: {}, win rate: {}/{}",
            self.average_score, self.wins, self.games
        )
    }
}
