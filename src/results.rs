use crate::pieces::Side;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

/// A summary of a finished game: who played, which side won, how many rounds it took and how long
/// it lasted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub player: String,
    pub winner: Side,
    pub rounds: u32,
    pub duration: Duration
}

impl GameResult {
    pub fn new(player: impl Into<String>, winner: Side, rounds: u32, duration: Duration) -> Self {
        Self { player: player.into(), winner, rounds, duration }
    }

    /// Compare two results by how well they rank on a leaderboard: fewer rounds first, and among
    /// results with the same number of rounds, the longer game first.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rounds.cmp(&other.rounds)
            .then_with(|| other.duration.cmp(&self.duration))
    }
}

/// A collection of finished games, in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    results: Vec<GameResult>
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result to the table.
    pub fn record(&mut self, result: GameResult) {
        debug!(player = %result.player, winner = ?result.winner, rounds = result.rounds, "recorded result");
        self.results.push(result);
    }

    /// Return up to `n` results, best first (see [`GameResult::rank_cmp`]). Results that rank
    /// equally keep the order in which they were recorded.
    pub fn best(&self, n: usize) -> Vec<&GameResult> {
        let mut ranked: Vec<&GameResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&GameResult> {
        self.results.iter()
    }
}

impl FromIterator<GameResult> for ResultTable {
    fn from_iter<I: IntoIterator<Item=GameResult>>(iter: I) -> Self {
        Self { results: iter.into_iter().collect() }
    }
}
