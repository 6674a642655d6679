//! Random self-play for trace collection.
//!
//! Plays games by drawing uniformly at random among the currently legal
//! move slots. There is no search and no strategy; the point is cheap,
//! reproducible game records for downstream training.

use tracing::debug;

use crate::core::GameRng;
use crate::error::Result;
use crate::rules::GameDefinition;

use super::session::GameSession;
use super::trace::GameTrace;

/// Configuration for self-play runs.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Hard cap on moves per game, for games that could stall. Board
    /// games that fill a grid terminate well before any sensible cap.
    pub max_moves: usize,

    /// Base seed; game `i` of a batch plays with seed `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_moves: 512,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-game move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Plays whole games at random and records them as traces.
pub struct SelfPlayWorker<G: GameDefinition> {
    session: GameSession<G>,
    config: SelfPlayConfig,
}

impl<G: GameDefinition> SelfPlayWorker<G> {
    /// Create a worker for the given game.
    #[must_use]
    pub fn new(game: G, config: SelfPlayConfig) -> Self {
        Self {
            session: GameSession::new(game),
            config,
        }
    }

    /// Play one game from the initial position with the given seed.
    pub fn play_game(&mut self, seed: u64) -> Result<GameTrace> {
        let mut rng = GameRng::new(seed);
        self.session.reset();

        for move_number in 0..self.config.max_moves {
            if self.session.is_over() {
                break;
            }

            let slots: Vec<usize> = self.session.legal_moves().legal_slots().collect();
            let Some(&slot) = rng.choose(&slots) else {
                break;
            };

            self.session.play(slot)?;
            debug!(move_number, slot, "self-play move");
        }

        Ok(self.session.trace())
    }

    /// Play a batch of games, one trace per game, with per-game seeds
    /// derived from the configured offset.
    pub fn play_games(&mut self, count: usize) -> Result<Vec<GameTrace>> {
        (0..count)
            .map(|i| self.play_game(self.config.seed_offset.wrapping_add(i as u64)))
            .collect()
    }

    /// The worker's configuration.
    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::tictactoe::TicTacToe;
    use crate::rules::GameStatus;

    #[test]
    fn test_config_builders() {
        let config = SelfPlayConfig::new()
            .with_max_moves(100)
            .with_seed_offset(1000);

        assert_eq!(config.max_moves, 100);
        assert_eq!(config.seed_offset, 1000);
    }

    #[test]
    fn test_game_plays_to_terminal() {
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
        let trace = worker.play_game(42).unwrap();

        assert!(trace.status.is_terminal());
        assert!(trace.move_count() >= 5); // Fastest possible win.
        assert!(trace.move_count() <= 9);
        assert_eq!(trace.states.len(), trace.move_count() + 1);
    }

    #[test]
    fn test_alternation_in_traces() {
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
        let trace = worker.play_game(7).unwrap();

        let one = trace.moves[Player::One].len();
        let two = trace.moves[Player::Two].len();

        // Player one moves first, so their count equals or exceeds by one.
        assert!(one == two || one == two + 1);
    }

    #[test]
    fn test_same_seed_same_trace() {
        let mut worker1 = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
        let mut worker2 = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());

        let t1 = worker1.play_game(12345).unwrap();
        let t2 = worker2.play_game(12345).unwrap();

        assert_eq!(t1, t2);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());

        let traces: Vec<_> = (0..20)
            .map(|seed| worker.play_game(seed).unwrap())
            .collect();

        // At least two of twenty random games should differ.
        assert!(traces.iter().any(|t| t != &traces[0]));
    }

    #[test]
    fn test_batch_seeds_are_offset() {
        let config = SelfPlayConfig::default().with_seed_offset(500);
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), config);

        let batch = worker.play_games(3).unwrap();
        assert_eq!(batch.len(), 3);

        // Game 0 of the batch matches a solo game at the same seed.
        let mut solo = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
        assert_eq!(batch[0], solo.play_game(500).unwrap());
    }

    #[test]
    fn test_max_moves_caps_the_game() {
        let config = SelfPlayConfig::default().with_max_moves(3);
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), config);

        let trace = worker.play_game(42).unwrap();

        assert_eq!(trace.move_count(), 3);
        assert_eq!(trace.status, GameStatus::Continuing);
    }
}
