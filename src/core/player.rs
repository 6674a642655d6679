//! Player identity and per-player data storage.
//!
//! ## Player
//!
//! Exactly two identities: `Player::One` (moves first) and `Player::Two`.
//! Alternation is a pure function of the current player.
//!
//! ## PlayerMap
//!
//! Per-player data storage holding exactly one `T` per player, indexable
//! by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// One of the two players. `One` makes the first move of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Wire code for this player: 1 for `One`, 2 for `Two`.
    ///
    /// Board cells occupied by a player conventionally hold this code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Decode a raw player code.
    ///
    /// This is the only path that can produce [`Error::InvalidPlayer`]; the
    /// typed API never constructs an out-of-range player.
    pub fn from_code(code: u8) -> Result<Player> {
        match code {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(Error::InvalidPlayer { code }),
        }
    }

    /// Zero-based index (0 for `One`, 1 for `Two`), for array-backed maps.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both players, in move order.
    #[must_use]
    pub const fn both() -> [Player; 2] {
        [Player::One, Player::Two]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

/// Per-player data storage with one entry per player.
///
/// ## Example
///
/// ```
/// use gridgame::core::{Player, PlayerMap};
///
/// let mut moves: PlayerMap<Vec<usize>> = PlayerMap::with_default();
/// moves[Player::One].push(4);
///
/// assert_eq!(moves[Player::One], vec![4]);
/// assert!(moves[Player::Two].is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Player::One.code(), 1);
        assert_eq!(Player::Two.code(), 2);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Player::from_code(1).unwrap(), Player::One);
        assert_eq!(Player::from_code(2).unwrap(), Player::Two);

        assert!(matches!(
            Player::from_code(0),
            Err(Error::InvalidPlayer { code: 0 })
        ));
        assert!(matches!(
            Player::from_code(3),
            Err(Error::InvalidPlayer { code: 3 })
        ));
    }

    #[test]
    fn test_code_round_trip() {
        for player in Player::both() {
            assert_eq!(Player::from_code(player.code()).unwrap(), player);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::One), "player one");
        assert_eq!(format!("{}", Player::Two), "player two");
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.code() * 10);

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_with_value() {
        let map: PlayerMap<i32> = PlayerMap::with_value(7);

        assert_eq!(map[Player::One], 7);
        assert_eq!(map[Player::Two], 7);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<usize>> = PlayerMap::with_default();

        map[Player::One].push(0);
        map[Player::Two].push(8);
        map[Player::One].push(4);

        assert_eq!(map[Player::One], vec![0, 4]);
        assert_eq!(map[Player::Two], vec![8]);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &0), (Player::Two, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::new(|p| p.code() as i32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
