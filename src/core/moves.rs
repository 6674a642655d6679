//! Move vocabulary: legal-move vectors and the name/slot index.
//!
//! A game enumerates its moves once, as an ordered list of unique names;
//! a move is then referred to by its *slot*, the position of its name in
//! that list. Slot and name round-trip exactly for the lifetime of the
//! game definition.
//!
//! ## LegalMoves
//!
//! One boolean flag per move slot for a given state and player. Computed
//! fresh after every transition, never persisted.
//!
//! ## MoveIndex
//!
//! The name-to-slot map, built once per game definition.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Boolean flags, one per move slot, for a given state and player.
///
/// SmallVec keeps the flags inline for games with up to 16 move slots
/// (plenty for a 3x3 board) and spills to the heap for larger games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoves {
    flags: SmallVec<[bool; 16]>,
}

impl LegalMoves {
    /// The all-false vector of the given length: no move is legal.
    ///
    /// This is the legal-move vector of every terminal state.
    #[must_use]
    pub fn all_false(len: usize) -> Self {
        Self {
            flags: smallvec::smallvec![false; len],
        }
    }

    /// Number of move slots covered (always the game's move count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True if the vector covers no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether `slot` is currently legal. Out-of-range slots are not.
    #[must_use]
    pub fn is_legal(&self, slot: usize) -> bool {
        self.flags.get(slot).copied().unwrap_or(false)
    }

    /// True if at least one move is legal.
    #[must_use]
    pub fn any_legal(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }

    /// Number of legal slots.
    #[must_use]
    pub fn count_legal(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Iterate over the slots that are currently legal, in slot order.
    pub fn legal_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(slot, &f)| f.then_some(slot))
    }

    /// Iterate over all flags in slot order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().copied()
    }
}

impl FromIterator<bool> for LegalMoves {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

/// The bijection between move names and move slots.
///
/// Built once per game definition from its `move_names()` ordering; the
/// ordering is fixed for the definition's lifetime, so the index is never
/// rebuilt.
#[derive(Clone, Debug)]
pub struct MoveIndex {
    names: Vec<String>,
    slots: FxHashMap<String, usize>,
}

impl MoveIndex {
    /// Build the index from an ordered list of unique move names.
    ///
    /// Panics if two names collide; a game definition with duplicate move
    /// names is malformed.
    #[must_use]
    pub fn new(names: &[String]) -> Self {
        let mut slots = FxHashMap::default();
        for (slot, name) in names.iter().enumerate() {
            let previous = slots.insert(name.clone(), slot);
            assert!(previous.is_none(), "duplicate move name '{name}'");
        }
        Self {
            names: names.to_vec(),
            slots,
        }
    }

    /// Number of move slots.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.names.len()
    }

    /// Resolve a move name to its slot.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.slots
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownMoveName {
                name: name.to_string(),
            })
    }

    /// The name registered for `slot`.
    ///
    /// Panics if `slot` is out of range; the pipeline range-checks slots
    /// before naming them.
    #[must_use]
    pub fn name(&self, slot: usize) -> &str {
        &self.names[slot]
    }

    /// All names in slot order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
