//! Game store: the process-wide game and its serialization point.
//!
//! Model types come from the `treasurehunt` lib. The store stays here
//! (it owns the `RwLock` and is not part of the wire schema). Resolvers
//! receive it as `Arc<GameStore>` injected into the schema, so tests
//! can build an isolated store instead of reaching for globals.

use std::sync::RwLock;

use rand::Rng;
use thiserror::Error;

use treasurehunt::{Game, HidingSpot, SPOT_COUNT};

/// Store accessed before `initialize()`. Fatal to the request, not to
/// the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("game store has not been initialized")]
    NotInitialized,
}

/// Owns the single mutable `Game`.
///
/// Every mutation goes through the write lock; reads take the read lock
/// and return a cloned snapshot, so concurrent readers never observe a
/// torn write. The game is tiny (9 spots), cloning is cheap.
pub struct GameStore {
    game: RwLock<Option<Game>>,
}

impl GameStore {
    /// Create an empty store. Call `initialize()` before anything else.
    pub fn new() -> Self {
        Self {
            game: RwLock::new(None),
        }
    }

    /// Start a new game with the treasure at a uniform-random spot.
    /// Unconditionally replaces any previous game.
    pub fn initialize(&self) -> Game {
        let index = rand::rng().random_range(0..SPOT_COUNT);
        self.initialize_with_treasure_at(index)
    }

    /// Start a new game with the treasure at a known index.
    pub fn initialize_with_treasure_at(&self, treasure_index: usize) -> Game {
        let game = Game::new(treasure_index);
        *self.game.write().unwrap_or_else(|e| e.into_inner()) = Some(game.clone());
        game
    }

    /// Snapshot of the current game.
    pub fn current(&self) -> Result<Game, StoreError> {
        self.game
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or(StoreError::NotInitialized)
    }

    /// Snapshot of one hiding spot. `Ok(None)` for unknown IDs; that is
    /// a valid "no such node" outcome, not an error.
    pub fn hiding_spot(&self, id: &str) -> Result<Option<HidingSpot>, StoreError> {
        let guard = self.game.read().unwrap_or_else(|e| e.into_inner());
        let game = guard.as_ref().ok_or(StoreError::NotInitialized)?;
        Ok(game.hiding_spot(id).cloned())
    }

    /// Apply the check-for-treasure mutation under the write lock.
    ///
    /// Unknown IDs, re-checks, and checks on a won game are no-ops by
    /// contract; only a missing game is an error.
    pub fn check_hiding_spot_for_treasure(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.game.write().unwrap_or_else(|e| e.into_inner());
        let game = guard.as_mut().ok_or(StoreError::NotInitialized)?;
        game.check_hiding_spot_for_treasure(id);
        Ok(())
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
