//! Game model types and the check-for-treasure rules.
//!
//! Pure data, no locking. The runtime store in the app crate owns the
//! shared instance and serializes mutation; everything here operates on
//! a `Game` it already holds exclusively.

use serde::{Deserialize, Serialize};

/// Number of hiding spots in every game.
pub const SPOT_COUNT: usize = 9;

/// Turns a player starts with.
pub const STARTING_TURNS: i32 = 3;

/// A place where treasure might be hidden.
///
/// `id` is the stringified positional index, fixed at creation.
/// `has_treasure` never changes; `has_been_checked` flips to true at
/// most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidingSpot {
    pub id: String,
    pub has_been_checked: bool,
    pub has_treasure: bool,
}

/// The treasure search game. One instance exists per process, owned by
/// the app-side store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub hiding_spots: Vec<HidingSpot>,
    pub turns_remaining: i32,
}

impl Game {
    /// Create a fresh game with the treasure at `treasure_index`.
    ///
    /// The caller picks the index (the store randomizes it; tests pass a
    /// fixed one). Indices outside `[0, SPOT_COUNT)` would produce a
    /// treasureless board, so they are rejected by debug assertion.
    pub fn new(treasure_index: usize) -> Game {
        debug_assert!(treasure_index < SPOT_COUNT);
        let hiding_spots = (0..SPOT_COUNT)
            .map(|i| HidingSpot {
                id: i.to_string(),
                has_been_checked: false,
                has_treasure: i == treasure_index,
            })
            .collect();
        Game {
            id: "1".into(),
            hiding_spots,
            turns_remaining: STARTING_TURNS,
        }
    }

    /// Look up a hiding spot by its local ID. `None` for unknown IDs is
    /// a valid outcome, not a failure.
    pub fn hiding_spot(&self, id: &str) -> Option<&HidingSpot> {
        self.hiding_spots.iter().find(|s| s.id == id)
    }

    /// True once the treasure spot has been checked. A won game is
    /// frozen: further checks have no effect.
    pub fn is_won(&self) -> bool {
        self.hiding_spots
            .iter()
            .any(|s| s.has_treasure && s.has_been_checked)
    }

    /// Mark a hiding spot checked and consume a turn.
    ///
    /// No-ops, in order: the game is already won; `id` is unknown
    /// (unknown IDs are silently ignored); the spot was already checked
    /// (re-checks never consume a turn). Only then does the turn counter
    /// decrement and the spot flip to checked.
    ///
    /// The guard is win-only: a turn-exhausted but unwon game still
    /// accepts checks, and the counter can go below zero (see
    /// DESIGN.md).
    pub fn check_hiding_spot_for_treasure(&mut self, id: &str) {
        if self.is_won() {
            return;
        }
        let Some(spot) = self.hiding_spots.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if spot.has_been_checked {
            return;
        }
        self.turns_remaining -= 1;
        spot.has_been_checked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_exactly_one_treasure() {
        for i in 0..SPOT_COUNT {
            let game = Game::new(i);
            assert_eq!(game.hiding_spots.len(), SPOT_COUNT);
            assert_eq!(
                game.hiding_spots.iter().filter(|s| s.has_treasure).count(),
                1
            );
            assert!(game.hiding_spots[i].has_treasure);
            assert_eq!(game.turns_remaining, STARTING_TURNS);
        }
    }

    #[test]
    fn spot_ids_are_positional() {
        let game = Game::new(0);
        for (i, spot) in game.hiding_spots.iter().enumerate() {
            assert_eq!(spot.id, i.to_string());
            assert!(!spot.has_been_checked);
        }
    }

    #[test]
    fn lookup_unknown_id_is_none() {
        let game = Game::new(3);
        assert!(game.hiding_spot("9").is_none());
        assert!(game.hiding_spot("bogus").is_none());
        assert_eq!(game.hiding_spot("3").map(|s| s.id.as_str()), Some("3"));
    }

    #[test]
    fn check_consumes_one_turn() {
        let mut game = Game::new(4);
        game.check_hiding_spot_for_treasure("4");
        assert_eq!(game.turns_remaining, 2);
        let spot = game.hiding_spot("4").unwrap();
        assert!(spot.has_been_checked);
        assert!(spot.has_treasure);
        assert!(game.is_won());
    }

    #[test]
    fn rechecking_a_spot_is_idempotent() {
        let mut game = Game::new(4);
        game.check_hiding_spot_for_treasure("0");
        game.check_hiding_spot_for_treasure("0");
        game.check_hiding_spot_for_treasure("0");
        assert_eq!(game.turns_remaining, 2);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut game = Game::new(4);
        game.check_hiding_spot_for_treasure("42");
        game.check_hiding_spot_for_treasure("not-a-spot");
        assert_eq!(game.turns_remaining, STARTING_TURNS);
        assert!(game.hiding_spots.iter().all(|s| !s.has_been_checked));
    }

    #[test]
    fn winning_freezes_the_game() {
        let mut game = Game::new(4);
        game.check_hiding_spot_for_treasure("4");
        assert!(game.is_won());
        game.check_hiding_spot_for_treasure("0");
        assert_eq!(game.turns_remaining, 2);
        assert!(!game.hiding_spot("0").unwrap().has_been_checked);
    }

    #[test]
    fn exhausted_turns_do_not_gate_further_checks() {
        // Win-only guard: after three misses the counter is 0, yet a
        // fourth check still lands.
        let mut game = Game::new(4);
        game.check_hiding_spot_for_treasure("0");
        game.check_hiding_spot_for_treasure("1");
        game.check_hiding_spot_for_treasure("2");
        assert_eq!(game.turns_remaining, 0);
        assert!(!game.is_won());
        game.check_hiding_spot_for_treasure("4");
        assert!(game.hiding_spot("4").unwrap().has_been_checked);
        assert!(game.is_won());
        assert_eq!(game.turns_remaining, -1);
    }

    #[test]
    fn turns_never_increase() {
        let mut game = Game::new(8);
        let mut last = game.turns_remaining;
        for id in ["0", "0", "7", "nope", "1", "8", "2"] {
            game.check_hiding_spot_for_treasure(id);
            assert!(game.turns_remaining <= last);
            last = game.turns_remaining;
        }
    }

    #[test]
    fn snapshots_compare_by_value() {
        let game = Game::new(4);
        let snapshot = game.clone();
        assert_eq!(snapshot, game);

        let mut checked = game.clone();
        checked.check_hiding_spot_for_treasure("0");
        assert_ne!(checked, game);
    }

    #[test]
    fn game_serializes_with_snake_case_fields() {
        let game = Game::new(0);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["turns_remaining"], 3);
        assert_eq!(json["hiding_spots"][0]["has_treasure"], true);
    }
}
