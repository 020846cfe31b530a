//! Object types exposed through the schema.
//!
//! Each node wraps a snapshot cloned out of the store, so a single
//! request resolves against one consistent view of the game. Global IDs
//! are minted here via the lib codec.

use async_graphql::connection::{Connection, Edge, OpaqueCursor, query};
use async_graphql::{ID, Interface, Object, Result};

use treasurehunt::{Game, HidingSpot, encode_global_id};

/// Any entity refetchable through the root `node(id)` field.
///
/// Explicit tagged dispatch: the execution engine picks the concrete
/// object type by matching on this enum, not by runtime inspection.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The ID of an object"))]
pub enum Node {
    Game(GameNode),
    HidingSpot(HidingSpotNode),
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// A treasure search game.
pub struct GameNode {
    game: Game,
}

impl GameNode {
    pub fn new(game: Game) -> Self {
        Self { game }
    }
}

#[Object(name = "Game")]
impl GameNode {
    async fn id(&self) -> ID {
        ID(encode_global_id("Game", &self.game.id))
    }

    /// Places where treasure might be hidden.
    ///
    /// Forward-paginated connection. Cursors are opaque and encode the
    /// positional offset; the spot ordering is fixed at creation, so a
    /// cursor stays valid for the lifetime of the game.
    async fn hiding_spots(
        &self,
        after: Option<String>,
        first: Option<i32>,
    ) -> Result<Connection<OpaqueCursor<usize>, HidingSpotNode>> {
        let spots = &self.game.hiding_spots;
        query(
            after,
            None,
            first,
            None,
            |after: Option<OpaqueCursor<usize>>, _before, first, _last| async move {
                let start = match after {
                    Some(OpaqueCursor(i)) => (i + 1).min(spots.len()),
                    None => 0,
                };
                let end = match first {
                    Some(n) => (start + n).min(spots.len()),
                    None => spots.len(),
                };
                let mut connection = Connection::new(start > 0, end < spots.len());
                connection
                    .edges
                    .extend(spots[start..end].iter().enumerate().map(|(i, spot)| {
                        Edge::new(OpaqueCursor(start + i), HidingSpotNode::new(spot.clone()))
                    }));
                Ok::<_, async_graphql::Error>(connection)
            },
        )
        .await
    }

    /// The number of turns a player has left to find the treasure.
    async fn turns_remaining(&self) -> i32 {
        self.game.turns_remaining
    }
}

// ---------------------------------------------------------------------------
// HidingSpot
// ---------------------------------------------------------------------------

/// A place where you might find treasure.
pub struct HidingSpotNode {
    spot: HidingSpot,
}

impl HidingSpotNode {
    pub fn new(spot: HidingSpot) -> Self {
        Self { spot }
    }
}

#[Object(name = "HidingSpot")]
impl HidingSpotNode {
    async fn id(&self) -> ID {
        ID(encode_global_id("HidingSpot", &self.spot.id))
    }

    /// True if this spot has already been checked for treasure.
    async fn has_been_checked(&self) -> bool {
        self.spot.has_been_checked
    }

    /// True if this hiding spot holds treasure.
    ///
    /// Null until the spot has been checked: the treasure location is
    /// secret, clients only learn it by spending a turn.
    async fn has_treasure(&self) -> Option<bool> {
        self.spot.has_been_checked.then_some(self.spot.has_treasure)
    }
}
