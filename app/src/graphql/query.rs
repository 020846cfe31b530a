//! Root query type: `game` and the Relay `node(id)` refetch field.

use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use treasurehunt::decode_global_id;

use super::types::{GameNode, HidingSpotNode, Node};
use crate::state::GameStore;

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Fetch any entity by its global ID.
    ///
    /// A malformed ID is a field-level error; an unknown type name or an
    /// unknown hiding spot resolves to null (soft not-found, by
    /// contract).
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let store = ctx.data::<Arc<GameStore>>()?;
        let (type_name, local_id) = decode_global_id(&id)?;
        match type_name.as_str() {
            "Game" => Ok(Some(Node::Game(GameNode::new(store.current()?)))),
            "HidingSpot" => Ok(store
                .hiding_spot(&local_id)?
                .map(|spot| Node::HidingSpot(HidingSpotNode::new(spot)))),
            _ => Ok(None),
        }
    }

    /// The current game. There is exactly one, shared by all clients.
    async fn game(&self, ctx: &Context<'_>) -> Result<GameNode> {
        let store = ctx.data::<Arc<GameStore>>()?;
        Ok(GameNode::new(store.current()?))
    }
}
