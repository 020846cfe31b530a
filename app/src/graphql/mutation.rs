//! Root mutation type: the Relay client-mutation-ID check mutation.

use std::sync::Arc;

use async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject};

use treasurehunt::decode_global_id;

use super::types::{GameNode, HidingSpotNode};
use crate::state::GameStore;

#[derive(InputObject)]
pub struct CheckHidingSpotForTreasureInput {
    pub client_mutation_id: Option<String>,
    /// Global ID of the hiding spot to check.
    pub id: ID,
}

#[derive(SimpleObject)]
pub struct CheckHidingSpotForTreasurePayload {
    pub client_mutation_id: Option<String>,
    /// The spot that was checked, re-resolved after the mutation. Null
    /// if the ID named no known spot.
    pub hiding_spot: Option<HidingSpotNode>,
    pub game: GameNode,
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Check a hiding spot for treasure, consuming a turn.
    ///
    /// Checking an already-checked spot, an unknown spot, or any spot of
    /// a won game changes nothing. `clientMutationId` round-trips
    /// unchanged so the caller can correlate request and response.
    async fn check_hiding_spot_for_treasure(
        &self,
        ctx: &Context<'_>,
        input: CheckHidingSpotForTreasureInput,
    ) -> Result<CheckHidingSpotForTreasurePayload> {
        let store = ctx.data::<Arc<GameStore>>()?;
        // Only the local part matters; a wrong type tag simply names
        // no spot and falls under the no-op policy.
        let (_, local_id) = decode_global_id(&input.id)?;
        tracing::debug!("checking hiding spot {local_id}");
        store.check_hiding_spot_for_treasure(&local_id)?;
        Ok(CheckHidingSpotForTreasurePayload {
            client_mutation_id: input.client_mutation_id,
            hiding_spot: store.hiding_spot(&local_id)?.map(HidingSpotNode::new),
            game: GameNode::new(store.current()?),
        })
    }
}
