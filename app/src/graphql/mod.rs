//! GraphQL layer: Relay-style schema over the game store.
//!
//! `async-graphql` is the execution engine (parsing, validation,
//! execution); this module only declares the types and wires them to
//! `GameStore` operations. Mounted on axum at `/graphql` (POST for
//! queries/mutations, GET for the GraphiQL playground).

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::state::GameStore;
use mutation::MutationRoot;
use query::QueryRoot;

/// The full GraphQL schema type.
pub type TreasurehuntSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the game store injected as context data.
pub fn build_schema(store: Arc<GameStore>) -> TreasurehuntSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Build the axum router serving the GraphQL endpoint.
pub fn router(schema: TreasurehuntSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

/// POST /graphql
async fn graphql_handler(
    State(schema): State<TreasurehuntSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET /graphql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
