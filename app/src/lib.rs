//! Server internals for the treasure hunt demo.
//!
//! Split from the binary so integration tests can build the schema
//! against an isolated `GameStore` without going over HTTP.

pub mod graphql;
pub mod state;
