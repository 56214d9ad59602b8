// Composition root for the appointments bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and the datetime parser.
// - Wire them into the use case handlers.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
