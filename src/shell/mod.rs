// Composition root.
//
// Responsibilities
// - Read settings from the environment and optional config file.
// - Instantiate the in-memory user store and the token issuer.
// - Wire them into the use case handlers and expose HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
