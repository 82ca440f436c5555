//! HTTP server for the butterfly ratings API.
//!
//! Exposes butterflies, users, and ratings over JSON/HTTP. Every request
//! gets the shared [`DocumentStore`](bfly_store::DocumentStore) attached by
//! middleware before its handler runs.

pub mod config;
pub mod context;
pub mod error;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ServerConfig;
pub use context::{attach_store, retrieve_store, Db};
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use router::build_router;
pub use server::ButterflyServer;
pub use state::AppState;
