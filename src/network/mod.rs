//! Network Module
//!
//! HTTP server and request handlers.
//!
//! ## Architecture
//! - axum router on a tokio runtime, one task per request
//! - Handlers decode the request into a `Command` and run it on the shared `Engine`
//! - Errors map to status codes with an empty body

mod server;
mod handlers;

pub use server::{router, Server};
