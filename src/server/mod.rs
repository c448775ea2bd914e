//! Server module for building the contas HTTP server
//!
//! `ServerBuilder` wires a record store and an auth provider into a
//! `ServerHost`, which `RestExposure` turns into an Axum router.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
