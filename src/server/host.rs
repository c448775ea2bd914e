//! Server host for transport-agnostic API exposure
//!
//! The host holds all state needed to expose the API. It is agnostic to the
//! transport and serves as the single source of truth for the application
//! state.

use crate::core::auth::AuthProvider;
use crate::core::service::ContaService;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::new(Arc::new(InMemoryContaService::new()), Arc::new(auth));
/// let app = RestExposure::build_router(Arc::new(host))?;
/// ```
#[derive(Clone)]
pub struct ServerHost {
    /// Record store backing every `/contas` route
    pub service: Arc<dyn ContaService>,

    /// Token check applied to every request
    pub auth: Arc<dyn AuthProvider>,
}

impl ServerHost {
    /// Build the host from its components
    pub fn new(service: Arc<dyn ContaService>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { service, auth }
    }
}
