//! Shared application state handed to every handler and middleware.

use std::sync::Arc;

use dkt_db::service::TaskService;

use crate::identity::IdentityClient;
use crate::middleware::rate_limit::RateLimiter;

/// Everything the request path needs, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    service: Arc<TaskService>,
    identity: IdentityClient,
    limiter: Arc<RateLimiter>,
}

impl AppState {
    #[must_use]
    pub fn new(service: TaskService, identity: IdentityClient, limiter: RateLimiter) -> Self {
        Self {
            service: Arc::new(service),
            identity,
            limiter: Arc::new(limiter),
        }
    }

    #[must_use]
    pub fn service(&self) -> &TaskService {
        &self.service
    }

    #[must_use]
    pub const fn identity(&self) -> &IdentityClient {
        &self.identity
    }

    #[must_use]
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}
