use std::sync::Arc;

use crate::config::Config;
use crate::interview::service::InterviewService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Session state machine over the configured `SessionStore` backend.
    pub interviews: Arc<InterviewService>,
}
