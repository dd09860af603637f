use std::sync::Arc;

use crate::board::SessionStore;
use crate::config::Config;
use crate::render::LogoResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Open boards plus the immutable listing set they filter.
    pub sessions: Arc<SessionStore>,
    /// Picks image or initial logos at render time.
    pub logos: LogoResolver,
}
