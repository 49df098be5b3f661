use std::sync::Arc;

use crate::render::RenderOptions;
use crate::router_client::SearchBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Router access. Default: `RouterClient`; tests inject an in-memory backend.
    pub backend: Arc<dyn SearchBackend>,
    pub render_options: RenderOptions,
}
