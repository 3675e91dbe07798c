use crate::config::Config;
use crate::hbdi::pipeline::HbdiPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: HbdiPipeline,
    pub config: Config,
}
