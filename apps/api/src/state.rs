use std::sync::Arc;

use crate::completion::CompletionProvider;
use crate::config::Config;
use crate::styles::StyleTable;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion provider. Production: OpenAiClient. Tests swap in stubs.
    pub provider: Arc<dyn CompletionProvider>,
    /// Immutable company → style-hint table, built once at startup.
    pub styles: Arc<StyleTable>,
    #[allow(dead_code)]
    pub config: Config,
}
