use std::sync::Arc;

use crate::config::Config;
use crate::decoder::{DefaultDecoder, DocumentDecoder};
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: DefaultDecoder (pdf-extract + UTF-8 text).
    pub decoder: Arc<dyn DocumentDecoder>,
    /// Immutable pipeline configuration shared by every request.
    pub extractor: Arc<ResumeExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            decoder: Arc::new(DefaultDecoder),
            extractor: Arc::new(ResumeExtractor::default()),
        }
    }
}
