use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::resume::persistence::KeyValueStore;
use crate::resume::store::ResumeStore;
use crate::review::score::ScoreRules;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Commands take the write lock.
    pub store: Arc<RwLock<ResumeStore>>,
    /// Backing store for explicit save and reload.
    pub kv: Arc<dyn KeyValueStore>,
    /// Pluggable converter. Default: CommandPdfExporter over `PDF_CONVERTER`.
    pub exporter: Arc<dyn PdfExporter>,
    pub config: Config,
    pub score_rules: Arc<ScoreRules>,
}

impl AppState {
    pub fn new(
        store: ResumeStore,
        kv: Arc<dyn KeyValueStore>,
        exporter: Arc<dyn PdfExporter>,
        config: Config,
    ) -> Self {
        let score_rules = Arc::new(config.score_rules());
        Self {
            store: Arc::new(RwLock::new(store)),
            kv,
            exporter,
            config,
            score_rules,
        }
    }
}
