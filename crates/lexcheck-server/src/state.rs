use std::sync::Arc;

use lexcheck_ai::Analyzer;
use lexcheck_core::LawCorpus;
use lexcheck_sync::EurLexClient;

/// Process-scoped dependencies shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<LawCorpus>,
    pub analyzer: Arc<Analyzer>,
    pub eurlex: Arc<EurLexClient>,
    /// Expose internal error details in 500 responses.
    pub dev_mode: bool,
}

impl AppState {
    pub fn new(corpus: LawCorpus, analyzer: Analyzer, eurlex: EurLexClient) -> Self {
        Self {
            corpus: Arc::new(corpus),
            analyzer: Arc::new(analyzer),
            eurlex: Arc::new(eurlex),
            dev_mode: false,
        }
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}
