use std::sync::Arc;

use anyhow::Context;
use yomidex_config::Config;
use yomidex_core::{
    LoadSummary, NfkcPreprocessor, Passthrough, Preprocessor, RecordSource, SharedYomichan,
};
use yomidex_io::BankSource;

pub struct AppState {
    pub config: Config,
    pub index: SharedYomichan,
    pub source: Arc<dyn RecordSource>,
    preprocessor: Box<dyn Preprocessor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source: Arc<dyn RecordSource> = match &config.dictionary.root {
            Some(root) => Arc::new(BankSource::with_root(root)),
            None => Arc::new(BankSource::new()),
        };
        Self::with_source(config, source)
    }

    pub fn with_source(config: Config, source: Arc<dyn RecordSource>) -> Self {
        let preprocessor: Box<dyn Preprocessor> = if config.dictionary.normalize_queries {
            Box::new(NfkcPreprocessor)
        } else {
            Box::new(Passthrough)
        };

        Self {
            config,
            index: SharedYomichan::default(),
            source,
            preprocessor,
        }
    }

    /// Query text as it should be looked up
    pub fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    /// Load every configured dictionary, in order
    pub async fn load_configured(&self) -> anyhow::Result<Vec<LoadSummary>> {
        let mut summaries = Vec::with_capacity(self.config.dictionary.paths.len());

        for path in &self.config.dictionary.paths {
            let summary = self
                .index
                .load(self.source.as_ref(), path)
                .await
                .with_context(|| format!("failed to load dictionary {path}"))?;
            tracing::info!("Loaded {}", summary);
            summaries.push(summary);
        }

        Ok(summaries)
    }
}
