#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary {dictionary} unavailable: {reason}")]
    SourceUnavailable { dictionary: String, reason: String },

    #[error("Failed to decode {file} in {dictionary}: {source}")]
    Decode {
        dictionary: String,
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn unavailable(dictionary: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::SourceUnavailable {
            dictionary: dictionary.into(),
            reason: reason.into(),
        }
    }
}
