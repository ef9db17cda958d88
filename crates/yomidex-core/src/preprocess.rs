use unicode_normalization::UnicodeNormalization;

/// Cleans up query text before an exact lookup
pub trait Preprocessor: Send + Sync {
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // NFKC folds half-width katakana and full-width latin
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct NfkcPreprocessor;
impl Preprocessor for NfkcPreprocessor {}

/// Leaves text untouched apart from trimming
pub struct Passthrough;
impl Preprocessor for Passthrough {
    fn process(&self, text: &str) -> String {
        text.trim().to_string()
    }
}
