use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("unsupported language '{language}': no phonemization backend registered")]
    UnsupportedLanguage { language: String },
    #[error("tokenization failed: {message}")]
    Tokenization { message: String },
    #[error("transcription failed while {context}: {message}")]
    Transcription {
        context: &'static str,
        message: String,
    },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl CompareError {
    pub(crate) fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub(crate) fn tokenization(message: impl Into<String>) -> Self {
        Self::Tokenization {
            message: message.into(),
        }
    }

    pub fn transcription(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Transcription {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
