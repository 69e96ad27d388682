//! Error types.

use thiserror::Error;

/// Everything that can abort a documentation run.
///
/// Sparse or malformed comment records never produce an error; they degrade
/// to empty values while building entries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to compile template: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to serialize document model: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("render failed: {0:#}")]
    Render(#[source] anyhow::Error),

    #[error("unknown format: {0}. Use markdown, html, or json")]
    UnknownFormat(String),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),
}

impl Error {
    /// Classify a renderer failure, keeping template errors distinct.
    pub(crate) fn from_render(err: anyhow::Error) -> Self {
        match err.downcast::<TemplateError>() {
            Ok(template) => Error::Template(template),
            Err(other) => Error::Render(other),
        }
    }
}

/// Page template problems, raised before any output is produced.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),

    #[error("empty placeholder at byte {0}")]
    Empty(usize),

    #[error("unknown placeholder: ${{{0}}}")]
    Unknown(String),

    #[error("template has no ${{content}} placeholder")]
    MissingContent,

    #[error("failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
