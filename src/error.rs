use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlateError {
    #[error("{0} '{1}' not found")]
    NotFound(&'static str, String),

    #[error("{0}")]
    Validation(String),

    #[error("invalid media kind '{0}', expected 'image' or 'video'")]
    InvalidMediaKind(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("editor exited with code {0}")]
    EditorFailed(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SlateError>;
