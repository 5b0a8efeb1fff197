use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScoreboardError {
    #[error("decode error: {0}")]
    Decode(String),
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("label error: {0}")]
    Labels(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ScoreboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<std::io::Error> for ScoreboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Other(e.to_string())
    }
}

impl From<String> for ScoreboardError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for ScoreboardError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
