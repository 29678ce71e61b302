use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("TelegramError::Http: {0}")]
    Http(String),
    #[error("TelegramError::Document: {0}")]
    Document(String),
    #[error("TelegramError::Api: {0}")]
    Api(String),
}

impl From<ureq::Error> for TelegramError {
    fn from(e: ureq::Error) -> Self {
        TelegramError::Http(e.to_string())
    }
}
impl From<serde_json::Error> for TelegramError {
    fn from(e: serde_json::Error) -> Self {
        TelegramError::Document(e.to_string())
    }
}
