use thiserror::Error;
use crate::errors::ProcessingError;

#[derive(Error, Debug)]
#[error("error in communication with meteoblue: {0}")]
pub struct MeteoblueError(pub String);
impl From<ureq::Error> for MeteoblueError {
    fn from(e: ureq::Error) -> MeteoblueError {
        MeteoblueError(format!("http request error: {}", e))
    }
}
impl From<serde_json::Error> for MeteoblueError {
    fn from(e: serde_json::Error) -> MeteoblueError {
        MeteoblueError(format!("json document error: {}", e))
    }
}
impl From<chrono::ParseError> for MeteoblueError {
    fn from(e: chrono::ParseError) -> MeteoblueError {
        MeteoblueError(format!("timestamp parse error: {}", e))
    }
}
impl From<ProcessingError> for MeteoblueError {
    fn from(e: ProcessingError) -> MeteoblueError {
        MeteoblueError(e.to_string())
    }
}
