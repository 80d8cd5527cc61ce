use shared::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("object {0} not found")]
    NotFound(ObjectId),
    #[error("object {0} is locked")]
    Locked(ObjectId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid OBJ at line {line}: {message}")]
    ObjParse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, StudioError>;
