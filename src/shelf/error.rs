use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: {0}")]
    BookNotFound(u64),

    #[error("Invalid field: {0} (expected one of id, name, description, inStock)")]
    InvalidField(String),

    #[error("Invalid order: {0} (expected asc or desc)")]
    InvalidOrder(String),

    #[error("{0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("No book ids left to assign")]
    IdsExhausted,
}

impl ShelfError {
    /// True when the error came from writing or reading the data or history files.
    /// The in-memory catalog is still consistent after one of these.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            ShelfError::Io(_) | ShelfError::Serialization(_) | ShelfError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
