use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown meal slot: {0}")]
    UnknownSlot(String),

    #[error("Unknown diet type: {0}")]
    UnknownDiet(String),

    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PlanError {
    /// Whether this error is a request rejection (malformed input),
    /// as opposed to an internal or IO failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PlanError::InvalidInput(_) | PlanError::UnknownSlot(_) | PlanError::UnknownDiet(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
