use crate::domain::errors::DomainError;
use thiserror::Error;

pub type AllocationResult<T> = Result<T, AllocationError>;

#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("`{display_name}` produced no usable slug in {scope}")]
    EmptyBasis { scope: String, display_name: String },

    #[error("no free slug for `{base}` in {scope} after {attempts} attempts")]
    AttemptsExceeded {
        scope: String,
        base: String,
        attempts: u32,
    },

    #[error("slug store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("slug `{slug}` is already taken in {scope}")]
    UniquenessConflict { scope: String, slug: String },

    /// The store refused the write for a reason unrelated to slug uniqueness.
    #[error(transparent)]
    Rejected(DomainError),
}

impl From<DomainError> for AllocationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Persistence(msg) => Self::StoreUnavailable(msg),
            other => Self::Rejected(other),
        }
    }
}
