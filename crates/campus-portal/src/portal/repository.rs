use chrono::{DateTime, Utc};

use super::insight::InteractionRecord;
use super::visibility::{ContentKind, ContentRecord};

/// Storage abstraction for the interaction log so the service layer can be
/// exercised against in-memory fakes.
pub trait InteractionStore: Send + Sync {
    fn record(&self, interaction: InteractionRecord) -> Result<(), RepositoryError>;
    /// Interactions at or after `since`, in no particular order; scoring is
    /// order-independent so stores need not sort.
    fn interactions_since(&self, since: DateTime<Utc>)
        -> Result<Vec<InteractionRecord>, RepositoryError>;
}

/// Read access to the announcement/service catalog. Records come back in
/// the store's presentation order, which the visibility filter preserves.
pub trait ContentStore: Send + Sync {
    fn catalog(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, RepositoryError>;
}

/// Error enumeration for store failures. A failed fetch surfaces here; it is
/// never smuggled to the engines as an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook to the hosted language-model chat API. Stateless
/// prompt-and-forward; prompt construction lives with the adapter.
pub trait ExplanationProvider: Send + Sync {
    fn explain(&self, question: &str) -> Result<String, ExplainError>;
}

/// Explanation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("explanation service unavailable: {0}")]
    Unavailable(String),
    #[error("explanation service rejected the request: {0}")]
    Rejected(String),
}
