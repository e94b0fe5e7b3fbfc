use thiserror::Error;

use crate::projection::ProjectionError;
use crate::types::UserId;

/// Crate-wide error taxonomy. Every kind propagates to the embedding
/// request boundary undecorated: no retries, no suppression, and a failed
/// bulk mutation leaves nothing half-applied.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A referenced id did not resolve; names the id so the boundary can
    /// report which reference was broken
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    /// Caller's role or ownership is insufficient for the mutation
    #[error("user {user} may not modify fixed {kind} '{name}'")]
    Authorization { user: UserId, kind: &'static str, name: String },

    /// Malformed bulk-operation input
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl CatalogError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        CatalogError::NotFound { kind, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }
}
