use std::{fmt::Display, path::Path};

use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Inconsistent(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found() -> Self { Self::NotFound("Convidado não encontrado".into()) }

    pub fn conflict() -> Self { Self::Conflict("Código já existente".into()) }

    pub fn inconsistent() -> Self { Self::Inconsistent("Código inconsistente".into()) }

    pub fn storage(path: &Path, err: impl Display) -> Self {
        Self::Storage(format!("{}: {err}", path.display()))
    }

    pub fn db(err: impl Display) -> Self { Self::Storage(err.to_string()) }

    /// Whether the caller is at fault (4xx) rather than the backend (5xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::Model(ModelError::Decode(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::db(e) }
}
