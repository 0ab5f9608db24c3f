// Copyright 2025 Cowboy AI, LLC.

//! Error types for repository and mapper operations

use std::fmt::Display;

use thiserror::Error;

/// Errors raised by a repository backend while serving a CRUD operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrudError {
    /// The requested id has no corresponding item
    #[error("Item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The payload failed backend-side validation
    #[error("Invalid payload: {reason}")]
    InvalidPayload {
        /// Why the backend rejected the payload
        reason: String,
    },

    /// Any other backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Errors raised while mapping between types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    /// The mapper has no reverse mapping
    #[error("Reverse mapping not supported by {mapper}")]
    NotSupported {
        /// Name of the mapper that was asked to reverse
        mapper: String,
    },

    /// The input has a shape the mapper cannot handle
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the mapper accepts
        expected: String,
        /// What it was given
        found: String,
    },

    /// Canonical arguments do not fit the constructor they were applied to
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Error returned by every repository operation.
///
/// Both families are wrapped transparently: the error a backend or a mapper
/// produced is the error the caller matches on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A CRUD failure from a backend
    #[error(transparent)]
    Crud(#[from] CrudError),

    /// A mapper failure from an adapter layer
    #[error(transparent)]
    Mapping(#[from] MapperError),
}

/// Result type for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for MapperError {
    fn from(err: serde_json::Error) -> Self {
        MapperError::Serialization(err.to_string())
    }
}

impl MapperError {
    /// Create a `NotSupported` error for the named mapper
    pub fn not_supported(mapper: impl Into<String>) -> Self {
        MapperError::NotSupported {
            mapper: mapper.into(),
        }
    }

    /// Create a `TypeMismatch` error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        MapperError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl RepositoryError {
    /// Create an `ItemNotFound` error for the given id
    pub fn not_found(id: impl Display) -> Self {
        CrudError::ItemNotFound { id: id.to_string() }.into()
    }

    /// Create an `InvalidPayload` error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        CrudError::InvalidPayload {
            reason: reason.into(),
        }
        .into()
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Crud(CrudError::ItemNotFound { .. }))
    }

    /// Check if this is a payload validation failure
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, RepositoryError::Crud(CrudError::InvalidPayload { .. }))
    }

    /// Check if this error came from a mapper rather than a backend
    pub fn is_mapping_error(&self) -> bool {
        matches!(self, RepositoryError::Mapping(_))
    }
}
