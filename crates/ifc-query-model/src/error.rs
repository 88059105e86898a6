// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for loading models and resolving queries

use crate::{EntityId, ModelHandle, TypeCode};
use thiserror::Error;

/// Result type alias for load operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Result type alias for query operations
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while loading an IFC file into a store
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid IFC file format
    #[error("Invalid IFC format: {0}")]
    InvalidFormat(String),

    /// Failed to parse header section
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Failed to parse entity
    #[error("Failed to parse entity {0}: {1}")]
    EntityParse(EntityId, String),

    /// Two entity definitions share one express id
    #[error("Duplicate definition of entity {0}")]
    DuplicateEntity(EntityId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        ParseError::InvalidFormat(msg.into())
    }

    /// Create a new entity parse error
    pub fn entity_parse(id: EntityId, msg: impl Into<String>) -> Self {
        ParseError::EntityParse(id, msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ParseError::Other(msg.into())
    }
}

/// Errors surfaced by query operations
///
/// Every variant is fatal to the call that produced it only. The model stays
/// open and other queries against it keep working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Handle does not refer to an open model
    #[error("Model {0} is not open")]
    ModelNotFound(ModelHandle),

    /// Entity id absent from the model
    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    /// Type code not present in the type registry
    #[error("Unknown IFC type code {0}")]
    TypeUnknown(TypeCode),

    /// Type name not present in the type registry
    #[error("Unknown IFC type name '{0}'")]
    TypeNameUnknown(String),

    /// Model has no project entity to root the spatial structure
    #[error("No project entity found to root the spatial structure")]
    RootNotFound,

    /// Model has more than one project entity
    #[error("Spatial structure root is ambiguous: {} project entities", .0.len())]
    AmbiguousRoot(Vec<EntityId>),
}
