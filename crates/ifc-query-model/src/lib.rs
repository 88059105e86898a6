// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Query Model - Shared types, schema registry and store traits
//!
//! This crate provides the abstractions the property and spatial-structure
//! query engine is written against. The engine never parses files itself; it
//! talks to a [`ModelStore`] for entities and inverse relationships and to a
//! [`TypeRegistry`] for type names, supertype chains and attribute names.
//!
//! # Architecture
//!
//! - [`ModelStore`] - Async access to the entities of open models, addressed by [`ModelHandle`]
//! - [`TypeRegistry`] - Type code ↔ name lookup, ancestor sets, attribute schemas
//! - [`SchemaRegistry`] - Static IFC4 registry backed by the [`IfcType`] table
//! - [`ExpandedEntity`] / [`SpatialNode`] - Query results, serializable with serde
//!
//! # Example
//!
//! ```ignore
//! use ifc_query_model::{codes, SchemaRegistry, TypeRegistry};
//!
//! let registry = SchemaRegistry::ifc4();
//! assert_eq!(registry.type_name_of(codes::IFCWALL), Some("IFCWALL"));
//! assert!(registry.ancestors_of(codes::IFCWALLSTANDARDCASE)
//!     .unwrap()
//!     .contains(&codes::IFCWALL));
//! ```

pub mod error;
pub mod properties;
pub mod registry;
pub mod schema;
pub mod spatial;
pub mod store;
pub mod types;

// Re-export all public types
pub use error::*;
pub use properties::*;
pub use registry::*;
pub use schema::{codes, IfcType};
pub use spatial::*;
pub use store::*;
pub use types::*;
