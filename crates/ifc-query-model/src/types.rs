// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for IFC data representation
//!
//! This module defines the identifiers and decoded values shared between the
//! store implementations and the query engine.

use crate::IfcType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe entity identifier
///
/// Wraps the raw IFC entity ID (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Numeric IFC type code
///
/// Codes are the CRC-32 of the upper-case type name, as used by the common
/// IFC toolkits, so they stay stable across schema versions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeCode(pub u32);

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TypeCode {
    fn from(code: u32) -> Self {
        TypeCode(code)
    }
}

/// Handle to a model opened in a [`crate::ModelStore`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ModelHandle(pub u32);

impl fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded attribute value
///
/// Represents any value that can appear in an IFC entity's attribute list.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AttributeValue {
    /// Null value ($)
    #[default]
    Null,
    /// Derived value (*)
    Derived,
    /// Entity reference (#123)
    EntityRef(EntityId),
    /// Boolean value (.T. / .F.)
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Enumeration value (.VALUE.)
    Enum(String),
    /// List of values
    List(Vec<AttributeValue>),
    /// Typed value like IFCLABEL('text')
    TypedValue(String, Vec<AttributeValue>),
}

impl AttributeValue {
    /// Try to get as entity reference
    pub fn as_entity_ref(&self) -> Option<EntityId> {
        match self {
            AttributeValue::EntityRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_string(),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_float(),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// All entity references held by this value
    ///
    /// Covers a single reference, a list of references and a list wrapped in
    /// a typed value. Nested lists are walked in order.
    pub fn entity_refs(&self) -> Vec<EntityId> {
        let mut out = Vec::new();
        self.collect_refs(&mut out);
        out
    }

    fn collect_refs(&self, out: &mut Vec<EntityId>) {
        match self {
            AttributeValue::EntityRef(id) => out.push(*id),
            AttributeValue::List(items) => items.iter().for_each(|v| v.collect_refs(out)),
            AttributeValue::TypedValue(_, args) => args.iter().for_each(|v| v.collect_refs(out)),
            _ => {}
        }
    }
}

/// Decoded IFC entity
///
/// Represents a fully decoded IFC entity with its ID, type, and attribute values.
#[derive(Clone, Debug)]
pub struct DecodedEntity {
    /// Entity ID
    pub id: EntityId,
    /// Entity type
    pub ifc_type: IfcType,
    /// Attribute values in order
    pub attributes: Vec<AttributeValue>,
}

impl DecodedEntity {
    /// Get attribute at index
    pub fn get(&self, index: usize) -> Option<&AttributeValue> {
        self.attributes.get(index)
    }

    /// Get entity reference at index
    pub fn get_ref(&self, index: usize) -> Option<EntityId> {
        self.get(index).and_then(|v| v.as_entity_ref())
    }

    /// Get string at index
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_string())
    }

    /// Get every entity reference held at index, empty when absent
    pub fn get_refs(&self, index: usize) -> Vec<EntityId> {
        self.get(index).map(|v| v.entity_refs()).unwrap_or_default()
    }
}

/// Model metadata extracted from IFC header
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModelMetadata {
    /// IFC schema version (e.g., "IFC2X3", "IFC4", "IFC4X3")
    pub schema_version: String,
    /// Originating system (CAD application)
    pub originating_system: Option<String>,
    /// Preprocessor version
    pub preprocessor_version: Option<String>,
    /// File name from header
    pub file_name: Option<String>,
    /// File description
    pub file_description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Organization
    pub organization: Option<String>,
    /// Timestamp
    pub timestamp: Option<String>,
    /// Number of entity instances in the data section
    pub entity_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_refs_flattens_lists() {
        let value = AttributeValue::List(vec![
            AttributeValue::EntityRef(EntityId(3)),
            AttributeValue::Null,
            AttributeValue::List(vec![AttributeValue::EntityRef(EntityId(7))]),
        ]);
        assert_eq!(value.entity_refs(), vec![EntityId(3), EntityId(7)]);
    }

    #[test]
    fn test_entity_refs_in_typed_value() {
        let value = AttributeValue::TypedValue(
            "IFCRELATEDOBJECTS".to_string(),
            vec![AttributeValue::List(vec![AttributeValue::EntityRef(EntityId(9))])],
        );
        assert_eq!(value.entity_refs(), vec![EntityId(9)]);
        assert!(AttributeValue::String("x".into()).entity_refs().is_empty());
    }

    #[test]
    fn test_decoded_entity_accessors() {
        let entity = DecodedEntity {
            id: EntityId(1),
            ifc_type: IfcType::IfcWall,
            attributes: vec![
                AttributeValue::String("guid".into()),
                AttributeValue::EntityRef(EntityId(2)),
                AttributeValue::TypedValue(
                    "IFCLABEL".into(),
                    vec![AttributeValue::String("Wall".into())],
                ),
            ],
        };
        assert_eq!(entity.get_string(0), Some("guid"));
        assert_eq!(entity.get_ref(1), Some(EntityId(2)));
        assert_eq!(entity.get_string(2), Some("Wall"));
        assert!(entity.get_refs(5).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityId(12).to_string(), "#12");
        assert_eq!(TypeCode(2391406946).to_string(), "2391406946");
    }
}
