// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Expanded entity records
//!
//! An [`ExpandedEntity`] is an entity's attribute slots keyed by their schema
//! names. Records serialize to the flat JSON objects consumers expect:
//!
//! ```json
//! { "expressID": 1000, "type": "IFCWALLSTANDARDCASE",
//!   "GlobalId": { "value": "2O2Fr$t4X7Zf8NOew3FLOH", "type": "string", "label": "IFCGLOBALLYUNIQUEID" },
//!   "OwnerHistory": { "type": "reference", "value": 41 },
//!   "Tag": null }
//! ```

use crate::{EntityId, TypeCode};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Primitive attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveValue {
    /// Text
    String(String),
    /// Enumeration token without the surrounding dots
    Enum(String),
    /// Boolean (.T. / .F.)
    Boolean(bool),
    /// Integer
    Integer(i64),
    /// Real number
    Real(f64),
}

impl PrimitiveValue {
    /// Kind tag used in serialized records
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveValue::String(_) => "string",
            PrimitiveValue::Enum(_) => "enum",
            PrimitiveValue::Boolean(_) => "boolean",
            PrimitiveValue::Integer(_) => "integer",
            PrimitiveValue::Real(_) => "real",
        }
    }
}

impl Serialize for PrimitiveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrimitiveValue::String(s) | PrimitiveValue::Enum(s) => serializer.serialize_str(s),
            PrimitiveValue::Boolean(b) => serializer.serialize_bool(*b),
            PrimitiveValue::Integer(i) => serializer.serialize_i64(*i),
            PrimitiveValue::Real(f) => serializer.serialize_f64(*f),
        }
    }
}

/// Primitive value with the wrapper type it was declared with, if any
///
/// `IFCLABEL('Wall')` becomes a string value labelled `IFCLABEL`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedValue {
    /// The value itself
    pub value: PrimitiveValue,
    /// Wrapper type name such as `IFCLENGTHMEASURE`
    pub label: Option<String>,
}

impl TypedValue {
    /// Unwrapped value
    pub fn new(value: PrimitiveValue) -> Self {
        Self { value, label: None }
    }

    /// Value declared through a wrapper type
    pub fn labelled(value: PrimitiveValue, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// One expanded attribute slot
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeField {
    /// Not provided (`$`) or derived (`*`)
    Null,
    /// Primitive value
    Value(TypedValue),
    /// Reference left as a placeholder
    Reference(EntityId),
    /// Dereferenced entity
    Entity(Box<ExpandedEntity>),
    /// Ordered list of fields
    List(Vec<AttributeField>),
}

impl AttributeField {
    /// String or enumeration value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeField::Value(TypedValue {
                value: PrimitiveValue::String(s) | PrimitiveValue::Enum(s),
                ..
            }) => Some(s),
            _ => None,
        }
    }

    /// Numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeField::Value(TypedValue { value, .. }) => match value {
                PrimitiveValue::Real(f) => Some(*f),
                PrimitiveValue::Integer(i) => Some(*i as f64),
                _ => None,
            },
            _ => None,
        }
    }

    /// Id of a placeholder or dereferenced entity
    pub fn entity_id(&self) -> Option<EntityId> {
        match self {
            AttributeField::Reference(id) => Some(*id),
            AttributeField::Entity(entity) => Some(entity.express_id),
            _ => None,
        }
    }

    /// Dereferenced entity
    pub fn as_entity(&self) -> Option<&ExpandedEntity> {
        match self {
            AttributeField::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    /// List items
    pub fn as_list(&self) -> Option<&[AttributeField]> {
        match self {
            AttributeField::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the slot was not provided
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeField::Null)
    }
}

impl Serialize for AttributeField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttributeField::Null => serializer.serialize_none(),
            AttributeField::Value(typed) => {
                let len = if typed.label.is_some() { 3 } else { 2 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("value", &typed.value)?;
                map.serialize_entry("type", typed.value.kind())?;
                if let Some(label) = &typed.label {
                    map.serialize_entry("label", label)?;
                }
                map.end()
            }
            AttributeField::Reference(id) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "reference")?;
                map.serialize_entry("value", &id.0)?;
                map.end()
            }
            AttributeField::Entity(entity) => entity.serialize(serializer),
            AttributeField::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Attribute fields keyed by name, in schema order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeField)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set a field, replacing an existing one in place
    pub fn insert(&mut self, name: impl Into<String>, field: AttributeField) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = field,
            None => self.entries.push((name, field)),
        }
    }

    /// Field by name
    pub fn get(&self, name: &str) -> Option<&AttributeField> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, field)| field)
    }

    /// Remove a field, returning it
    pub fn remove(&mut self, name: &str) -> Option<AttributeField> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether a field is present
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeField)> {
        self.entries.iter().map(|(key, field)| (key.as_str(), field))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entity with its attribute slots expanded by name
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedEntity {
    /// Express id
    pub express_id: EntityId,
    /// Type code, `None` for types missing from the registry
    pub type_code: Option<TypeCode>,
    /// Upper-case type name
    pub type_name: String,
    /// Named attributes
    pub attributes: AttributeMap,
}

impl ExpandedEntity {
    /// Attribute by name
    pub fn get(&self, name: &str) -> Option<&AttributeField> {
        self.attributes.get(name)
    }

    /// `Name` attribute as text
    pub fn name(&self) -> Option<&str> {
        self.get("Name").and_then(AttributeField::as_str)
    }

    /// `GlobalId` attribute as text
    pub fn global_id(&self) -> Option<&str> {
        self.get("GlobalId").and_then(AttributeField::as_str)
    }
}

impl Serialize for ExpandedEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 2))?;
        map.serialize_entry("expressID", &self.express_id.0)?;
        map.serialize_entry("type", &self.type_name)?;
        for (name, field) in self.attributes.iter() {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}
