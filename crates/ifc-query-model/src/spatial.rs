// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial structure tree

use crate::{AttributeMap, EntityId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Node in the spatial hierarchy tree
///
/// The tree typically follows: Project → Site → Building → Storey → Elements.
/// Trees are built fresh for every query and own their nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialNode {
    /// Entity ID
    pub express_id: EntityId,
    /// Upper-case IFC type name (e.g., "IFCBUILDINGSTOREY")
    pub type_name: String,
    /// Child nodes, aggregated parts before contained elements
    pub children: Vec<SpatialNode>,
    /// Direct attributes when the tree was built with properties
    pub properties: Option<AttributeMap>,
}

impl SpatialNode {
    /// Create a new spatial node
    pub fn new(express_id: EntityId, type_name: impl Into<String>) -> Self {
        Self {
            express_id,
            type_name: type_name.into(),
            children: Vec::new(),
            properties: None,
        }
    }

    /// Find a node by ID (recursive)
    pub fn find(&self, id: EntityId) -> Option<&SpatialNode> {
        self.iter().find(|node| node.express_id == id)
    }

    /// Iterate all nodes (depth-first)
    pub fn iter(&self) -> SpatialNodeIter<'_> {
        SpatialNodeIter { stack: vec![self] }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Ids of the direct children
    pub fn child_ids(&self) -> Vec<EntityId> {
        self.children.iter().map(|c| c.express_id).collect()
    }
}

/// Iterator over spatial nodes (depth-first)
pub struct SpatialNodeIter<'a> {
    stack: Vec<&'a SpatialNode>,
}

impl<'a> Iterator for SpatialNodeIter<'a> {
    type Item = &'a SpatialNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Add children in reverse order so first child is processed first
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

const RESERVED_KEYS: [&str; 3] = ["expressID", "type", "children"];

impl Serialize for SpatialNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("expressID", &self.express_id.0)?;
        map.serialize_entry("type", &self.type_name)?;
        map.serialize_entry("children", &self.children)?;
        if let Some(properties) = &self.properties {
            // Node fields win over attributes of the same name
            for (name, field) in properties.iter() {
                if !RESERVED_KEYS.contains(&name) {
                    map.serialize_entry(name, field)?;
                }
            }
        }
        map.end()
    }
}
