// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inverse relationship index
//!
//! Maps (relationship kind, target id) to the relationship entities whose
//! indexed slot references the target. Built once at load time.

use ifc_query_model::{DecodedEntity, EntityId, RelationshipKind};
use rustc_hash::FxHashMap;

/// Secondary index answering inverse relationship lookups
#[derive(Debug, Default)]
pub struct InverseIndex {
    entries: FxHashMap<(RelationshipKind, EntityId), Vec<EntityId>>,
}

impl InverseIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relationship entity under every target of its indexed slot
    ///
    /// Relationships must be inserted in file order for lookups to return
    /// file order.
    pub fn insert(&mut self, kind: RelationshipKind, relationship: &DecodedEntity) {
        for target in relationship.get_refs(kind.indexed_slot()) {
            let rels = self.entries.entry((kind, target)).or_default();
            // A target listed twice by one relationship is recorded once
            if rels.last() != Some(&relationship.id) {
                rels.push(relationship.id);
            }
        }
    }

    /// Relationships of `kind` referencing `target`, in insertion order
    pub fn get(&self, kind: RelationshipKind, target: EntityId) -> &[EntityId] {
        self.entries
            .get(&(kind, target))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of (kind, target) keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no relationships
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_query_model::{AttributeValue, IfcType};

    fn rel(id: u32, ifc_type: IfcType, slot4: AttributeValue, slot5: AttributeValue) -> DecodedEntity {
        DecodedEntity {
            id: EntityId(id),
            ifc_type,
            attributes: vec![
                AttributeValue::String("guid".into()),
                AttributeValue::Null,
                AttributeValue::Null,
                AttributeValue::Null,
                slot4,
                slot5,
            ],
        }
    }

    fn refs(ids: &[u32]) -> AttributeValue {
        AttributeValue::List(ids.iter().map(|id| AttributeValue::EntityRef(EntityId(*id))).collect())
    }

    #[test]
    fn test_indexes_related_objects() {
        let mut index = InverseIndex::new();
        index.insert(
            RelationshipKind::DefinesByProperties,
            &rel(10, IfcType::IfcRelDefinesByProperties, refs(&[1, 2]), AttributeValue::EntityRef(EntityId(50))),
        );
        index.insert(
            RelationshipKind::DefinesByProperties,
            &rel(11, IfcType::IfcRelDefinesByProperties, refs(&[1, 1]), AttributeValue::EntityRef(EntityId(51))),
        );

        assert_eq!(index.get(RelationshipKind::DefinesByProperties, EntityId(1)), &[EntityId(10), EntityId(11)]);
        assert_eq!(index.get(RelationshipKind::DefinesByProperties, EntityId(2)), &[EntityId(10)]);
        assert!(index.get(RelationshipKind::AssociatesMaterial, EntityId(1)).is_empty());
    }

    #[test]
    fn test_containment_is_keyed_by_structure() {
        let mut index = InverseIndex::new();
        index.insert(
            RelationshipKind::ContainedInSpatialStructure,
            &rel(
                20,
                IfcType::IfcRelContainedInSpatialStructure,
                refs(&[5, 6]),
                AttributeValue::EntityRef(EntityId(3)),
            ),
        );
        assert_eq!(index.get(RelationshipKind::ContainedInSpatialStructure, EntityId(3)), &[EntityId(20)]);
        assert!(index.get(RelationshipKind::ContainedInSpatialStructure, EntityId(5)).is_empty());
        assert_eq!(index.len(), 1);
    }
}
