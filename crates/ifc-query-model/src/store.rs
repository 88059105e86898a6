// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model store trait
//!
//! The store owns the entities of every open model. Relationships in IFC are
//! entities of their own, so the store also answers inverse lookups: given a
//! target id and a [`RelationshipKind`], which relationship entities point at it.

use crate::{codes, DecodedEntity, EntityId, ModelHandle, QueryResult, TypeCode};
use async_trait::async_trait;
use std::sync::Arc;

/// Relationship kinds resolved through inverse lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// IfcRelDefinesByProperties: objects → property set definition
    DefinesByProperties,
    /// IfcRelDefinesByType: objects → type object
    DefinesByType,
    /// IfcRelAssociatesMaterial: objects → material select
    AssociatesMaterial,
    /// IfcRelAggregates: whole → parts
    Aggregates,
    /// IfcRelContainedInSpatialStructure: spatial element → elements
    ContainedInSpatialStructure,
}

impl RelationshipKind {
    /// All kinds, in the order stores index them
    pub const ALL: [RelationshipKind; 5] = [
        RelationshipKind::DefinesByProperties,
        RelationshipKind::DefinesByType,
        RelationshipKind::AssociatesMaterial,
        RelationshipKind::Aggregates,
        RelationshipKind::ContainedInSpatialStructure,
    ];

    /// Relationship entity type
    pub fn relationship_type(self) -> TypeCode {
        match self {
            RelationshipKind::DefinesByProperties => codes::IFCRELDEFINESBYPROPERTIES,
            RelationshipKind::DefinesByType => codes::IFCRELDEFINESBYTYPE,
            RelationshipKind::AssociatesMaterial => codes::IFCRELASSOCIATESMATERIAL,
            RelationshipKind::Aggregates => codes::IFCRELAGGREGATES,
            RelationshipKind::ContainedInSpatialStructure => {
                codes::IFCRELCONTAINEDINSPATIALSTRUCTURE
            }
        }
    }

    /// Slot holding the id(s) the relationship is looked up by
    pub fn indexed_slot(self) -> usize {
        match self {
            RelationshipKind::ContainedInSpatialStructure => 5,
            _ => 4,
        }
    }

    /// Slot holding what the relationship points to
    pub fn payload_slot(self) -> usize {
        match self {
            RelationshipKind::ContainedInSpatialStructure => 4,
            _ => 5,
        }
    }

    /// Find the kind for a relationship type
    pub fn from_type(code: TypeCode) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.relationship_type() == code)
    }
}

/// Async access to the entities of open models
///
/// Every method fails with [`crate::QueryError::ModelNotFound`] when the
/// handle does not refer to an open model.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Whether the handle refers to an open model
    async fn is_open(&self, model: ModelHandle) -> bool;

    /// Decoded entity by id
    ///
    /// Fails with [`crate::QueryError::EntityNotFound`] for absent ids.
    async fn get_entity(&self, model: ModelHandle, id: EntityId) -> QueryResult<Arc<DecodedEntity>>;

    /// Relationship entities of `kind` whose indexed slot references `id`,
    /// in file order
    async fn get_inverse_relationships(
        &self,
        model: ModelHandle,
        id: EntityId,
        kind: RelationshipKind,
    ) -> QueryResult<Vec<EntityId>>;

    /// Ids of all entities whose type is one of `codes`, in file order
    ///
    /// Only entities [`get_entity`](Self::get_entity) can serve are listed.
    async fn ids_of_types(&self, model: ModelHandle, codes: &[TypeCode]) -> QueryResult<Vec<EntityId>>;

    /// Ids of all entities, in file order
    async fn all_ids(&self, model: ModelHandle) -> QueryResult<Vec<EntityId>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_match_relationship_layout() {
        assert_eq!(RelationshipKind::Aggregates.indexed_slot(), 4);
        assert_eq!(RelationshipKind::Aggregates.payload_slot(), 5);
        assert_eq!(RelationshipKind::ContainedInSpatialStructure.indexed_slot(), 5);
        assert_eq!(RelationshipKind::ContainedInSpatialStructure.payload_slot(), 4);
    }

    #[test]
    fn test_from_type() {
        assert_eq!(
            RelationshipKind::from_type(codes::IFCRELASSOCIATESMATERIAL),
            Some(RelationshipKind::AssociatesMaterial)
        );
        assert_eq!(RelationshipKind::from_type(codes::IFCRELNESTS), None);
    }
}
