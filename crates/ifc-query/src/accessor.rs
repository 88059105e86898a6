// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity accessor
//!
//! Thin wrapper over a [`ModelStore`] bound to one model handle.

use ifc_query_model::{
    DecodedEntity, EntityId, ModelHandle, ModelStore, QueryError, QueryResult, RelationshipKind,
    TypeCode,
};
use std::sync::Arc;

/// Store access for one model
pub(crate) struct EntityAccessor<'a> {
    store: &'a dyn ModelStore,
    model: ModelHandle,
}

impl<'a> EntityAccessor<'a> {
    pub fn new(store: &'a dyn ModelStore, model: ModelHandle) -> Self {
        Self { store, model }
    }

    /// Fail with `ModelNotFound` unless the model is open
    pub async fn ensure_open(&self) -> QueryResult<()> {
        if self.store.is_open(self.model).await {
            Ok(())
        } else {
            Err(QueryError::ModelNotFound(self.model))
        }
    }

    /// Entity by id, `EntityNotFound` when absent
    pub async fn entity(&self, id: EntityId) -> QueryResult<Arc<DecodedEntity>> {
        self.store.get_entity(self.model, id).await
    }

    /// Entity by id, `None` when absent
    pub async fn try_entity(&self, id: EntityId) -> QueryResult<Option<Arc<DecodedEntity>>> {
        match self.store.get_entity(self.model, id).await {
            Ok(entity) => Ok(Some(entity)),
            Err(QueryError::EntityNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Relationship ids of `kind` pointing at `id`, in discovery order
    pub async fn inverse(&self, id: EntityId, kind: RelationshipKind) -> QueryResult<Vec<EntityId>> {
        self.store.get_inverse_relationships(self.model, id, kind).await
    }

    /// Ids held by the payload slot of a relationship
    ///
    /// Missing relationships and empty payloads yield nothing.
    pub async fn related(&self, rel_id: EntityId, kind: RelationshipKind) -> QueryResult<Vec<EntityId>> {
        let Some(rel) = self.try_entity(rel_id).await? else {
            log::debug!("Skipping missing relationship {}", rel_id);
            return Ok(Vec::new());
        };

        let targets = rel.get_refs(kind.payload_slot());
        if targets.is_empty() {
            log::debug!(
                "Skipping relationship {} ({}) with no {:?} payload",
                rel_id,
                rel.ifc_type,
                kind
            );
        }
        Ok(targets)
    }

    /// Payload ids of every `kind` relationship pointing at `id`, in order
    pub async fn related_via(&self, id: EntityId, kind: RelationshipKind) -> QueryResult<Vec<EntityId>> {
        let mut out = Vec::new();
        for rel_id in self.inverse(id, kind).await? {
            out.extend(self.related(rel_id, kind).await?);
        }
        Ok(out)
    }

    /// Ids of all entities of the given types, in store order
    pub async fn ids_of_types(&self, codes: &[TypeCode]) -> QueryResult<Vec<EntityId>> {
        self.store.ids_of_types(self.model, codes).await
    }
}
