// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ParsedModel - one loaded IFC file
//!
//! Entities are indexed by byte span at load time and decoded lazily on
//! first access. Relationship entities are decoded eagerly to build the
//! inverse index.

use crate::inverse::InverseIndex;
use crate::scanner::{parse_header, EntityScanner};
use crate::tokenizer::parse_entity_at;
use crate::StepParser;

use ifc_query_model::{
    DecodedEntity, EntityId, IfcType, ModelMetadata, ParseError, RelationshipKind, Result,
    TypeCode,
};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Parsed IFC model
///
/// Immutable once loaded apart from the decode cache.
pub struct ParsedModel {
    /// Raw IFC content (owned for thread safety)
    content: String,
    /// Entity ID -> (start, end) byte offsets
    index: FxHashMap<u32, (usize, usize)>,
    /// Entity IDs in file order
    order: Vec<EntityId>,
    /// Type -> entity IDs index, each list in file order
    type_index: FxHashMap<IfcType, Vec<EntityId>>,
    /// Decoded entity cache
    cache: RwLock<FxHashMap<u32, Arc<DecodedEntity>>>,
    /// Inverse relationship index, absent when disabled
    inverse: Option<InverseIndex>,
    /// File metadata
    metadata: ModelMetadata,
}

impl ParsedModel {
    /// Parse IFC content with the given options
    pub fn parse(content: &str, options: &StepParser) -> Result<Self> {
        if !content.contains("DATA;") {
            return Err(ParseError::format("missing DATA section"));
        }

        let mut index = FxHashMap::default();
        let mut order = Vec::new();
        let mut type_index: FxHashMap<IfcType, Vec<EntityId>> = FxHashMap::default();

        for scanned in EntityScanner::new(content) {
            if index.contains_key(&scanned.id) {
                if options.strict {
                    return Err(ParseError::DuplicateEntity(EntityId(scanned.id)));
                }
                log::warn!("Ignoring duplicate definition of #{}", scanned.id);
                continue;
            }
            let id = EntityId(scanned.id);
            index.insert(scanned.id, (scanned.start, scanned.end));
            order.push(id);
            type_index
                .entry(IfcType::parse(scanned.type_name))
                .or_default()
                .push(id);
        }

        let mut metadata = parse_header(content);
        metadata.entity_count = order.len();

        let mut model = Self {
            content: content.to_string(),
            index,
            order,
            type_index,
            cache: RwLock::new(FxHashMap::default()),
            inverse: None,
            metadata,
        };

        if options.strict {
            for id in &model.order {
                model.decode(*id)?;
            }
        }

        if options.build_inverse_index {
            model.inverse = Some(model.build_inverse_index(options.strict)?);
        }

        log::debug!(
            "Parsed {} entities ({} schema)",
            model.order.len(),
            model.metadata.schema_version
        );

        Ok(model)
    }

    fn build_inverse_index(&self, strict: bool) -> Result<InverseIndex> {
        let mut inverse = InverseIndex::new();
        for kind in RelationshipKind::ALL {
            for rel_id in self.ids_of_type(kind.relationship_type()) {
                match self.decode(*rel_id) {
                    Ok(rel) => inverse.insert(kind, &rel),
                    Err(err) if strict => return Err(err),
                    Err(err) => log::warn!("Skipping relationship {}: {}", rel_id, err),
                }
            }
        }
        Ok(inverse)
    }

    /// Decode an entity, going through the cache
    pub fn decode(&self, id: EntityId) -> Result<Arc<DecodedEntity>> {
        if let Some(cached) = self.cache.read().get(&id.0) {
            return Ok(Arc::clone(cached));
        }

        let (start, end) = self
            .index
            .get(&id.0)
            .ok_or_else(|| ParseError::other(format!("entity {} does not exist", id)))?;

        let entity = Arc::new(parse_entity_at(&self.content, *start, *end)?);
        self.cache.write().insert(id.0, Arc::clone(&entity));

        Ok(entity)
    }

    /// Decoded entity, `None` when absent or undecodable
    pub fn get(&self, id: EntityId) -> Option<Arc<DecodedEntity>> {
        if !self.contains(id) {
            return None;
        }
        match self.decode(id) {
            Ok(entity) => Some(entity),
            Err(err) => {
                log::warn!("Failed to decode {}: {}", id, err);
                None
            }
        }
    }

    /// Whether the model defines `id`
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id.0)
    }

    /// Entity ids of one type, in file order
    fn ids_of_type(&self, code: TypeCode) -> &[EntityId] {
        IfcType::from_code(code)
            .and_then(|ty| self.type_index.get(&ty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entity ids whose type is one of `codes`, in file order
    ///
    /// Entities that fail to decode are left out, so every id returned is
    /// one [`get`](Self::get) serves.
    pub fn ids_of_types(&self, codes: &[TypeCode]) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = codes
            .iter()
            .flat_map(|code| self.ids_of_type(*code).iter().copied())
            .filter(|id| self.decode(*id).is_ok())
            .collect();
        if codes.len() > 1 {
            ids.sort_by_key(|id| self.index.get(&id.0).map(|span| span.0));
            ids.dedup();
        }
        ids
    }

    /// Relationships of `kind` whose indexed slot references `target`
    pub fn inverse(&self, target: EntityId, kind: RelationshipKind) -> Vec<EntityId> {
        if let Some(inverse) = &self.inverse {
            return inverse.get(kind, target).to_vec();
        }

        // No index: scan relationship entities of this kind
        self.ids_of_type(kind.relationship_type())
            .iter()
            .filter(|rel_id| {
                self.get(**rel_id)
                    .is_some_and(|rel| rel.get_refs(kind.indexed_slot()).contains(&target))
            })
            .copied()
            .collect()
    }

    /// All entity ids in file order
    pub fn all_ids(&self) -> &[EntityId] {
        &self.order
    }

    /// Number of entities
    pub fn entity_count(&self) -> usize {
        self.order.len()
    }

    /// Whether lookups go through the inverse index
    pub fn has_inverse_index(&self) -> bool {
        self.inverse.is_some()
    }

    /// File metadata
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
