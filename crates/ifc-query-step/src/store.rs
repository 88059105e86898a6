// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! StepStore - `ModelStore` over models loaded from STEP text

use crate::model::ParsedModel;
use crate::StepParser;

use async_trait::async_trait;
use ifc_query_model::{
    DecodedEntity, EntityId, ModelHandle, ModelMetadata, ModelStore, ParseError, QueryError,
    QueryResult, RelationshipKind, Result, TypeCode,
};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// In-memory store of open models - thread-safe
///
/// Each model is immutable once loaded and shared as an `Arc`, so lookups
/// against one handle never observe another.
pub struct StepStore {
    parser: StepParser,
    models: RwLock<FxHashMap<ModelHandle, Arc<ParsedModel>>>,
    next_handle: AtomicU32,
}

impl Default for StepStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StepStore {
    /// Create an empty store with default load options
    pub fn new() -> Self {
        Self::with_parser(StepParser::new())
    }

    /// Create an empty store loading models with `parser`
    pub fn with_parser(parser: StepParser) -> Self {
        Self {
            parser,
            models: RwLock::new(FxHashMap::default()),
            next_handle: AtomicU32::new(0),
        }
    }

    /// Load IFC from string content
    pub fn open_model(&self, content: &str) -> Result<ModelHandle> {
        let model = self.parser.parse(content)?;
        let handle = ModelHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));

        log::info!(
            "Opened model {} ({} entities, {})",
            handle,
            model.entity_count(),
            model.metadata().schema_version
        );
        self.models.write().insert(handle, Arc::new(model));

        Ok(handle)
    }

    /// Load IFC from bytes
    pub fn open_model_from_bytes(&self, data: &[u8]) -> Result<ModelHandle> {
        let content = std::str::from_utf8(data)
            .map_err(|e| ParseError::format(format!("Invalid UTF-8: {}", e)))?;
        self.open_model(content)
    }

    /// Load IFC from file path
    pub fn open_model_from_path(&self, path: impl AsRef<Path>) -> Result<ModelHandle> {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.open_model(&content)
    }

    /// Close a model, returning whether it was open
    ///
    /// Queries already holding the model finish against it.
    pub fn close_model(&self, handle: ModelHandle) -> bool {
        let closed = self.models.write().remove(&handle).is_some();
        if closed {
            log::info!("Closed model {}", handle);
        }
        closed
    }

    /// Handles of all open models
    pub fn open_models(&self) -> Vec<ModelHandle> {
        let mut handles: Vec<_> = self.models.read().keys().copied().collect();
        handles.sort_by_key(|h| h.0);
        handles
    }

    /// Header metadata of an open model
    pub fn metadata(&self, handle: ModelHandle) -> QueryResult<ModelMetadata> {
        Ok(self.model(handle)?.metadata().clone())
    }

    /// Shared reference to an open model
    pub fn model(&self, handle: ModelHandle) -> QueryResult<Arc<ParsedModel>> {
        self.models
            .read()
            .get(&handle)
            .cloned()
            .ok_or(QueryError::ModelNotFound(handle))
    }
}

#[async_trait]
impl ModelStore for StepStore {
    async fn is_open(&self, model: ModelHandle) -> bool {
        self.models.read().contains_key(&model)
    }

    async fn get_entity(&self, model: ModelHandle, id: EntityId) -> QueryResult<Arc<DecodedEntity>> {
        self.model(model)?
            .get(id)
            .ok_or(QueryError::EntityNotFound(id))
    }

    async fn get_inverse_relationships(
        &self,
        model: ModelHandle,
        id: EntityId,
        kind: RelationshipKind,
    ) -> QueryResult<Vec<EntityId>> {
        Ok(self.model(model)?.inverse(id, kind))
    }

    async fn ids_of_types(&self, model: ModelHandle, codes: &[TypeCode]) -> QueryResult<Vec<EntityId>> {
        Ok(self.model(model)?.ids_of_types(codes))
    }

    async fn all_ids(&self, model: ModelHandle) -> QueryResult<Vec<EntityId>> {
        Ok(self.model(model)?.all_ids().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_query_model::codes;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('a.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCPROJECT('guid',$,'Project A',$,$,$,$,$,$);
#2=IFCWALL('w1',$,'Wall',$,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;
"#;

    #[tokio::test]
    async fn test_open_and_query() {
        let store = StepStore::new();
        let handle = store.open_model(TEST_IFC).unwrap();

        assert!(store.is_open(handle).await);
        let wall = store.get_entity(handle, EntityId(2)).await.unwrap();
        assert_eq!(wall.get_string(2), Some("Wall"));
        assert_eq!(
            store.get_entity(handle, EntityId(3)).await.unwrap_err(),
            QueryError::EntityNotFound(EntityId(3))
        );
        assert_eq!(
            store.ids_of_types(handle, &[codes::IFCWALL]).await.unwrap(),
            vec![EntityId(2)]
        );
        assert_eq!(store.all_ids(handle).await.unwrap().len(), 2);
        assert_eq!(store.metadata(handle).unwrap().schema_version, "IFC4");
    }

    #[tokio::test]
    async fn test_models_are_isolated() {
        let store = StepStore::new();
        let a = store.open_model(TEST_IFC).unwrap();
        let b = store
            .open_model(&TEST_IFC.replace("#2=IFCWALL", "#3=IFCWALL"))
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(store.open_models(), vec![a, b]);

        assert!(store.get_entity(a, EntityId(2)).await.is_ok());
        assert!(store.get_entity(b, EntityId(2)).await.is_err());
        assert!(store.get_entity(b, EntityId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_closed_model_is_not_found() {
        let store = StepStore::new();
        let handle = store.open_model(TEST_IFC).unwrap();
        assert!(store.close_model(handle));
        assert!(!store.close_model(handle));

        assert!(!store.is_open(handle).await);
        assert_eq!(
            store.all_ids(handle).await.unwrap_err(),
            QueryError::ModelNotFound(handle)
        );
        assert!(store.metadata(handle).is_err());
    }

    #[test]
    fn test_open_rejects_invalid_input() {
        let store = StepStore::new();
        assert!(store.open_model_from_bytes(&[0xff, 0xfe]).is_err());
        assert!(matches!(
            store.open_model_from_path("/nonexistent/model.ifc"),
            Err(ParseError::Io(_))
        ));
        assert!(store.open_models().is_empty());
    }
}
