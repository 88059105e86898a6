// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC Query
//!
//! Property, material and spatial-structure queries over loaded IFC models.
//!
//! The engine reads entities through a [`ModelStore`] and resolves type
//! codes through a [`TypeRegistry`]. It never mutates the store and keeps
//! no state between calls, so one engine can serve any number of concurrent
//! queries.
//!
//! ## Overview
//!
//! - **Type enumeration**: every entity of a type and its subtypes
//! - **Item properties**: named attributes, optionally dereferenced
//! - **Property sets**: sets attached through `IfcRelDefinesByProperties`
//! - **Materials**: materials associated with an element, composites
//!   flattened to their parts
//! - **Spatial structure**: the project → site → building → storey tree with
//!   contained elements as leaves
//!
//! ## Example
//!
//! ```ignore
//! use ifc_query::IfcProperties;
//! use ifc_query_model::{codes, EntityId};
//! use ifc_query_step::StepStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(StepStore::new());
//! let model = store.open_model(&ifc_content)?;
//! let properties = IfcProperties::new(store.clone());
//!
//! let walls = properties.get_all_items_of_type(model, codes::IFCWALL, false).await?;
//! let psets = properties.get_property_sets(model, EntityId(9989), true).await?;
//! let tree = properties.get_spatial_structure(model, false).await?;
//! ```

mod accessor;
mod expand;
mod items;
mod matcher;
mod materials;
mod psets;
mod spatial;

pub use items::ItemList;

use accessor::EntityAccessor;
use expand::{AttributeExpander, ExpansionDepth};
use ifc_query_model::{
    EntityId, ExpandedEntity, ModelHandle, ModelStore, QueryResult, SchemaRegistry, SpatialNode,
    TypeCode, TypeRegistry,
};
use matcher::TypeMatcher;
use materials::MaterialResolver;
use psets::PropertySetResolver;
use spatial::SpatialBuilder;
use std::sync::Arc;

/// Query engine over a model store
#[derive(Clone)]
pub struct IfcProperties {
    store: Arc<dyn ModelStore>,
    registry: Arc<dyn TypeRegistry>,
}

impl IfcProperties {
    /// Create an engine over `store` using the built-in IFC4 registry
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self::with_registry(store, SchemaRegistry::ifc4())
    }

    /// Create an engine with a custom type registry
    pub fn with_registry(store: Arc<dyn ModelStore>, registry: Arc<dyn TypeRegistry>) -> Self {
        Self { store, registry }
    }

    fn accessor(&self, model: ModelHandle) -> EntityAccessor<'_> {
        EntityAccessor::new(self.store.as_ref(), model)
    }

    fn matcher(&self) -> TypeMatcher<'_> {
        TypeMatcher::new(self.registry.as_ref())
    }

    /// All entities of `type_code` or any of its subtypes, in store order
    ///
    /// With `verbose`, each match is expanded with references dereferenced
    /// one level deep; otherwise only ids are returned.
    pub async fn get_all_items_of_type(
        &self,
        model: ModelHandle,
        type_code: TypeCode,
        verbose: bool,
    ) -> QueryResult<ItemList> {
        log::trace!("get_all_items_of_type({}, {}, {})", model, type_code, verbose);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        items::items_of_type(&accessor, &matcher, type_code, verbose).await
    }

    /// Same as [`get_all_items_of_type`](Self::get_all_items_of_type), by
    /// case-insensitive type name
    pub async fn get_all_items_of_type_name(
        &self,
        model: ModelHandle,
        type_name: &str,
        verbose: bool,
    ) -> QueryResult<ItemList> {
        let code = self.matcher().code_of_name(type_name)?;
        self.get_all_items_of_type(model, code, verbose).await
    }

    /// Named attributes of one entity
    ///
    /// References stay placeholders unless `recursive` is set, in which case
    /// they are dereferenced until every branch ends or cycles.
    pub async fn get_item_properties(
        &self,
        model: ModelHandle,
        id: EntityId,
        recursive: bool,
    ) -> QueryResult<ExpandedEntity> {
        log::trace!("get_item_properties({}, {}, {})", model, id, recursive);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        accessor.ensure_open().await?;

        let depth = if recursive {
            ExpansionDepth::Unbounded
        } else {
            ExpansionDepth::Shallow
        };
        AttributeExpander::new(&accessor, &matcher)
            .expand_id(id, depth)
            .await
    }

    /// Property sets attached to `id`, each set once in first attachment order
    ///
    /// With `include_properties`, the member lists of each set are replaced
    /// by their expanded properties or quantities; otherwise they are left
    /// out.
    pub async fn get_property_sets(
        &self,
        model: ModelHandle,
        id: EntityId,
        include_properties: bool,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        log::trace!("get_property_sets({}, {}, {})", model, id, include_properties);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        accessor.ensure_open().await?;
        PropertySetResolver::new(&accessor, &matcher)
            .property_sets_of(id, include_properties)
            .await
    }

    /// Every property set and quantity set in the model
    pub async fn get_all_property_sets(
        &self,
        model: ModelHandle,
        include_properties: bool,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        log::trace!("get_all_property_sets({}, {})", model, include_properties);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        PropertySetResolver::new(&accessor, &matcher)
            .all_property_sets(include_properties)
            .await
    }

    /// Type objects assigned to `id` through `IfcRelDefinesByType`
    ///
    /// With `include_properties`, each type's `HasPropertySets` list is
    /// replaced by the expanded sets.
    pub async fn get_type_properties(
        &self,
        model: ModelHandle,
        id: EntityId,
        include_properties: bool,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        log::trace!("get_type_properties({}, {}, {})", model, id, include_properties);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        accessor.ensure_open().await?;
        PropertySetResolver::new(&accessor, &matcher)
            .type_objects_of(id, include_properties)
            .await
    }

    /// Materials associated with `id`, fully expanded
    pub async fn get_materials_properties(
        &self,
        model: ModelHandle,
        id: EntityId,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        log::trace!("get_materials_properties({}, {})", model, id);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        accessor.ensure_open().await?;
        MaterialResolver::new(&accessor, &matcher).materials_of(id).await
    }

    /// Spatial decomposition tree rooted at the model's project
    ///
    /// With `include_properties`, every node carries its own direct
    /// attributes.
    pub async fn get_spatial_structure(
        &self,
        model: ModelHandle,
        include_properties: bool,
    ) -> QueryResult<SpatialNode> {
        log::trace!("get_spatial_structure({}, {})", model, include_properties);
        let accessor = self.accessor(model);
        let matcher = self.matcher();
        SpatialBuilder::new(&accessor, &matcher, include_properties)
            .build()
            .await
    }

    /// Upper-case type name of a code
    pub fn get_ifc_type(&self, type_code: TypeCode) -> QueryResult<String> {
        self.matcher().type_name(type_code).map(str::to_string)
    }

    /// Code of a case-insensitive type name
    pub fn get_type_code(&self, type_name: &str) -> QueryResult<TypeCode> {
        self.matcher().code_of_name(type_name)
    }

    /// Whether `type_code` is `ancestor` or one of its subtypes
    pub fn is_subtype(&self, type_code: TypeCode, ancestor: TypeCode) -> QueryResult<bool> {
        self.matcher().is_subtype(type_code, ancestor)
    }

    /// `type_code` and every registered subtype
    pub fn subtypes_of(&self, type_code: TypeCode) -> QueryResult<Vec<TypeCode>> {
        self.matcher().subtypes_of(type_code)
    }
}
