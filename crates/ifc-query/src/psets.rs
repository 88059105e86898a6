// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property set resolution
//!
//! Property sets attach to objects through `IfcRelDefinesByProperties` and
//! to type objects through their `HasPropertySets` list. Type objects attach
//! to occurrences through `IfcRelDefinesByType`.

use crate::accessor::EntityAccessor;
use crate::expand::{AttributeExpander, ExpansionDepth};
use crate::matcher::TypeMatcher;

use ifc_query_model::{
    codes, AttributeField, EntityId, ExpandedEntity, QueryResult, RelationshipKind,
};
use rustc_hash::FxHashSet;

/// Attributes of a property set definition that list its members
const MEMBER_LISTS: [&str; 2] = ["HasProperties", "Quantities"];

pub(crate) struct PropertySetResolver<'a> {
    accessor: &'a EntityAccessor<'a>,
    matcher: &'a TypeMatcher<'a>,
    expander: AttributeExpander<'a>,
}

impl<'a> PropertySetResolver<'a> {
    pub fn new(accessor: &'a EntityAccessor<'a>, matcher: &'a TypeMatcher<'a>) -> Self {
        Self {
            accessor,
            matcher,
            expander: AttributeExpander::new(accessor, matcher),
        }
    }

    /// Property sets attached to `id`, first attachment order, each set once
    pub async fn property_sets_of(
        &self,
        id: EntityId,
        include_properties: bool,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        self.accessor.entity(id).await?;

        let pset_ids = self
            .accessor
            .related_via(id, RelationshipKind::DefinesByProperties)
            .await?;

        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for pset_id in pset_ids {
            if !seen.insert(pset_id) {
                continue;
            }
            if let Some(pset) = self.property_set(pset_id, include_properties).await? {
                out.push(pset);
            }
        }

        log::trace!("{} property sets on {}", out.len(), id);
        Ok(out)
    }

    /// Every property set definition in the model, in store order
    pub async fn all_property_sets(&self, include_properties: bool) -> QueryResult<Vec<ExpandedEntity>> {
        self.accessor.ensure_open().await?;
        let codes = self.matcher.subtypes_of(codes::IFCPROPERTYSETDEFINITION)?;

        let mut out = Vec::new();
        for pset_id in self.accessor.ids_of_types(&codes).await? {
            if let Some(pset) = self.property_set(pset_id, include_properties).await? {
                out.push(pset);
            }
        }
        Ok(out)
    }

    /// Type objects assigned to `id`, with their property sets expanded when
    /// `include_properties` is set
    pub async fn type_objects_of(
        &self,
        id: EntityId,
        include_properties: bool,
    ) -> QueryResult<Vec<ExpandedEntity>> {
        self.accessor.entity(id).await?;

        let type_ids = self
            .accessor
            .related_via(id, RelationshipKind::DefinesByType)
            .await?;

        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for type_id in type_ids {
            if !seen.insert(type_id) {
                continue;
            }
            let Some(mut type_object) = self
                .expander
                .try_expand_id(type_id, ExpansionDepth::Shallow)
                .await?
            else {
                continue;
            };

            if include_properties {
                let refs = member_refs(type_object.get("HasPropertySets"));
                if let Some(refs) = refs {
                    let mut psets = Vec::with_capacity(refs.len());
                    for pset_id in refs {
                        if let Some(pset) = self.property_set(pset_id, true).await? {
                            psets.push(AttributeField::Entity(Box::new(pset)));
                        }
                    }
                    type_object
                        .attributes
                        .insert("HasPropertySets", AttributeField::List(psets));
                }
            }
            out.push(type_object);
        }
        Ok(out)
    }

    /// Expand one property set definition
    ///
    /// Member lists are replaced by their fully expanded records when
    /// `include_properties` is set and dropped otherwise.
    async fn property_set(
        &self,
        pset_id: EntityId,
        include_properties: bool,
    ) -> QueryResult<Option<ExpandedEntity>> {
        let Some(mut pset) = self
            .expander
            .try_expand_id(pset_id, ExpansionDepth::Shallow)
            .await?
        else {
            return Ok(None);
        };

        for key in MEMBER_LISTS {
            let Some(refs) = member_refs(pset.get(key)) else {
                continue;
            };
            if !include_properties {
                pset.attributes.remove(key);
                continue;
            }

            let mut members = Vec::with_capacity(refs.len());
            for member_id in refs {
                if let Some(member) = self
                    .expander
                    .try_expand_id(member_id, ExpansionDepth::Unbounded)
                    .await?
                {
                    members.push(AttributeField::Entity(Box::new(member)));
                }
            }
            pset.attributes.insert(key, AttributeField::List(members));
        }

        Ok(Some(pset))
    }
}

/// Ids listed in a shallow-expanded list attribute
fn member_refs(field: Option<&AttributeField>) -> Option<Vec<EntityId>> {
    match field? {
        AttributeField::List(items) => Some(items.iter().filter_map(AttributeField::entity_id).collect()),
        AttributeField::Null => Some(Vec::new()),
        other => other.entity_id().map(|id| vec![id]),
    }
}
