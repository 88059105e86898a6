// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial structure builder
//!
//! Walks the decomposition graph from the project: aggregated parts first,
//! then, for spatial elements, the elements contained in them. Contained
//! elements are leaves. Nodes are collected into an arena with parent links
//! and assembled into an owned [`SpatialNode`] tree at the end.
//!
//! Every entity is placed once, under the first parent that reaches it in
//! depth-first pre-order. An entity already on the path to the current node
//! is a cycle and is skipped.

use crate::accessor::EntityAccessor;
use crate::expand::{AttributeExpander, ExpansionDepth};
use crate::matcher::TypeMatcher;

use ifc_query_model::{
    codes, AttributeMap, DecodedEntity, EntityId, QueryError, QueryResult, RelationshipKind,
    SpatialNode,
};
use rustc_hash::FxHashSet;

struct ArenaNode {
    id: EntityId,
    type_name: String,
    parent: Option<usize>,
    children: Vec<usize>,
    properties: Option<AttributeMap>,
}

/// Pending visit: entity, arena index of its parent, whether to descend
struct Visit {
    id: EntityId,
    parent: usize,
    descend: bool,
}

pub(crate) struct SpatialBuilder<'a> {
    accessor: &'a EntityAccessor<'a>,
    matcher: &'a TypeMatcher<'a>,
    expander: AttributeExpander<'a>,
    include_properties: bool,
    arena: Vec<ArenaNode>,
    placed: FxHashSet<EntityId>,
}

impl<'a> SpatialBuilder<'a> {
    pub fn new(
        accessor: &'a EntityAccessor<'a>,
        matcher: &'a TypeMatcher<'a>,
        include_properties: bool,
    ) -> Self {
        Self {
            accessor,
            matcher,
            expander: AttributeExpander::new(accessor, matcher),
            include_properties,
            arena: Vec::new(),
            placed: FxHashSet::default(),
        }
    }

    /// Build the tree rooted at the model's single project
    pub async fn build(mut self) -> QueryResult<SpatialNode> {
        self.accessor.ensure_open().await?;

        let root_id = self.find_root().await?;
        let root = self.accessor.entity(root_id).await?;
        self.place(&root, None).await?;

        let mut stack = self.children_of(0, &root).await?;
        stack.reverse();

        while let Some(visit) = stack.pop() {
            if self.on_path(visit.parent, visit.id) {
                log::debug!("Skipping cyclic decomposition of {}", visit.id);
                continue;
            }
            if self.placed.contains(&visit.id) {
                log::debug!("{} already placed, skipping repeat occurrence", visit.id);
                continue;
            }
            let Some(entity) = self.accessor.try_entity(visit.id).await? else {
                log::debug!("Skipping dangling spatial child {}", visit.id);
                continue;
            };

            let index = self.place(&entity, Some(visit.parent)).await?;
            if visit.descend {
                let mut children = self.children_of(index, &entity).await?;
                children.reverse();
                stack.extend(children);
            }
        }

        log::debug!(
            "Spatial structure from {} has {} nodes",
            root_id,
            self.arena.len()
        );
        Ok(self.assemble())
    }

    async fn find_root(&self) -> QueryResult<EntityId> {
        let project_codes = self.matcher.subtypes_of(codes::IFCPROJECT)?;
        let mut roots = self.accessor.ids_of_types(&project_codes).await?;
        match roots.len() {
            0 => Err(QueryError::RootNotFound),
            1 => Ok(roots.remove(0)),
            _ => Err(QueryError::AmbiguousRoot(roots)),
        }
    }

    /// Aggregated parts, then contained elements for spatial elements
    async fn children_of(&self, index: usize, entity: &DecodedEntity) -> QueryResult<Vec<Visit>> {
        let mut visits: Vec<Visit> = self
            .accessor
            .related_via(entity.id, RelationshipKind::Aggregates)
            .await?
            .into_iter()
            .map(|id| Visit {
                id,
                parent: index,
                descend: true,
            })
            .collect();

        if self.matcher.entity_is_a(entity, codes::IFCSPATIALELEMENT) {
            visits.extend(
                self.accessor
                    .related_via(entity.id, RelationshipKind::ContainedInSpatialStructure)
                    .await?
                    .into_iter()
                    .map(|id| Visit {
                        id,
                        parent: index,
                        descend: false,
                    }),
            );
        }
        Ok(visits)
    }

    async fn place(&mut self, entity: &DecodedEntity, parent: Option<usize>) -> QueryResult<usize> {
        let properties = if self.include_properties {
            Some(self.expander.expand(entity, ExpansionDepth::Shallow).await?.attributes)
        } else {
            None
        };

        let index = self.arena.len();
        self.arena.push(ArenaNode {
            id: entity.id,
            type_name: self.matcher.entity_type_name(entity),
            parent,
            children: Vec::new(),
            properties,
        });
        if let Some(parent) = parent {
            self.arena[parent].children.push(index);
        }
        self.placed.insert(entity.id);
        Ok(index)
    }

    /// Whether `id` is the node at `index` or one of its ancestors
    fn on_path(&self, mut index: usize, id: EntityId) -> bool {
        loop {
            let node = &self.arena[index];
            if node.id == id {
                return true;
            }
            match node.parent {
                Some(parent) => index = parent,
                None => return false,
            }
        }
    }

    /// Turn the arena into an owned tree
    ///
    /// Children always sit after their parent, so walking backwards finishes
    /// every subtree before its parent needs it.
    fn assemble(self) -> SpatialNode {
        let mut built: Vec<Option<SpatialNode>> = Vec::with_capacity(self.arena.len());
        built.resize_with(self.arena.len(), || None);

        for (index, node) in self.arena.into_iter().enumerate().rev() {
            let children = node
                .children
                .iter()
                .filter_map(|child| built[*child].take())
                .collect();
            built[index] = Some(SpatialNode {
                express_id: node.id,
                type_name: node.type_name,
                children,
                properties: node.properties,
            });
        }

        built
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| SpatialNode::new(EntityId(0), String::new()))
    }
}
