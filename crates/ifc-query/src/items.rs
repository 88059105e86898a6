// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type enumeration

use crate::accessor::EntityAccessor;
use crate::expand::{AttributeExpander, ExpansionDepth};
use crate::matcher::TypeMatcher;

use ifc_query_model::{EntityId, ExpandedEntity, QueryResult, TypeCode};
use serde::Serialize;

/// Result of enumerating a type
///
/// Serializes as a bare array of ids or of records.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemList {
    /// Matching ids
    Ids(Vec<EntityId>),
    /// Matching entities, expanded one level
    Expanded(Vec<ExpandedEntity>),
}

impl ItemList {
    /// Number of matches
    pub fn len(&self) -> usize {
        match self {
            ItemList::Ids(ids) => ids.len(),
            ItemList::Expanded(items) => items.len(),
        }
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of the matches, in order
    pub fn ids(&self) -> Vec<EntityId> {
        match self {
            ItemList::Ids(ids) => ids.clone(),
            ItemList::Expanded(items) => items.iter().map(|item| item.express_id).collect(),
        }
    }

    /// Expanded records, `None` for a plain id list
    pub fn as_expanded(&self) -> Option<&[ExpandedEntity]> {
        match self {
            ItemList::Expanded(items) => Some(items),
            ItemList::Ids(_) => None,
        }
    }
}

/// All entities of `code` or a subtype, in store order
pub(crate) async fn items_of_type(
    accessor: &EntityAccessor<'_>,
    matcher: &TypeMatcher<'_>,
    code: TypeCode,
    verbose: bool,
) -> QueryResult<ItemList> {
    accessor.ensure_open().await?;
    let codes = matcher.subtypes_of(code)?;
    let ids = accessor.ids_of_types(&codes).await?;

    if !verbose {
        return Ok(ItemList::Ids(ids));
    }

    let expander = AttributeExpander::new(accessor, matcher);
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        items.push(expander.expand_id(id, ExpansionDepth::Levels(1)).await?);
    }
    Ok(ItemList::Expanded(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_query_model::ExpandedEntity;

    #[test]
    fn test_item_list_accessors() {
        let ids = ItemList::Ids(vec![EntityId(3), EntityId(1)]);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids.ids(), vec![EntityId(3), EntityId(1)]);
        assert!(ids.as_expanded().is_none());

        let expanded = ItemList::Expanded(vec![ExpandedEntity {
            express_id: EntityId(5),
            type_code: None,
            type_name: "IFCWALL".to_string(),
            attributes: Default::default(),
        }]);
        assert_eq!(expanded.ids(), vec![EntityId(5)]);
        assert!(!expanded.is_empty());
        assert!(ItemList::Ids(Vec::new()).is_empty());
    }
}
