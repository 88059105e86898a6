// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute expansion
//!
//! Turns a decoded entity into an [`ExpandedEntity`], naming each slot from
//! the registry and optionally dereferencing the entities it points at.
//! References that would revisit an entity already on the current expansion
//! path stay placeholders, so cyclic data terminates.

use crate::accessor::EntityAccessor;
use crate::matcher::TypeMatcher;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use ifc_query_model::{
    AttributeField, AttributeMap, AttributeValue, DecodedEntity, EntityId, ExpandedEntity,
    PrimitiveValue, QueryResult, TypedValue,
};

/// How far references are followed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExpansionDepth {
    /// References stay placeholders
    Shallow,
    /// Follow this many levels of references
    Levels(usize),
    /// Follow references until every branch ends or cycles
    Unbounded,
}

impl ExpansionDepth {
    /// Depth for entities reached through a reference, `None` if references
    /// are not followed at this depth
    fn descend(self) -> Option<Self> {
        match self {
            ExpansionDepth::Shallow | ExpansionDepth::Levels(0) => None,
            ExpansionDepth::Levels(n) => Some(ExpansionDepth::Levels(n - 1)),
            ExpansionDepth::Unbounded => Some(ExpansionDepth::Unbounded),
        }
    }
}

pub(crate) struct AttributeExpander<'a> {
    accessor: &'a EntityAccessor<'a>,
    matcher: &'a TypeMatcher<'a>,
}

impl<'a> AttributeExpander<'a> {
    pub fn new(accessor: &'a EntityAccessor<'a>, matcher: &'a TypeMatcher<'a>) -> Self {
        Self { accessor, matcher }
    }

    /// Expand the entity `id`, `EntityNotFound` when absent
    pub async fn expand_id(&self, id: EntityId, depth: ExpansionDepth) -> QueryResult<ExpandedEntity> {
        let entity = self.accessor.entity(id).await?;
        self.expand(&entity, depth).await
    }

    /// Expand the entity `id`, `None` when absent
    pub async fn try_expand_id(
        &self,
        id: EntityId,
        depth: ExpansionDepth,
    ) -> QueryResult<Option<ExpandedEntity>> {
        match self.accessor.try_entity(id).await? {
            Some(entity) => Ok(Some(self.expand(&entity, depth).await?)),
            None => {
                log::debug!("Skipping dangling reference to {}", id);
                Ok(None)
            }
        }
    }

    /// Expand a decoded entity
    pub async fn expand(&self, entity: &DecodedEntity, depth: ExpansionDepth) -> QueryResult<ExpandedEntity> {
        let mut path = vec![entity.id];
        self.expand_on_path(entity, depth, &mut path).await
    }

    fn expand_on_path<'s>(
        &'s self,
        entity: &'s DecodedEntity,
        depth: ExpansionDepth,
        path: &'s mut Vec<EntityId>,
    ) -> BoxFuture<'s, QueryResult<ExpandedEntity>> {
        async move {
            let names = self.matcher.attribute_names(entity);
            let mut attributes = AttributeMap::with_capacity(entity.attributes.len());

            for (index, value) in entity.attributes.iter().enumerate() {
                let field = self.expand_value(value, depth, path).await?;
                match names.get(index) {
                    Some(name) => attributes.insert(*name, field),
                    None => attributes.insert(format!("Attribute{}", index), field),
                }
            }

            Ok(ExpandedEntity {
                express_id: entity.id,
                type_code: self.matcher.code_of_entity(entity),
                type_name: self.matcher.entity_type_name(entity),
                attributes,
            })
        }
        .boxed()
    }

    fn expand_value<'s>(
        &'s self,
        value: &'s AttributeValue,
        depth: ExpansionDepth,
        path: &'s mut Vec<EntityId>,
    ) -> BoxFuture<'s, QueryResult<AttributeField>> {
        async move {
            let field = match value {
                AttributeValue::Null | AttributeValue::Derived => AttributeField::Null,
                AttributeValue::EntityRef(id) => self.expand_reference(*id, depth, path).await?,
                AttributeValue::List(items) => {
                    let mut fields = Vec::with_capacity(items.len());
                    for item in items {
                        fields.push(self.expand_value(item, depth, path).await?);
                    }
                    AttributeField::List(fields)
                }
                AttributeValue::TypedValue(label, args) => match args.as_slice() {
                    [inner] => match primitive(inner) {
                        Some(value) => AttributeField::Value(TypedValue::labelled(value, label.as_str())),
                        // Wrapped list or reference: the wrapper adds nothing
                        None => self.expand_value(inner, depth, path).await?,
                    },
                    _ => {
                        let mut fields = Vec::with_capacity(args.len());
                        for arg in args {
                            fields.push(self.expand_value(arg, depth, path).await?);
                        }
                        AttributeField::List(fields)
                    }
                },
                other => match primitive(other) {
                    Some(value) => AttributeField::Value(TypedValue::new(value)),
                    None => AttributeField::Null,
                },
            };
            Ok(field)
        }
        .boxed()
    }

    async fn expand_reference(
        &self,
        id: EntityId,
        depth: ExpansionDepth,
        path: &mut Vec<EntityId>,
    ) -> QueryResult<AttributeField> {
        let Some(next) = depth.descend() else {
            return Ok(AttributeField::Reference(id));
        };
        if path.contains(&id) {
            log::debug!("Reference cycle through {}, leaving a placeholder", id);
            return Ok(AttributeField::Reference(id));
        }
        let Some(target) = self.accessor.try_entity(id).await? else {
            log::debug!("Dangling reference to {}, leaving a placeholder", id);
            return Ok(AttributeField::Reference(id));
        };

        path.push(id);
        let expanded = self.expand_on_path(&target, next, path).await;
        path.pop();

        Ok(AttributeField::Entity(Box::new(expanded?)))
    }
}

fn primitive(value: &AttributeValue) -> Option<PrimitiveValue> {
    match value {
        AttributeValue::String(s) => Some(PrimitiveValue::String(s.clone())),
        AttributeValue::Enum(e) => Some(PrimitiveValue::Enum(e.clone())),
        AttributeValue::Bool(b) => Some(PrimitiveValue::Boolean(*b)),
        AttributeValue::Integer(i) => Some(PrimitiveValue::Integer(*i)),
        AttributeValue::Float(f) => Some(PrimitiveValue::Real(*f)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_query_model::{ModelHandle, SchemaRegistry};
    use ifc_query_step::StepStore;

    const CYCLIC_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCWALL('0wall',#2,'Wall',$,$,$,$,'T-1',.STANDARD.);
#2=IFCOWNERHISTORY(#3,$,.READWRITE.,.ADDED.,$,$,$,1700000000);
#3=IFCPERSONANDORGANIZATION(#4,$,$);
#4=IFCPERSON($,'Doe',$,$,$,$,$,(#3));
#5=IFCPROPERTYSINGLEVALUE('Width',$,IFCLENGTHMEASURE(0.25),#9);
#6=IFCPROPERTYSINGLEVALUE('IsExternal',$,IFCBOOLEAN(.T.),$);
#7=IFCPROPERTYSINGLEVALUE('Flagged',*,.F.,$);
#8=IFCCUSTOMTHING('a',12,#99);
ENDSEC;
END-ISO-10303-21;
"#;

    async fn expand(id: u32, depth: ExpansionDepth) -> ExpandedEntity {
        let store = StepStore::new();
        let model = store.open_model(CYCLIC_IFC).unwrap();
        assert_eq!(model, ModelHandle(0));
        let registry = SchemaRegistry::ifc4();
        let accessor = EntityAccessor::new(&store, model);
        let matcher = TypeMatcher::new(registry.as_ref());
        let expander = AttributeExpander::new(&accessor, &matcher);
        expander.expand_id(EntityId(id), depth).await.unwrap()
    }

    #[test]
    fn test_depth_descend() {
        assert_eq!(ExpansionDepth::Shallow.descend(), None);
        assert_eq!(ExpansionDepth::Levels(0).descend(), None);
        assert_eq!(
            ExpansionDepth::Levels(2).descend(),
            Some(ExpansionDepth::Levels(1))
        );
        assert_eq!(
            ExpansionDepth::Unbounded.descend(),
            Some(ExpansionDepth::Unbounded)
        );
    }

    #[tokio::test]
    async fn test_shallow_keeps_placeholders() {
        let wall = expand(1, ExpansionDepth::Shallow).await;

        assert_eq!(wall.type_name, "IFCWALL");
        assert_eq!(wall.global_id(), Some("0wall"));
        assert_eq!(wall.get("OwnerHistory"), Some(&AttributeField::Reference(EntityId(2))));
        assert!(wall.get("Description").unwrap().is_null());
        assert_eq!(wall.get("PredefinedType").unwrap().as_str(), Some("STANDARD"));
        assert_eq!(
            wall.attributes.keys().collect::<Vec<_>>(),
            vec![
                "GlobalId",
                "OwnerHistory",
                "Name",
                "Description",
                "ObjectType",
                "ObjectPlacement",
                "Representation",
                "Tag",
                "PredefinedType"
            ]
        );
    }

    #[tokio::test]
    async fn test_levels_stop_after_one_hop() {
        let wall = expand(1, ExpansionDepth::Levels(1)).await;

        let history = wall.get("OwnerHistory").unwrap().as_entity().unwrap();
        assert_eq!(history.type_name, "IFCOWNERHISTORY");
        assert_eq!(
            history.get("OwningUser"),
            Some(&AttributeField::Reference(EntityId(3)))
        );
    }

    #[tokio::test]
    async fn test_unbounded_terminates_on_cycles() {
        let wall = expand(1, ExpansionDepth::Unbounded).await;

        let history = wall.get("OwnerHistory").unwrap().as_entity().unwrap();
        let user = history.get("OwningUser").unwrap().as_entity().unwrap();
        assert_eq!(user.express_id, EntityId(3));
        assert!(user.get("TheOrganization").unwrap().is_null());
        let person = user.get("ThePerson").unwrap().as_entity().unwrap();
        // #4 points back at #3, which is already on the path
        let back = &person.get("Addresses").unwrap().as_list().unwrap()[0];
        assert_eq!(back, &AttributeField::Reference(EntityId(3)));
    }

    #[tokio::test]
    async fn test_typed_values_carry_labels() {
        let width = expand(5, ExpansionDepth::Unbounded).await;
        assert_eq!(
            width.get("NominalValue"),
            Some(&AttributeField::Value(TypedValue::labelled(
                PrimitiveValue::Real(0.25),
                "IFCLENGTHMEASURE"
            )))
        );
        // Dangling unit reference stays a placeholder
        assert_eq!(width.get("Unit"), Some(&AttributeField::Reference(EntityId(9))));

        let external = expand(6, ExpansionDepth::Shallow).await;
        assert_eq!(
            external.get("NominalValue"),
            Some(&AttributeField::Value(TypedValue::labelled(
                PrimitiveValue::Boolean(true),
                "IFCBOOLEAN"
            )))
        );

        let flagged = expand(7, ExpansionDepth::Shallow).await;
        assert!(flagged.get("Description").unwrap().is_null());
        assert_eq!(
            flagged.get("NominalValue"),
            Some(&AttributeField::Value(TypedValue::new(PrimitiveValue::Boolean(false))))
        );
    }

    #[tokio::test]
    async fn test_unregistered_types_get_positional_names() {
        let custom = expand(8, ExpansionDepth::Unbounded).await;
        assert_eq!(custom.type_code, None);
        assert_eq!(custom.type_name, "IFCCUSTOMTHING");
        assert_eq!(
            custom.attributes.keys().collect::<Vec<_>>(),
            vec!["Attribute0", "Attribute1", "Attribute2"]
        );
        assert_eq!(custom.get("Attribute1").unwrap().as_f64(), Some(12.0));
    }
}
