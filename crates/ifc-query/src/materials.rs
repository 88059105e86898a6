// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material resolution
//!
//! Materials attach through `IfcRelAssociatesMaterial`. The relating
//! material may be a single material, a composite (layer set, constituent
//! set, profile set or material list) or a usage pointing at a set.
//! Composites flatten one level to the materials of their parts.

use crate::accessor::EntityAccessor;
use crate::expand::{AttributeExpander, ExpansionDepth};
use crate::matcher::TypeMatcher;

use ifc_query_model::{codes, DecodedEntity, EntityId, ExpandedEntity, QueryResult, RelationshipKind};

/// Shape of a relating material, with its part ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum MaterialSelect {
    /// `IfcMaterial`
    Single(EntityId),
    /// Layer set with its layers
    LayerSet(Vec<EntityId>),
    /// Material list with its materials
    List(Vec<EntityId>),
    /// Constituent set with its constituents
    ConstituentSet(Vec<EntityId>),
    /// Profile set with its profiles
    ProfileSet(Vec<EntityId>),
    /// Anything else, reported as-is
    Other(EntityId),
}

impl MaterialSelect {
    /// Slot of a part's `Material` attribute, `None` when the parts are the
    /// materials themselves
    fn part_material_slot(&self) -> Option<usize> {
        match self {
            MaterialSelect::LayerSet(_) => Some(0),
            MaterialSelect::ConstituentSet(_) | MaterialSelect::ProfileSet(_) => Some(2),
            _ => None,
        }
    }
}

pub(crate) struct MaterialResolver<'a> {
    accessor: &'a EntityAccessor<'a>,
    matcher: &'a TypeMatcher<'a>,
    expander: AttributeExpander<'a>,
}

impl<'a> MaterialResolver<'a> {
    pub fn new(accessor: &'a EntityAccessor<'a>, matcher: &'a TypeMatcher<'a>) -> Self {
        Self {
            accessor,
            matcher,
            expander: AttributeExpander::new(accessor, matcher),
        }
    }

    /// Materials associated with `id`, fully expanded
    ///
    /// Relationship discovery order, then declared part order.
    pub async fn materials_of(&self, id: EntityId) -> QueryResult<Vec<ExpandedEntity>> {
        self.accessor.entity(id).await?;

        let mut material_ids = Vec::new();
        for relating in self
            .accessor
            .related_via(id, RelationshipKind::AssociatesMaterial)
            .await?
        {
            let Some(entity) = self.accessor.try_entity(relating).await? else {
                log::debug!("Skipping dangling material {} on {}", relating, id);
                continue;
            };
            let select = self.classify(&entity).await?;
            material_ids.extend(self.flatten(select).await?);
        }

        let mut out = Vec::with_capacity(material_ids.len());
        for material_id in material_ids {
            if let Some(material) = self
                .expander
                .try_expand_id(material_id, ExpansionDepth::Unbounded)
                .await?
            {
                out.push(material);
            }
        }
        Ok(out)
    }

    /// Classify a relating material, following one usage hop to its set
    async fn classify(&self, entity: &DecodedEntity) -> QueryResult<MaterialSelect> {
        let usage_slot = if self.matcher.entity_is_a(entity, codes::IFCMATERIALLAYERSETUSAGE)
            || self.matcher.entity_is_a(entity, codes::IFCMATERIALPROFILESETUSAGE)
        {
            Some(0)
        } else {
            None
        };

        if let Some(slot) = usage_slot {
            let Some(set_id) = entity.get_ref(slot) else {
                log::debug!("Material usage {} has no set", entity.id);
                return Ok(MaterialSelect::Other(entity.id));
            };
            return match self.accessor.try_entity(set_id).await? {
                Some(set) => Ok(self.classify_set(&set)),
                None => {
                    log::debug!("Material usage {} points at missing {}", entity.id, set_id);
                    Ok(MaterialSelect::Other(entity.id))
                }
            };
        }

        Ok(self.classify_set(entity))
    }

    fn classify_set(&self, entity: &DecodedEntity) -> MaterialSelect {
        let is = |code| self.matcher.entity_is_a(entity, code);

        if is(codes::IFCMATERIAL) {
            MaterialSelect::Single(entity.id)
        } else if is(codes::IFCMATERIALLAYERSET) {
            MaterialSelect::LayerSet(entity.get_refs(0))
        } else if is(codes::IFCMATERIALLIST) {
            MaterialSelect::List(entity.get_refs(0))
        } else if is(codes::IFCMATERIALCONSTITUENTSET) {
            MaterialSelect::ConstituentSet(entity.get_refs(2))
        } else if is(codes::IFCMATERIALPROFILESET) {
            MaterialSelect::ProfileSet(entity.get_refs(2))
        } else {
            MaterialSelect::Other(entity.id)
        }
    }

    /// Material ids of a select, in declared order
    async fn flatten(&self, select: MaterialSelect) -> QueryResult<Vec<EntityId>> {
        let slot = select.part_material_slot();
        let parts = match select {
            MaterialSelect::Single(id) | MaterialSelect::Other(id) => return Ok(vec![id]),
            MaterialSelect::List(ids) => return Ok(ids),
            MaterialSelect::LayerSet(parts)
            | MaterialSelect::ConstituentSet(parts)
            | MaterialSelect::ProfileSet(parts) => parts,
        };
        let Some(slot) = slot else {
            return Ok(parts);
        };

        let mut out = Vec::with_capacity(parts.len());
        for part_id in parts {
            let Some(part) = self.accessor.try_entity(part_id).await? else {
                log::debug!("Skipping missing material part {}", part_id);
                continue;
            };
            match part.get_ref(slot) {
                Some(material) => out.push(material),
                None => log::debug!("Material part {} has no material", part_id),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_query_model::{ModelHandle, QueryError, SchemaRegistry};
    use ifc_query_step::StepStore;
    use std::sync::Arc;

    const MATERIAL_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCCOLUMN('0col',$,'Column',$,$,$,$,$,$);
#2=IFCMATERIAL('Metal - Steel - 345 MPa',$,'Steel');
#3=IFCRELASSOCIATESMATERIAL('0rel1',$,$,$,(#1,#10),#2);
#10=IFCWALL('0wall',$,'Wall',$,$,$,$,$,$);
#11=IFCMATERIAL('Concrete',$,$);
#12=IFCMATERIAL('Insulation',$,$);
#13=IFCMATERIALLAYER(#11,0.2,$,$,$,$,$);
#14=IFCMATERIALLAYER(#12,0.1,$,$,$,$,$);
#15=IFCMATERIALLAYERSET((#13,#14),'Wall Layers',$);
#16=IFCMATERIALLAYERSETUSAGE(#15,.AXIS2.,.POSITIVE.,0.,$);
#17=IFCRELASSOCIATESMATERIAL('0rel2',$,$,$,(#10),#16);
#20=IFCDOOR('0door',$,'Door',$,$,$,$,$,$,$,$,$,$);
#21=IFCMATERIALLIST((#11,#2));
#22=IFCRELASSOCIATESMATERIAL('0rel3',$,$,$,(#20),#21);
#30=IFCPLATE('0plate',$,'Plate',$,$,$,$,$,$);
#31=IFCMATERIALCONSTITUENT('Frame',$,#2,0.4,$);
#32=IFCMATERIALCONSTITUENT('Glazing',$,$,0.6,$);
#33=IFCMATERIALCONSTITUENTSET('Panel',$,(#31,#32));
#34=IFCRELASSOCIATESMATERIAL('0rel4',$,$,$,(#30),#33);
#40=IFCBEAM('0beam',$,'Beam',$,$,$,$,$,$);
#41=IFCMATERIALPROFILE('HEA',$,#2,$,$,$);
#42=IFCMATERIALPROFILESET('Beam',$,(#41),$);
#43=IFCMATERIALPROFILESETUSAGE(#42,$,$);
#44=IFCRELASSOCIATESMATERIAL('0rel5',$,$,$,(#40),#43);
#50=IFCSLAB('0slab',$,'Slab',$,$,$,$,$,$);
#51=IFCRELASSOCIATESMATERIAL('0rel6',$,$,$,(#50),#999);
ENDSEC;
END-ISO-10303-21;
"#;

    struct Fixture {
        store: StepStore,
        model: ModelHandle,
        registry: Arc<SchemaRegistry>,
    }

    impl Fixture {
        fn new() -> Self {
            let store = StepStore::new();
            let model = store.open_model(MATERIAL_IFC).unwrap();
            Self {
                store,
                model,
                registry: SchemaRegistry::ifc4(),
            }
        }

        async fn material_names(&self, id: u32) -> Vec<String> {
            let accessor = EntityAccessor::new(&self.store, self.model);
            let matcher = TypeMatcher::new(self.registry.as_ref());
            let resolver = MaterialResolver::new(&accessor, &matcher);
            resolver
                .materials_of(EntityId(id))
                .await
                .unwrap()
                .iter()
                .map(|m| m.name().unwrap_or_default().to_string())
                .collect()
        }
    }

    #[tokio::test]
    async fn test_single_material() {
        let fx = Fixture::new();
        assert_eq!(fx.material_names(1).await, vec!["Metal - Steel - 345 MPa"]);
    }

    #[tokio::test]
    async fn test_layer_set_usage_flattens_to_layer_materials() {
        let fx = Fixture::new();
        assert_eq!(
            fx.material_names(10).await,
            vec!["Metal - Steel - 345 MPa", "Concrete", "Insulation"]
        );
    }

    #[tokio::test]
    async fn test_material_list_and_sets() {
        let fx = Fixture::new();
        assert_eq!(fx.material_names(20).await, vec!["Concrete", "Metal - Steel - 345 MPa"]);
        // Constituent without a material is skipped
        assert_eq!(fx.material_names(30).await, vec!["Metal - Steel - 345 MPa"]);
        assert_eq!(fx.material_names(40).await, vec!["Metal - Steel - 345 MPa"]);
    }

    #[tokio::test]
    async fn test_missing_material_and_entity() {
        let fx = Fixture::new();
        assert!(fx.material_names(50).await.is_empty());
        assert!(fx.material_names(2).await.is_empty());

        let accessor = EntityAccessor::new(&fx.store, fx.model);
        let matcher = TypeMatcher::new(fx.registry.as_ref());
        let resolver = MaterialResolver::new(&accessor, &matcher);
        assert_eq!(
            resolver.materials_of(EntityId(404)).await.unwrap_err(),
            QueryError::EntityNotFound(EntityId(404))
        );
    }

    #[test]
    fn test_part_material_slots() {
        assert_eq!(MaterialSelect::LayerSet(Vec::new()).part_material_slot(), Some(0));
        assert_eq!(MaterialSelect::ProfileSet(Vec::new()).part_material_slot(), Some(2));
        assert_eq!(MaterialSelect::List(Vec::new()).part_material_slot(), None);
        assert_eq!(MaterialSelect::Single(EntityId(1)).part_material_slot(), None);
    }
}
