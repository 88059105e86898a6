// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end query tests against the sample model.
//!
//! Each test loads `tests/models/sample.ifc` into a fresh store and queries
//! it through the public engine API.

use ifc_query::{IfcProperties, ItemList};
use ifc_query_model::{codes, AttributeField, EntityId, ModelHandle, QueryError};
use ifc_query_step::StepStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;

const SAMPLE_IFC: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/models/sample.ifc"
));

// ============================================================================
// Helper: open the sample model behind a fresh engine.
// ============================================================================

fn setup() -> (Arc<StepStore>, ModelHandle, IfcProperties) {
    let store = Arc::new(StepStore::new());
    let model = store.open_model(SAMPLE_IFC).unwrap();
    let properties = IfcProperties::new(store.clone());
    (store, model, properties)
}

fn ids(ids: &[u32]) -> Vec<EntityId> {
    ids.iter().copied().map(EntityId).collect()
}

// ============================================================================
// 1. Type enumeration
// ============================================================================

#[tokio::test]
async fn test_all_wall_standard_cases() {
    let (_, model, properties) = setup();

    let walls = properties
        .get_all_items_of_type(model, codes::IFCWALLSTANDARDCASE, false)
        .await
        .unwrap();

    assert_eq!(walls.len(), 17);
    assert_eq!(walls.ids()[0], EntityId(1000));
    assert_eq!(walls.ids()[16], EntityId(9989));
}

#[tokio::test]
async fn test_enumeration_includes_subtypes() {
    let (_, model, properties) = setup();

    let walls = properties
        .get_all_items_of_type(model, codes::IFCWALL, false)
        .await
        .unwrap();
    assert_eq!(walls.len(), 19);

    let doors = properties
        .get_all_items_of_type_name(model, "IfcDoor", false)
        .await
        .unwrap();
    assert_eq!(doors, ItemList::Ids(ids(&[4000])));

    let roofs = properties
        .get_all_items_of_type(model, codes::IFCROOF, false)
        .await
        .unwrap();
    assert!(roofs.is_empty());
}

#[tokio::test]
async fn test_verbose_enumeration_expands_one_level() {
    let (_, model, properties) = setup();

    let walls = properties
        .get_all_items_of_type(model, codes::IFCWALLSTANDARDCASE, true)
        .await
        .unwrap();
    let records = walls.as_expanded().unwrap();
    assert_eq!(records.len(), 17);
    assert!(records.iter().all(|wall| wall.global_id().is_some()));

    let history = records[0].get("OwnerHistory").unwrap().as_entity().unwrap();
    assert_eq!(history.type_name, "IFCOWNERHISTORY");
    assert_eq!(
        history.get("OwningUser"),
        Some(&AttributeField::Reference(EntityId(3)))
    );

    let json = serde_json::to_value(&walls).unwrap();
    assert!(json[0].get("GlobalId").is_some());
    assert_eq!(json[0]["expressID"], 1000);
}

#[tokio::test]
async fn test_id_lists_serialize_as_numbers() {
    let (_, model, properties) = setup();

    let doors = properties
        .get_all_items_of_type(model, codes::IFCDOOR, false)
        .await
        .unwrap();
    assert_eq!(serde_json::to_string(&doors).unwrap(), "[4000]");
}

// ============================================================================
// 2. Item properties
// ============================================================================

#[tokio::test]
async fn test_first_wall_details() {
    let (_, model, properties) = setup();

    let walls = properties
        .get_all_items_of_type(model, codes::IFCWALLSTANDARDCASE, false)
        .await
        .unwrap();
    let wall = properties
        .get_item_properties(model, walls.ids()[0], false)
        .await
        .unwrap();

    assert_eq!(wall.name(), Some("Basic Wall:150 Concrete:677248"));
    assert_eq!(wall.type_name, "IFCWALLSTANDARDCASE");
    assert_eq!(wall.type_code, Some(codes::IFCWALLSTANDARDCASE));
    assert_eq!(wall.get("OwnerHistory"), Some(&AttributeField::Reference(EntityId(5))));

    let json = serde_json::to_value(&wall).unwrap();
    assert_eq!(json["Name"]["value"], "Basic Wall:150 Concrete:677248");
    assert_eq!(json["Name"]["type"], "string");
    assert_eq!(json["OwnerHistory"]["type"], "reference");
    assert_eq!(json["OwnerHistory"]["value"], 5);
    assert!(json["Description"].is_null());
}

#[tokio::test]
async fn test_recursive_item_properties() {
    let (_, model, properties) = setup();

    let wall = properties
        .get_item_properties(model, EntityId(1000), true)
        .await
        .unwrap();

    let person = wall
        .get("OwnerHistory")
        .and_then(AttributeField::as_entity)
        .and_then(|history| history.get("OwningUser"))
        .and_then(AttributeField::as_entity)
        .and_then(|user| user.get("ThePerson"))
        .and_then(AttributeField::as_entity)
        .unwrap();
    assert_eq!(person.get("FamilyName").unwrap().as_str(), Some("Doe"));

    let placement = wall.get("ObjectPlacement").unwrap().as_entity().unwrap();
    assert!(placement.get("PlacementRelTo").unwrap().is_null());
}

#[tokio::test]
async fn test_unknown_entity() {
    let (_, model, properties) = setup();

    assert_eq!(
        properties
            .get_item_properties(model, EntityId(424242), false)
            .await
            .unwrap_err(),
        QueryError::EntityNotFound(EntityId(424242))
    );
}

// ============================================================================
// 3. Type names
// ============================================================================

#[test]
fn test_ifc_type_from_code() {
    let (_, _, properties) = setup();

    assert_eq!(
        properties.get_ifc_type(codes::IFCWALLSTANDARDCASE).unwrap(),
        "IFCWALLSTANDARDCASE"
    );
    assert_eq!(
        properties
            .get_ifc_type(properties.get_type_code("ifcbuildingstorey").unwrap())
            .unwrap(),
        "IFCBUILDINGSTOREY"
    );
}

// ============================================================================
// 4. Property sets
// ============================================================================

#[tokio::test]
async fn test_property_sets() {
    let (_, model, properties) = setup();

    let psets = properties
        .get_property_sets(model, EntityId(9989), false)
        .await
        .unwrap();

    // Six attachments: one repeats a set and one has no payload
    assert_eq!(psets.len(), 4);
    let names: Vec<_> = psets.iter().map(|p| p.name().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Pset_WallCommon", "Constraints", "Dimensions", "BaseQuantities"]
    );
    assert!(psets.iter().all(|p| !p.attributes.contains_key("HasProperties")));
}

#[tokio::test]
async fn test_property_sets_with_children() {
    let (_, model, properties) = setup();

    let psets = properties
        .get_property_sets(model, EntityId(9989), true)
        .await
        .unwrap();

    let has_properties = psets[0].get("HasProperties").unwrap().as_list().unwrap();
    assert_eq!(has_properties.len(), 3);
    let is_external = has_properties[0].as_entity().unwrap();
    assert_eq!(is_external.name(), Some("IsExternal"));

    // Units are dereferenced along with the property
    let constraints = psets[1].get("HasProperties").unwrap().as_list().unwrap();
    let unit = constraints[1]
        .as_entity()
        .and_then(|offset| offset.get("Unit"))
        .and_then(AttributeField::as_entity)
        .unwrap();
    assert_eq!(unit.type_name, "IFCSIUNIT");
    assert_eq!(unit.get("Name").unwrap().as_str(), Some("METRE"));

    let quantities = psets[3].get("Quantities").unwrap().as_list().unwrap();
    assert_eq!(quantities.len(), 2);

    let json = serde_json::to_value(&psets).unwrap();
    assert_eq!(json[0]["HasProperties"][0]["NominalValue"]["value"], true);
    assert_eq!(json[0]["HasProperties"][0]["NominalValue"]["label"], "IFCBOOLEAN");
}

#[tokio::test]
async fn test_elements_without_property_sets() {
    let (_, model, properties) = setup();

    let psets = properties
        .get_property_sets(model, EntityId(10258), true)
        .await
        .unwrap();
    assert!(psets.is_empty());
}

#[tokio::test]
async fn test_all_property_sets() {
    let (_, model, properties) = setup();

    let all = properties.get_all_property_sets(model, false).await.unwrap();
    let found: Vec<_> = all.iter().map(|p| p.express_id).collect();
    assert_eq!(found, ids(&[7004, 7007, 7010, 7013, 7031, 8002]));
}

#[tokio::test]
async fn test_type_properties() {
    let (_, model, properties) = setup();

    let types = properties
        .get_type_properties(model, EntityId(9989), true)
        .await
        .unwrap();

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name(), Some("Basic Wall:150 Concrete"));
    let pset = types[0].get("HasPropertySets").unwrap().as_list().unwrap()[0]
        .as_entity()
        .unwrap();
    assert_eq!(pset.name(), Some("Pset_WallTypeCommon"));
}

// ============================================================================
// 5. Materials
// ============================================================================

#[tokio::test]
async fn test_single_material() {
    let (_, model, properties) = setup();

    let materials = properties
        .get_materials_properties(model, EntityId(10258))
        .await
        .unwrap();

    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].name(), Some("Metal - Steel - 345 MPa"));
    let json = serde_json::to_value(&materials).unwrap();
    assert_eq!(json[0]["Name"]["value"], "Metal - Steel - 345 MPa");
}

#[tokio::test]
async fn test_composite_materials() {
    let (_, model, properties) = setup();

    let layered = properties
        .get_materials_properties(model, EntityId(1000))
        .await
        .unwrap();
    let names: Vec<_> = layered.iter().map(|m| m.name().unwrap()).collect();
    assert_eq!(
        names,
        vec!["Concrete - Cast-in-Place Concrete", "Insulation - Rigid"]
    );

    let listed = properties
        .get_materials_properties(model, EntityId(4000))
        .await
        .unwrap();
    let names: Vec<_> = listed.iter().map(|m| m.name().unwrap()).collect();
    assert_eq!(names, vec!["Wood - Oak", "Metal - Steel - 345 MPa"]);

    let none = properties
        .get_materials_properties(model, EntityId(9989))
        .await
        .unwrap();
    assert!(none.is_empty());
}

// ============================================================================
// 6. Spatial structure
// ============================================================================

#[tokio::test]
async fn test_spatial_structure() {
    let (_, model, properties) = setup();

    let project = properties.get_spatial_structure(model, false).await.unwrap();
    let site = &project.children[0];
    let building = &site.children[0];
    let storey = &building.children[0];

    assert_eq!(project.express_id, EntityId(119));
    assert_eq!(site.express_id, EntityId(148));
    assert_eq!(building.express_id, EntityId(129));
    assert_eq!(storey.express_id, EntityId(138));
    assert_eq!(storey.children.len(), 46);
    assert_eq!(storey.children[0].express_id, EntityId(1000));
    assert!(storey.properties.is_none());
}

#[tokio::test]
async fn test_spatial_structure_places_each_entity_once() {
    let (_, model, properties) = setup();

    let project = properties.get_spatial_structure(model, false).await.unwrap();

    // #1000 is also listed under Level 2 but Level 1 reaches it first
    let level2 = project.find(EntityId(139)).unwrap();
    assert_eq!(level2.child_ids(), ids(&[160, 6100, 6110]));
    assert_eq!(
        project.find(EntityId(160)).unwrap().child_ids(),
        ids(&[6200])
    );

    // Plates aggregated into the curtain wall stay out of the tree
    assert!(project.find(EntityId(3000)).unwrap().children.is_empty());
    assert!(project.find(EntityId(3001)).is_none());

    assert_eq!(project.node_count(), 55);
}

#[tokio::test]
async fn test_spatial_structure_with_properties() {
    let (_, model, properties) = setup();

    let project = properties.get_spatial_structure(model, true).await.unwrap();
    let storey = &project.children[0].children[0].children[0];
    let first = &storey.children[0];

    let attributes = first.properties.as_ref().unwrap();
    assert!(attributes.contains_key("GlobalId"));

    let json = serde_json::to_value(&project).unwrap();
    let element = &json["children"][0]["children"][0]["children"][0]["children"][0];
    assert!(element.get("GlobalId").is_some());
    assert_eq!(element["expressID"], 1000);
    assert_eq!(element["type"], "IFCWALLSTANDARDCASE");
    assert_eq!(element["children"].as_array().unwrap().len(), 0);
}

// ============================================================================
// 7. Invariants across queries
// ============================================================================

#[tokio::test]
async fn test_supertype_enumeration_covers_subtypes() {
    let (_, model, properties) = setup();

    let elements = properties
        .get_all_items_of_type(model, codes::IFCELEMENT, false)
        .await
        .unwrap()
        .ids();
    for code in [codes::IFCWALL, codes::IFCWALLSTANDARDCASE, codes::IFCCOLUMN, codes::IFCPLATE] {
        let subset = properties
            .get_all_items_of_type(model, code, false)
            .await
            .unwrap()
            .ids();
        assert!(subset.iter().all(|id| elements.contains(id)));
    }

    let mut unique = elements.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), elements.len());
}

#[tokio::test]
async fn test_verbose_records_match_item_properties() {
    let (_, model, properties) = setup();

    let verbose = properties
        .get_all_items_of_type(model, codes::IFCCOLUMN, true)
        .await
        .unwrap();
    for record in verbose.as_expanded().unwrap() {
        let direct = properties
            .get_item_properties(model, record.express_id, false)
            .await
            .unwrap();
        assert_eq!(record.type_name, direct.type_name);
        for (name, field) in direct.attributes.iter() {
            let expanded = record.get(name).unwrap();
            match field {
                AttributeField::Reference(id) => assert_eq!(expanded.entity_id(), Some(*id)),
                other => assert_eq!(expanded, other),
            }
        }
    }
}

#[tokio::test]
async fn test_property_sets_with_members_extend_plain_sets() {
    let (_, model, properties) = setup();

    let plain = properties
        .get_property_sets(model, EntityId(9989), false)
        .await
        .unwrap();
    let full = properties
        .get_property_sets(model, EntityId(9989), true)
        .await
        .unwrap();

    assert_eq!(plain.len(), full.len());
    for (plain, full) in plain.iter().zip(&full) {
        assert_eq!(plain.express_id, full.express_id);
        for (name, field) in plain.attributes.iter() {
            assert_eq!(full.get(name), Some(field));
        }
    }
}

#[tokio::test]
async fn test_queries_are_idempotent() {
    let (_, model, properties) = setup();

    let first = properties.get_spatial_structure(model, true).await.unwrap();
    let second = properties.get_spatial_structure(model, true).await.unwrap();
    assert_eq!(first, second);

    let psets = properties
        .get_property_sets(model, EntityId(9989), true)
        .await
        .unwrap();
    assert_eq!(
        psets,
        properties
            .get_property_sets(model, EntityId(9989), true)
            .await
            .unwrap()
    );
}

// ============================================================================
// 8. Model lifecycle and concurrency
// ============================================================================

#[tokio::test]
async fn test_models_are_independent() {
    let (store, first, properties) = setup();
    let second = store.open_model(SAMPLE_IFC).unwrap();
    assert_ne!(first, second);
    assert_eq!(store.metadata(second).unwrap().schema_version, "IFC2X3");

    store.close_model(first);
    assert_eq!(
        properties
            .get_all_items_of_type(first, codes::IFCWALL, false)
            .await
            .unwrap_err(),
        QueryError::ModelNotFound(first)
    );
    assert_eq!(
        properties
            .get_all_items_of_type(second, codes::IFCWALL, false)
            .await
            .unwrap()
            .len(),
        19
    );
}

#[tokio::test]
async fn test_concurrent_queries() {
    let (_, model, properties) = setup();

    let trees = futures_util::future::join_all(
        (0..4).map(|_| properties.get_spatial_structure(model, true)),
    )
    .await;
    let first = trees[0].as_ref().unwrap();
    assert!(trees.iter().all(|tree| tree.as_ref() == Ok(first)));

    let spawned = {
        let properties = properties.clone();
        tokio::spawn(async move { properties.get_property_sets(model, EntityId(9989), false).await })
    };
    assert_eq!(spawned.await.unwrap().unwrap().len(), 4);
}
