use crate::model::FloorPlanDocument;

#[test]
fn from_json_str_tolerates_minimal_rooms() {
    let doc = FloorPlanDocument::from_json_str(
        r#"{
            "rooms": [
                { "type": "bedroom", "name": "Bedroom 1", "width": 4.0, "depth": 3.0 },
                { "type": "kitchen", "name": "Kitchen", "width": 5.0, "depth": 4.0, "floor": 1 }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(doc.rooms.len(), 2);
    assert_eq!(doc.rooms[0].floor, 0);
    assert_eq!(doc.rooms[1].floor, 1);
    assert!(doc.rooms[0].x.is_none());
    assert!(doc.rooms[0].features.is_empty());
    assert!(doc.display_name().is_none());
}

#[test]
fn from_json_str_accepts_camel_case_aliases() {
    let doc = FloorPlanDocument::from_json_str(
        r#"{ "rooms": [], "totalArea": 182.5, "designName": "The Meridian" }"#,
    )
    .unwrap();
    assert_eq!(doc.total_area, Some(182.5));
    assert_eq!(doc.display_name(), Some("The Meridian"));
}

#[test]
fn from_json_str_rejects_malformed_json() {
    let err = FloorPlanDocument::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().contains("JSON"));
}

#[test]
fn display_name_prefers_design_name_over_variant() {
    let doc = FloorPlanDocument {
        design_name: Some("Aurora 24".to_string()),
        variant_name: Some("Mirrored".to_string()),
        ..FloorPlanDocument::default()
    };
    assert_eq!(doc.display_name(), Some("Aurora 24"));

    let doc = FloorPlanDocument {
        design_name: Some("  ".to_string()),
        variant_name: Some("Mirrored".to_string()),
        ..FloorPlanDocument::default()
    };
    assert_eq!(doc.display_name(), Some("Mirrored"));
}

#[test]
fn display_area_defaults_to_width_times_depth() {
    let doc = FloorPlanDocument::from_json_str(
        r#"{ "rooms": [ { "type": "bedroom", "name": "B1", "width": 4.0, "depth": 3.25 } ] }"#,
    )
    .unwrap();
    let r = &doc.rooms[0];
    assert!((r.display_area() - 13.0).abs() < 1e-9);
}

#[test]
fn explicit_area_is_authoritative_for_display() {
    let doc = FloorPlanDocument::from_json_str(
        r#"{ "rooms": [ { "type": "living", "name": "L", "width": 6.0, "depth": 5.0, "area": 27.5 } ] }"#,
    )
    .unwrap();
    assert_eq!(doc.rooms[0].display_area(), 27.5);
}

#[test]
fn floors_are_sorted_and_distinct() {
    let doc = FloorPlanDocument::from_json_str(
        r#"{
            "rooms": [
                { "type": "bedroom", "name": "B1", "width": 4, "depth": 3, "floor": 1 },
                { "type": "kitchen", "name": "K", "width": 5, "depth": 4 },
                { "type": "bedroom", "name": "B2", "width": 4, "depth": 3, "floor": 1 }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(doc.floors(), vec![0, 1]);
    assert_eq!(doc.rooms_on(1).count(), 2);
    assert!((doc.floor_area(1) - 24.0).abs() < 1e-9);
    assert!((doc.floor_area(0) - 20.0).abs() < 1e-9);
}
