#![cfg(feature = "serde")]

use diagram_styles::{Routing, Shape, StyleError, StyleKind, Styles};
use serde_json::json;

#[test]
fn test_serialize_omits_unset_attributes() {
    let mut styles = Styles::new();
    styles
        .add_element_style("Person")
        .unwrap()
        .shape(Shape::Person)
        .font_size(22);
    styles
        .add_relationship_style("Asynchronous")
        .unwrap()
        .dashed(true)
        .routing(Routing::Orthogonal);

    let value = serde_json::to_value(&styles).unwrap();
    assert_eq!(
        value,
        json!({
            "elements": [
                { "tag": "Person", "shape": "Person", "fontSize": 22 }
            ],
            "relationships": [
                { "tag": "Asynchronous", "dashed": true, "routing": "Orthogonal" }
            ]
        })
    );
}

#[test]
fn test_deserialize_keeps_order_and_resolves() {
    let styles: Styles = serde_json::from_value(json!({
        "elements": [
            { "tag": "Element", "background": "#1168bd", "color": "#ffffff" },
            { "tag": "Database", "shape": "Cylinder", "width": 300 }
        ]
    }))
    .unwrap();

    let tags: Vec<&str> = styles.elements().iter().map(|s| s.tag()).collect();
    assert_eq!(tags, ["Element", "Database"]);
    assert!(styles.relationships().is_empty());

    let element: &[&str] = &["Element", "Container", "Database"];
    let style = styles.find_element_style(Some(element));
    assert_eq!(style.shape, Shape::Cylinder);
    assert_eq!(style.background, "#1168bd");
    assert_eq!((style.width, style.height), (300, 300));
}

#[test]
fn test_deserialize_rejects_duplicate_tags() {
    let result: Result<Styles, _> = serde_json::from_value(json!({
        "relationships": [
            { "tag": "Relationship", "thickness": 4 },
            { "tag": "Relationship", "thickness": 1 }
        ]
    }));

    let expected = StyleError::DuplicateTag {
        kind: StyleKind::Relationship,
        tag: "Relationship".to_string(),
    };
    let err = result.unwrap_err();
    assert!(err.to_string().contains(&expected.to_string()));
}
