/// Determinism and stacking-order tests
///
/// These tests validate that:
/// - Converting the same snapshot twice yields byte-identical output
/// - Every emitted zIndex is non-negative
/// - zIndex follows discovery order across all component kinds
/// - No collection is ever serialized empty
use blueprint_converter::{convert, Converter};
use blueprint_scene::{GroupNode, LineNode, Paint, Rect, RectangleNode, SceneNode, TextNode};
use serde_json::Value;

/// A card with a header row, an avatar slot, a divider and some noise
fn sample_card() -> SceneNode {
    let header = GroupNode::new(Rect::new(0.0, 0.0, 320.0, 48.0))
        .with_child(
            RectangleNode::new(Rect::new(0.0, 0.0, 320.0, 48.0))
                .with_fill(Paint::solid(0.1, 0.2, 0.3))
                .with_corner_radius(8.0),
        )
        .with_child(
            TextNode::new("Order #42", Rect::new(16.0, 12.0, 120.0, 24.0))
                .with_fill(Paint::solid(1.0, 1.0, 1.0)),
        )
        .with_child(
            RectangleNode::new(Rect::new(272.0, 4.0, 40.0, 40.0))
                .with_fill(Paint::image())
                .as_asset(),
        );

    GroupNode::new(Rect::new(0.0, 0.0, 320.0, 200.0))
        .with_child(
            RectangleNode::new(Rect::new(0.0, 0.0, 320.0, 200.0))
                .with_fill(Paint::solid(1.0, 1.0, 1.0))
                .with_stroke(Paint::solid(0.9, 0.9, 0.9), 1.0),
        )
        .with_child(header)
        .with_child(
            LineNode::new(Rect::new(16.0, 120.0, 288.0, 1.0))
                .with_stroke(Paint::solid(0.9, 0.9, 0.9), 1.0),
        )
        .with_child(
            TextNode::new("hidden note", Rect::new(16.0, 150.0, 200.0, 20.0))
                .with_fill(Paint::solid(0.0, 0.0, 0.0))
                .hidden(),
        )
        .with_child(
            TextNode::new("Total: 12.00", Rect::new(16.0, 150.0, 200.0, 20.0))
                .with_fill(Paint::solid(0.0, 0.0, 0.0)),
        )
        .into()
}

#[test]
fn test_conversion_determinism() {
    let node = sample_card();
    let converter = Converter::new();

    let results: Vec<String> = (0..10)
        .map(|_| converter.convert_to_json(&node).expect("Conversion failed"))
        .collect();

    for i in 1..results.len() {
        assert_eq!(
            results[0], results[i],
            "Conversion {} differs from conversion 0",
            i
        );
    }
}

#[test]
fn test_z_indices_are_non_negative_and_unique() {
    let blueprint = convert(&sample_card()).expect("Conversion failed");

    let mut z_indices: Vec<i64> = blueprint.z_indices().collect();
    assert_eq!(z_indices.len(), 6);
    assert!(z_indices.iter().all(|z| *z >= 0));

    z_indices.sort_unstable();
    z_indices.dedup();
    assert_eq!(z_indices.len(), 6, "zIndex values must not collide");
}

#[test]
fn test_z_indices_follow_paint_order() {
    let blueprint = convert(&sample_card()).expect("Conversion failed");

    // background rectangle listed first: painted first, lowest zIndex
    let background = blueprint
        .blocks
        .iter()
        .find(|b| b.height == 200)
        .expect("Missing background block");
    assert_eq!(background.z_index, 0);

    // last listed child is on top of everything
    let total = blueprint
        .texts
        .iter()
        .find(|t| t.text == "Total: 12.00")
        .expect("Missing total text");
    assert_eq!(Some(total.z_index), blueprint.z_indices().max());

    // inside the header the avatar sits above the title, the title above the bar
    let avatar = blueprint.images[0].z_index;
    let title = blueprint
        .texts
        .iter()
        .find(|t| t.text == "Order #42")
        .map(|t| t.z_index)
        .expect("Missing title text");
    let bar = blueprint
        .blocks
        .iter()
        .find(|b| b.height == 48)
        .map(|b| b.z_index)
        .expect("Missing header bar");
    assert!(avatar > title && title > bar);
}

#[test]
fn test_present_collections_are_never_empty() {
    let json = Converter::new()
        .convert_to_json(&sample_card())
        .expect("Conversion failed");
    let value: Value = serde_json::from_str(&json).expect("Output is not valid JSON");

    for key in ["texts", "blocks", "images", "lines", "qrcodes"] {
        if let Some(collection) = value.get(key) {
            let items = collection.as_array().expect("Collections are arrays");
            assert!(!items.is_empty(), "{} serialized empty", key);
        }
    }
    assert!(value.get("qrcodes").is_none());
}
