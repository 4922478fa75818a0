//! Assertion helpers for designer tests.

use cranpose_designer::{props, NodeKey, Rect, RenderNode};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a reported geometry matches `expected` within `tolerance`.
pub fn assert_rect_approx_eq(actual: Option<Rect>, expected: Rect, tolerance: f32, msg: &str) {
    let Some(actual) = actual else {
        panic!("{msg}: expected geometry {expected:?}, got none");
    };
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{msg} - x"));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{msg} - y"));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{msg} - width"),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{msg} - height"),
    );
}

/// Focus-trigger keys present in `nodes`.
pub fn focus_trigger_keys(nodes: &[RenderNode]) -> Vec<NodeKey> {
    nodes
        .iter()
        .filter_map(|node| match node {
            RenderNode::FocusTrigger(trigger) => Some(trigger.key.clone()),
            _ => None,
        })
        .collect()
}

pub fn overlay_count(nodes: &[RenderNode]) -> usize {
    nodes
        .iter()
        .filter(|node| matches!(node, RenderNode::Overlay(_)))
        .count()
}

/// Assert that the element keyed `key` lists `class` under `property`.
pub fn assert_element_has_class(nodes: &[RenderNode], key: &str, property: &str, class: &str) {
    let element = nodes
        .iter()
        .filter_map(RenderNode::as_element)
        .find(|element| element.key.as_ref().is_some_and(|k| k.as_str() == key))
        .unwrap_or_else(|| panic!("no element keyed {key:?} in {nodes:?}"));
    let classes: Vec<&str> = props::class_list(&element.properties, property).collect();
    assert!(
        classes.contains(&class),
        "element {key:?}: class {class:?} not found in {classes:?}"
    );
}
