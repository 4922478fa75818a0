//! Mouse-release interception on rendered instances.

use cranpose_designer::*;
use cranpose_designer_testing::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, PointerHandler) {
    let hits = Rc::new(Cell::new(0));
    let handler = PointerHandler::new({
        let hits = hits.clone();
        move |_| hits.set(hits.get() + 1)
    });
    (hits, handler)
}

#[test]
fn release_on_leaf_selects_it_and_stops_everything_else() {
    let mut rule = DesignerTestRule::new();
    rule.place("label", Rect::new(5.0, 5.0, 60.0, 18.0));
    let (native_hits, native) = counter();
    let (ancestor_hits, ancestor) = counter();
    rule.host_mut().add_native_listener(native);
    rule.host_mut().add_ancestor_listener(ancestor);

    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = rule.configuration(WidgetModel::new("l1", "Label"), PropertyMap::new());
    let (nodes, _) = rule
        .render_and_commit(&mut label, incoming, Vec::new())
        .expect("commit");
    assert_eq!(overlay_count(&nodes), 0);

    let release = rule
        .host()
        .release(&nodes, ReleaseTarget::Primary, Point::new(10.0, 10.0))
        .expect("primary element");

    assert_eq!(release.delivered, 1);
    assert_eq!(release.event.propagation(), Propagation::StoppedImmediately);
    assert_eq!(native_hits.get(), 0, "component behaviour stays inert");
    assert_eq!(ancestor_hits.get(), 0);

    let report = rule.selection().last_report().expect("focus reported");
    assert_eq!(report.active_widget_id, WidgetId::new("l1"));
    assert_rect_approx_eq(
        report.active_widget_dimensions,
        Rect::new(5.0, 5.0, 60.0, 18.0),
        0.01,
        "label geometry",
    );
    assert_eq!(rule.selection().report_count(), 1);
    assert_eq!(
        rule.selection().active_widget_id(),
        Some(WidgetId::new("l1"))
    );
}

#[test]
fn handler_without_event_does_nothing() {
    let mut rule = DesignerTestRule::new();
    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = rule.configuration(WidgetModel::new("l1", "Label"), PropertyMap::new());
    let (nodes, _) = rule
        .render_and_commit(&mut label, incoming, Vec::new())
        .expect("commit");
    let lookups_before = rule.measurements().lookups();

    let handler = nodes
        .iter()
        .find_map(|node| node.as_element().and_then(|e| e.on_mouse_up.clone()))
        .expect("handler attached");
    handler.call(None);

    assert_eq!(rule.selection().report_count(), 0);
    assert_eq!(rule.measurements().lookups(), lookups_before);
}

#[test]
fn each_release_reports_once() {
    let mut rule = DesignerTestRule::new();
    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = rule.configuration(WidgetModel::new("l1", "Label"), PropertyMap::new());
    let (nodes, _) = rule
        .render_and_commit(&mut label, incoming, Vec::new())
        .expect("commit");

    for expected in 1..=3 {
        rule.host()
            .release(&nodes, ReleaseTarget::Primary, Point::ZERO)
            .expect("primary element");
        assert_eq!(rule.selection().report_count(), expected);
    }
}

#[test]
fn release_without_focus_callback_only_stops_event() {
    let rule = DesignerTestRule::new();
    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = EditableConfiguration::default().with_widget(WidgetModel::new("l1", "Label"));
    let nodes = label.render(incoming, Vec::new());

    let release = rule
        .host()
        .release(&nodes, ReleaseTarget::Primary, Point::ZERO)
        .expect("primary element");

    assert!(release.event.is_propagation_stopped());
    assert_eq!(rule.selection().report_count(), 0);
}

#[test]
fn geometry_is_measured_at_release_time() {
    let mut rule = DesignerTestRule::new();
    rule.place("label", Rect::new(0.0, 0.0, 10.0, 10.0));
    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = rule.configuration(WidgetModel::new("l1", "Label"), PropertyMap::new());
    let (first, _) = rule
        .render_and_commit(&mut label, incoming, Vec::new())
        .expect("first commit");
    rule.place("label", Rect::new(0.0, 30.0, 10.0, 10.0));

    rule.host()
        .release(&first, ReleaseTarget::Primary, Point::ZERO)
        .expect("primary element");

    assert_eq!(label.key(), Some(NodeKey::new("label")));
    assert_rect_approx_eq(
        rule.selection().last_report().and_then(|r| r.active_widget_dimensions),
        Rect::new(0.0, 30.0, 10.0, 10.0),
        0.01,
        "measured at release time",
    );
}

#[test]
fn release_after_node_leaves_layout_reports_no_geometry() {
    let mut rule = DesignerTestRule::new();
    rule.place("label", Rect::new(0.0, 0.0, 10.0, 10.0));
    let mut label = rule.adapter(TestLabel::new("label"));
    let incoming = rule.configuration(WidgetModel::new("l1", "Label"), PropertyMap::new());
    let (nodes, _) = rule
        .render_and_commit(&mut label, incoming, Vec::new())
        .expect("commit");
    rule.measurements().remove(&NodeKey::new("label"));

    rule.host()
        .release(&nodes, ReleaseTarget::Primary, Point::ZERO)
        .expect("primary element");

    let report = rule.selection().last_report().expect("focus still reported");
    assert_eq!(report.active_widget_id, WidgetId::new("l1"));
    assert_eq!(report.active_widget_dimensions, None);
}
