//! Property resolution ahead of the wrapped component's render.
//!
//! Merge order is always defaults, then incoming overrides, then forced
//! fields. Later sources win field by field; nested values are replaced, never
//! merged. The persisted `widget.properties` map is never written to.

use crate::capabilities::DesignCapabilities;
use crate::classify::{classify_children, Occupancy};
use crate::config::DesignerConfig;
use crate::configuration::EditableConfiguration;
use crate::node::RenderNode;
use crate::props::{merge_layers, with_class, PropValue};

/// How a managed instance is displayed at design time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Container with nothing authored inside. The placeholder class is
    /// appended to the existing class list, which is otherwise kept.
    EmptyContainer,
    /// Value-bearing component with a blank persisted value; shows the
    /// component's default value instead.
    DefaultValue,
    Plain,
}

pub fn presentation<C>(
    component: &C,
    occupancy: Occupancy,
    config: &DesignerConfig,
    incoming: &EditableConfiguration,
) -> Presentation
where
    C: DesignCapabilities + ?Sized,
{
    if !occupancy.is_visually_empty() {
        return Presentation::Plain;
    }
    if component.is_container() {
        return Presentation::EmptyContainer;
    }
    let blank_value = incoming
        .widget
        .as_ref()
        .and_then(|widget| widget.properties.get(&config.value_property))
        .is_some_and(PropValue::is_empty_str);
    if component.declares_value() && blank_value {
        Presentation::DefaultValue
    } else {
        Presentation::Plain
    }
}

/// Produces the configuration the wrapped component renders with.
///
/// Unmanaged instances (no `widget`) come back untouched.
pub fn resolve_configuration<C>(
    component: &C,
    children: &[RenderNode],
    config: &DesignerConfig,
    incoming: EditableConfiguration,
) -> EditableConfiguration
where
    C: DesignCapabilities + ?Sized,
{
    let Some(widget) = incoming.widget.clone() else {
        log::trace!("resolver bypass: unmanaged instance");
        return incoming;
    };

    let occupancy = classify_children(children);
    let presentation = presentation(component, occupancy, config, &incoming);
    log::trace!(
        "resolving widget {} ({}): {occupancy:?} -> {presentation:?}",
        widget.id,
        widget.widget_name
    );

    let mut props = merge_layers([&widget.properties, &incoming.props]);
    match presentation {
        Presentation::EmptyContainer => {
            with_class(&mut props, &config.class_property, &config.placeholder_class);
        }
        Presentation::DefaultValue => {
            props.insert(
                config.value_property.clone(),
                PropValue::Str(component.default_value()),
            );
        }
        Presentation::Plain => {}
    }

    EditableConfiguration { props, ..incoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ElementNode;
    use crate::props::{class_list, props};
    use crate::widget::WidgetModel;

    struct Container;
    impl DesignCapabilities for Container {
        fn is_container(&self) -> bool {
            true
        }
    }

    struct Input;
    impl DesignCapabilities for Input {
        fn declares_value(&self) -> bool {
            true
        }

        fn default_value(&self) -> String {
            "Input".to_string()
        }
    }

    struct ValueContainer;
    impl DesignCapabilities for ValueContainer {
        fn is_container(&self) -> bool {
            true
        }

        fn declares_value(&self) -> bool {
            true
        }

        fn default_value(&self) -> String {
            "Group".to_string()
        }
    }

    fn cursor() -> RenderNode {
        ElementNode::new("caret")
            .with_widget(WidgetModel::cursor("cursor-1"))
            .into()
    }

    fn managed(properties: crate::props::PropertyMap) -> EditableConfiguration {
        EditableConfiguration::new(props([("class", "card")]))
            .with_widget(WidgetModel::new("1", "Widget").with_properties(properties))
    }

    #[test]
    fn unmanaged_is_identity() {
        let incoming = EditableConfiguration::new(props([("label", "x")]));
        let resolved =
            resolve_configuration(&Container, &[], &DesignerConfig::default(), incoming.clone());
        assert_eq!(resolved.props, incoming.props);
        assert!(resolved.widget.is_none());
    }

    #[test]
    fn empty_container_gets_placeholder_after_overrides() {
        let config = DesignerConfig::default();
        let incoming = managed(props([("class", "persisted"), ("gap", "4")]));
        let resolved = resolve_configuration(&Container, &[], &config, incoming);

        assert_eq!(
            class_list(&resolved.props, "class").collect::<Vec<_>>(),
            ["card", "designer-empty-container"]
        );
        assert_eq!(resolved.prop("gap"), Some(&PropValue::from("4")));
    }

    #[test]
    fn populated_container_is_plain() {
        let child: RenderNode = ElementNode::new("span").into();
        let resolved = resolve_configuration(
            &Container,
            &[child],
            &DesignerConfig::default(),
            managed(props([("gap", "4")])),
        );
        assert_eq!(
            class_list(&resolved.props, "class").collect::<Vec<_>>(),
            ["card"]
        );
    }

    #[test]
    fn blank_value_shows_default_without_touching_model() {
        let incoming = managed(props([("value", "")]));
        let widget = incoming.widget.clone().expect("managed");
        let resolved =
            resolve_configuration(&Input, &[], &DesignerConfig::default(), incoming);

        assert_eq!(resolved.prop("value"), Some(&PropValue::from("Input")));
        assert_eq!(widget.properties.get("value"), Some(&PropValue::from("")));
        assert_eq!(
            resolved.widget.expect("widget kept").properties.get("value"),
            Some(&PropValue::from(""))
        );
    }

    #[test]
    fn filled_value_is_kept() {
        let resolved = resolve_configuration(
            &Input,
            &[],
            &DesignerConfig::default(),
            managed(props([("value", "typed")])),
        );
        assert_eq!(resolved.prop("value"), Some(&PropValue::from("typed")));
    }

    #[test]
    fn forced_default_wins_over_incoming_blank() {
        // The forced field wins over everything, including incoming overrides.
        let mut incoming = managed(props([("value", "")]));
        incoming.props.insert("value".into(), PropValue::from(""));
        let resolved =
            resolve_configuration(&Input, &[], &DesignerConfig::default(), incoming);
        assert_eq!(resolved.prop("value"), Some(&PropValue::from("Input")));
    }

    #[test]
    fn cursor_only_child_still_shows_default_value() {
        let resolved = resolve_configuration(
            &Input,
            &[cursor()],
            &DesignerConfig::default(),
            managed(props([("value", "")])),
        );
        assert_eq!(resolved.prop("value"), Some(&PropValue::from("Input")));
    }

    #[test]
    fn empty_container_placeholder_takes_priority_over_default_value() {
        let config = DesignerConfig::default();
        let incoming = managed(props([("value", "")]));
        assert_eq!(
            presentation(&ValueContainer, Occupancy::Empty, &config, &incoming),
            Presentation::EmptyContainer
        );

        let resolved = resolve_configuration(&ValueContainer, &[cursor()], &config, incoming);
        assert_eq!(resolved.prop("value"), Some(&PropValue::from("")));
        assert_eq!(
            class_list(&resolved.props, "class").collect::<Vec<_>>(),
            ["card", "designer-empty-container"]
        );
    }
}
