//! The configuration object an adapted component renders from.

use crate::geometry::FocusGeometry;
use crate::props::{PropValue, PropertyMap};
use crate::widget::{WidgetId, WidgetModel};
use std::fmt;
use std::rc::Rc;

/// Reported to the editor when a widget asks for focus.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusPayload {
    /// `None` when the primary node could not be measured; the outline
    /// renderer treats that as nothing to draw.
    pub active_widget_dimensions: Option<FocusGeometry>,
    pub active_widget_id: WidgetId,
}

pub type FocusCallback = Rc<dyn Fn(FocusPayload)>;

/// Configuration visible to the wrapped component for one render.
#[derive(Clone, Default)]
pub struct EditableConfiguration {
    /// Absent on instances the editor does not manage.
    pub widget: Option<Rc<WidgetModel>>,
    /// Read-only view of the editor's selection.
    pub active_widget_id: Option<WidgetId>,
    pub on_focus: Option<FocusCallback>,
    /// Pass-through configuration for the underlying component.
    pub props: PropertyMap,
}

impl EditableConfiguration {
    pub fn new(props: PropertyMap) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    pub fn with_widget(mut self, widget: impl Into<Rc<WidgetModel>>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    pub fn with_active_widget_id(mut self, id: Option<WidgetId>) -> Self {
        self.active_widget_id = id;
        self
    }

    pub fn with_on_focus(mut self, on_focus: impl Fn(FocusPayload) + 'static) -> Self {
        self.on_focus = Some(Rc::new(on_focus));
        self
    }

    pub fn widget_id(&self) -> Option<&WidgetId> {
        self.widget.as_ref().map(|widget| &widget.id)
    }

    /// True when this instance currently holds editor focus.
    pub fn is_focused(&self) -> bool {
        match (self.widget_id(), &self.active_widget_id) {
            (Some(id), Some(active)) => id == active,
            _ => false,
        }
    }

    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }
}

impl fmt::Debug for EditableConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableConfiguration")
            .field("widget", &self.widget)
            .field("active_widget_id", &self.active_widget_id)
            .field("on_focus", &self.on_focus.as_ref().map(|_| "provided"))
            .field("props", &self.props)
            .finish()
    }
}
