//! Design-time model of a widget placed in the editor.

use crate::props::PropertyMap;
use std::fmt;
use std::rc::Rc;

/// Stable identity of a widget in the design document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(Rc<str>);

impl WidgetId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Rc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// What placed the widget in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Authored by the end user.
    Authored,
    /// Insertion caret the editor drops into empty containers.
    Cursor,
}

impl WidgetKind {
    pub const CURSOR_NAME: &'static str = "Cursor";

    pub fn from_name(widget_name: &str) -> Self {
        if widget_name == Self::CURSOR_NAME {
            WidgetKind::Cursor
        } else {
            WidgetKind::Authored
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetModel {
    pub id: WidgetId,
    pub widget_name: String,
    pub kind: WidgetKind,
    /// Persisted values, falling back to the widget's defaults.
    pub properties: PropertyMap,
}

impl WidgetModel {
    pub fn new(id: impl Into<WidgetId>, widget_name: impl Into<String>) -> Self {
        let widget_name = widget_name.into();
        Self {
            id: id.into(),
            kind: WidgetKind::from_name(&widget_name),
            widget_name,
            properties: PropertyMap::new(),
        }
    }

    /// The editor's insertion caret.
    pub fn cursor(id: impl Into<WidgetId>) -> Self {
        Self::new(id, WidgetKind::CURSOR_NAME)
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn is_cursor(&self) -> bool {
        self.kind == WidgetKind::Cursor
    }
}
