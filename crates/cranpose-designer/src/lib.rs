//! Design-time adapter for Cranpose components.
//!
//! [`ComponentDesignAdapter`] wraps an arbitrary component so it can live
//! inside the visual editor without touching its rendering code. Around each
//! render it:
//!
//! - resolves the component's configuration from persisted widget properties
//!   and incoming overrides, giving empty containers a placeholder class and
//!   blank values a default,
//! - records the primary node's key so its geometry can be measured,
//! - intercepts mouse releases (directly or through an overlay) and reports the
//!   widget to the editor's selection,
//! - re-reports the focused widget's geometry on every render, covering moves
//!   that content-box layout notifications miss.

mod adapter;
mod capabilities;
mod classify;
mod compensator;
mod component;
mod config;
mod configuration;
mod error;
mod geometry;
mod interceptor;
mod node;
pub mod pointer;
mod postprocess;
pub mod props;
mod resolver;
mod services;
mod widget;

pub use adapter::{design_adapter, ComponentDesignAdapter};
pub use capabilities::DesignCapabilities;
pub use classify::{classify_children, is_visually_empty, Occupancy};
pub use component::DesignComponent;
pub use config::DesignerConfig;
pub use configuration::{EditableConfiguration, FocusCallback, FocusPayload};
pub use error::DesignerError;
pub use geometry::{FocusGeometry, Point, Rect, Size};
pub use node::{
    CommitHook, ComponentNode, ElementNode, FocusTriggerNode, NodeKey, NodeSequence, OverlayNode,
    RenderNode, RenderOutput,
};
pub use pointer::{PointerDispatcher, PointerEvent, PointerHandler, Propagation};
pub use postprocess::normalize_output;
pub use props::{PropValue, PropertyMap};
pub use resolver::{presentation, resolve_configuration, Presentation};
pub use services::{HostContext, LayoutObserver, MeasurementService, ObserveOptions};
pub use widget::{WidgetId, WidgetKind, WidgetModel};

pub mod prelude {
    pub use crate::{
        design_adapter, ComponentDesignAdapter, DesignCapabilities, DesignComponent,
        DesignerConfig, EditableConfiguration, ElementNode, FocusPayload, HostContext, NodeKey,
        PropValue, PropertyMap, Rect, RenderNode, RenderOutput, WidgetId, WidgetModel,
    };
}
