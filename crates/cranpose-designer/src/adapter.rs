//! The design-time wrapper around a user component.

use crate::component::DesignComponent;
use crate::config::DesignerConfig;
use crate::configuration::EditableConfiguration;
use crate::error::DesignerError;
use crate::node::{NodeKey, NodeSequence, RenderNode};
use crate::resolver::resolve_configuration;
use crate::services::HostContext;
use std::cell::RefCell;
use std::rc::Rc;

/// State shared between an instance and the handlers it hands out.
#[derive(Debug, Default)]
pub(crate) struct InstanceState {
    key: RefCell<Option<NodeKey>>,
}

impl InstanceState {
    pub(crate) fn key(&self) -> Option<NodeKey> {
        self.key.borrow().clone()
    }

    pub(crate) fn set_key(&self, key: Option<NodeKey>) {
        *self.key.borrow_mut() = key;
    }
}

/// One live, editor-aware instance of `C`.
///
/// The host creates it when the component mounts, drives [`render`] once per
/// render cycle and drops it on unmount.
///
/// [`render`]: ComponentDesignAdapter::render
pub struct ComponentDesignAdapter<C> {
    pub(crate) component: C,
    pub(crate) config: Rc<DesignerConfig>,
    pub(crate) host: HostContext,
    pub(crate) state: Rc<InstanceState>,
    pub(crate) children: Vec<RenderNode>,
    pub(crate) resolved: EditableConfiguration,
}

/// Wraps `component` with the default [`DesignerConfig`].
pub fn design_adapter<C: DesignComponent>(component: C, host: HostContext) -> ComponentDesignAdapter<C> {
    ComponentDesignAdapter::new(component, host, Rc::new(DesignerConfig::default()))
}

impl<C: DesignComponent> ComponentDesignAdapter<C> {
    pub fn new(component: C, host: HostContext, config: Rc<DesignerConfig>) -> Self {
        Self {
            component,
            config,
            host,
            state: Rc::new(InstanceState::default()),
            children: Vec::new(),
            resolved: EditableConfiguration::default(),
        }
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    /// Key of the primary node recorded by the latest render.
    pub fn key(&self) -> Option<NodeKey> {
        self.state.key()
    }

    /// Like [`key`](Self::key), but reports a keyless primary node as an
    /// error for integrators who want to surface it.
    pub fn checked_primary_key(&self) -> Result<NodeKey, DesignerError> {
        self.state.key().ok_or_else(|| DesignerError::MissingPrimaryKey {
            widget: self.resolved.widget_id().cloned(),
        })
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    /// Configuration resolved for the latest render.
    pub fn properties(&self) -> &EditableConfiguration {
        &self.resolved
    }

    /// Resolves `incoming` against the current children. Pure.
    pub fn resolve_properties(&self, incoming: EditableConfiguration) -> EditableConfiguration {
        resolve_configuration(&self.component, &self.children, &self.config, incoming)
    }

    /// Runs one render cycle: resolve, render the wrapped component,
    /// post-process its output.
    pub fn render(
        &mut self,
        incoming: EditableConfiguration,
        children: Vec<RenderNode>,
    ) -> NodeSequence {
        self.children = children;
        self.resolved = self.resolve_properties(incoming);
        let output = self.component.render(&self.resolved, &self.children);
        self.postprocess(output)
    }
}
