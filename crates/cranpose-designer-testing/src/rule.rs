//! Test rule wiring adapters to fake host services and an editor selection.

use crate::host::{CommitReport, TestHost};
use crate::selection::SelectionStore;
use crate::services::{FakeMeasurements, RecordingObserver};
use cranpose_designer::{
    ComponentDesignAdapter, DesignComponent, DesignerConfig, DesignerError,
    EditableConfiguration, HostContext, NodeKey, NodeSequence, PropertyMap, Rect, RenderNode,
    WidgetModel,
};
use std::rc::Rc;

/// Everything an adapter needs around it in a test, similar to a compose
/// test rule for the editor.
///
/// # Example
///
/// ```
/// use cranpose_designer::{PropertyMap, Rect, WidgetModel};
/// use cranpose_designer_testing::{DesignerTestRule, TestContainer};
///
/// let mut rule = DesignerTestRule::new();
/// rule.place("panel", Rect::new(0.0, 0.0, 100.0, 50.0));
/// let mut panel = rule.adapter(TestContainer::new("panel"));
/// let incoming = rule.configuration(WidgetModel::new("1", "Container"), PropertyMap::new());
/// let (nodes, _) = rule
///     .render_and_commit(&mut panel, incoming, Vec::new())
///     .expect("commit");
/// assert_eq!(nodes.len(), 1);
/// ```
pub struct DesignerTestRule {
    measurements: Rc<FakeMeasurements>,
    observer: Rc<RecordingObserver>,
    selection: Rc<SelectionStore>,
    config: Rc<DesignerConfig>,
    host: TestHost,
}

impl Default for DesignerTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerTestRule {
    pub fn new() -> Self {
        Self::with_config(DesignerConfig::default())
    }

    /// Panics when `config` does not validate. See [`Self::try_with_config`].
    pub fn with_config(config: DesignerConfig) -> Self {
        Self::try_with_config(config)
            .unwrap_or_else(|err| panic!("invalid designer config: {err}"))
    }

    pub fn try_with_config(config: DesignerConfig) -> Result<Self, DesignerError> {
        config.validate()?;
        Ok(Self {
            measurements: Rc::new(FakeMeasurements::new()),
            observer: Rc::new(RecordingObserver::new()),
            selection: SelectionStore::new(),
            config: Rc::new(config),
            host: TestHost::new(),
        })
    }

    pub fn host_context(&self) -> HostContext {
        HostContext::new(self.measurements.clone(), self.observer.clone())
    }

    pub fn adapter<C: DesignComponent>(&self, component: C) -> ComponentDesignAdapter<C> {
        ComponentDesignAdapter::new(component, self.host_context(), self.config.clone())
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn measurements(&self) -> &FakeMeasurements {
        &self.measurements
    }

    pub fn observer(&self) -> &RecordingObserver {
        &self.observer
    }

    pub fn selection(&self) -> &Rc<SelectionStore> {
        &self.selection
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut TestHost {
        &mut self.host
    }

    pub fn place(&self, key: impl Into<NodeKey>, rect: Rect) {
        self.measurements.place(key, rect);
    }

    /// Incoming configuration for `widget`, carrying the current selection and
    /// a focus callback wired to it.
    pub fn configuration(&self, widget: WidgetModel, props: PropertyMap) -> EditableConfiguration {
        EditableConfiguration {
            widget: Some(Rc::new(widget)),
            active_widget_id: self.selection.active_widget_id(),
            on_focus: Some(self.selection.on_focus()),
            props,
        }
    }

    /// Renders one cycle and commits the result to the host.
    pub fn render_and_commit<C: DesignComponent>(
        &mut self,
        adapter: &mut ComponentDesignAdapter<C>,
        incoming: EditableConfiguration,
        children: Vec<RenderNode>,
    ) -> Result<(NodeSequence, CommitReport), DesignerError> {
        let nodes = adapter.render(incoming, children);
        let report = self.host.commit(&nodes)?;
        Ok((nodes, report))
    }
}
