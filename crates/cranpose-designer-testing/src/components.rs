//! Sample components covering each capability combination.

use cranpose_designer::{
    ComponentNode, DesignCapabilities, DesignComponent, EditableConfiguration, ElementNode,
    NodeKey, RenderNode, RenderOutput,
};

/// Layout container rendering its children inside one keyed element.
pub struct TestContainer {
    pub key: NodeKey,
}

impl TestContainer {
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self { key: key.into() }
    }
}

impl DesignCapabilities for TestContainer {
    fn is_container(&self) -> bool {
        true
    }
}

impl DesignComponent for TestContainer {
    fn render(&self, config: &EditableConfiguration, children: &[RenderNode]) -> RenderOutput {
        ElementNode::new("div")
            .with_key(self.key.clone())
            .with_properties(config.props.clone())
            .with_children(children.to_vec())
            .into()
    }
}

/// Form input: needs an overlay and shows `"Input"` while its value is blank.
pub struct TestInput {
    pub key: NodeKey,
}

impl TestInput {
    pub const DEFAULT_VALUE: &'static str = "Input";

    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self { key: key.into() }
    }
}

impl DesignCapabilities for TestInput {
    fn need_overlay(&self) -> bool {
        true
    }

    fn declares_value(&self) -> bool {
        true
    }

    fn default_value(&self) -> String {
        Self::DEFAULT_VALUE.to_string()
    }
}

impl DesignComponent for TestInput {
    fn render(&self, config: &EditableConfiguration, _children: &[RenderNode]) -> RenderOutput {
        ElementNode::new("input")
            .with_key(self.key.clone())
            .with_properties(config.props.clone())
            .into()
    }
}

/// Plain leaf rendering a tooltip invocation followed by its keyed element.
pub struct TestLabel {
    pub key: NodeKey,
}

impl TestLabel {
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self { key: key.into() }
    }
}

impl DesignCapabilities for TestLabel {}

impl DesignComponent for TestLabel {
    fn render(&self, config: &EditableConfiguration, _children: &[RenderNode]) -> RenderOutput {
        RenderOutput::Sequence(vec![
            ComponentNode::new("Tooltip").into(),
            ElementNode::new("span")
                .with_key(self.key.clone())
                .with_properties(config.props.clone())
                .into(),
        ])
    }
}

/// Renders nothing keyed, so its geometry can never be measured.
pub struct KeylessLeaf;

impl DesignCapabilities for KeylessLeaf {}

impl DesignComponent for KeylessLeaf {
    fn render(&self, config: &EditableConfiguration, _children: &[RenderNode]) -> RenderOutput {
        RenderOutput::Sequence(vec![ElementNode::new("hr")
            .with_properties(config.props.clone())
            .into()])
    }
}
