//! Output nodes produced by wrapped components and by the adapter.

use crate::geometry::FocusGeometry;
use crate::pointer::PointerHandler;
use crate::props::PropertyMap;
use crate::widget::WidgetModel;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// Identity of a rendered node among its siblings. Also the lookup key of the
/// measurement service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(Rc<str>);

impl NodeKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Rc::from(key.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// A genuine element: something the host paints directly.
#[derive(Clone, Debug, Default)]
pub struct ElementNode {
    pub tag: String,
    pub key: Option<NodeKey>,
    pub properties: PropertyMap,
    /// Back-reference to the design-time model, set on editor meta-nodes.
    pub widget: Option<Rc<WidgetModel>>,
    pub on_mouse_up: Option<PointerHandler>,
    pub children: Vec<RenderNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<NodeKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_widget(mut self, widget: impl Into<Rc<WidgetModel>>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    pub fn with_children(mut self, children: Vec<RenderNode>) -> Self {
        self.children = children;
        self
    }
}

/// A nested component invocation, expanded later by the host.
#[derive(Clone, Debug, Default)]
pub struct ComponentNode {
    pub name: String,
    pub key: Option<NodeKey>,
    pub widget: Option<Rc<WidgetModel>>,
    pub props: PropertyMap,
}

impl ComponentNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_widget(mut self, widget: impl Into<Rc<WidgetModel>>) -> Self {
        self.widget = Some(widget.into());
        self
    }
}

/// Transparent surface painted above a component whose own events would
/// conflict with editing.
#[derive(Clone, Debug)]
pub struct OverlayNode {
    pub dimensions: Option<FocusGeometry>,
    pub on_mouse_up: PointerHandler,
}

pub type CommitHook = Rc<dyn Fn()>;

/// Invisible re-measurement trigger. Paints nothing; the host runs
/// `on_commit` exactly once each time the node is committed, whether it was
/// inserted or reconciled in place under its key.
#[derive(Clone)]
pub struct FocusTriggerNode {
    pub key: NodeKey,
    pub on_commit: CommitHook,
}

impl FocusTriggerNode {
    pub fn commit(&self) {
        (self.on_commit)()
    }
}

impl fmt::Debug for FocusTriggerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTriggerNode")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub enum RenderNode {
    Element(ElementNode),
    Component(ComponentNode),
    Overlay(OverlayNode),
    FocusTrigger(FocusTriggerNode),
}

impl RenderNode {
    pub fn key(&self) -> Option<&NodeKey> {
        match self {
            RenderNode::Element(element) => element.key.as_ref(),
            RenderNode::Component(component) => component.key.as_ref(),
            RenderNode::Overlay(_) => None,
            RenderNode::FocusTrigger(trigger) => Some(&trigger.key),
        }
    }

    pub fn widget(&self) -> Option<&WidgetModel> {
        match self {
            RenderNode::Element(element) => element.widget.as_deref(),
            RenderNode::Component(component) => component.widget.as_deref(),
            RenderNode::Overlay(_) | RenderNode::FocusTrigger(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            RenderNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            RenderNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// True for the editor's insertion caret.
    pub fn is_cursor(&self) -> bool {
        self.widget().is_some_and(WidgetModel::is_cursor)
    }
}

impl From<ElementNode> for RenderNode {
    fn from(element: ElementNode) -> Self {
        RenderNode::Element(element)
    }
}

impl From<ComponentNode> for RenderNode {
    fn from(component: ComponentNode) -> Self {
        RenderNode::Component(component)
    }
}

/// Final sequence handed back to the host: primary output, optional overlay,
/// optional focus trigger.
pub type NodeSequence = SmallVec<[RenderNode; 4]>;

/// What a wrapped component renders.
#[derive(Clone, Debug)]
pub enum RenderOutput {
    Single(RenderNode),
    Sequence(Vec<RenderNode>),
}

impl From<ElementNode> for RenderOutput {
    fn from(element: ElementNode) -> Self {
        RenderOutput::Single(element.into())
    }
}

impl From<Vec<RenderNode>> for RenderOutput {
    fn from(nodes: Vec<RenderNode>) -> Self {
        RenderOutput::Sequence(nodes)
    }
}
