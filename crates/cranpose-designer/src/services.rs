//! Host-provided services an adapted instance talks to.

use crate::geometry::FocusGeometry;
use crate::node::NodeKey;
use std::rc::Rc;

/// Reports on-screen bounding boxes, keyed like the output nodes.
pub trait MeasurementService {
    /// `None` for unknown keys, including the missing key of a keyless
    /// primary node.
    fn get(&self, key: Option<&NodeKey>) -> Option<FocusGeometry>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ObserveOptions {
    /// Notify on content-box size changes only. Moves are not reported.
    pub content_box: bool,
}

impl ObserveOptions {
    pub fn content_box() -> Self {
        Self { content_box: true }
    }
}

/// Layout-change notifications. Only registration is used here; change events
/// go straight to the editor.
pub trait LayoutObserver {
    fn observe(&self, key: Option<&NodeKey>, options: ObserveOptions);
}

/// Services scoped to one adapted instance.
#[derive(Clone)]
pub struct HostContext {
    pub measurements: Rc<dyn MeasurementService>,
    pub layout_observer: Rc<dyn LayoutObserver>,
}

impl HostContext {
    pub fn new(
        measurements: Rc<dyn MeasurementService>,
        layout_observer: Rc<dyn LayoutObserver>,
    ) -> Self {
        Self {
            measurements,
            layout_observer,
        }
    }
}
