//! Focus-outline compensation for position-only layout changes.
//!
//! The editor redraws its focus outline from layout-change notifications,
//! which observe the content box. A property change that only moves the
//! focused widget leaves the content box untouched, so no notification fires
//! and the outline goes stale. While an instance holds focus, every render
//! emits a [`FocusTriggerNode`] whose commit hook re-measures the primary node
//! and reports it again. The node is a re-measurement trigger, not a visual.
//!
//! The trigger always carries the same reserved key so the host reconciles it
//! in place: its hook fires once per committed render instead of the node
//! being torn down and re-inserted each time.

use crate::config::DesignerConfig;
use crate::configuration::EditableConfiguration;
use crate::interceptor::FocusReporter;
use crate::node::{FocusTriggerNode, NodeKey, RenderNode};
use crate::services::{HostContext, ObserveOptions};
use std::rc::Rc;

/// Returns the trigger for a focused instance, `None` otherwise.
pub(crate) fn focus_trigger(
    config: &DesignerConfig,
    host: &HostContext,
    resolved: &EditableConfiguration,
    primary_key: Option<&NodeKey>,
    reporter: FocusReporter,
) -> Option<RenderNode> {
    if !resolved.is_focused() {
        return None;
    }

    host.layout_observer
        .observe(primary_key, ObserveOptions::content_box());

    let key = config.focus_trigger_key();
    log::trace!("focus trigger {key} for {:?}", resolved.widget_id());
    Some(RenderNode::FocusTrigger(FocusTriggerNode {
        key,
        on_commit: Rc::new(move || reporter.report()),
    }))
}
