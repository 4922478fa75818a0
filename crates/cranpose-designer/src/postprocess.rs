//! Post-processing of a wrapped component's output.

use crate::adapter::ComponentDesignAdapter;
use crate::compensator::focus_trigger;
use crate::component::DesignComponent;
use crate::interceptor::{mouse_up_handler, FocusReporter};
use crate::node::{NodeSequence, OverlayNode, RenderNode, RenderOutput};
use smallvec::smallvec;

/// Flattens `output` into a sequence and locates the primary node.
///
/// In a sequence the primary node is the first genuine element carrying a key;
/// a single node is primary by definition.
pub fn normalize_output(output: RenderOutput) -> (NodeSequence, Option<usize>) {
    match output {
        RenderOutput::Single(node) => (smallvec![node], Some(0)),
        RenderOutput::Sequence(nodes) => {
            let primary = nodes
                .iter()
                .position(|node| matches!(node, RenderNode::Element(element) if element.key.is_some()));
            (NodeSequence::from_vec(nodes), primary)
        }
    }
}

fn missing_key_level(strict: bool) -> log::Level {
    if strict {
        log::Level::Warn
    } else {
        log::Level::Debug
    }
}

impl<C: DesignComponent> ComponentDesignAdapter<C> {
    /// Turns the wrapped component's output into the sequence the host paints.
    ///
    /// Managed instances get a release handler, either on the primary element
    /// or on an overlay appended after it, plus a focus trigger while focused.
    pub fn postprocess(&self, output: RenderOutput) -> NodeSequence {
        let (mut nodes, primary) = normalize_output(output);
        let key = primary.and_then(|index| nodes[index].key().cloned());
        self.state.set_key(key.clone());

        let Some(widget) = self.resolved.widget.clone() else {
            return nodes;
        };
        if key.is_none() {
            log::log!(
                missing_key_level(self.config.strict_primary_key),
                "widget {} rendered no keyed primary node",
                widget.id
            );
        }

        let reporter = FocusReporter::new(
            self.host.measurements.clone(),
            self.state.clone(),
            widget.id.clone(),
            &self.resolved,
        );
        let handler = mouse_up_handler(reporter.clone());

        if self.component.need_overlay() {
            let dimensions = self.host.measurements.get(key.as_ref());
            log::trace!("overlay for widget {} at {dimensions:?}", widget.id);
            nodes.push(RenderNode::Overlay(OverlayNode {
                dimensions,
                on_mouse_up: handler,
            }));
        } else if let Some(element) = primary.and_then(|index| nodes[index].as_element_mut()) {
            element.on_mouse_up = Some(handler);
        } else {
            log::debug!("widget {}: no element to intercept on", widget.id);
        }

        if let Some(trigger) = focus_trigger(
            &self.config,
            &self.host,
            &self.resolved,
            key.as_ref(),
            reporter,
        ) {
            nodes.push(trigger);
        }
        nodes
    }
}
