//! Minimal host engine: keyed commits and pointer-release dispatch.

use cranpose_designer::{
    DesignerError, NodeKey, Point, PointerDispatcher, PointerEvent, PointerHandler, RenderNode,
};
use rustc_hash::FxHashSet;

/// What one commit did to the keyed top-level nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub inserted: Vec<NodeKey>,
    pub reconciled: Vec<NodeKey>,
    pub removed: Vec<NodeKey>,
    /// Focus-trigger hooks run during this commit.
    pub triggers_run: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// The first keyed element, or the first element when none is keyed.
    Primary,
    Overlay,
}

#[derive(Debug)]
pub struct Release {
    pub event: PointerEvent,
    pub delivered: usize,
}

#[derive(Default)]
pub struct TestHost {
    mounted: FxHashSet<NodeKey>,
    commits: usize,
    native_listeners: Vec<PointerHandler>,
    ancestor_listeners: Vec<PointerHandler>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Registers a listener standing in for the component's own behaviour. It
    /// sits on the primary element after the adapter's handler.
    pub fn add_native_listener(&mut self, listener: PointerHandler) {
        self.native_listeners.push(listener);
    }

    /// Registers a listener on the parent of the rendered sequence.
    pub fn add_ancestor_listener(&mut self, listener: PointerHandler) {
        self.ancestor_listeners.push(listener);
    }

    /// Commits `nodes` in place of the previous sequence.
    ///
    /// Keyed nodes seen in the previous commit are reconciled, others are
    /// inserted. Every focus trigger present runs its hook exactly once.
    pub fn commit(&mut self, nodes: &[RenderNode]) -> Result<CommitReport, DesignerError> {
        ensure_unique_keys(nodes)?;

        let mut report = CommitReport::default();
        let mut current = FxHashSet::default();
        for key in nodes.iter().filter_map(RenderNode::key) {
            if self.mounted.contains(key) {
                report.reconciled.push(key.clone());
            } else {
                report.inserted.push(key.clone());
            }
            current.insert(key.clone());
        }
        report.removed = self
            .mounted
            .iter()
            .filter(|key| !current.contains(*key))
            .cloned()
            .collect();
        report.removed.sort();
        self.mounted = current;
        self.commits += 1;

        for node in nodes {
            if let RenderNode::FocusTrigger(trigger) = node {
                trigger.commit();
                report.triggers_run += 1;
            }
        }
        log::trace!("commit #{}: {report:?}", self.commits);
        Ok(report)
    }

    /// Dispatches a pointer release on `target`. Returns `None` when the
    /// sequence has no such target.
    pub fn release(
        &self,
        nodes: &[RenderNode],
        target: ReleaseTarget,
        position: Point,
    ) -> Option<Release> {
        let mut target_level = Vec::new();
        match target {
            ReleaseTarget::Primary => {
                let element = nodes
                    .iter()
                    .filter_map(RenderNode::as_element)
                    .find(|element| element.key.is_some())
                    .or_else(|| nodes.iter().find_map(RenderNode::as_element))?;
                target_level.extend(element.on_mouse_up.clone());
                target_level.extend(self.native_listeners.iter().cloned());
            }
            ReleaseTarget::Overlay => {
                let overlay = nodes.iter().find_map(|node| match node {
                    RenderNode::Overlay(overlay) => Some(overlay),
                    _ => None,
                })?;
                target_level.push(overlay.on_mouse_up.clone());
            }
        }

        let mut dispatcher = PointerDispatcher::new();
        dispatcher
            .push_level(target_level)
            .push_level(self.ancestor_listeners.clone());
        let event = PointerEvent::up(position);
        let delivered = dispatcher.dispatch(&event);
        Some(Release { event, delivered })
    }
}

fn ensure_unique_keys(nodes: &[RenderNode]) -> Result<(), DesignerError> {
    let mut seen = FxHashSet::default();
    for node in nodes {
        if let Some(key) = node.key() {
            if !seen.insert(key) {
                return Err(DesignerError::DuplicateSiblingKey { key: key.clone() });
            }
        }
        if let Some(element) = node.as_element() {
            ensure_unique_keys(&element.children)?;
        }
    }
    Ok(())
}
