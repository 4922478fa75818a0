//! In-memory stand-ins for the host's measurement and layout services.

use cranpose_designer::{
    FocusGeometry, LayoutObserver, MeasurementService, NodeKey, ObserveOptions, Rect,
};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};

/// Measurement service backed by a key -> rect table the test fills in.
#[derive(Default)]
pub struct FakeMeasurements {
    rects: RefCell<FxHashMap<NodeKey, Rect>>,
    lookups: Cell<usize>,
}

impl FakeMeasurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places (or moves) the node with `key` on screen.
    pub fn place(&self, key: impl Into<NodeKey>, rect: Rect) {
        self.rects.borrow_mut().insert(key.into(), rect);
    }

    /// Takes the node with `key` out of layout; it measures as `None`.
    pub fn remove(&self, key: &NodeKey) {
        self.rects.borrow_mut().remove(key);
    }

    /// Number of `get` calls so far, hits and misses alike.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl MeasurementService for FakeMeasurements {
    fn get(&self, key: Option<&NodeKey>) -> Option<FocusGeometry> {
        self.lookups.set(self.lookups.get() + 1);
        key.and_then(|key| self.rects.borrow().get(key).copied())
    }
}

/// Records every interest registration.
#[derive(Default)]
pub struct RecordingObserver {
    registrations: RefCell<Vec<(Option<NodeKey>, ObserveOptions)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> Vec<(Option<NodeKey>, ObserveOptions)> {
        self.registrations.borrow().clone()
    }
}

impl LayoutObserver for RecordingObserver {
    fn observe(&self, key: Option<&NodeKey>, options: ObserveOptions) {
        log::trace!("observe {key:?} {options:?}");
        self.registrations
            .borrow_mut()
            .push((key.cloned(), options));
    }
}
