//! Pointer events with DOM-style propagation control.
//!
//! A dispatch pass walks listener levels from the target up to the root.
//! Handlers stop the pass either after the current level
//! ([`PointerEvent::stop_propagation`]) or immediately, skipping listeners
//! still queued on the current level
//! ([`PointerEvent::stop_immediate_propagation`]).

use crate::geometry::Point;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    Stopped,
    StoppedImmediately,
}

/// A pointer release. Only releases are routed through the adapter.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub position: Point,
    /// Shared via Rc<Cell> so copies handed to different listeners observe
    /// the same propagation state.
    propagation: Rc<Cell<Propagation>>,
}

impl PointerEvent {
    pub fn up(position: Point) -> Self {
        Self {
            position,
            propagation: Rc::new(Cell::new(Propagation::Continue)),
        }
    }

    /// Ancestors no longer receive the event once the current level finishes.
    pub fn stop_propagation(&self) {
        if self.propagation.get() == Propagation::Continue {
            self.propagation.set(Propagation::Stopped);
        }
    }

    /// No further listener receives the event, including the ones registered
    /// on the current level.
    pub fn stop_immediate_propagation(&self) {
        self.propagation.set(Propagation::StoppedImmediately);
    }

    pub fn propagation(&self) -> Propagation {
        self.propagation.get()
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation.get() != Propagation::Continue
    }
}

/// Release handler. `None` models programmatic invocations without an event.
#[derive(Clone)]
pub struct PointerHandler(Rc<dyn Fn(Option<&PointerEvent>)>);

impl PointerHandler {
    pub fn new(handler: impl Fn(Option<&PointerEvent>) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: Option<&PointerEvent>) {
        (self.0)(event)
    }
}

impl fmt::Debug for PointerHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PointerHandler")
    }
}

/// Listeners registered on one node of the dispatch path.
pub type ListenerLevel = Vec<PointerHandler>;

#[derive(Default)]
pub struct PointerDispatcher {
    path: Vec<ListenerLevel>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Pushes the next level outwards; the first level pushed is the target.
    pub fn push_level(&mut self, listeners: ListenerLevel) -> &mut Self {
        self.path.push(listeners);
        self
    }

    /// Delivers `event` along the path and returns how many listeners ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let mut delivered = 0;
        for level in &self.path {
            for listener in level {
                listener.call(Some(event));
                delivered += 1;
                if event.propagation() == Propagation::StoppedImmediately {
                    return delivered;
                }
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(counter: &Rc<Cell<u32>>) -> PointerHandler {
        let counter = counter.clone();
        PointerHandler::new(move |_| counter.set(counter.get() + 1))
    }

    #[test]
    fn stop_propagation_finishes_current_level() {
        let hits = Rc::new(Cell::new(0));
        let stopper = PointerHandler::new(|event| {
            if let Some(event) = event {
                event.stop_propagation();
            }
        });
        let mut dispatcher = PointerDispatcher::new();
        dispatcher
            .push_level(vec![stopper, counting(&hits)])
            .push_level(vec![counting(&hits)]);

        let delivered = dispatcher.dispatch(&PointerEvent::up(Point::ZERO));
        assert_eq!(delivered, 2);
        assert_eq!(hits.get(), 1, "sibling listener still runs, ancestor does not");
    }

    #[test]
    fn stop_immediate_skips_sibling_listeners() {
        let hits = Rc::new(Cell::new(0));
        let stopper = PointerHandler::new(|event| {
            if let Some(event) = event {
                event.stop_immediate_propagation();
            }
        });
        let mut dispatcher = PointerDispatcher::new();
        dispatcher
            .push_level(vec![stopper, counting(&hits)])
            .push_level(vec![counting(&hits)]);

        let event = PointerEvent::up(Point::ZERO);
        assert_eq!(dispatcher.dispatch(&event), 1);
        assert_eq!(hits.get(), 0);
        assert_eq!(event.propagation(), Propagation::StoppedImmediately);
    }

    #[test]
    fn propagation_state_is_shared_between_clones() {
        let event = PointerEvent::up(Point::new(3.0, 4.0));
        let copy = event.clone();
        copy.stop_propagation();
        assert!(event.is_propagation_stopped());
    }
}
