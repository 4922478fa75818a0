//! Simulated editor selection store.

use cranpose_designer::{FocusCallback, FocusPayload, WidgetId};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns `activeWidgetId` the way the editor does: it is written only through
/// the focus callback and read by every instance when it renders.
#[derive(Default)]
pub struct SelectionStore {
    active: RefCell<Option<WidgetId>>,
    reports: RefCell<Vec<FocusPayload>>,
}

impl SelectionStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn active_widget_id(&self) -> Option<WidgetId> {
        self.active.borrow().clone()
    }

    /// Selects a widget directly, as the editor's layer panel would.
    pub fn select(&self, id: Option<WidgetId>) {
        *self.active.borrow_mut() = id;
    }

    /// Callback handed to instances as `on_focus`.
    pub fn on_focus(self: &Rc<Self>) -> FocusCallback {
        let store = Rc::clone(self);
        Rc::new(move |payload: FocusPayload| {
            *store.active.borrow_mut() = Some(payload.active_widget_id.clone());
            store.reports.borrow_mut().push(payload);
        })
    }

    pub fn reports(&self) -> Vec<FocusPayload> {
        self.reports.borrow().clone()
    }

    pub fn report_count(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn last_report(&self) -> Option<FocusPayload> {
        self.reports.borrow().last().cloned()
    }
}
