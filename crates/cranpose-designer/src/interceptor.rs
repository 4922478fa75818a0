//! Mouse-up interception that routes clicks to the editor's selection.

use crate::adapter::InstanceState;
use crate::configuration::{EditableConfiguration, FocusCallback, FocusPayload};
use crate::pointer::PointerHandler;
use crate::services::MeasurementService;
use crate::widget::WidgetId;
use std::rc::Rc;

/// Measures the instance's primary node and reports it through `on_focus`.
///
/// The key is read at report time, so a reporter built during one render
/// follows key changes made by later renders.
#[derive(Clone)]
pub(crate) struct FocusReporter {
    measurements: Rc<dyn MeasurementService>,
    state: Rc<InstanceState>,
    widget_id: WidgetId,
    on_focus: Option<FocusCallback>,
}

impl FocusReporter {
    pub(crate) fn new(
        measurements: Rc<dyn MeasurementService>,
        state: Rc<InstanceState>,
        widget_id: WidgetId,
        resolved: &EditableConfiguration,
    ) -> Self {
        Self {
            measurements,
            state,
            widget_id,
            on_focus: resolved.on_focus.clone(),
        }
    }

    pub(crate) fn report(&self) {
        let key = self.state.key();
        let dimensions = self.measurements.get(key.as_ref());
        if dimensions.is_none() {
            log::debug!(
                "widget {}: no geometry for key {:?}",
                self.widget_id,
                key.as_ref().map(|key| key.as_str())
            );
        }
        if let Some(on_focus) = &self.on_focus {
            on_focus(FocusPayload {
                active_widget_dimensions: dimensions,
                active_widget_id: self.widget_id.clone(),
            });
        }
    }
}

/// Builds the release handler for an instance.
///
/// The event is stopped immediately so neither sibling listeners nor
/// ancestors see it and the component's own behaviour stays inert while
/// editing. Calls without an event do nothing.
pub(crate) fn mouse_up_handler(reporter: FocusReporter) -> PointerHandler {
    PointerHandler::new(move |event| {
        let Some(event) = event else {
            return;
        };
        event.stop_immediate_propagation();
        reporter.report();
    })
}
