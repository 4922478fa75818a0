use crate::capabilities::DesignCapabilities;
use crate::configuration::EditableConfiguration;
use crate::node::{RenderNode, RenderOutput};

/// A user-authored component the adapter can wrap. Rendering stays entirely
/// in the component's hands.
pub trait DesignComponent: DesignCapabilities {
    fn render(&self, config: &EditableConfiguration, children: &[RenderNode]) -> RenderOutput;
}

impl<C: DesignCapabilities + ?Sized> DesignCapabilities for Box<C> {
    fn is_container(&self) -> bool {
        (**self).is_container()
    }

    fn need_overlay(&self) -> bool {
        (**self).need_overlay()
    }

    fn declares_value(&self) -> bool {
        (**self).declares_value()
    }

    fn default_value(&self) -> String {
        (**self).default_value()
    }
}

impl<C: DesignComponent + ?Sized> DesignComponent for Box<C> {
    fn render(&self, config: &EditableConfiguration, children: &[RenderNode]) -> RenderOutput {
        (**self).render(config, children)
    }
}
