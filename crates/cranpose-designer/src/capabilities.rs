/// Design-time traits a wrapped component can opt into.
pub trait DesignCapabilities {
    /// Containers get a placeholder while they hold no authored children.
    fn is_container(&self) -> bool {
        false
    }

    /// Components with interactive native behaviour (form controls) are
    /// covered by an overlay that receives the editor's clicks instead.
    fn need_overlay(&self) -> bool {
        false
    }

    /// Components that render a `value` property. A blank persisted value is
    /// displayed as [`DesignCapabilities::default_value`] at design time.
    fn declares_value(&self) -> bool {
        false
    }

    fn default_value(&self) -> String {
        String::new()
    }
}
