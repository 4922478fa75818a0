//! Designer configuration.

use crate::error::DesignerError;
use crate::node::NodeKey;

/// Tunables shared by every adapted component in one editor.
///
/// Adapters take the config as given; call [`DesignerConfig::validate`]
/// before handing a hand-built config to them.
///
/// # Example
///
/// ```
/// use cranpose_designer::DesignerConfig;
///
/// let config = DesignerConfig::default().with_placeholder_class("empty-slot");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.focus_trigger_key().as_str(), "___focus_trigger___");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignerConfig {
    /// Style class forced onto containers that are visually empty.
    pub placeholder_class: String,
    /// Prefix the editor reserves for its own node keys.
    pub reserved_key_prefix: String,
    /// Stem of the focus-trigger key.
    pub focus_trigger_name: String,
    pub class_property: String,
    pub value_property: String,
    /// Log keyless primary nodes at `warn` instead of `debug`.
    pub strict_primary_key: bool,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            placeholder_class: "designer-empty-container".to_string(),
            reserved_key_prefix: "__".to_string(),
            focus_trigger_name: "focus_trigger".to_string(),
            class_property: "class".to_string(),
            value_property: "value".to_string(),
            strict_primary_key: false,
        }
    }
}

impl DesignerConfig {
    pub fn with_placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    pub fn with_reserved_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reserved_key_prefix = prefix.into();
        self
    }

    pub fn with_focus_trigger_name(mut self, name: impl Into<String>) -> Self {
        self.focus_trigger_name = name.into();
        self
    }

    pub fn with_class_property(mut self, name: impl Into<String>) -> Self {
        self.class_property = name.into();
        self
    }

    pub fn with_value_property(mut self, name: impl Into<String>) -> Self {
        self.value_property = name.into();
        self
    }

    pub fn with_strict_primary_key(mut self, strict: bool) -> Self {
        self.strict_primary_key = strict;
        self
    }

    /// Key of the focus-trigger node: the reserved prefix wrapped in one more
    /// underscore on each side, so it cannot collide with authored keys or
    /// ordinary editor keys.
    pub fn focus_trigger_key(&self) -> NodeKey {
        let prefix = &self.reserved_key_prefix;
        NodeKey::new(format!("_{prefix}{}{prefix}_", self.focus_trigger_name))
    }

    pub fn validate(&self) -> Result<(), DesignerError> {
        if self.reserved_key_prefix.is_empty() {
            return Err(DesignerError::InvalidConfig {
                field: "reserved_key_prefix",
                reason: "must not be empty",
            });
        }
        if self.focus_trigger_name.is_empty() {
            return Err(DesignerError::InvalidConfig {
                field: "focus_trigger_name",
                reason: "must not be empty",
            });
        }
        if self.placeholder_class.is_empty() {
            return Err(DesignerError::InvalidConfig {
                field: "placeholder_class",
                reason: "must not be empty",
            });
        }
        if self.placeholder_class.chars().any(char::is_whitespace) {
            return Err(DesignerError::InvalidConfig {
                field: "placeholder_class",
                reason: "must be a single class name",
            });
        }
        if self.class_property.is_empty() {
            return Err(DesignerError::InvalidConfig {
                field: "class_property",
                reason: "must not be empty",
            });
        }
        if self.value_property.is_empty() {
            return Err(DesignerError::InvalidConfig {
                field: "value_property",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
