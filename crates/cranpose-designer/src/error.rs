use crate::node::NodeKey;
use crate::widget::WidgetId;

/// Errors surfaced to integrators. The render path itself never fails; these
/// come from configuration validation, opt-in checks and host-side commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignerError {
    MissingPrimaryKey {
        widget: Option<WidgetId>,
    },
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    DuplicateSiblingKey {
        key: NodeKey,
    },
}

impl std::fmt::Display for DesignerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignerError::MissingPrimaryKey { widget: Some(id) } => {
                write!(f, "widget {id} rendered no keyed primary node")
            }
            DesignerError::MissingPrimaryKey { widget: None } => {
                write!(f, "unmanaged component rendered no keyed primary node")
            }
            DesignerError::InvalidConfig { field, reason } => {
                write!(f, "invalid designer config `{field}`: {reason}")
            }
            DesignerError::DuplicateSiblingKey { key } => {
                write!(f, "duplicate sibling key {key}")
            }
        }
    }
}

impl std::error::Error for DesignerError {}
