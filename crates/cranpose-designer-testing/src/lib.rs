//! Testing utilities and harness for the Cranpose designer adapter

pub mod assertions;
pub mod components;
pub mod host;
pub mod rule;
pub mod selection;
pub mod services;

pub use assertions::*;
pub use components::{KeylessLeaf, TestContainer, TestInput, TestLabel};
pub use host::{CommitReport, Release, ReleaseTarget, TestHost};
pub use rule::DesignerTestRule;
pub use selection::SelectionStore;
pub use services::{FakeMeasurements, RecordingObserver};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::components::*;
    pub use crate::host::*;
    pub use crate::rule::DesignerTestRule;
    pub use crate::selection::SelectionStore;
    pub use crate::services::*;
}
