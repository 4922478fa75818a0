//! Child-occupancy classification.

use crate::node::RenderNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    /// The only child is the editor's insertion caret.
    CursorOnly,
    Populated,
}

impl Occupancy {
    /// Nothing authored is visible inside the instance.
    pub fn is_visually_empty(self) -> bool {
        matches!(self, Occupancy::Empty | Occupancy::CursorOnly)
    }
}

pub fn classify_children(children: &[RenderNode]) -> Occupancy {
    match children {
        [] => Occupancy::Empty,
        [only] if only.is_cursor() => Occupancy::CursorOnly,
        _ => Occupancy::Populated,
    }
}

pub fn is_visually_empty(children: &[RenderNode]) -> bool {
    classify_children(children).is_visually_empty()
}
