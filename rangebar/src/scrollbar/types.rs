//! Types shared by the scrollbar parts.

/// Direction a scrollbar button steps in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards the start of the content (up / left).
    Backward,
    /// Towards the end of the content (down / right).
    Forward,
}

impl StepDirection {
    /// Apply this direction to a step size.
    pub fn signed(self, step: u32) -> i64 {
        match self {
            StepDirection::Backward => -i64::from(step),
            StepDirection::Forward => i64::from(step),
        }
    }
}

/// Drag state of the handle, alive from press until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Where within the handle the user grabbed (0 = leading edge).
    pub anchor_pointer: f32,
    /// Scroll offset when the drag started.
    pub anchor_scroll: i32,
}
