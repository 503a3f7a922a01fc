//! Scrollbar-local input events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A position relative to the scrollbar's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Events the container delivers to a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollbarEvent {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved, with or without a button held.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Wheel rotated; positive `delta_y` scrolls forward.
    Wheel { delta_y: i32 },
}

/// Whether the scrollbar handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Event was not handled, let it bubble.
    Ignored,
    /// Event started a pointer capture; following moves and the release
    /// belong to this scrollbar.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Convert a crossterm mouse event into a scrollbar event.
///
/// `origin` is the terminal cell of the scrollbar's top-left corner. One wheel
/// step in a terminal is one notch of `notch_units`. Returns `None` for
/// buttons other than the primary one.
pub fn from_crossterm(event: &MouseEvent, origin: (u16, u16), notch_units: u32) -> Option<ScrollbarEvent> {
    let pos = Point::new(
        f32::from(event.column) - f32::from(origin.0),
        f32::from(event.row) - f32::from(origin.1),
    );
    let notch = i32::try_from(notch_units).unwrap_or(i32::MAX);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ScrollbarEvent::PointerDown(pos)),
        MouseEventKind::Up(MouseButton::Left) => Some(ScrollbarEvent::PointerUp(pos)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(ScrollbarEvent::PointerMove(pos))
        }
        MouseEventKind::ScrollDown => Some(ScrollbarEvent::Wheel { delta_y: notch }),
        MouseEventKind::ScrollUp => Some(ScrollbarEvent::Wheel { delta_y: -notch }),
        _ => None,
    }
}
