//! Scroll position and content dimensions.

/// The single direction a scrollbar operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    /// Pick the component of a point along this axis.
    pub fn along(self, x: f32, y: f32) -> f32 {
        match self {
            ScrollAxis::Horizontal => x,
            ScrollAxis::Vertical => y,
        }
    }
}

/// Logical scroll state of one scrollbar.
///
/// `current_scroll` always stays within `0..=max_scroll()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub current_scroll: i32,
    pub viewport_size: u32,
    pub full_size: u32,
    pub stick_to_end: bool,
}

impl ScrollState {
    pub fn new(stick_to_end: bool) -> Self {
        Self {
            stick_to_end,
            ..Default::default()
        }
    }

    /// Largest valid scroll offset for the current dimensions.
    pub fn max_scroll(&self) -> i32 {
        let max = i64::from(self.full_size) - i64::from(self.viewport_size);
        max.clamp(0, i64::from(i32::MAX)) as i32
    }

    /// Clamp a candidate offset into the valid range.
    pub fn clamp(&self, candidate: i64) -> i32 {
        candidate.clamp(0, i64::from(self.max_scroll())) as i32
    }

    /// Whether the content overflows the viewport.
    pub fn can_scroll(&self) -> bool {
        self.max_scroll() > 0
    }

    /// Whether the offset sits at the end of the content.
    pub fn is_at_end(&self) -> bool {
        self.current_scroll == self.max_scroll()
    }
}
