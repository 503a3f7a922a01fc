//! Handle geometry and hit testing along the scroll axis.
//!
//! All lengths are measured along the scrollbar's axis, in pixels, with the
//! origin at the leading edge of the scrollbar container.

use crate::state::ScrollState;

/// Axis extents of the scrollbar container and its end buttons.
///
/// Reported by the host layout whenever the scrollbar is resized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackLayout {
    pub container: f32,
    pub backward_button: f32,
    pub forward_button: f32,
}

impl TrackLayout {
    pub fn new(container: f32, backward_button: f32, forward_button: f32) -> Self {
        Self {
            container,
            backward_button,
            forward_button,
        }
    }

    /// Space between the two end buttons in which the handle moves.
    pub fn track_space(&self) -> f32 {
        (self.container - (self.backward_button + self.forward_button)).max(0.0)
    }
}

/// Side of the handle a track press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSide {
    Before,
    After,
}

/// The part of a scrollbar under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    BackwardButton,
    Track(TrackSide),
    Handle,
    ForwardButton,
}

/// Derived handle size and position.
///
/// Never stored as the source of truth; recomputed from [`ScrollState`] and
/// [`TrackLayout`] whenever either changes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandleGeometry {
    /// Space between the end buttons.
    pub track_space: f32,
    /// Handle length, zero while hidden.
    pub length: f32,
    /// Distance from the start of the track to the handle.
    pub offset: f32,
    /// Whether the handle is shown at all.
    pub visible: bool,
    /// Whether the scrollbar accepts interaction.
    pub enabled: bool,
}

impl HandleGeometry {
    /// Compute handle length and visibility, then place the handle for the
    /// state's current offset.
    ///
    /// A handle that would fill the whole track is hidden: the content fits
    /// and the caller must reset the scroll to zero. Empty content hides the
    /// handle too.
    pub fn measure(state: &ScrollState, layout: &TrackLayout) -> Self {
        let track_space = layout.track_space();
        let length = if state.full_size > 0 {
            track_space * state.viewport_size as f32 / state.full_size as f32
        } else {
            0.0
        };

        let visible = state.can_scroll() && length < track_space;
        let mut geometry = Self {
            track_space,
            length: if visible { length } else { 0.0 },
            offset: 0.0,
            visible,
            enabled: visible,
        };
        geometry.place(state);
        geometry
    }

    /// Recompute only the handle offset for the state's current scroll.
    pub fn place(&mut self, state: &ScrollState) {
        self.offset = self.offset_for(state.current_scroll, state.max_scroll());
    }

    /// Track space left over for the handle to travel in.
    pub fn available_space(&self) -> f32 {
        (self.track_space - self.length).max(0.0)
    }

    /// Handle offset for a scroll position; linear, clamped and monotonic.
    pub fn offset_for(&self, scroll: i32, max: i32) -> f32 {
        if max > 0 && self.visible {
            let ratio = (scroll.clamp(0, max) as f32) / max as f32;
            ratio * self.available_space()
        } else {
            0.0
        }
    }

    /// Convert a handle movement in pixels into a scroll delta.
    ///
    /// Inverse of [`Self::offset_for`]. Returns `None` when the handle has no
    /// room to travel.
    pub fn scroll_delta_for(&self, pixels: f32, max: i32) -> Option<i64> {
        let available = self.available_space();
        if available <= 0.0 || !pixels.is_finite() {
            return None;
        }
        Some((pixels * max as f32 / available).round() as i64)
    }

    /// Scroll offset that would centre the handle on a position in the track.
    pub fn scroll_for_track_position(&self, track_pos: f32, max: i32) -> i64 {
        let available = self.available_space();
        if available <= 0.0 {
            return 0;
        }
        let ratio = ((track_pos - self.length / 2.0) / available).clamp(0.0, 1.0);
        (ratio * max as f32).round() as i64
    }

    /// Position of the handle's leading edge in scrollbar coordinates.
    pub fn handle_start(&self, layout: &TrackLayout) -> f32 {
        layout.backward_button + self.offset
    }

    /// Find the part of the scrollbar at `pos` along the axis.
    pub fn part_at(&self, layout: &TrackLayout, pos: f32) -> Option<Part> {
        if pos < 0.0 || pos >= layout.container {
            return None;
        }
        if pos < layout.backward_button {
            return Some(Part::BackwardButton);
        }
        if pos >= layout.container - layout.forward_button {
            return Some(Part::ForwardButton);
        }

        let in_track = pos - layout.backward_button;
        if !self.visible || in_track < self.offset {
            Some(Part::Track(TrackSide::Before))
        } else if in_track < self.offset + self.length {
            Some(Part::Handle)
        } else {
            Some(Part::Track(TrackSide::After))
        }
    }
}
