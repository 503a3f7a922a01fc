//! Scrollbar widget logic.
//!
//! A [`Scrollbar`] is laid out as
//! `[backward button][track: offset | handle | rest][forward button]`
//! along its axis. It owns no pixels; the host reports extents through
//! [`Scrollbar::set_track_layout`], delivers pointer and wheel events, and
//! repositions its content whenever [`Scrollbar::scrolled`] fires.

mod controller;
mod events;
mod types;

use std::rc::Rc;

pub use types::{DragSession, StepDirection};

use self::controller::ScrollCore;
use self::events::{Handle, PointerHandler, ScrollButton, Track};
use crate::config::{ConfigError, ScrollbarConfig};
use crate::event::{EventResult, Point, ScrollbarEvent};
use crate::geometry::{HandleGeometry, Part, TrackLayout};
use crate::input::KeyState;
use crate::signal::Signal;
use crate::state::{ScrollAxis, ScrollState};
use crate::timer::RepeatTimer;
use crate::wakeup::WakeupSender;

/// Scroll range controller for one axis.
pub struct Scrollbar {
    core: Rc<ScrollCore>,
    backward: ScrollButton,
    forward: ScrollButton,
    track: Track,
    handle: Handle,
    /// Part that received the last press, until its release.
    captured: Option<Part>,
}

impl Scrollbar {
    /// Create a scrollbar with the default configuration.
    pub fn new(axis: ScrollAxis, timer: Rc<RepeatTimer>, keys: Rc<dyn KeyState>) -> Self {
        Self::build(axis, ScrollbarConfig::default(), timer, keys)
    }

    /// Create a scrollbar with a custom configuration.
    pub fn with_config(
        axis: ScrollAxis,
        config: ScrollbarConfig,
        timer: Rc<RepeatTimer>,
        keys: Rc<dyn KeyState>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(axis, config, timer, keys))
    }

    fn build(
        axis: ScrollAxis,
        config: ScrollbarConfig,
        timer: Rc<RepeatTimer>,
        keys: Rc<dyn KeyState>,
    ) -> Self {
        Self {
            core: Rc::new(ScrollCore::new(axis, config, timer, keys)),
            backward: ScrollButton::new(StepDirection::Backward),
            forward: ScrollButton::new(StepDirection::Forward),
            track: Track,
            handle: Handle::default(),
            captured: None,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn axis(&self) -> ScrollAxis {
        self.core.axis
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.core.config
    }

    pub fn state(&self) -> ScrollState {
        self.core.state.get()
    }

    pub fn current_scroll(&self) -> i32 {
        self.core.current()
    }

    pub fn max_scroll(&self) -> i32 {
        self.core.state.get().max_scroll()
    }

    pub fn geometry(&self) -> HandleGeometry {
        self.core.geometry.get()
    }

    pub fn track_layout(&self) -> TrackLayout {
        self.core.layout.get()
    }

    /// Part of the scrollbar under a position relative to its origin.
    pub fn part_at(&self, pos: Point) -> Option<Part> {
        let along = self.core.axis.along(pos.x, pos.y);
        self.geometry().part_at(&self.track_layout(), along)
    }

    pub fn is_dragging(&self) -> bool {
        self.handle.is_dragging()
    }

    /// Whether a held button of this scrollbar owns the repeat timer.
    pub fn is_repeating(&self) -> bool {
        self.core.is_repeating()
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Fires with the new offset whenever the scroll position changes.
    pub fn scrolled(&self) -> &Signal<i32> {
        &self.core.scrolled
    }

    /// Fires after every handle recompute; the host lays out and redraws.
    pub fn geometry_changed(&self) -> &Signal<HandleGeometry> {
        &self.core.geometry_changed
    }

    /// Wake the host event loop on every geometry change.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.core.wakeup.install(sender);
    }

    // -------------------------------------------------------------------------
    // Dimensions and position
    // -------------------------------------------------------------------------

    /// Report the axis extents of the container and its end buttons.
    pub fn set_track_layout(&self, layout: TrackLayout) {
        self.core.set_layout(layout);
    }

    /// Set the visible and total content sizes.
    ///
    /// With stick-to-end enabled, a scrollbar resting at the end keeps
    /// following the end as the content grows.
    pub fn set_scroll_dimensions(&self, viewport_size: u32, full_size: u32) {
        self.core.set_dimensions(viewport_size, full_size);
    }

    /// Scroll to `value`, clamped into range. Returns the committed offset.
    pub fn set_scroll(&self, value: i32) -> i32 {
        self.core.commit(i64::from(value))
    }

    /// Scroll by a relative amount. Returns the committed offset.
    pub fn scroll_by(&self, delta: i32) -> i32 {
        self.core.commit(i64::from(self.core.current()) + i64::from(delta))
    }

    pub fn scroll_to_end(&self) -> i32 {
        self.core.scroll_to_end()
    }

    pub fn set_stick_to_end(&self, stick: bool) {
        let mut state = self.core.state.get();
        state.stick_to_end = stick;
        self.core.state.set(state);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Route an event to the matching entry point.
    pub fn handle_event(&mut self, event: ScrollbarEvent) -> EventResult {
        match event {
            ScrollbarEvent::PointerDown(pos) => self.on_pointer_down(pos),
            ScrollbarEvent::PointerMove(pos) => self.on_pointer_move(pos),
            ScrollbarEvent::PointerUp(pos) => self.on_pointer_up(pos),
            ScrollbarEvent::Wheel { delta_y } => self.on_wheel(delta_y),
        }
    }

    /// Scroll by `delta_y` wheel units.
    pub fn on_wheel(&self, delta_y: i32) -> EventResult {
        self.core.wheel(delta_y);
        EventResult::Consumed
    }

    pub fn on_pointer_down(&mut self, pos: Point) -> EventResult {
        if !self.geometry().enabled {
            return EventResult::Ignored;
        }
        let Some(part) = self.part_at(pos) else {
            return EventResult::Ignored;
        };

        // A press without a release in between; drop the stale capture.
        if let Some(previous) = self.captured.take() {
            self.dispatch_up(previous, pos);
        }

        let along = self.core.axis.along(pos.x, pos.y);
        let core = Rc::clone(&self.core);
        let result = self.part_mut(part).on_pointer_down(&core, along);
        if result.is_handled() {
            self.captured = Some(part);
        }
        result
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> EventResult {
        let Some(part) = self.captured else {
            return EventResult::Ignored;
        };
        let along = self.core.axis.along(pos.x, pos.y);
        let core = Rc::clone(&self.core);
        self.part_mut(part).on_pointer_move(&core, along)
    }

    pub fn on_pointer_up(&mut self, pos: Point) -> EventResult {
        match self.captured.take() {
            Some(part) => self.dispatch_up(part, pos),
            None => EventResult::Ignored,
        }
    }

    fn dispatch_up(&mut self, part: Part, pos: Point) -> EventResult {
        let along = self.core.axis.along(pos.x, pos.y);
        let core = Rc::clone(&self.core);
        self.part_mut(part).on_pointer_up(&core, along)
    }

    fn part_mut(&mut self, part: Part) -> &mut dyn PointerHandler {
        match part {
            Part::BackwardButton => &mut self.backward,
            Part::ForwardButton => &mut self.forward,
            Part::Track(_) => &mut self.track,
            Part::Handle => &mut self.handle,
        }
    }
}

impl Drop for Scrollbar {
    fn drop(&mut self) {
        self.core.end_repeat();
    }
}

impl std::fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scrollbar")
            .field("axis", &self.core.axis)
            .field("state", &self.state())
            .field("geometry", &self.geometry())
            .field("captured", &self.captured)
            .finish()
    }
}
