//! Shared scroll state and the commit protocol.
//!
//! Every input source ends up in [`ScrollCore::commit`], which is the only
//! place `current_scroll` changes outside of the hidden-handle reset.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, trace};

use super::types::StepDirection;
use crate::config::ScrollbarConfig;
use crate::geometry::{HandleGeometry, TrackLayout};
use crate::input::{Key, KeyState, button_step};
use crate::signal::Signal;
use crate::state::{ScrollAxis, ScrollState};
use crate::timer::{GestureToken, RepeatTimer};
use crate::wakeup::WakeupHandle;

pub(crate) struct ScrollCore {
    pub(crate) axis: ScrollAxis,
    pub(crate) config: ScrollbarConfig,
    pub(crate) state: Cell<ScrollState>,
    pub(crate) layout: Cell<TrackLayout>,
    pub(crate) geometry: Cell<HandleGeometry>,
    pub(crate) scrolled: Signal<i32>,
    pub(crate) geometry_changed: Signal<HandleGeometry>,
    pub(crate) wakeup: WakeupHandle,
    pub(crate) keys: Rc<dyn KeyState>,
    pub(crate) timer: Rc<RepeatTimer>,
    gesture: Cell<Option<GestureToken>>,
}

impl ScrollCore {
    pub(crate) fn new(
        axis: ScrollAxis,
        config: ScrollbarConfig,
        timer: Rc<RepeatTimer>,
        keys: Rc<dyn KeyState>,
    ) -> Self {
        let state = ScrollState::new(config.stick_to_end);
        Self {
            axis,
            config,
            state: Cell::new(state),
            layout: Cell::new(TrackLayout::default()),
            geometry: Cell::new(HandleGeometry::measure(&state, &TrackLayout::default())),
            scrolled: Signal::new(),
            geometry_changed: Signal::new(),
            wakeup: WakeupHandle::new(),
            keys,
            timer,
            gesture: Cell::new(None),
        }
    }

    pub(crate) fn current(&self) -> i32 {
        self.state.get().current_scroll
    }

    /// Clamp `candidate` into range and store it.
    ///
    /// Observers are notified only when the value actually changes.
    pub(crate) fn commit(&self, candidate: i64) -> i32 {
        let mut state = self.state.get();
        let committed = state.clamp(candidate);
        if committed == state.current_scroll {
            return committed;
        }

        trace!(
            "[scrollbar] {:?} commit {} -> {} (candidate {})",
            self.axis, state.current_scroll, committed, candidate
        );
        state.current_scroll = committed;
        self.state.set(state);

        let mut geometry = self.geometry.get();
        geometry.place(&state);
        self.geometry.set(geometry);
        self.invalidate(geometry);

        self.scrolled.emit(&committed);
        committed
    }

    /// Recompute handle length, visibility and offset.
    ///
    /// A hidden handle always comes with a scroll reset to zero.
    pub(crate) fn update_handle_size(&self) {
        let mut state = self.state.get();
        let geometry = HandleGeometry::measure(&state, &self.layout.get());
        if geometry.visible != self.geometry.get().visible {
            debug!(
                "[scrollbar] {:?} handle {} (track {}, viewport {}, full {})",
                self.axis,
                if geometry.visible { "shown" } else { "hidden" },
                geometry.track_space,
                state.viewport_size,
                state.full_size
            );
        }
        self.geometry.set(geometry);
        self.invalidate(geometry);

        // Reset through the notify-on-change rule: no scrolled(0) when already at 0.
        if !geometry.visible && state.current_scroll != 0 {
            state.current_scroll = 0;
            self.state.set(state);
            self.scrolled.emit(&0);
        }
    }

    pub(crate) fn set_dimensions(&self, viewport_size: u32, full_size: u32) {
        let old = self.state.get();
        let follow = old.stick_to_end && old.full_size < full_size && old.is_at_end();
        debug!(
            "[scrollbar] {:?} dimensions {}/{} -> {}/{}{}",
            self.axis,
            old.viewport_size,
            old.full_size,
            viewport_size,
            full_size,
            if follow { " (following end)" } else { "" }
        );

        let mut state = old;
        state.viewport_size = viewport_size;
        state.full_size = full_size;
        self.state.set(state);

        self.update_handle_size();
        self.commit(i64::from(self.current()));

        if follow {
            self.scroll_to_end();
        }
    }

    pub(crate) fn set_layout(&self, layout: TrackLayout) {
        if layout == self.layout.get() {
            return;
        }
        self.layout.set(layout);
        self.update_handle_size();
    }

    pub(crate) fn scroll_to_end(&self) -> i32 {
        self.commit(i64::from(self.state.get().max_scroll()))
    }

    /// One button step in `direction`, sized by the live modifier state.
    pub(crate) fn step(&self, direction: StepDirection) -> i32 {
        let step = button_step(self.keys.as_ref(), &self.config);
        self.commit(i64::from(self.current()) + direction.signed(step))
    }

    /// Wheel adapter: `delta_y` units of `notch_units` per notch.
    pub(crate) fn wheel(&self, delta_y: i32) -> i32 {
        let config = &self.config;
        let pixels = f64::from(delta_y)
            * f64::from(config.line_height)
            * f64::from(config.lines_per_notch)
            / f64::from(config.notch_units.max(1));
        self.commit(i64::from(self.current()).saturating_add(pixels as i64))
    }

    /// Take over the shared repeat timer for a button held in `direction`.
    pub(crate) fn begin_repeat(self: &Rc<Self>, direction: StepDirection) {
        let weak = Rc::downgrade(self);
        let token = self.timer.begin_gesture(move || {
            if let Some(core) = weak.upgrade() {
                core.repeat_tick(direction);
            }
        });
        debug!("[scrollbar] {:?} repeat {:?} started", self.axis, direction);
        self.gesture.set(Some(token));
    }

    fn repeat_tick(&self, direction: StepDirection) {
        if self.keys.is_key_down(Key::PrimaryButton) {
            self.step(direction);
        } else {
            self.end_repeat();
        }
    }

    /// Release the repeat timer if this scrollbar still owns it.
    pub(crate) fn end_repeat(&self) {
        if let Some(token) = self.gesture.take()
            && self.timer.end_gesture(token)
        {
            debug!("[scrollbar] {:?} repeat ended", self.axis);
        }
    }

    pub(crate) fn is_repeating(&self) -> bool {
        self.gesture
            .get()
            .is_some_and(|token| self.timer.owns_gesture(token))
    }

    fn invalidate(&self, geometry: HandleGeometry) {
        self.geometry_changed.emit(&geometry);
        self.wakeup.send();
    }
}
