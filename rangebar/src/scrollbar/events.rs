//! Pointer handling for the parts of a scrollbar.
//!
//! The container hit-tests a press, hands it to the part underneath and
//! keeps routing moves and the release to that part until the release.
//! Positions are measured along the scrollbar's axis from its leading edge.

use std::rc::Rc;

use log::debug;

use super::controller::ScrollCore;
use super::types::{DragSession, StepDirection};
use crate::config::TrackClick;
use crate::event::EventResult;

/// Pointer capabilities of a scrollbar part.
pub(crate) trait PointerHandler {
    fn on_pointer_down(&mut self, core: &Rc<ScrollCore>, pos: f32) -> EventResult;

    fn on_pointer_move(&mut self, _core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        EventResult::Ignored
    }

    fn on_pointer_up(&mut self, _core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        EventResult::Ignored
    }
}

/// End button that steps on press and repeats while held.
#[derive(Debug)]
pub(crate) struct ScrollButton {
    direction: StepDirection,
}

impl ScrollButton {
    pub(crate) fn new(direction: StepDirection) -> Self {
        Self { direction }
    }
}

impl PointerHandler for ScrollButton {
    fn on_pointer_down(&mut self, core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        core.step(self.direction);
        core.begin_repeat(self.direction);
        EventResult::StartDrag
    }

    fn on_pointer_move(&mut self, _core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        EventResult::Consumed
    }

    fn on_pointer_up(&mut self, core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        core.end_repeat();
        EventResult::Consumed
    }
}

/// Bare track on either side of the handle.
#[derive(Debug, Default)]
pub(crate) struct Track;

impl PointerHandler for Track {
    fn on_pointer_down(&mut self, core: &Rc<ScrollCore>, pos: f32) -> EventResult {
        let state = core.state.get();
        let layout = core.layout.get();
        let geometry = core.geometry.get();

        match core.config.track_click {
            TrackClick::Ignore => EventResult::Ignored,
            TrackClick::Page => {
                let direction = if pos < geometry.handle_start(&layout) {
                    StepDirection::Backward
                } else {
                    StepDirection::Forward
                };
                let page = i64::from(state.current_scroll) + direction.signed(state.viewport_size);
                core.commit(page);
                EventResult::Consumed
            }
            TrackClick::Jump => {
                let target = geometry
                    .scroll_for_track_position(pos - layout.backward_button, state.max_scroll());
                core.commit(target);
                EventResult::Consumed
            }
        }
    }
}

/// Draggable handle.
#[derive(Debug, Default)]
pub(crate) struct Handle {
    drag: Option<DragSession>,
}

impl Handle {
    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn local(core: &ScrollCore, pos: f32) -> f32 {
        pos - core.geometry.get().handle_start(&core.layout.get())
    }
}

impl PointerHandler for Handle {
    fn on_pointer_down(&mut self, core: &Rc<ScrollCore>, pos: f32) -> EventResult {
        let session = DragSession {
            anchor_pointer: Self::local(core, pos),
            anchor_scroll: core.current(),
        };
        debug!("[scrollbar] {:?} drag started {:?}", core.axis, session);
        self.drag = Some(session);
        EventResult::StartDrag
    }

    fn on_pointer_move(&mut self, core: &Rc<ScrollCore>, pos: f32) -> EventResult {
        let Some(session) = self.drag else {
            return EventResult::Ignored;
        };

        let moved = Self::local(core, pos) - session.anchor_pointer;
        let max = core.state.get().max_scroll();
        if let Some(delta) = core.geometry.get().scroll_delta_for(moved, max) {
            core.commit(i64::from(core.current()).saturating_add(delta));
        }
        EventResult::Consumed
    }

    fn on_pointer_up(&mut self, core: &Rc<ScrollCore>, _pos: f32) -> EventResult {
        match self.drag.take() {
            Some(session) => {
                debug!(
                    "[scrollbar] {:?} drag ended {} -> {}",
                    core.axis,
                    session.anchor_scroll,
                    core.current()
                );
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
