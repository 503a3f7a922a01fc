//! Live keyboard and pointer button state.
//!
//! Button repeat re-reads modifier and button state on every tick, so the
//! scrollbar queries it through [`KeyState`] instead of relying on the
//! modifiers captured with the original press.

use std::cell::Cell;

use crossterm::event::{Event as CtEvent, KeyModifiers, MouseButton, MouseEventKind};

use crate::config::ScrollbarConfig;

/// Keys and buttons the scrollbar cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Control,
    Shift,
    PrimaryButton,
}

/// Query for whether a key or button is currently held.
pub trait KeyState {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Button step for the current modifier state.
///
/// Shift selects the coarse step, Ctrl the fine step; Shift wins when both
/// are held.
pub fn button_step(keys: &dyn KeyState, config: &ScrollbarConfig) -> u32 {
    if keys.is_key_down(Key::Shift) {
        config.coarse_step
    } else if keys.is_key_down(Key::Control) {
        config.fine_step
    } else {
        config.normal_step
    }
}

/// Tracks key state from the crossterm event stream.
///
/// Feed every terminal event through [`InputTracker::observe`] before
/// dispatching it to widgets.
#[derive(Debug, Default)]
pub struct InputTracker {
    control: Cell<bool>,
    shift: Cell<bool>,
    primary: Cell<bool>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tracked state from a terminal event.
    pub fn observe(&self, event: &CtEvent) {
        match event {
            CtEvent::Key(key) => self.set_modifiers(key.modifiers),
            CtEvent::Mouse(mouse) => {
                self.set_modifiers(mouse.modifiers);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => self.primary.set(true),
                    MouseEventKind::Up(MouseButton::Left) => self.primary.set(false),
                    _ => {}
                }
            }
            // Focus loss means we will never see the release.
            CtEvent::FocusLost => self.reset(),
            _ => {}
        }
    }

    /// Forget all held keys and buttons.
    pub fn reset(&self) {
        self.control.set(false);
        self.shift.set(false);
        self.primary.set(false);
    }

    fn set_modifiers(&self, modifiers: KeyModifiers) {
        self.control.set(modifiers.contains(KeyModifiers::CONTROL));
        self.shift.set(modifiers.contains(KeyModifiers::SHIFT));
    }
}

impl KeyState for InputTracker {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Control => self.control.get(),
            Key::Shift => self.shift.get(),
            Key::PrimaryButton => self.primary.get(),
        }
    }
}
