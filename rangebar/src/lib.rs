//! Scrollbar range controller for retained-mode UIs.
//!
//! Maps a scroll offset over a full content size onto a viewport, derives the
//! handle's length and offset along a track, and funnels button repeat, wheel
//! and handle drag input through one clamping commit.

pub mod config;
pub mod event;
pub mod geometry;
pub mod input;
pub mod scrollbar;
pub mod signal;
pub mod state;
pub mod timer;
pub mod wakeup;

pub use config::{ConfigError, ScrollbarConfig, TrackClick};
pub use event::{EventResult, Point, ScrollbarEvent};
pub use geometry::{HandleGeometry, Part, TrackLayout, TrackSide};
pub use input::{InputTracker, Key, KeyState};
pub use scrollbar::{DragSession, Scrollbar, StepDirection};
pub use signal::{ConnectionId, Signal};
pub use state::{ScrollAxis, ScrollState};
pub use timer::{GestureToken, RepeatTimer};
