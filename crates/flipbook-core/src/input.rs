//! Input adapter.
//!
//! Maps raw UI events to navigation intents. Clicks only open the book;
//! once open, turning is done with the arrow keys or horizontal swipes.

use crate::flip::{Direction, FlipBook, FlipTicket};
use crate::transition::TransitionProbe;

/// Keys the book reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Raw events delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Click anywhere on the book container.
    Click,
    KeyDown(Key),
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    /// Layout changed; carries the rendered size of the first beam path box.
    Resize { width: f64, height: f64 },
}

/// What the book should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Open,
    Turn(Direction),
    RelayoutBeams { width: f64, height: f64 },
}

/// Stateful event interpreter. Tracks the start of the current touch.
#[derive(Debug, Clone, PartialEq)]
pub struct InputAdapter {
    min_swipe_distance: f64,
    touch_start_x: Option<f64>,
}

impl InputAdapter {
    pub fn new(min_swipe_distance: f64) -> Self {
        Self {
            min_swipe_distance,
            touch_start_x: None,
        }
    }

    /// Translate `event` given whether the book is already open.
    pub fn interpret(&mut self, event: UiEvent, is_open: bool) -> Option<Intent> {
        match event {
            UiEvent::Click => (!is_open).then_some(Intent::Open),
            UiEvent::KeyDown(key) if is_open => match key {
                Key::ArrowRight => Some(Intent::Turn(Direction::Forward)),
                Key::ArrowLeft => Some(Intent::Turn(Direction::Backward)),
                Key::Other => None,
            },
            UiEvent::KeyDown(_) => None,
            UiEvent::TouchStart { x } => {
                self.touch_start_x = Some(x);
                None
            }
            UiEvent::TouchEnd { x } => {
                let start = self.touch_start_x.take()?;
                if !is_open {
                    return None;
                }
                let delta = x - start;
                let travel = if delta < 0.0 { -delta } else { delta };
                if travel <= self.min_swipe_distance {
                    log::debug!("[INPUT] tap, delta={}", delta);
                    return None;
                }
                // Finger moving left pulls the next page over.
                let direction = if delta < 0.0 {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                Some(Intent::Turn(direction))
            }
            UiEvent::Resize { width, height } => Some(Intent::RelayoutBeams { width, height }),
        }
    }

    /// Interpret `event` and apply the resulting navigation to `book`.
    /// Returns the ticket of a turn that was started.
    pub fn dispatch<P: TransitionProbe + ?Sized>(
        &mut self,
        event: UiEvent,
        book: &mut FlipBook,
        probe: &P,
    ) -> Option<FlipTicket> {
        let intent = self.interpret(event, book.is_open())?;
        book.apply_intent(&intent, probe)
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(crate::config::BookConfig::DEFAULT_MIN_SWIPE_DISTANCE)
    }
}
