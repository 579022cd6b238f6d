//! Page transition timing.
//!
//! The animation curve belongs to the stylesheet; the state machine only needs
//! to know how long a page takes to turn so it can schedule the completion.

use core::time::Duration;

/// Read access to the rendering surface's per-page transition duration.
pub trait TransitionProbe {
    /// Duration of the turn animation of the page at `page`. Called once per
    /// accepted turn, at the time of the turn.
    fn transition_duration(&self, page: usize) -> Duration;
}

/// Fixed duration for every page.
impl TransitionProbe for Duration {
    fn transition_duration(&self, _page: usize) -> Duration {
        *self
    }
}

/// Parse a CSS `transition-duration` value such as `0.8s`, `800ms` or
/// `0.8s, 0.2s` (only the first entry counts).
///
/// Anything that is not a finite, non-negative time gives [`Duration::ZERO`].
pub fn parse_transition_duration(value: &str) -> Duration {
    let first = value.split(',').next().unwrap_or("").trim();
    let (number, millis_per_unit) = if let Some(number) = first.strip_suffix("ms") {
        (number, 1.0)
    } else if let Some(number) = first.strip_suffix('s') {
        (number, 1000.0)
    } else {
        (first, 1000.0)
    };

    match number.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            Duration::from_micros((value * millis_per_unit * 1000.0 + 0.5) as u64)
        }
        _ => Duration::ZERO,
    }
}
