//! Mock Rendering Surface for Host-Side Tests
//!
//! Stands in for the browser: answers transition-duration queries and keeps
//! track of which videos are playing.

extern crate alloc;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::media::{PlaybackError, PlaybackSink};
use crate::transition::TransitionProbe;

/// In-memory surface with configurable timing and playback outcomes.
pub struct MockSurface {
    default_duration: Duration,
    durations: BTreeMap<usize, Duration>,
    playing: BTreeSet<usize>,
    rejected: BTreeSet<usize>,
    play_calls: Vec<usize>,
    pause_calls: Vec<usize>,
}

impl MockSurface {
    /// Duration reported for pages without an override.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self::with_duration(Self::DEFAULT_DURATION)
    }

    /// Surface where every page turns in `duration`.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            default_duration: duration,
            durations: BTreeMap::new(),
            playing: BTreeSet::new(),
            rejected: BTreeSet::new(),
            play_calls: Vec::new(),
            pause_calls: Vec::new(),
        }
    }

    /// Override the transition duration of one page.
    pub fn set_duration(&mut self, page: usize, duration: Duration) {
        self.durations.insert(page, duration);
    }

    /// Make every future play request on `page` fail like a blocked autoplay.
    pub fn reject_playback_on(&mut self, page: usize) {
        self.rejected.insert(page);
    }

    /// Pages whose video is playing, in page order.
    pub fn playing(&self) -> Vec<usize> {
        self.playing.iter().copied().collect()
    }

    pub fn is_playing(&self, page: usize) -> bool {
        self.playing.contains(&page)
    }

    pub fn play_calls(&self) -> &[usize] {
        &self.play_calls
    }

    pub fn pause_calls(&self) -> &[usize] {
        &self.pause_calls
    }

    /// Forget recorded calls, keep playback state.
    pub fn clear_calls(&mut self) {
        self.play_calls.clear();
        self.pause_calls.clear();
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionProbe for MockSurface {
    fn transition_duration(&self, page: usize) -> Duration {
        self.durations
            .get(&page)
            .copied()
            .unwrap_or(self.default_duration)
    }
}

impl PlaybackSink for MockSurface {
    fn is_paused(&self, page: usize) -> bool {
        !self.playing.contains(&page)
    }

    fn pause(&mut self, page: usize) {
        self.pause_calls.push(page);
        self.playing.remove(&page);
    }

    fn play(&mut self, page: usize) -> Result<(), PlaybackError> {
        self.play_calls.push(page);
        if self.rejected.contains(&page) {
            return Err(PlaybackError::Rejected(String::from(
                "play() can only be initiated by a user gesture",
            )));
        }
        self.playing.insert(page);
        Ok(())
    }
}
