//! Media coordinator.
//!
//! Keeps video playback limited to the visible spread. The sink only receives
//! pause and play intents; a platform that refuses to start playback (autoplay
//! policy, missing element) is logged and otherwise ignored.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::book::Book;

/// Why a playback start did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("media element unavailable")]
    Unavailable,
}

/// Platform side of media playback, addressed by page index.
pub trait PlaybackSink {
    /// Whether the video on `page` is currently paused.
    fn is_paused(&self, page: usize) -> bool;

    fn pause(&mut self, page: usize);

    /// Ask the video on `page` to start. Platforms with asynchronous playback
    /// report late rejections themselves and return `Ok` here.
    fn play(&mut self, page: usize) -> Result<(), PlaybackError>;
}

/// Indices of the spread around `current_page` (left = `current_page - 1`,
/// right = `current_page`) that exist in `book`.
pub fn visible_spread(book: &Book, current_page: usize) -> impl Iterator<Item = usize> {
    let total = book.total_pages();
    [current_page.checked_sub(1), Some(current_page)]
        .into_iter()
        .flatten()
        .filter(move |&index| index < total)
}

/// Pause every playing video, then start the videos of the visible spread.
pub fn resync_playback<S: PlaybackSink + ?Sized>(book: &Book, current_page: usize, sink: &mut S) {
    for page in book.pages().iter().filter(|page| page.has_video()) {
        if !sink.is_paused(page.index) {
            sink.pause(page.index);
        }
    }

    for index in visible_spread(book, current_page) {
        if !book.page(index).is_some_and(|page| page.has_video()) {
            continue;
        }
        if let Err(error) = sink.play(index) {
            log::warn!("[MEDIA] playback blocked on page {}: {}", index, error);
        }
    }
}
