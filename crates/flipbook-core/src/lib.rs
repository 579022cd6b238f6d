//! Page-flip storybook core.
//! Works in the browser (WASM) and on the host for tests.
//!
//! The crate owns the book model and the page-turn state machine. Rendering,
//! timers and media playback are reached through the [`TransitionProbe`] and
//! [`PlaybackSink`] traits so that any front-end can drive it.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod beam;
pub mod book;
pub mod config;
pub mod content;
pub mod flip;
pub mod input;
pub mod media;
pub mod page;
pub mod transition;

#[cfg(any(feature = "std", test))]
pub mod mock_surface;

pub use beam::{beam_offset_path, beam_path};
pub use book::Book;
pub use config::BookConfig;
pub use content::{parse_story, ContentError, ContentItem, MediaKind};
pub use flip::{Direction, FlipBook, FlipState, FlipTicket, NavigationState};
pub use input::{InputAdapter, Intent, Key, UiEvent};
pub use media::{resync_playback, visible_spread, PlaybackError, PlaybackSink};
pub use page::{build_page, Beam, Page, PageMedia, VideoAttributes};
pub use transition::{parse_transition_duration, TransitionProbe};

#[cfg(any(feature = "std", test))]
pub use mock_surface::MockSurface;
