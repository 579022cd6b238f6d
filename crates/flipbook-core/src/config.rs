//! Book presentation settings.

extern crate alloc;

use alloc::string::String;

/// Fixed text and tuning values used while assembling and driving a book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookConfig {
    pub front_cover_title: String,
    pub front_cover_subtitle: String,
    pub back_cover_title: String,
    /// Prefix of the title given to content pages without one; the 1-based
    /// page position is appended.
    pub fallback_title_prefix: String,
    /// Alt text for images whose record has no title.
    pub image_alt_fallback: String,
    /// Horizontal travel a touch must exceed to count as a swipe.
    pub min_swipe_distance: f64,
    /// Stack order base for pages that have been turned face-down.
    pub flipped_stack_base: i32,
}

impl BookConfig {
    pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;
    pub const DEFAULT_FLIPPED_STACK_BASE: i32 = 1000;

    pub fn with_front_cover(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.front_cover_title = title.into();
        self.front_cover_subtitle = subtitle.into();
        self
    }

    pub fn with_back_cover(mut self, title: impl Into<String>) -> Self {
        self.back_cover_title = title.into();
        self
    }

    pub fn with_fallback_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_title_prefix = prefix.into();
        self
    }

    pub fn with_image_alt_fallback(mut self, alt: impl Into<String>) -> Self {
        self.image_alt_fallback = alt.into();
        self
    }

    pub fn with_flipped_stack_base(mut self, base: i32) -> Self {
        self.flipped_stack_base = base;
        self
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            front_cover_title: String::from("OUR LOVE STORY"),
            front_cover_subtitle: String::from("Tap me, I have been waiting for you"),
            back_cover_title: String::from("To be continued....."),
            fallback_title_prefix: String::from("Story #"),
            image_alt_fallback: String::from("Image"),
            min_swipe_distance: Self::DEFAULT_MIN_SWIPE_DISTANCE,
            flipped_stack_base: Self::DEFAULT_FLIPPED_STACK_BASE,
        }
    }
}
