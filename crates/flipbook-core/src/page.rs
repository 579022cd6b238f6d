//! Page builder.
//!
//! Turns one content record into a [`Page`]. Every page owns its media slot
//! and its decorative beam directly, so nothing downstream has to search for
//! them.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::config::BookConfig;
use crate::content::{ContentItem, MediaKind};

/// Attributes a video element is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoAttributes {
    pub looped: bool,
    pub muted: bool,
    pub plays_inline: bool,
    /// Preload metadata only, not the whole stream.
    pub preload_metadata: bool,
}

impl Default for VideoAttributes {
    fn default() -> Self {
        Self {
            looped: true,
            muted: true,
            plays_inline: true,
            preload_metadata: true,
        }
    }
}

/// Content of a page's media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMedia {
    Image { src: String, alt: String },
    Video { src: String, attributes: VideoAttributes },
}

impl PageMedia {
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video { .. })
    }
}

/// Decorative highlight that travels along the page when it is exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Beam {
    restarts: u32,
}

impl Beam {
    /// Replay the animation from the start.
    pub fn restart(&mut self) {
        self.restarts = self.restarts.wrapping_add(1);
    }

    /// Number of times the animation has been (re)started.
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn is_active(&self) -> bool {
        self.restarts > 0
    }
}

/// One physical leaf of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub title: String,
    /// Cover subtitle or content body; empty when the record had none.
    pub text: String,
    pub media: Option<PageMedia>,
    pub beam: Beam,
    pub is_cover: bool,
    pub flipped: bool,
    pub stack_order: i32,
}

impl Page {
    pub fn has_video(&self) -> bool {
        self.media.as_ref().is_some_and(PageMedia::is_video)
    }
}

/// Build the page at `index` from `record`.
///
/// Missing fields fall back to defaults. A media type without a source keeps
/// the media element with an empty source, the way a browser would.
pub fn build_page(index: usize, record: &ContentItem, config: &BookConfig) -> Page {
    let title = match record.title.as_deref() {
        Some(title) if !title.is_empty() => String::from(title),
        _ => format!("{}{}", config.fallback_title_prefix, index + 1),
    };

    let src = record.src.clone().unwrap_or_default();
    let media = match record.kind {
        Some(MediaKind::Video) => Some(PageMedia::Video {
            src,
            attributes: VideoAttributes::default(),
        }),
        Some(MediaKind::Image) => Some(PageMedia::Image {
            src,
            alt: match record.title.as_deref() {
                Some(alt) if !alt.is_empty() => String::from(alt),
                _ => config.image_alt_fallback.clone(),
            },
        }),
        None => None,
    };

    Page {
        index,
        title,
        text: record.text.clone().unwrap_or_default(),
        media,
        beam: Beam::default(),
        is_cover: false,
        flipped: false,
        stack_order: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_page_uses_title_as_alt() {
        let record = ContentItem::titled("A").with_media(MediaKind::Image, "a.jpg");
        let page = build_page(1, &record, &BookConfig::default());

        assert_eq!(page.title, "A");
        assert_eq!(
            page.media,
            Some(PageMedia::Image {
                src: "a.jpg".into(),
                alt: "A".into()
            })
        );
        assert!(!page.has_video());
    }

    #[test]
    fn image_without_title_gets_generic_alt_and_positional_title() {
        let record = ContentItem::default().with_media(MediaKind::Image, "x.png");
        let page = build_page(4, &record, &BookConfig::default());

        assert_eq!(page.title, "Story #5");
        match page.media {
            Some(PageMedia::Image { alt, .. }) => assert_eq!(alt, "Image"),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn video_page_is_looping_muted_inline() {
        let record = ContentItem::titled("V").with_media(MediaKind::Video, "v.mp4");
        let page = build_page(2, &record, &BookConfig::default());

        assert!(page.has_video());
        match page.media {
            Some(PageMedia::Video { src, attributes }) => {
                assert_eq!(src, "v.mp4");
                assert!(attributes.looped);
                assert!(attributes.muted);
                assert!(attributes.plays_inline);
                assert!(attributes.preload_metadata);
            }
            other => panic!("expected video, got {:?}", other),
        }
    }

    #[test]
    fn absent_type_leaves_media_slot_empty() {
        let record = ContentItem::titled("B");
        let page = build_page(2, &record, &BookConfig::default());
        assert!(page.media.is_none());
        assert_eq!(page.text, "");
    }

    #[test]
    fn every_page_starts_with_an_idle_beam() {
        let page = build_page(0, &ContentItem::default(), &BookConfig::default());
        assert!(!page.beam.is_active());
        assert_eq!(page.beam.restarts(), 0);
    }

    #[test]
    fn beam_restart_counts_replays() {
        let mut beam = Beam::default();
        beam.restart();
        beam.restart();
        assert_eq!(beam.restarts(), 2);
    }
}
