//! Book assembler.

extern crate alloc;

use alloc::vec::Vec;

use crate::config::BookConfig;
use crate::content::ContentItem;
use crate::page::{build_page, Page};

/// Ordered pages of one book: front cover, one page per record, back cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    /// Assemble a book from the story records.
    ///
    /// Page `i` (1..=n) shows `items[i - 1]`. Each page starts at stack order
    /// `total - index`, so the closed front cover is on top.
    pub fn assemble(items: &[ContentItem], config: &BookConfig) -> Self {
        let total = items.len() + 2;
        let front = ContentItem::titled(config.front_cover_title.clone())
            .with_text(config.front_cover_subtitle.clone());
        let back = ContentItem::titled(config.back_cover_title.clone());

        let pages = (0..total)
            .map(|index| {
                let is_cover = index == 0 || index == total - 1;
                let record = if index == 0 {
                    &front
                } else if index == total - 1 {
                    &back
                } else {
                    &items[index - 1]
                };

                let mut page = build_page(index, record, config);
                page.is_cover = is_cover;
                page.stack_order = resting_stack_order(total, index);
                page
            })
            .collect();

        log::info!(
            "[BOOK] assembled {} pages from {} records",
            total,
            items.len()
        );

        Self { pages }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Number of content pages, covers excluded.
    pub fn content_pages(&self) -> usize {
        self.pages.len() - 2
    }
}

/// Stack order of an unflipped page: lower indices sit higher.
pub(crate) fn resting_stack_order(total: usize, index: usize) -> i32 {
    total.saturating_sub(index) as i32
}
