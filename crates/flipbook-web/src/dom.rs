//! DOM rendering of a book.
//!
//! Builds one `<section class="page">` per page and keeps its classes and
//! `z-index` in step with the core state. Also serves as the core's
//! [`TransitionProbe`] (computed `transition-duration`) and [`PlaybackSink`]
//! (the page's `<video>`).

use std::time::Duration;

use flipbook_core::{
    beam::beam_offset_path, parse_transition_duration, Book, FlipTicket, Page, PageMedia,
    PlaybackError, PlaybackSink, TransitionProbe,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlVideoElement, Window};

/// Elements making up one rendered page.
struct PageElements {
    section: HtmlElement,
    beam_path: HtmlElement,
    beam: HtmlElement,
    video: Option<HtmlVideoElement>,
}

pub struct DomBook {
    window: Window,
    container: Element,
    loader: Option<HtmlElement>,
    pages: Vec<PageElements>,
}

impl DomBook {
    /// Wrap the book container and optional loading indicator.
    pub fn new(window: Window, container: Element, loader: Option<HtmlElement>) -> Self {
        Self {
            window,
            container,
            loader,
            pages: Vec::new(),
        }
    }

    fn document(&self) -> Result<Document, JsValue> {
        self.window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))
    }

    /// Replace whatever the container shows with `book` and hide the loader.
    pub fn mount(&mut self, book: &Book) -> Result<(), JsValue> {
        let document = self.document()?;
        self.container.set_inner_html("");
        self.pages.clear();

        for page in book.pages() {
            let elements = render_page(&document, page)?;
            self.container.append_child(&elements.section)?;
            self.pages.push(elements);
        }

        if let Some(loader) = &self.loader {
            loader.style().set_property("display", "none")?;
        }
        log::info!("[WEB] mounted {} pages", self.pages.len());
        Ok(())
    }

    /// Mark the container as open.
    pub fn sync_open(&self, is_open: bool) -> Result<(), JsValue> {
        self.container.class_list().toggle_with_force("open", is_open)?;
        Ok(())
    }

    /// Apply the synchronous part of an accepted turn: the pivot's `flipped`
    /// class and the beam replay.
    pub fn apply_turn(&self, book: &Book, ticket: &FlipTicket) -> Result<(), JsValue> {
        if let (Some(page), Some(elements)) =
            (book.page(ticket.pivot), self.pages.get(ticket.pivot))
        {
            elements
                .section
                .class_list()
                .toggle_with_force("flipped", page.flipped)?;
        }

        if let Some(elements) = ticket.beam_target.and_then(|index| self.pages.get(index)) {
            let beam = &elements.beam;
            beam.class_list().remove_1("is-active")?;
            // Reading the layout forces a reflow so the animation replays.
            let _ = beam.offset_width();
            beam.class_list().add_1("is-active")?;
        }
        Ok(())
    }

    /// Write the core's stack order of page `index` to its `z-index`.
    pub fn sync_stack_order(&self, book: &Book, index: usize) -> Result<(), JsValue> {
        match (book.page(index), self.pages.get(index)) {
            (Some(page), Some(elements)) => set_stack_order(&elements.section, page),
            _ => Ok(()),
        }
    }

    /// Rendered size of the first beam path box.
    pub fn beam_box(&self) -> Option<(f64, f64)> {
        self.pages.first().map(|elements| {
            (
                f64::from(elements.beam_path.client_width()),
                f64::from(elements.beam_path.client_height()),
            )
        })
    }

    /// Point every beam path at the curve for a `width` x `height` box.
    pub fn relayout_beams(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let Some(offset_path) = beam_offset_path(width, height) else {
            return Ok(());
        };
        for elements in &self.pages {
            elements
                .beam_path
                .style()
                .set_property("offset-path", &offset_path)?;
        }
        Ok(())
    }
}

impl TransitionProbe for DomBook {
    fn transition_duration(&self, page: usize) -> Duration {
        let Some(elements) = self.pages.get(page) else {
            return Duration::ZERO;
        };
        match self.window.get_computed_style(&elements.section) {
            Ok(Some(style)) => style
                .get_property_value("transition-duration")
                .map(|value| parse_transition_duration(&value))
                .unwrap_or(Duration::ZERO),
            _ => Duration::ZERO,
        }
    }
}

impl PlaybackSink for DomBook {
    fn is_paused(&self, page: usize) -> bool {
        self.pages
            .get(page)
            .and_then(|elements| elements.video.as_ref())
            .map_or(true, |video| video.paused())
    }

    fn pause(&mut self, page: usize) {
        let Some(video) = self.pages.get(page).and_then(|e| e.video.as_ref()) else {
            return;
        };
        if let Err(error) = video.pause() {
            log::warn!("[MEDIA] pause failed on page {}: {:?}", page, error);
        }
    }

    fn play(&mut self, page: usize) -> Result<(), PlaybackError> {
        let video = self
            .pages
            .get(page)
            .and_then(|elements| elements.video.as_ref())
            .ok_or(PlaybackError::Unavailable)?;

        let promise = video
            .play()
            .map_err(|error| PlaybackError::Rejected(format!("{:?}", error)))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(error) = JsFuture::from(promise).await {
                log::warn!(
                    "[MEDIA] browser blocked playback on page {}: {:?}",
                    page,
                    error
                );
            }
        });
        Ok(())
    }
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{}> has an unexpected type", tag)))
}

fn set_stack_order(section: &HtmlElement, page: &Page) -> Result<(), JsValue> {
    section
        .style()
        .set_property("z-index", &page.stack_order.to_string())
}

fn render_page(document: &Document, page: &Page) -> Result<PageElements, JsValue> {
    let section: HtmlElement = create(document, "section")?;
    section.set_class_name("page");
    section.set_attribute("data-page-number", &page.index.to_string())?;
    section.style().set_property("backface-visibility", "hidden")?;
    if page.is_cover {
        section.class_list().add_1("cover")?;
    }
    set_stack_order(&section, page)?;

    let frame: HtmlElement = create(document, "div")?;
    frame.set_class_name("frame");

    let header: HtmlElement = create(document, "header")?;
    let heading: HtmlElement = create(document, "h2")?;
    heading.set_text_content(Some(&page.title));
    header.append_child(&heading)?;

    let media_slot: HtmlElement = create(document, "div")?;
    media_slot.set_class_name("media");
    let mut video = None;
    match &page.media {
        Some(PageMedia::Video { src, attributes }) => {
            let element: HtmlVideoElement = create(document, "video")?;
            element.set_src(src);
            if attributes.plays_inline {
                element.set_attribute("playsinline", "")?;
            }
            if attributes.muted {
                element.set_attribute("muted", "")?;
                element.set_muted(true);
            }
            element.set_loop(attributes.looped);
            if attributes.preload_metadata {
                element.set_preload("metadata");
            }
            media_slot.append_child(&element)?;
            video = Some(element);
        }
        Some(PageMedia::Image { src, alt }) => {
            let element: HtmlImageElement = create(document, "img")?;
            element.set_alt(alt);
            element.set_src(src);
            media_slot.append_child(&element)?;
        }
        None => {}
    }

    let body: HtmlElement = create(document, "p")?;
    body.set_text_content(Some(&page.text));

    let beam_path: HtmlElement = create(document, "div")?;
    beam_path.set_class_name("beam-path");
    let beam: HtmlElement = create(document, "div")?;
    beam.set_class_name("beam");
    beam_path.append_child(&beam)?;

    frame.append_child(&header)?;
    frame.append_child(&media_slot)?;
    frame.append_child(&body)?;
    section.append_child(&frame)?;
    section.append_child(&beam_path)?;

    Ok(PageElements {
        section,
        beam_path,
        beam,
        video,
    })
}
