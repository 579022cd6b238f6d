//! Browser front-end for the page-flip storybook.

mod dom;
mod fetch;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use flipbook_core::{
    BookConfig, ContentItem, FlipBook, FlipTicket, InputAdapter, Intent, Key, UiEvent,
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, TouchEvent, Window};

use crate::dom::DomBook;

const BOOK_ELEMENT_ID: &str = "book";
const LOADER_ELEMENT_ID: &str = "loader";
const STORY_URL_ATTRIBUTE: &str = "data-story-url";
const DEFAULT_STORY_URL: &str = "story.json";

struct State {
    book: FlipBook,
    input: InputAdapter,
    dom: DomBook,
    /// Completion timer of the turn in flight. Dropping it cancels the timer,
    /// so it is only replaced once the next turn starts.
    pending_completion: Option<Timeout>,
}

impl State {
    fn new(items: &[ContentItem], dom: DomBook) -> Self {
        let config = BookConfig::default();
        let input = InputAdapter::new(config.min_swipe_distance);
        Self {
            book: FlipBook::from_story(items, config),
            input,
            dom,
            pending_completion: None,
        }
    }

    fn apply_turn(&self, ticket: &FlipTicket) -> Result<(), JsValue> {
        self.dom.apply_turn(self.book.book(), ticket)
    }

    fn relayout_beams(&self) {
        let Some((width, height)) = self.dom.beam_box() else {
            return;
        };
        if let Err(error) = self.dom.relayout_beams(width, height) {
            log::warn!("[WEB] beam relayout failed: {:?}", error);
        }
    }
}

/// Debug builds log everything down to `debug`.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&error.to_string()));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(BOOK_ELEMENT_ID)
        .ok_or_else(|| JsValue::from_str("missing #book element"))?;
    let loader = document
        .get_element_by_id(LOADER_ELEMENT_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let story_url = container
        .get_attribute(STORY_URL_ATTRIBUTE)
        .unwrap_or_else(|| DEFAULT_STORY_URL.to_string());

    wasm_bindgen_futures::spawn_local(async move {
        let items = match fetch::fetch_story(&story_url).await {
            Ok(items) => items,
            Err(error) => {
                // The loader stays up; there is no fallback content.
                log::error!("[WEB] fatal: unable to load {}: {}", story_url, error);
                return;
            }
        };

        if let Err(error) = mount(window, container, loader, &items) {
            log::error!("[WEB] fatal: unable to render book: {:?}", error);
        }
    });

    Ok(())
}

fn mount(
    window: Window,
    container: Element,
    loader: Option<HtmlElement>,
    items: &[ContentItem],
) -> Result<(), JsValue> {
    let dom = DomBook::new(window.clone(), container.clone(), loader);
    let state = Rc::new(RefCell::new(State::new(items, dom)));
    {
        let mut guard = state.borrow_mut();
        let State { book, dom, .. } = &mut *guard;
        dom.mount(book.book())?;
        // `load` may have fired while the story was downloading.
        guard.relayout_beams();
    }

    // Click only opens the book.
    let click_state = state.clone();
    EventListener::new(&container, "click", move |_| {
        handle_event(&click_state, UiEvent::Click);
    })
    .forget();

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let key_state = state.clone();
    EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_name(&event.key());
        if key != Key::Other {
            handle_event(&key_state, UiEvent::KeyDown(key));
        }
    })
    .forget();

    let touch_start_state = state.clone();
    EventListener::new(&container, "touchstart", move |event| {
        if let Some(x) = touch_x(event, TouchPoint::Touches) {
            handle_event(&touch_start_state, UiEvent::TouchStart { x });
        }
    })
    .forget();

    let touch_end_state = state.clone();
    EventListener::new(&container, "touchend", move |event| {
        if let Some(x) = touch_x(event, TouchPoint::Changed) {
            handle_event(&touch_end_state, UiEvent::TouchEnd { x });
        }
    })
    .forget();

    for event_name in ["load", "resize"] {
        let resize_state = state.clone();
        EventListener::new(&window, event_name, move |_| {
            let beam_box = resize_state.borrow().dom.beam_box();
            if let Some((width, height)) = beam_box {
                handle_event(&resize_state, UiEvent::Resize { width, height });
            }
        })
        .forget();
    }

    Ok(())
}

enum TouchPoint {
    Touches,
    Changed,
}

fn touch_x(event: &web_sys::Event, point: TouchPoint) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = match point {
        TouchPoint::Touches => event.touches(),
        TouchPoint::Changed => event.changed_touches(),
    };
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

fn handle_event(state: &Rc<RefCell<State>>, event: UiEvent) {
    let ticket = {
        let mut guard = state.borrow_mut();
        let State {
            book, input, dom, ..
        } = &mut *guard;

        let Some(intent) = input.interpret(event, book.is_open()) else {
            return;
        };
        if let Intent::RelayoutBeams { width, height } = intent {
            if let Err(error) = dom.relayout_beams(width, height) {
                log::warn!("[WEB] beam relayout failed: {:?}", error);
            }
            return;
        }

        let ticket = book.apply_intent(&intent, &*dom);
        if let Err(error) = dom.sync_open(book.is_open()) {
            log::warn!("[WEB] unable to mark book open: {:?}", error);
        }
        ticket
    };

    if let Some(ticket) = ticket {
        start_flip(state, ticket);
    }
}

fn start_flip(state: &Rc<RefCell<State>>, ticket: FlipTicket) {
    if let Err(error) = state.borrow().apply_turn(&ticket) {
        log::warn!("[WEB] turn animation setup failed: {:?}", error);
    }

    let millis = u32::try_from(ticket.duration.as_millis()).unwrap_or(u32::MAX);
    let weak: Weak<RefCell<State>> = Rc::downgrade(state);
    let timeout = Timeout::new(millis, move || {
        if let Some(state) = weak.upgrade() {
            finish_flip(&state, &ticket);
        }
    });
    state.borrow_mut().pending_completion = Some(timeout);
}

fn finish_flip(state: &Rc<RefCell<State>>, ticket: &FlipTicket) {
    let mut guard = state.borrow_mut();
    let State { book, dom, .. } = &mut *guard;

    if !book.complete_flip(ticket, dom) {
        return;
    }
    if let Err(error) = dom.sync_stack_order(book.book(), ticket.pivot) {
        log::warn!("[WEB] unable to restack page {}: {:?}", ticket.pivot, error);
    }
}
