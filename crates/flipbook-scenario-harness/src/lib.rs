//! Host-side scenario test harness for scripted flipbook flows.

use std::time::Duration;

use flipbook_core::{
    beam_path, BookConfig, ContentItem, FlipBook, FlipTicket, InputAdapter, Intent, Key,
    MockSurface, UiEvent,
};

/// Couples a book, its input adapter and a mock surface under a virtual clock.
///
/// Turn completions are not run until enough virtual time has passed, just
/// like the browser timer would.
pub struct ScenarioHarness {
    book: FlipBook,
    input: InputAdapter,
    surface: MockSurface,
    now: Duration,
    pending: Option<(Duration, FlipTicket)>,
    turns_started: usize,
    turns_completed: usize,
    beam_path: Option<String>,
}

impl ScenarioHarness {
    /// Construct a harness with caller-provided book and surface state.
    pub fn new(book: FlipBook, surface: MockSurface) -> Self {
        let input = InputAdapter::new(book.config().min_swipe_distance);
        Self {
            book,
            input,
            surface,
            now: Duration::ZERO,
            pending: None,
            turns_started: 0,
            turns_completed: 0,
            beam_path: None,
        }
    }

    /// Harness over a book assembled from `items` with default settings.
    pub fn from_story(items: &[ContentItem]) -> Self {
        Self::new(
            FlipBook::from_story(items, BookConfig::default()),
            MockSurface::new(),
        )
    }

    /// Deliver a raw UI event. Returns true if it started a turn.
    pub fn send(&mut self, event: UiEvent) -> bool {
        let Some(intent) = self.input.interpret(event, self.book.is_open()) else {
            return false;
        };
        if let Intent::RelayoutBeams { width, height } = intent {
            if let Some(path) = beam_path(width, height) {
                self.beam_path = Some(path);
            }
            return false;
        }

        match self.book.apply_intent(&intent, &self.surface) {
            Some(ticket) => {
                self.turns_started += 1;
                self.pending = Some((self.now + ticket.duration, ticket));
                true
            }
            None => false,
        }
    }

    /// Click the book container.
    pub fn click(&mut self) -> bool {
        self.send(UiEvent::Click)
    }

    /// Press a key.
    pub fn press(&mut self, key: Key) -> bool {
        self.send(UiEvent::KeyDown(key))
    }

    /// Touch at `from_x` and lift at `to_x`.
    pub fn swipe(&mut self, from_x: f64, to_x: f64) -> bool {
        self.send(UiEvent::TouchStart { x: from_x });
        self.send(UiEvent::TouchEnd { x: to_x })
    }

    /// Report a new beam box size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.send(UiEvent::Resize { width, height });
    }

    /// Move the virtual clock forward and run a completion that fell due.
    /// Returns true if a turn completed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.now += elapsed;
        let due = matches!(self.pending, Some((deadline, _)) if deadline <= self.now);
        if !due {
            return false;
        }

        let Some((_, ticket)) = self.pending.take() else {
            return false;
        };
        let completed = self.book.complete_flip(&ticket, &mut self.surface);
        if completed {
            self.turns_completed += 1;
        }
        completed
    }

    /// Jump the clock to the pending completion, if any, and run it.
    pub fn settle(&mut self) -> bool {
        let remaining = match &self.pending {
            Some((deadline, _)) => deadline.saturating_sub(self.now),
            None => return false,
        };
        self.advance(remaining)
    }

    /// Open the book and let the cover finish turning.
    pub fn open_and_settle(&mut self) {
        assert!(self.click(), "opening click should start a turn");
        assert!(self.settle(), "cover turn should complete");
    }

    /// Press `key` and let the turn finish. Returns true if a turn ran.
    pub fn press_and_settle(&mut self, key: Key) -> bool {
        self.press(key) && self.settle()
    }

    pub fn book(&self) -> &FlipBook {
        &self.book
    }

    pub fn surface(&self) -> &MockSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut MockSurface {
        &mut self.surface
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn turns_started(&self) -> usize {
        self.turns_started
    }

    pub fn turns_completed(&self) -> usize {
        self.turns_completed
    }

    /// Latest beam path computed from a resize.
    pub fn beam_path(&self) -> Option<&str> {
        self.beam_path.as_deref()
    }
}
