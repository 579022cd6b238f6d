//! Page-turn state machine.
//!
//! A [`FlipBook`] owns the assembled [`Book`] and the navigation state. A turn
//! is accepted synchronously: position, `flipped` flag and beam are updated at
//! once and a [`FlipTicket`] is handed back. The platform waits
//! `ticket.duration` and then calls [`FlipBook::complete_flip`], which settles
//! the stack order, resyncs media and returns the machine to idle.
//!
//! At most one turn is in flight. Requests arriving while a turn is in flight
//! are dropped, not queued.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::book::{resting_stack_order, Book};
use crate::config::BookConfig;
use crate::content::ContentItem;
use crate::input::Intent;
use crate::media::{self, resync_playback, PlaybackSink};
use crate::transition::TransitionProbe;

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Map a signed step (`+1` / `-1`) to a direction.
    pub const fn from_step(step: i32) -> Option<Self> {
        match step {
            1 => Some(Self::Forward),
            -1 => Some(Self::Backward),
            _ => None,
        }
    }

    pub const fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// An accepted turn, waiting for its animation to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipTicket {
    /// Monotonic turn number, used to match the completion to its turn.
    pub seq: u64,
    pub direction: Direction,
    pub from: usize,
    pub to: usize,
    /// Page being rotated.
    pub pivot: usize,
    /// Page whose beam was restarted, if it exists.
    pub beam_target: Option<usize>,
    /// How long the platform should wait before completing.
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlipState {
    #[default]
    Idle,
    Flipping(FlipTicket),
}

/// Reading position of one book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_page: usize,
    pub is_open: bool,
    pub flip: FlipState,
}

impl NavigationState {
    pub fn is_flipping(&self) -> bool {
        matches!(self.flip, FlipState::Flipping(_))
    }
}

/// Book controller: owns pages and navigation state.
#[derive(Debug, Clone)]
pub struct FlipBook {
    book: Book,
    config: BookConfig,
    nav: NavigationState,
    next_seq: u64,
}

impl FlipBook {
    pub fn new(book: Book, config: BookConfig) -> Self {
        Self {
            book,
            config,
            nav: NavigationState::default(),
            next_seq: 0,
        }
    }

    /// Assemble a book from story records and wrap it in a controller.
    pub fn from_story(items: &[ContentItem], config: BookConfig) -> Self {
        let book = Book::assemble(items, &config);
        Self::new(book, config)
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_page(&self) -> usize {
        self.nav.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.book.total_pages()
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_open
    }

    pub fn is_flipping(&self) -> bool {
        self.nav.is_flipping()
    }

    /// The turn currently waiting for completion.
    pub fn in_flight(&self) -> Option<&FlipTicket> {
        match &self.nav.flip {
            FlipState::Flipping(ticket) => Some(ticket),
            FlipState::Idle => None,
        }
    }

    /// Indices of the visible spread (left, right) that exist in the book.
    pub fn visible_spread(&self) -> Vec<usize> {
        media::visible_spread(&self.book, self.nav.current_page).collect()
    }

    /// Request a turn. Returns the ticket to complete after
    /// `ticket.duration`, or `None` when the request is dropped (a turn is
    /// already in flight, or the target is outside the book).
    pub fn turn<P: TransitionProbe + ?Sized>(
        &mut self,
        direction: Direction,
        probe: &P,
    ) -> Option<FlipTicket> {
        if let FlipState::Flipping(in_flight) = &self.nav.flip {
            log::debug!(
                "[FLIP] drop {} turn: turn #{} still in flight",
                direction.label(),
                in_flight.seq
            );
            return None;
        }

        let from = self.nav.current_page;
        let target = from as isize + direction.step();
        if target < 0 || target as usize >= self.book.total_pages() {
            log::debug!(
                "[FLIP] drop {} turn: page {} is outside 0..{}",
                direction.label(),
                target,
                self.book.total_pages()
            );
            return None;
        }
        let to = target as usize;

        let forward = direction == Direction::Forward;
        let pivot = if forward { from } else { to };
        self.nav.current_page = to;

        if let Some(page) = self.book.page_mut(pivot) {
            page.flipped = forward;
        }

        // The beam runs on the page that the turn exposes.
        let beam_target = if forward { to.checked_sub(1) } else { Some(to) };
        let beam_target = beam_target.filter(|&index| match self.book.page_mut(index) {
            Some(page) => {
                page.beam.restart();
                true
            }
            None => false,
        });

        let ticket = FlipTicket {
            seq: self.next_seq,
            direction,
            from,
            to,
            pivot,
            beam_target,
            duration: probe.transition_duration(pivot),
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.nav.flip = FlipState::Flipping(ticket.clone());

        log::debug!(
            "[FLIP] turn #{} {} {} -> {} pivot={} duration={}ms",
            ticket.seq,
            direction.label(),
            from,
            to,
            pivot,
            ticket.duration.as_millis()
        );

        Some(ticket)
    }

    /// Open the book by turning the front cover. Does nothing once open.
    pub fn open_book<P: TransitionProbe + ?Sized>(&mut self, probe: &P) -> Option<FlipTicket> {
        if self.nav.is_open {
            return None;
        }
        self.nav.is_open = true;
        log::info!("[FLIP] opening book");
        self.turn(Direction::Forward, probe)
    }

    /// Finish the turn described by `ticket` once its animation has elapsed.
    ///
    /// Returns `false` and changes nothing if `ticket` is not the turn in
    /// flight.
    pub fn complete_flip<S: PlaybackSink + ?Sized>(
        &mut self,
        ticket: &FlipTicket,
        sink: &mut S,
    ) -> bool {
        match &self.nav.flip {
            FlipState::Flipping(in_flight) if in_flight.seq == ticket.seq => {}
            _ => {
                log::debug!("[FLIP] ignore stale completion of turn #{}", ticket.seq);
                return false;
            }
        }

        let total = self.book.total_pages();
        let current = self.nav.current_page;
        let stack_order = match ticket.direction {
            Direction::Forward => self.flipped_stack_base() + current as i32,
            Direction::Backward => resting_stack_order(total, current),
        };
        if let Some(page) = self.book.page_mut(ticket.pivot) {
            page.stack_order = stack_order;
        }

        resync_playback(&self.book, current, sink);
        self.nav.flip = FlipState::Idle;

        log::debug!(
            "[FLIP] turn #{} complete, page {} stack order {}",
            ticket.seq,
            ticket.pivot,
            stack_order
        );
        true
    }

    /// Carry out a navigation intent from the input adapter.
    pub fn apply_intent<P: TransitionProbe + ?Sized>(
        &mut self,
        intent: &Intent,
        probe: &P,
    ) -> Option<FlipTicket> {
        match intent {
            Intent::Open => self.open_book(probe),
            Intent::Turn(direction) => self.turn(*direction, probe),
            Intent::RelayoutBeams { .. } => None,
        }
    }

    // Flipped pages must clear every resting order, which tops out at the
    // page count.
    fn flipped_stack_base(&self) -> i32 {
        self.config
            .flipped_stack_base
            .max(self.book.total_pages() as i32)
    }
}
