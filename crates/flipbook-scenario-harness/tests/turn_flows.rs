use std::time::Duration;

use flipbook_core::{ContentItem, Key, MediaKind, PageMedia};
use flipbook_scenario_harness::ScenarioHarness;

fn two_record_story() -> Vec<ContentItem> {
    vec![
        ContentItem::titled("A").with_media(MediaKind::Image, "a.jpg"),
        ContentItem::titled("B"),
    ]
}

#[test]
fn two_record_story_builds_four_pages() {
    let harness = ScenarioHarness::from_story(&two_record_story());
    let pages = harness.book().book().pages();

    assert_eq!(pages.len(), 4);
    assert!(pages[0].is_cover);
    assert!(pages[3].is_cover);
    assert!(!pages[1].is_cover && !pages[2].is_cover);
    assert_eq!(pages[1].title, "A");
    assert!(matches!(pages[1].media, Some(PageMedia::Image { .. })));
    assert_eq!(pages[2].title, "B");
    assert!(pages[2].media.is_none());
}

#[test]
fn keys_do_nothing_until_the_book_is_opened() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());

    assert!(!harness.press(Key::ArrowRight));
    assert_eq!(harness.book().current_page(), 0);

    harness.open_and_settle();
    assert!(harness.book().is_open());
    assert_eq!(harness.book().current_page(), 1);

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.book().current_page(), 2);
}

#[test]
fn double_click_opens_with_a_single_turn() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());

    assert!(harness.click());
    assert!(!harness.click());
    assert!(harness.settle());
    assert!(!harness.click());

    assert_eq!(harness.turns_started(), 1);
    assert_eq!(harness.book().current_page(), 1);
}

#[test]
fn rapid_double_forward_advances_once() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    harness.open_and_settle();

    assert!(harness.press(Key::ArrowRight));
    assert!(!harness.press(Key::ArrowRight));
    assert!(harness.book().is_flipping());
    assert!(harness.settle());

    assert_eq!(harness.book().current_page(), 2);
    assert!(!harness.book().is_flipping());
}

#[test]
fn turn_stays_in_flight_until_its_duration_elapses() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    harness.surface_mut().set_duration(0, Duration::from_millis(600));

    assert!(harness.click());
    assert_eq!(harness.book().current_page(), 1);

    assert!(!harness.advance(Duration::from_millis(599)));
    assert!(harness.book().is_flipping());
    assert!(!harness.press(Key::ArrowRight));

    assert!(harness.advance(Duration::from_millis(1)));
    assert!(!harness.book().is_flipping());
    assert_eq!(harness.now(), Duration::from_millis(600));
}

#[test]
fn boundaries_do_not_move_the_book() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    harness.open_and_settle();

    assert!(harness.press_and_settle(Key::ArrowLeft));
    assert_eq!(harness.book().current_page(), 0);
    assert!(!harness.press(Key::ArrowLeft));
    assert_eq!(harness.book().current_page(), 0);

    for _ in 0..3 {
        assert!(harness.press_and_settle(Key::ArrowRight));
    }
    assert_eq!(harness.book().current_page(), 3);
    assert!(!harness.press(Key::ArrowRight));
    assert_eq!(harness.book().current_page(), 3);
}

#[test]
fn short_swipe_is_ignored_and_long_swipes_turn() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    harness.open_and_settle();

    assert!(!harness.swipe(200.0, 170.0));
    assert_eq!(harness.book().current_page(), 1);

    assert!(harness.swipe(300.0, 200.0));
    assert!(harness.settle());
    assert_eq!(harness.book().current_page(), 2);

    assert!(harness.swipe(100.0, 220.0));
    assert!(harness.settle());
    assert_eq!(harness.book().current_page(), 1);
}

#[test]
fn swipe_before_opening_does_not_open() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    assert!(!harness.swipe(300.0, 100.0));
    assert!(!harness.book().is_open());
}

#[test]
fn flipped_pages_stack_above_the_rest() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());
    harness.open_and_settle();
    assert!(harness.press_and_settle(Key::ArrowRight));

    let pages = harness.book().book().pages();
    assert!(pages[0].flipped && pages[1].flipped);
    assert!(pages[1].stack_order > pages[0].stack_order);
    for resting in pages.iter().filter(|page| !page.flipped) {
        assert!(pages[0].stack_order > resting.stack_order);
    }

    assert!(harness.press_and_settle(Key::ArrowLeft));
    let pages = harness.book().book().pages();
    assert!(!pages[1].flipped);
    assert_eq!(pages[1].stack_order, 3);
}

#[test]
fn empty_story_opens_onto_the_back_cover() {
    let mut harness = ScenarioHarness::from_story(&[]);
    assert_eq!(harness.book().total_pages(), 2);

    harness.open_and_settle();
    assert_eq!(harness.book().current_page(), 1);
    assert!(!harness.press(Key::ArrowRight));
}

#[test]
fn resize_computes_beam_path_once_laid_out() {
    let mut harness = ScenarioHarness::from_story(&two_record_story());

    harness.resize(0.0, 300.0);
    assert_eq!(harness.beam_path(), None);

    harness.resize(100.0, 200.0);
    assert_eq!(harness.beam_path(), Some("M 10 30 C 40 10, 70 80, 90 180"));
}
