use flipbook_core::{ContentItem, Key, MediaKind};
use flipbook_scenario_harness::ScenarioHarness;

fn video_story() -> Vec<ContentItem> {
    vec![
        ContentItem::titled("Intro").with_media(MediaKind::Video, "intro.mp4"),
        ContentItem::titled("Photo").with_media(MediaKind::Image, "photo.jpg"),
        ContentItem::titled("Outro").with_media(MediaKind::Video, "outro.mp4"),
    ]
}

#[test]
fn opening_plays_the_first_video() {
    let mut harness = ScenarioHarness::from_story(&video_story());

    assert!(harness.click());
    assert!(harness.surface().play_calls().is_empty());
    assert!(harness.settle());

    assert_eq!(harness.surface().playing(), vec![1]);
}

#[test]
fn playback_follows_the_visible_spread() {
    let mut harness = ScenarioHarness::from_story(&video_story());
    harness.open_and_settle();

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.surface().playing(), vec![1]);

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.surface().playing(), vec![3]);
    assert!(!harness.surface().is_playing(1));

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.surface().playing(), vec![3]);
    assert_eq!(harness.book().visible_spread(), vec![3, 4]);
}

#[test]
fn blocked_autoplay_leaves_the_book_usable() {
    let mut harness = ScenarioHarness::from_story(&video_story());
    harness.surface_mut().reject_playback_on(1);

    harness.open_and_settle();
    assert!(harness.surface().playing().is_empty());
    assert_eq!(harness.surface().play_calls(), &[1]);
    assert!(!harness.book().is_flipping());

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.book().current_page(), 2);
}

#[test]
fn videos_are_paused_only_when_playing() {
    let mut harness = ScenarioHarness::from_story(&video_story());
    harness.open_and_settle();
    harness.surface_mut().clear_calls();

    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.surface().pause_calls(), &[1]);

    harness.surface_mut().clear_calls();
    assert!(harness.press_and_settle(Key::ArrowRight));
    assert_eq!(harness.surface().pause_calls(), &[1]);

    harness.surface_mut().clear_calls();
    assert!(harness.press_and_settle(Key::ArrowLeft));
    assert_eq!(harness.surface().pause_calls(), &[3]);
    assert_eq!(harness.surface().playing(), vec![1]);
}
