//! Selection behavior as the presentation layer sees it

use std::sync::{Arc, Mutex};

use wallstudio::platform::{MemorySurface, ScreenMetrics, StaticScreen};
use wallstudio::validate::{is_valid_color, is_valid_dimension};
use wallstudio::{Resolution, SelectionEvent, Studio, StudioConfig, CUSTOM_ID, DETECTED_ID};

fn studio() -> Studio {
    let screen = StaticScreen::new(ScreenMetrics {
        width: 393.0,
        height: 852.0,
        dpr: 3.0,
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X)".into(),
    });
    Studio::new(&StudioConfig::default(), &screen, Arc::new(MemorySurface::new()))
}

#[test]
fn color_predicate_matches_hex_pattern() {
    let hex = "0123456789abcdefABCDEF";
    for a in hex.chars().step_by(5) {
        for b in hex.chars().step_by(7) {
            let short = format!("#{a}{b}{a}");
            let long = format!("#{a}{b}{a}{b}{a}{b}");
            assert!(is_valid_color(&short), "{short}");
            assert!(is_valid_color(&long), "{long}");
            assert!(!is_valid_color(&short[1..]));
            assert!(!is_valid_color(&format!("{long}{a}")));
        }
    }
    assert!(!is_valid_color("#12g"));
}

#[test]
fn dimension_predicate_is_inclusive_range() {
    for n in [99, 100, 101, 5000, 9999, 10_000, 10_001] {
        assert_eq!(is_valid_dimension(n as f64), (100..=10_000).contains(&n), "{n}");
    }
}

#[tokio::test]
async fn preset_then_custom_then_preset() {
    let s = studio();
    assert_eq!(s.model().resolution(), Resolution::new(1179, 2556));
    assert_eq!(s.active_preset_id(), Some(DETECTED_ID));

    s.select_card("fullhd");
    assert_eq!(s.active_preset_id(), Some("fullhd"));
    assert_eq!(s.model().resolution(), Resolution::new(1080, 1920));

    s.set_custom_resolution(1200, 1600);
    assert_eq!(s.active_preset_id(), Some(CUSTOM_ID));
    assert_eq!(s.model().resolution(), Resolution::new(1200, 1600));

    s.select_card(DETECTED_ID);
    assert_eq!(s.active_preset_id(), Some(DETECTED_ID));
    assert_eq!(s.model().resolution(), Resolution::new(1179, 2556));
}

#[tokio::test]
async fn rejected_custom_width_leaves_state_and_notifies() {
    let s = studio();
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();
    s.on_notification(move |m| sink.lock().unwrap().push(m.to_string()));

    s.select_card("qhd");
    assert_eq!(s.set_custom_resolution(50, 2000), None);
    assert_eq!(s.model().resolution(), Resolution::new(1440, 2560));
    assert_eq!(s.active_preset_id(), Some("qhd"));
    assert_eq!(*messages.lock().unwrap(), ["Enter valid dimensions (100-10000)"]);
}

#[tokio::test]
async fn observers_see_each_accepted_change_once() {
    let s = studio();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    s.on_selection_change(move |e| sink.lock().unwrap().push(e.clone()));

    s.set_color("#FF9500");
    s.set_color("orange");
    s.select_card("pixel8");
    s.select_card("custom");
    s.set_custom_resolution(20_000, 300);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], SelectionEvent::ColorChanged(c) if c.as_hex() == "#ff9500"));
    assert_eq!(
        events[1],
        SelectionEvent::ResolutionChanged {
            resolution: Resolution::new(1344, 2992),
            preset_id: "pixel8",
        }
    );
}

#[tokio::test]
async fn picker_and_swatches_drive_palette_selection() {
    let s = studio();
    s.pick_color([0xff, 0xff, 0xff]);
    let selected: Vec<_> = s.palette().into_iter().filter(|sw| sw.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].color.display_hex(), "#FFFFFF");

    assert!(s.select_color_swatch("#43e97b"));
    assert_eq!(s.color_hex_display(), "#43E97B");
}
