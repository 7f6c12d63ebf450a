use super::*;
use crate::config::PageConfig;
use crate::page::PageState;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn page() -> LandingPage {
    LandingPage::new(PageConfig::default()).unwrap()
}

#[test]
fn parses_pointer_and_scroll_events() {
    let script = Script::from_reader(
        r#"{ "events": [
            { "at": 2.5, "pointer": { "x": 10, "y": 20 } },
            { "at": 4.0, "scroll": { "y": 300 } }
        ] }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        script.events,
        vec![
            ScriptEvent {
                at: 2.5,
                input: Input::Pointer { x: 10.0, y: 20.0 },
            },
            ScriptEvent {
                at: 4.0,
                input: Input::Scroll { y: 300.0 },
            },
        ]
    );
}

#[test]
fn rejects_unsorted_or_negative_times() {
    let err = Script::from_reader(
        r#"{ "events": [ { "at": 3, "scroll": { "y": 1 } }, { "at": 1, "scroll": { "y": 2 } } ] }"#
            .as_bytes(),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("script error:"), "{err}");

    let negative = Script {
        events: vec![ScriptEvent {
            at: -1.0,
            input: Input::Scroll { y: 0.0 },
        }],
    };
    assert!(negative.validate().is_err());
}

#[test]
fn rejects_unknown_input_kind() {
    assert!(Script::from_reader(r#"{ "events": [ { "at": 0, "click": {} } ] }"#.as_bytes()).is_err());
}

#[test]
fn simulate_yields_one_frame_per_step() {
    let frames = simulate(page(), &Script::default(), fps(), 90).unwrap();
    assert_eq!(frames.len(), 90);
    assert_eq!(frames[0].frame, FrameIndex(0));
    assert_eq!(frames[0].page.time, 0.0);
    assert!(frames[0].page.is_loading);
    assert_eq!(frames[89].frame, FrameIndex(89));
    assert_eq!(frames[89].page.state, PageState::Revealed);
}

#[test]
fn simulate_is_deterministic() {
    let script = Script {
        events: vec![
            ScriptEvent {
                at: 0.5,
                input: Input::Pointer { x: 200.0, y: 300.0 },
            },
            ScriptEvent {
                at: 3.0,
                input: Input::Scroll { y: 120.0 },
            },
        ],
    };
    let a = simulate(page(), &script, fps(), 120).unwrap();
    let b = simulate(page(), &script, fps(), 120).unwrap();
    assert_eq!(a, b);
}

#[test]
fn scripted_scroll_lands_on_its_frame() {
    let script = Script {
        events: vec![ScriptEvent {
            at: 0.99,
            input: Input::Scroll { y: 120.0 },
        }],
    };
    let frames = simulate(page(), &script, fps(), 40).unwrap();
    assert_eq!(frames[29].page.scroll_y, 0.0);
    assert_eq!(frames[30].page.scroll_y, 120.0);
}

#[test]
fn seek_delivers_pending_input() {
    let script = Script {
        events: vec![ScriptEvent {
            at: 0.2,
            input: Input::Pointer { x: 110.0, y: 60.0 },
        }],
    };
    let mut sim = Simulation::new(page(), &script, fps()).unwrap();
    sim.seek(FrameIndex(30)).unwrap();
    assert_eq!(sim.frame(), FrameIndex(30));
    let page = sim.into_page();
    let cursor = page.scene().by_name("cursor").unwrap();
    assert!((cursor.props.x - 100.0).abs() < 1e-9);
}

#[test]
fn simulate_rejects_runs_past_the_frame_limit() {
    let err = simulate(page(), &Script::default(), fps(), u64::MAX).unwrap_err();
    assert!(err.to_string().contains("limit"));
    assert!(simulate(page(), &Script::default(), fps(), MAX_FRAMES + 1).is_err());
}
