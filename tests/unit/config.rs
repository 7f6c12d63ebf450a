use super::*;

#[test]
fn defaults_are_valid_and_match_the_page() {
    let cfg = PageConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.intro.reveal_threshold, 0.9);
    assert_eq!(cfg.intro.zoom_overlap, 1.8);
    assert_eq!(cfg.pointer.x_gain, 40.0);
    assert_eq!(cfg.pointer.y_gain, 20.0);
    assert_eq!(cfg.pointer.text.x_factor, 0.4);
    assert_eq!(cfg.pointer.bg.x_factor, 1.7);
    assert_eq!(cfg.scroll.stagger, 0.3);
    assert_eq!(cfg.cursor.duration, 0.1);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg = PageConfig::from_reader(
        r#"{ "viewport": { "width": 800, "height": 600 }, "intro": { "reveal_threshold": 0.5 } }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.viewport.width, 800.0);
    assert_eq!(cfg.intro.reveal_threshold, 0.5);
    assert_eq!(cfg.intro.zoom_scale, 10.0);
    assert_eq!(cfg.entrance, EntranceConfig::default());
}

#[test]
fn eases_are_written_by_name() {
    let cfg = PageConfig::from_reader(r#"{ "cursor": { "ease": "Expo.easeOut" } }"#.as_bytes())
        .unwrap();
    assert_eq!(cfg.cursor.ease, Ease::Expo(EaseDir::Out));
    assert!(PageConfig::from_reader(r#"{ "cursor": { "ease": "jelly" } }"#.as_bytes()).is_err());
}

#[test]
fn toggle_actions_are_written_as_four_words() {
    let cfg = PageConfig::from_reader(
        r#"{ "scroll": { "toggle_actions": "play pause play pause" } }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(
        cfg.scroll.toggle_actions.action_for(crate::input::ScrollEvent::Leave),
        crate::input::ToggleAction::Pause
    );
    assert_eq!(
        serde_json::to_value(&PageConfig::default()).unwrap()["scroll"]["toggle_actions"],
        "play none none none"
    );
    assert!(
        PageConfig::from_reader(r#"{ "scroll": { "toggle_actions": "play" } }"#.as_bytes())
            .is_err()
    );
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(PageConfig::from_reader(r#"{ "intro": { "speed": 2 } }"#.as_bytes()).is_err());
}

#[test]
fn validation_catches_bad_values() {
    let mut cfg = PageConfig::default();
    cfg.intro.reveal_threshold = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.intro.reveal_threshold = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.entrance.duration = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.loops.glow_min_opacity = -0.1;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.pointer.sky.duration = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = PageConfig::default();
    cfg.viewport.height = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn round_trips_through_json() {
    let cfg = PageConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(PageConfig::from_reader(json.as_bytes()).unwrap(), cfg);
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = PageConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open page config"));
}
