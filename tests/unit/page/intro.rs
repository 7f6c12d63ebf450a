use super::*;
use crate::foundation::core::Viewport;
use crate::scene::landing;

fn setup() -> (Engine, IntroController) {
    let engine = Engine::new(landing::build(Viewport::default()).unwrap());
    (engine, IntroController::new(0.9))
}

fn mask_props(engine: &Engine) -> crate::animation::Props {
    let id = engine.scene().by_name(layer::MASK_GROUP).unwrap().id;
    *engine.scene().props(id).unwrap()
}

#[test]
fn threshold_fires_exactly_once() {
    let mut intro = IntroController::new(0.9);
    assert!(!intro.on_progress(0.5));
    assert!(!intro.on_progress(0.89));
    assert!(intro.on_progress(0.9));
    assert!(!intro.on_progress(0.95));
    assert!(!intro.on_progress(1.0));
    assert!(intro.has_fired());
}

#[test]
fn start_is_idempotent() {
    let (mut engine, mut intro) = setup();
    let cfg = IntroConfig::default();
    let a = intro.start(&mut engine, &cfg).unwrap();
    let b = intro.start(&mut engine, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(engine.active_count(), 1);
    assert_eq!(intro.timeline(), Some(a));
    assert!(intro.zoom_stage().is_some());
}

#[test]
fn reveal_is_reported_once_near_the_end_of_the_zoom() {
    let (mut engine, mut intro) = setup();
    let tl = intro.start(&mut engine, &IntroConfig::default()).unwrap();

    let mut reveals = Vec::new();
    for _ in 0..16 {
        let report = engine.tick(0.25).unwrap();
        if let Some(r) = intro.observe(&report) {
            reveals.push((report.time, r));
        }
    }
    assert_eq!(reveals.len(), 1);
    let (at, reveal) = reveals[0];
    assert_eq!(reveal.timeline, tl);
    // Zoom runs 0.2..2.2, so 90% lands at 2.0.
    assert!(at > 1.9 && at <= 2.25, "revealed at {at}");
}

#[test]
fn stages_overlap_and_settle() {
    let (mut engine, mut intro) = setup();
    intro.start(&mut engine, &IntroConfig::default()).unwrap();

    engine.tick(0.1).unwrap();
    let early = mask_props(&engine);
    assert!(early.rotate > 0.0);
    assert_eq!(early.scale, 1.0);

    engine.tick(0.4).unwrap();
    assert!(mask_props(&engine).scale > 1.0, "zoom starts before rotate ends");

    engine.tick(2.0).unwrap();
    let end = mask_props(&engine);
    assert!((end.rotate - 10.0).abs() < 1e-9);
    assert!((end.scale - 10.0).abs() < 1e-9);
    assert_eq!(end.opacity, 0.0);
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn observe_without_start_is_silent() {
    let (mut engine, mut intro) = setup();
    let report = engine.tick(3.0).unwrap();
    assert!(intro.observe(&report).is_none());
}
