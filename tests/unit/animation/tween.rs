use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::{Rect, Viewport};
use crate::scene::Element;

fn scene_with(name: &str, class: &str) -> (Scene, ElementId) {
    let mut scene = Scene::new(Viewport::default());
    let id = scene
        .add(Element::new(name, Rect::new(0.0, 0.0, 100.0, 100.0)).class(class))
        .unwrap();
    (scene, id)
}

fn linear_to(prop: Prop, value: f64, duration: f64) -> TweenVars {
    TweenVars::to(PropSet::new().with(prop, value))
        .duration(duration)
        .ease(Ease::Linear)
}

#[test]
fn validate_rejects_bad_timing() {
    assert!(linear_to(Prop::X, 1.0, -1.0).validate().is_err());
    assert!(linear_to(Prop::X, 1.0, f64::NAN).validate().is_err());
    assert!(
        linear_to(Prop::X, 1.0, 1.0)
            .delay(f64::INFINITY)
            .validate()
            .is_err()
    );
    assert!(linear_to(Prop::X, f64::NAN, 1.0).validate().is_err());
    assert!(linear_to(Prop::X, 1.0, 1.0).delay(-1.0).validate().is_ok());
}

#[test]
fn captures_start_values_on_first_render() {
    let (mut scene, id) = scene_with("a", "a");
    let mut tween = Tween::new(TweenId(1), vec![id], linear_to(Prop::X, 100.0, 2.0)).unwrap();

    scene.get_mut(id).unwrap().props.x = 20.0;
    let u = tween.render(1.0, &mut scene).unwrap();
    assert_eq!(u.progress, 0.5);
    assert_eq!(scene.props(id).unwrap().x, 60.0);
}

#[test]
fn delay_holds_until_start_and_negative_delay_skips_ahead() {
    let (mut scene, id) = scene_with("a", "a");
    let mut late = Tween::new(
        TweenId(1),
        vec![id],
        linear_to(Prop::X, 10.0, 1.0).delay(0.5),
    )
    .unwrap();
    assert!(late.render(0.25, &mut scene).is_none());
    assert!(!late.is_live());

    let mut early = Tween::new(
        TweenId(2),
        vec![id],
        linear_to(Prop::Y, 10.0, 2.0).delay(-1.0),
    )
    .unwrap();
    let u = early.render(0.0, &mut scene).unwrap();
    assert_eq!(u.progress, 0.5);
}

#[test]
fn completes_once_and_goes_quiet() {
    let (mut scene, id) = scene_with("a", "a");
    let mut tween = Tween::new(TweenId(1), vec![id], linear_to(Prop::X, 10.0, 1.0)).unwrap();
    let done = tween.render(1.5, &mut scene).unwrap();
    assert!(done.complete);
    assert_eq!(done.progress, 1.0);
    assert_eq!(scene.props(id).unwrap().x, 10.0);
    assert!(tween.render(2.0, &mut scene).is_none());
    assert!(tween.is_finished());
}

#[test]
fn yoyo_reverses_on_odd_cycles_and_never_completes_when_infinite() {
    let (mut scene, id) = scene_with("a", "a");
    let vars = linear_to(Prop::Y, -10.0, 1.0)
        .repeat(Repeat::Infinite)
        .yoyo(true);
    let mut tween = Tween::new(TweenId(1), vec![id], vars).unwrap();

    tween.render(0.5, &mut scene);
    assert_eq!(scene.props(id).unwrap().y, -5.0);
    let u = tween.render(1.25, &mut scene).unwrap();
    assert_eq!(u.iteration, 1);
    assert_eq!(scene.props(id).unwrap().y, -7.5);
    tween.render(2.0, &mut scene);
    assert_eq!(scene.props(id).unwrap().y, 0.0);

    for step in 0..1000 {
        let u = tween.render(3.0 + step as f64 * 0.37, &mut scene).unwrap();
        assert!(!u.complete);
    }
    assert!(tween.is_live());
}

#[test]
fn counted_repeat_without_yoyo_restarts_each_cycle() {
    let (mut scene, id) = scene_with("a", "a");
    let vars = linear_to(Prop::X, 10.0, 1.0).repeat(Repeat::Count(1));
    let mut tween = Tween::new(TweenId(1), vec![id], vars).unwrap();
    assert_eq!(tween.total_duration(), 2.0);
    tween.render(1.5, &mut scene);
    assert_eq!(scene.props(id).unwrap().x, 5.0);
    let u = tween.render(2.0, &mut scene).unwrap();
    assert!(u.complete);
    assert_eq!(u.iteration, 1);
}

#[test]
fn per_element_resolver_gives_divergent_targets() {
    fn resolve(el: &Element) -> PropSet {
        if el.has_class("character") {
            PropSet::new().with(Prop::Scale, 0.6).with(Prop::XPercent, -50.0)
        } else {
            PropSet::new().with(Prop::Scale, 1.0)
        }
    }

    let mut scene = Scene::new(Viewport::default());
    let bg = scene
        .add(Element::new("bg", Rect::new(0.0, 0.0, 1.0, 1.0)).class("bg"))
        .unwrap();
    let ch = scene
        .add(Element::new("ch", Rect::new(0.0, 0.0, 1.0, 1.0)).class("character"))
        .unwrap();
    scene.get_mut(bg).unwrap().props.scale = 2.0;
    scene.get_mut(ch).unwrap().props.scale = 2.0;

    let vars = TweenVars::per_element(resolve).duration(1.0);
    let mut tween = Tween::new(TweenId(1), vec![bg, ch], vars).unwrap();
    tween.render(1.0, &mut scene);

    assert_eq!(scene.props(bg).unwrap().scale, 1.0);
    assert_eq!(scene.props(bg).unwrap().x_percent, 0.0);
    assert_eq!(scene.props(ch).unwrap().scale, 0.6);
    assert_eq!(scene.props(ch).unwrap().x_percent, -50.0);
}

#[test]
fn from_to_renders_start_values_up_front() {
    let (mut scene, id) = scene_with("a", "a");
    let vars = TweenVars::from_to(
        PropSet::new().with(Prop::X, -100.0).with(Prop::Opacity, 0.0),
        PropSet::new().with(Prop::X, 0.0).with(Prop::Opacity, 1.0),
    )
    .duration(1.0)
    .ease(Ease::Linear);
    let mut tween = Tween::new(TweenId(1), vec![id], vars).unwrap();
    tween.render_from(&mut scene);
    assert_eq!(scene.props(id).unwrap().x, -100.0);
    assert_eq!(scene.props(id).unwrap().opacity, 0.0);

    tween.render(0.5, &mut scene);
    assert_eq!(scene.props(id).unwrap().x, -50.0);
    assert_eq!(scene.props(id).unwrap().opacity, 0.5);
}

#[test]
fn missing_targets_are_a_silent_no_op() {
    let (mut scene, _) = scene_with("a", "a");
    let mut tween = Tween::new(TweenId(1), vec![], linear_to(Prop::X, 1.0, 1.0)).unwrap();
    let u = tween.render(0.5, &mut scene).unwrap();
    assert_eq!(u.progress, 0.5);
    assert!(tween.owned().is_empty());
}

#[test]
fn strip_releases_ownership() {
    let (mut scene, id) = scene_with("a", "a");
    let mut tween = Tween::new(TweenId(1), vec![id], linear_to(Prop::X, 10.0, 1.0)).unwrap();
    tween.render(0.1, &mut scene);
    assert_eq!(tween.owned(), vec![(id, Prop::X)]);
    tween.strip(id, Prop::X);
    assert!(tween.owned().is_empty());
    let before = scene.props(id).unwrap().x;
    tween.render(0.9, &mut scene);
    assert_eq!(scene.props(id).unwrap().x, before);
}
