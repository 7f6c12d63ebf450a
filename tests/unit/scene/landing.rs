use super::*;
use crate::scene::Selector;

#[test]
fn every_controller_layer_is_present_once() {
    let scene = build(Viewport::default()).unwrap();
    for class in [
        layer::OVERLAY,
        layer::MASK_GROUP,
        layer::CURSOR,
        layer::MAIN,
        layer::SKY,
        layer::BG,
        layer::TEXT,
        layer::CHARACTER,
        layer::GLOW,
        layer::ABOUT,
        layer::ABOUT_IMAGE,
        layer::ABOUT_COPY,
    ] {
        assert_eq!(scene.select(&Selector::class(class)).len(), 1, "{class}");
    }
}

#[test]
fn hero_starts_tilted_and_zoomed() {
    let scene = build(Viewport::default()).unwrap();
    let main = scene.by_name(layer::MAIN).unwrap();
    assert_eq!(main.props.rotate, -10.0);
    assert_eq!(main.props.scale, 1.7);
    let character = scene.by_name(layer::CHARACTER).unwrap();
    assert_eq!(character.props.bottom_percent, -250.0);
    assert_eq!(character.props.x_percent, -50.0);
}

#[test]
fn text_layer_is_nested_under_main() {
    let scene = build(Viewport::default()).unwrap();
    let sel: Selector = ".main .text".parse().unwrap();
    assert_eq!(scene.select(&sel).len(), 1);
}

#[test]
fn overlay_is_fixed_full_viewport() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let scene = build(vp).unwrap();
    let overlay = scene.by_name(layer::OVERLAY).unwrap();
    assert!(overlay.fixed);
    assert_eq!(scene.client_rect(overlay.id), Some(vp.rect()));
}
