use super::*;
use crate::animation::Props;

const DT: f64 = 1.0 / 60.0;

fn page() -> LandingPage {
    LandingPage::new(PageConfig::default()).unwrap()
}

fn run(page: &mut LandingPage, secs: f64) {
    let frames = (secs / DT).round() as usize;
    for _ in 0..frames {
        page.tick(DT).unwrap();
    }
}

fn revealed() -> LandingPage {
    let mut page = page();
    page.mount().unwrap();
    run(&mut page, 2.5);
    assert!(page.content_visible());
    page
}

fn props(page: &LandingPage, name: &str) -> Props {
    let id = page.scene().by_name(name).unwrap().id;
    *page.scene().props(id).unwrap()
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = PageConfig::default();
    cfg.entrance.duration = 0.0;
    assert!(LandingPage::new(cfg).is_err());
}

#[test]
fn nothing_runs_before_mount() {
    let mut page = page();
    assert_eq!(page.pointer_move(Point::new(10.0, 10.0)).unwrap(), 0);
    run(&mut page, 3.0);
    assert!(page.is_loading());
    assert_eq!(page.engine().active_count(), 0);
}

#[test]
fn mounting_twice_registers_once() {
    let mut page = page();
    page.mount().unwrap();
    page.mount().unwrap();
    assert_eq!(page.listeners().count(Handler::CursorFollower), 1);
    assert_eq!(page.engine().active_count(), 1);
}

#[test]
fn cursor_follows_during_loading() {
    let mut page = page();
    page.mount().unwrap();
    assert!(page.is_loading());

    assert_eq!(page.pointer_move(Point::new(300.0, 200.0)).unwrap(), 1);
    run(&mut page, 0.5);
    let cursor = props(&page, layer::CURSOR);
    assert!((cursor.x - 290.0).abs() < 1e-9);
    assert!((cursor.y - 190.0).abs() < 1e-9);
    assert_eq!(page.listeners().count(Handler::HeroParallax), 0);
}

#[test]
fn content_becomes_visible_exactly_once() {
    let mut page = page();
    page.mount().unwrap();
    let mut flips = 0;
    let mut last = page.content_visible();
    for _ in 0..600 {
        page.tick(DT).unwrap();
        if page.content_visible() != last {
            flips += 1;
            last = page.content_visible();
        }
    }
    assert_eq!(flips, 1);
    assert_eq!(page.state(), PageState::Revealed);
    assert!(!page.is_loading());
}

#[test]
fn reveal_drops_overlay_and_intro() {
    let page = revealed();
    let overlay = page.scene().by_name(layer::OVERLAY).unwrap();
    assert!(overlay.removed);
    assert!(page.scene().by_name(layer::MASK_GROUP).unwrap().removed);
    let intro = page.intro().timeline().unwrap();
    assert!(!page.engine().is_active(intro));
}

#[test]
fn parallax_waits_for_reveal() {
    let mut page = page();
    page.mount().unwrap();
    run(&mut page, 1.5);
    assert!(!page.parallax().is_active());
    page.sync().unwrap();
    assert!(!page.parallax().is_active());
    assert_eq!(page.trigger_count(), 0);

    run(&mut page, 1.0);
    assert!(page.parallax().is_active());
    assert_eq!(page.listeners().count(Handler::HeroParallax), 1);
    assert_eq!(page.trigger_count(), 1);
}

#[test]
fn repeated_sync_does_not_duplicate_registrations() {
    let mut page = revealed();
    let held = page.mount_scope().unwrap().len();
    let anims = page.engine().active_count();
    for _ in 0..5 {
        page.sync().unwrap();
    }
    assert_eq!(page.mount_scope().unwrap().len(), held);
    assert_eq!(page.engine().active_count(), anims);
    assert_eq!(page.listeners().count(Handler::HeroParallax), 1);
}

#[test]
fn pointer_inside_main_drives_both_listeners() {
    let mut page = revealed();
    run(&mut page, 3.0);
    let main = page.scene().by_name(layer::MAIN).unwrap().id;
    let rect = page.scene().client_rect(main).unwrap();
    assert_eq!(
        page.pointer_move(Point::new(rect.x0, rect.center().y)).unwrap(),
        2
    );
    run(&mut page, 2.0);
    assert!((props(&page, layer::SKY).x - -20.0).abs() < 1e-9);
}

#[test]
fn pointer_on_main_far_edges_still_hits() {
    let mut page = revealed();
    run(&mut page, 3.0);
    let main = page.scene().by_name(layer::MAIN).unwrap().id;
    let rect = page.scene().client_rect(main).unwrap();
    assert_eq!(page.pointer_move(Point::new(rect.x1, rect.y1)).unwrap(), 2);
    assert_eq!(
        page.pointer_move(Point::new(rect.x1 + 1.0, rect.y1)).unwrap(),
        1
    );
}

#[test]
fn pointer_outside_main_only_moves_cursor() {
    let mut page = revealed();
    run(&mut page, 3.0);
    assert_eq!(page.pointer_move(Point::new(-50.0, 450.0)).unwrap(), 1);
}

#[test]
fn scroll_plays_fade_in_once() {
    let mut page = revealed();
    run(&mut page, 3.0);
    let fade = page.parallax().activation().unwrap().scroll_fade;
    assert!(page.engine().is_paused(fade));

    assert_eq!(page.scroll_to(10.0).unwrap(), vec![ScrollEvent::Enter]);
    assert!(!page.engine().is_paused(fade));
    run(&mut page, 1.5);
    assert!((props(&page, layer::ABOUT_COPY).opacity - 1.0).abs() < 1e-9);
    assert!(!page.engine().is_active(fade));

    assert_eq!(page.scroll_to(0.0).unwrap(), vec![ScrollEvent::LeaveBack]);
    assert_eq!(page.scroll_to(10.0).unwrap(), vec![ScrollEvent::Enter]);
    run(&mut page, 0.5);
    assert!((props(&page, layer::ABOUT_IMAGE).opacity - 1.0).abs() < 1e-9);
}

#[test]
fn configured_toggle_actions_drive_the_fade() {
    let mut config = PageConfig::default();
    config.scroll.toggle_actions = "none none none none".parse().unwrap();
    let mut page = LandingPage::new(config).unwrap();
    page.mount().unwrap();
    run(&mut page, 5.5);
    let fade = page.parallax().activation().unwrap().scroll_fade;

    assert_eq!(page.scroll_to(10.0).unwrap(), vec![ScrollEvent::Enter]);
    assert!(page.engine().is_paused(fade));
}

#[test]
fn scroll_before_reveal_fires_nothing() {
    let mut page = page();
    page.mount().unwrap();
    assert!(page.scroll_to(500.0).unwrap().is_empty());
    assert!(page.scroll_to(f64::NAN).is_err());
}

#[test]
fn unmount_releases_everything_and_remount_starts_clean() {
    let mut page = revealed();
    let bob = page.parallax().activation().unwrap().bob;

    assert!(page.unmount());
    assert!(!page.unmount());
    assert!(page.listeners().is_empty());
    assert_eq!(page.trigger_count(), 0);
    assert!(!page.engine().is_active(bob));
    assert_eq!(page.engine().active_count(), 0);

    page.mount().unwrap();
    assert_eq!(page.listeners().count(Handler::CursorFollower), 1);
    assert!(page.is_loading());
    assert!(!page.scene().by_name(layer::OVERLAY).unwrap().removed);
    assert!(!page.parallax().is_active());

    page.unmount();
    page.mount().unwrap();
    assert_eq!(page.listeners().len(), 1);
}

#[test]
fn snapshot_reports_flags_and_elements() {
    let page = revealed();
    let snap = page.snapshot();
    assert!(snap.content_visible && !snap.is_loading && snap.mounted);
    assert_eq!(snap.state, PageState::Revealed);
    assert_eq!(snap.elements.len(), page.scene().elements().len());

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["state"], "revealed");
    assert_eq!(json["content_visible"], true);
}
