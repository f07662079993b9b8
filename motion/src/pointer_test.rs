use super::*;

const FRAME: f64 = 1.0 / 60.0;

fn settle(tracker: &mut PointerTracker) {
    for _ in 0..600 {
        if !tracker.tick(FRAME) {
            return;
        }
    }
}

fn assert_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

fn button_rect() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 50.0)
}

#[test]
fn rect_center_and_fraction() {
    let r = button_rect();
    assert_eq!(r.center(), Vec2::new(200.0, 125.0));
    assert_eq!(r.fraction_of(Vec2::new(150.0, 112.5)), Vec2::new(0.25, 0.25));
    assert_eq!(r.fraction_of(Vec2::new(-50.0, 900.0)), Vec2::new(0.0, 1.0));
}

#[test]
fn zero_size_rect_maps_to_middle() {
    let r = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(r.fraction_of(Vec2::new(99.0, -99.0)), Vec2::new(0.5, 0.5));
}

#[test]
fn moves_before_enter_are_ignored() {
    let mut t = PointerTracker::new(TrackingMode::magnetic(), SpringConfig::default(), false);
    assert!(!t.pointer_move(Vec2::new(300.0, 150.0), button_rect()));
    settle(&mut t);
    assert_eq!(t.offset(), Vec2::ZERO);
}

#[test]
fn magnetic_offset_follows_scaled_distance_from_center() {
    let mut t = PointerTracker::new(TrackingMode::magnetic(), SpringConfig::default(), false);
    assert!(t.enter());
    assert!(t.pointer_move(Vec2::new(300.0, 150.0), button_rect()));

    t.tick(FRAME);
    let partial = t.offset();
    assert!(partial.x > 0.0 && partial.x < 20.0, "should ease toward 20px: {partial:?}");

    settle(&mut t);
    assert_close(t.offset(), Vec2::new(20.0, 5.0));
    match t.transform() {
        Transform::Translate { x_px, y_px } => assert_close(Vec2::new(x_px, y_px), Vec2::new(20.0, 5.0)),
        other => panic!("expected translate transform, got {other:?}"),
    }
}

#[test]
fn leave_springs_back_to_origin() {
    let mut t = PointerTracker::new(TrackingMode::magnetic(), SpringConfig::default(), false);
    t.enter();
    t.pointer_move(Vec2::new(300.0, 150.0), button_rect());
    settle(&mut t);

    t.leave();
    assert!(!t.is_hovered());
    assert!(t.is_animating());
    assert!(!t.pointer_move(Vec2::new(300.0, 150.0), button_rect()));

    settle(&mut t);
    assert_eq!(t.offset(), Vec2::ZERO);
    assert_eq!(t.transform(), Transform::Identity);
    assert!(!t.is_animating());
}

#[test]
fn tilt_maps_corner_to_max_rotation() {
    let mut t = PointerTracker::new(TrackingMode::Tilt { max_deg: 10.0 }, SpringConfig::default(), false);
    t.enter();
    // Top-right corner: tilt back on X, right on Y.
    t.pointer_move(Vec2::new(300.0, 100.0), button_rect());
    settle(&mut t);

    assert_eq!(t.offset(), Vec2::new(0.5, -0.5));
    match t.transform() {
        Transform::Tilt { rotate_x_deg, rotate_y_deg } => {
            assert!((rotate_x_deg - 10.0).abs() < 1e-9);
            assert!((rotate_y_deg - 10.0).abs() < 1e-9);
        }
        other => panic!("expected tilt transform, got {other:?}"),
    }
}

#[test]
fn repeated_identical_moves_do_not_retarget() {
    let mut t = PointerTracker::new(TrackingMode::magnetic(), SpringConfig::default(), false);
    t.enter();
    assert!(t.pointer_move(Vec2::new(250.0, 125.0), button_rect()));
    assert!(!t.pointer_move(Vec2::new(250.0, 125.0), button_rect()));
}

#[test]
fn reduced_motion_never_subscribes_and_stays_at_zero() {
    let mut t = PointerTracker::new(TrackingMode::magnetic(), SpringConfig::default(), true);
    assert!(!t.subscribes());
    assert!(!t.enter());
    assert!(!t.pointer_move(Vec2::new(300.0, 150.0), button_rect()));
    assert!(!t.tick(FRAME));
    assert_eq!(t.offset(), Vec2::ZERO);
    assert_eq!(t.transform(), Transform::Identity);
    assert!(!t.is_animating());
}

#[test]
fn enabling_reduced_motion_mid_hover_discards_motion() {
    let mut t = PointerTracker::new(TrackingMode::tilt(), SpringConfig::default(), false);
    t.enter();
    t.pointer_move(Vec2::new(120.0, 140.0), button_rect());
    t.tick(FRAME);
    assert_ne!(t.offset(), Vec2::ZERO);

    t.set_reduced_motion(true);
    assert!(!t.is_hovered());
    assert_eq!(t.offset(), Vec2::ZERO);

    t.set_reduced_motion(false);
    assert_eq!(t.offset(), Vec2::ZERO);
    assert!(t.subscribes());
}

#[test]
fn transform_css_strings() {
    assert_eq!(Transform::Identity.to_css(), "none");
    assert_eq!(Transform::Translate { x_px: 1.5, y_px: -2.0 }.to_css(), "translate3d(1.50px, -2.00px, 0)");
    assert_eq!(
        Transform::Tilt { rotate_x_deg: 3.0, rotate_y_deg: -4.25 }.to_css(),
        "perspective(1000px) rotateX(3.00deg) rotateY(-4.25deg)"
    );
}
