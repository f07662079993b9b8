use super::*;

const FRAME: f64 = 1.0 / 60.0;

fn run_until_rest(spring: &mut Spring, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        if !spring.step(FRAME) {
            return frame + 1;
        }
    }
    max_frames
}

#[test]
fn default_config_is_critically_damped() {
    let cfg = SpringConfig::default();
    assert!((cfg.stiffness - 200.0).abs() < f64::EPSILON);
    assert!((cfg.damping - 20.0).abs() < f64::EPSILON);
    assert!((cfg.mass - 0.5).abs() < f64::EPSILON);
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-9);
}

#[test]
fn spring_at_rest_does_not_move() {
    let mut s = Spring::default();
    assert!(!s.step(FRAME));
    assert_eq!(s.position, 0.0);
}

#[test]
fn spring_eases_toward_target_and_settles() {
    let mut s = Spring::default();
    s.set_target(10.0);

    assert!(s.step(FRAME));
    assert!(s.position > 0.0 && s.position < 10.0, "first frame should ease, not snap: {}", s.position);

    let frames = run_until_rest(&mut s, 600);
    assert!(frames < 600, "spring never settled");
    assert_eq!(s.position, 10.0);
    assert_eq!(s.velocity, 0.0);
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let mut s = Spring::default();
    s.set_target(50.0);
    let mut max_seen = 0.0_f64;
    for _ in 0..600 {
        s.step(FRAME);
        max_seen = max_seen.max(s.position);
    }
    assert!(max_seen <= 50.0 + SPRING_REST_DISTANCE, "overshot to {max_seen}");
}

#[test]
fn underdamped_spring_overshoots() {
    let mut s = Spring::new(SpringConfig { stiffness: 200.0, damping: 4.0, mass: 0.5 });
    s.set_target(50.0);
    let mut max_seen = 0.0_f64;
    for _ in 0..120 {
        s.step(FRAME);
        max_seen = max_seen.max(s.position);
    }
    assert!(max_seen > 50.0);
}

#[test]
fn retargeting_mid_flight_keeps_velocity() {
    let mut s = Spring::default();
    s.set_target(10.0);
    for _ in 0..5 {
        s.step(FRAME);
    }
    let velocity = s.velocity;
    assert!(velocity > 0.0);

    s.set_target(0.0);
    assert!((s.velocity - velocity).abs() < f64::EPSILON);
    run_until_rest(&mut s, 600);
    assert_eq!(s.position, 0.0);
}

#[test]
fn huge_frame_delta_is_clamped() {
    let mut a = Spring::default();
    let mut b = Spring::default();
    a.set_target(10.0);
    b.set_target(10.0);
    a.step(30.0);
    b.step(SPRING_MAX_FRAME_SECS);
    assert!((a.position - b.position).abs() < 1e-12);
}

#[test]
fn non_positive_or_nan_dt_is_ignored() {
    let mut s = Spring::default();
    s.set_target(5.0);
    assert!(s.step(0.0));
    assert!(s.step(-1.0));
    assert!(s.step(f64::NAN));
    assert_eq!(s.position, 0.0);
}

#[test]
fn snap_to_clears_motion() {
    let mut s = Spring::default();
    s.set_target(5.0);
    s.step(FRAME);
    s.snap_to(2.0);
    assert!(s.is_at_rest());
    assert_eq!(s.position, 2.0);
    assert_eq!(s.target, 2.0);
}

#[test]
fn spring2_moves_axes_independently() {
    let mut s = Spring2::default();
    s.set_target(Vec2::new(8.0, 0.0));
    assert!(s.step(FRAME));
    assert!(s.position().x > 0.0);
    assert_eq!(s.position().y, 0.0);
    assert!(s.y.is_at_rest());
}

#[test]
fn spring2_settles_on_target() {
    let mut s = Spring2::default();
    s.set_target(Vec2::new(-3.0, 4.0));
    for _ in 0..600 {
        if !s.step(FRAME) {
            break;
        }
    }
    assert!(s.is_at_rest());
    assert_eq!(s.position(), Vec2::new(-3.0, 4.0));
}

#[test]
fn vec2_helpers() {
    let a = Vec2::new(3.0, 4.0);
    assert_eq!(a.scale(0.5), Vec2::new(1.5, 2.0));
    assert_eq!(a.sub(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    assert_eq!(Vec2::default(), Vec2::ZERO);
}
