use super::*;

#[test]
fn default_delay_is_two_hundred_ms() {
    let group = HoverGroup::<&str>::new();
    assert_eq!(group.delay_ms(), 200);
    assert_eq!(group.active(), None);
}

#[test]
fn enter_activates_and_leave_hides_after_fire() {
    let mut group = HoverGroup::new();
    assert!(group.enter("services"));
    assert!(group.is_active(&"services"));

    let ticket = group.leave(&"services").expect("active key should schedule a hide");
    assert_eq!(ticket.delay_ms(), 200);
    assert!(group.hide_pending());
    assert!(group.is_active(&"services"), "hide must wait for the delay");

    assert!(group.fire(ticket));
    assert_eq!(group.active(), None);
    assert!(!group.hide_pending());
}

#[test]
fn crossing_from_trigger_to_panel_never_hides() {
    let mut group = HoverGroup::new();
    group.enter("industries");
    // Trigger leave, then panel enter inside the gap.
    let ticket = group.leave(&"industries").expect("ticket");
    assert!(!group.enter("industries"), "re-entry is not a new activation");

    assert!(!group.fire(ticket));
    assert!(group.is_active(&"industries"));
}

#[test]
fn focus_moving_into_panel_keeps_it_open_and_tabbing_out_hides() {
    let mut group = HoverGroup::new();
    assert!(group.enter("platform"));

    // Trigger blurs, first panel link takes focus.
    let to_link = group.leave(&"platform").expect("ticket");
    group.enter("platform");
    assert!(!group.fire(to_link));
    assert!(group.is_active(&"platform"));

    // Last link blurs with nothing inside the item taking focus.
    let tab_out = group.leave(&"platform").expect("ticket");
    assert!(group.fire(tab_out));
    assert_eq!(group.active(), None);
}

#[test]
fn repeated_leave_reenter_cycles_never_hide() {
    let mut group = HoverGroup::new();
    group.enter("a");
    let mut tickets = Vec::new();
    for _ in 0..10 {
        tickets.push(group.leave(&"a").expect("ticket"));
        group.enter("a");
    }
    for ticket in tickets {
        assert!(!group.fire(ticket));
    }
    assert!(group.is_active(&"a"));
}

#[test]
fn only_latest_ticket_fires() {
    let mut group = HoverGroup::new();
    group.enter("a");
    let first = group.leave(&"a").expect("ticket");
    let second = group.leave(&"a").expect("ticket");
    assert!(!group.fire(first));
    assert!(group.is_active(&"a"));
    assert!(group.fire(second));
    assert_eq!(group.active(), None);
}

#[test]
fn entering_sibling_switches_exactly_once() {
    let mut group = HoverGroup::new();
    let mut activations = 0;
    if group.enter("a") {
        activations += 1;
    }
    let stale = group.leave(&"a").expect("ticket");
    if group.enter("b") {
        activations += 1;
    }
    if group.enter("b") {
        activations += 1;
    }

    assert_eq!(activations, 2);
    assert!(group.is_active(&"b"));
    assert!(!group.is_active(&"a"));
    assert!(!group.fire(stale), "A's pending hide must not close B");
    assert!(group.is_active(&"b"));
}

#[test]
fn leave_from_inactive_sibling_is_ignored() {
    let mut group = HoverGroup::new();
    group.enter("a");
    group.enter("b");
    assert_eq!(group.leave(&"a"), None);
    assert!(group.is_active(&"b"));
    assert!(!group.hide_pending());
}

#[test]
fn dismiss_closes_immediately_and_voids_tickets() {
    let mut group = HoverGroup::new();
    group.enter("a");
    let ticket = group.leave(&"a").expect("ticket");
    group.dismiss();
    assert_eq!(group.active(), None);
    assert!(!group.fire(ticket));

    assert!(group.enter("a"), "group is still usable after dismiss");
}

#[test]
fn teardown_makes_late_timers_and_events_inert() {
    let mut group = HoverGroup::new();
    group.enter("a");
    let ticket = group.leave(&"a").expect("ticket");
    group.teardown();

    assert!(!group.fire(ticket));
    assert!(!group.enter("b"));
    assert_eq!(group.leave(&"b"), None);
    assert_eq!(group.active(), None);
}

#[test]
fn custom_delay_is_reported_on_tickets() {
    let mut group = HoverGroup::with_delay(350);
    group.enter(1_u8);
    assert_eq!(group.leave(&1).map(|t| t.delay_ms()), Some(350));
}
