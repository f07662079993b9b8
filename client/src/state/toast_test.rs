use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.success("Saved");
    let b = toasts.error("Failed");
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.success("one");
    let b = toasts.success("two");
    toasts.dismiss(a);
    assert_eq!(toasts.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut toasts = ToastState::default();
    for i in 0..6 {
        toasts.success(format!("toast {i}"));
    }
    assert_eq!(toasts.items.len(), ToastState::MAX_VISIBLE);
    assert_eq!(toasts.items[0].message, "toast 2");
}
