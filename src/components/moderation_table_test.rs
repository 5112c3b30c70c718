use super::*;
use serde_json::json;

#[test]
fn companies_read_verified_flag() {
    assert!(is_approved(ModerationKind::Companies, &json!({ "verified": true })));
    assert!(is_approved(ModerationKind::Companies, &json!({ "isVerified": true })));
    assert!(!is_approved(ModerationKind::Companies, &json!({ "approved": true })));
}

#[test]
fn other_kinds_read_approved_flag() {
    for kind in [ModerationKind::Jobs, ModerationKind::Media, ModerationKind::Journalists] {
        assert!(is_approved(kind, &json!({ "approved": true })));
        assert!(is_approved(kind, &json!({ "isApproved": true })));
        assert!(!is_approved(kind, &json!({ "approved": "yes" })));
        assert!(!is_approved(kind, &json!({})));
    }
}

#[test]
fn toggle_selection_adds_and_removes() {
    let mut selected = Vec::new();
    toggle_selection(&mut selected, "1");
    toggle_selection(&mut selected, "2");
    toggle_selection(&mut selected, "1");
    assert_eq!(selected, vec!["2".to_owned()]);
}

#[test]
fn pager_bounds() {
    assert_eq!(page_label(0, 0), "Page 1 of 1");
    assert_eq!(page_label(2, 5), "Page 2 of 5");
    assert!(can_go_next(1, 2));
    assert!(!can_go_next(2, 2));
}

#[test]
fn filter_labels_are_distinct() {
    let labels = [ApprovalFilter::All, ApprovalFilter::Approved, ApprovalFilter::Pending].map(filter_label);
    assert_eq!(labels, ["All", "Approved", "Pending"]);
}

#[test]
fn approved_rows_can_only_be_rejected() {
    assert!(!can_decide(true, true));
    assert!(can_decide(true, false));
}

#[test]
fn pending_rows_can_only_be_approved() {
    assert!(can_decide(false, true));
    assert!(!can_decide(false, false));
}
