use super::*;
use crate::net::transport::Method;
use crate::storage::MemoryStore;
use crate::test_support::{ScriptedTransport, harness};
use futures::executor::block_on;

#[test]
fn moderation_paths_follow_kind() {
    assert_eq!(ModerationKind::Jobs.approve_path("7"), "/admin/jobs/7/approve");
    assert_eq!(ModerationKind::Media.bulk_approve_path(), "/admin/media/bulk-approve");
    assert_eq!(ModerationKind::Companies.list_path(), "/admin/companies");
    assert_eq!(user_status_path("u1"), "/admin/users/u1/status");
}

#[test]
fn companies_filter_on_verified() {
    assert_eq!(ModerationKind::Companies.filter_param(), "verified");
    for kind in [ModerationKind::Jobs, ModerationKind::Media, ModerationKind::Journalists] {
        assert_eq!(kind.filter_param(), "approved");
    }
}

#[test]
fn moderation_query_omits_filter_for_all() {
    let query = moderation_query(ModerationKind::Jobs, 3, ApprovalFilter::All);
    assert_eq!(query, vec![("page", "3".to_owned()), ("limit", "10".to_owned())]);
}

#[test]
fn moderation_query_maps_pending_to_false() {
    let query = moderation_query(ModerationKind::Companies, 0, ApprovalFilter::Pending);
    assert_eq!(
        query,
        vec![("page", "1".to_owned()), ("limit", "10".to_owned()), ("verified", "false".to_owned())]
    );
}

#[test]
fn bulk_body_uses_kind_specific_ids_key() {
    let ids = vec!["1".to_owned(), "2".to_owned()];
    let body = bulk_decision_body(ModerationKind::Journalists, &ids, true);
    assert_eq!(body, json!({ "journalistIds": ["1", "2"], "approved": true }));
}

#[test]
fn dashboard_counter_defaults_to_zero() {
    let stats = json!({ "users": { "total": 12, "pending": 3 }, "jobs": {} });
    assert_eq!(dashboard_counter(&stats, "users"), (12, 3));
    assert_eq!(dashboard_counter(&stats, "jobs"), (0, 0));
    assert_eq!(dashboard_counter(&stats, "media"), (0, 0));
}

#[test]
fn login_posts_credentials_and_decodes_session() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "token": "t1", "user": { "id": 1, "role": "journalist" } })),
        MemoryStore::default(),
    );
    let creds = Credentials { email: "a@b.co".to_owned(), password: "secret1".to_owned() };

    let auth = block_on(login(&h.client, &creds)).unwrap();

    assert_eq!(auth.token, "t1");
    assert_eq!(auth.user.role, Role::Journalist);
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/auth/login");
    assert_eq!(req.body.as_deref(), Some(r#"{"email":"a@b.co","password":"secret1"}"#));
}

#[test]
fn fetch_profile_accepts_wrapped_user() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "user": { "id": "9", "role": "admin" } })),
        MemoryStore::default(),
    );
    let user = block_on(fetch_profile(&h.client)).unwrap();
    assert_eq!(user.id, "9");
    assert_eq!(h.transport.last_request().url, "http://api.test/auth/profile");
}

#[test]
fn list_moderation_reads_rows_and_pages() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "mediaContent": [{ "id": 1 }], "totalPages": 2 })),
        MemoryStore::default(),
    );
    let page = block_on(list_moderation(&h.client, ModerationKind::Media, 2, ApprovalFilter::Approved)).unwrap();
    assert_eq!(page.items, vec![json!({ "id": 1 })]);
    assert_eq!(page.total_pages, 2);
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/admin/media");
    assert!(req.query.contains(&("approved".to_owned(), "true".to_owned())));
}

#[test]
fn decide_puts_approval_and_notes() {
    let h = harness(ScriptedTransport::new().reply(200, json!({ "ok": true })), MemoryStore::default());
    block_on(decide(&h.client, ModerationKind::Jobs, "5", false, "missing budget")).unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, "http://api.test/admin/jobs/5/approve");
    let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "approved": false, "notes": "missing budget" }));
}

#[test]
fn bulk_decide_with_empty_selection_sends_nothing() {
    let h = harness(ScriptedTransport::new(), MemoryStore::default());
    block_on(bulk_decide(&h.client, ModerationKind::Companies, &[], true)).unwrap();
    assert!(h.transport.requests().is_empty());
}

#[test]
fn update_user_status_puts_status() {
    let h = harness(ScriptedTransport::new().reply(200, Value::Null), MemoryStore::default());
    block_on(update_user_status(&h.client, "42", "suspended")).unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/admin/users/42/status");
    assert_eq!(req.body.as_deref(), Some(r#"{"status":"suspended"}"#));
}

#[test]
fn users_query_includes_only_set_filters() {
    let query = users_query(0, Some(""), None);
    assert_eq!(query, vec![("page", "1".to_owned()), ("limit", "10".to_owned())]);
    let query = users_query(3, Some("pending"), Some(Role::Journalist));
    assert!(query.contains(&("status", "pending".to_owned())));
    assert!(query.contains(&("role", "journalist".to_owned())));
}

#[test]
fn list_users_reads_users_key() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "users": [{ "id": 9, "status": "pending" }], "totalPages": 1 })),
        MemoryStore::default(),
    );
    let page = block_on(list_users(&h.client, 1, Some("pending"), None)).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(h.transport.last_request().url, "http://api.test/admin/users");
}

#[test]
fn detail_paths() {
    assert_eq!(job_path("4"), "/jobs/4");
    assert_eq!(journalist_path("9"), "/journalists/9");
    assert_eq!(company_path("2"), "/companies/2");
    assert_eq!(company_application_path("11"), "/companies/my/applications/11");
    assert_eq!(my_media_item_path("8"), "/media-content/my/8");
}

#[test]
fn apply_to_job_posts_job_id_and_cover_letter() {
    let h = harness(ScriptedTransport::new().reply(201, json!({ "id": 1 })), MemoryStore::default());
    block_on(apply_to_job(&h.client, 12, DEFAULT_COVER_LETTER)).unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/job-applications");
    let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "jobId": 12, "coverLetter": "I am interested in this position." }));
}

#[test]
fn apply_to_job_surfaces_server_message() {
    let h = harness(
        ScriptedTransport::new().reply(400, json!({ "message": "Already applied" })),
        MemoryStore::default(),
    );
    let err = block_on(apply_to_job(&h.client, 12, DEFAULT_COVER_LETTER)).unwrap_err();
    assert_eq!(err.user_message(), "Already applied");
}

#[test]
fn delete_my_media_sends_delete() {
    let h = harness(ScriptedTransport::new().reply(204, Value::Null), MemoryStore::default());
    block_on(delete_my_media(&h.client, "8")).unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url, "http://api.test/media-content/my/8");
}

#[test]
fn search_sends_trimmed_query_and_scope() {
    let h = harness(ScriptedTransport::new().reply(200, json!({ "jobs": [] })), MemoryStore::default());
    block_on(search(&h.client, "  camera ", SearchScope::Jobs)).unwrap();
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/search");
    assert_eq!(
        req.query,
        vec![("query".to_owned(), "camera".to_owned()), ("type".to_owned(), "jobs".to_owned())]
    );
}

#[test]
fn search_scope_round_trips_through_its_param() {
    for scope in SearchScope::ALL {
        assert_eq!(SearchScope::from_param(scope.as_param()), scope);
    }
    assert_eq!(SearchScope::from_param("people"), SearchScope::All);
}

#[test]
fn list_records_reads_kind_specific_key() {
    let h = harness(
        ScriptedTransport::new().reply(200, json!({ "purchases": [{ "id": 1 }, { "id": 2 }], "totalPages": 3 })),
        MemoryStore::default(),
    );
    let page = block_on(list_records(&h.client, RecordKind::Purchases, 0)).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 3);
    let req = h.transport.last_request();
    assert_eq!(req.url, "http://api.test/admin/purchases");
    assert!(req.query.contains(&("page".to_owned(), "1".to_owned())));
}
