//! Typed wrappers for the REST endpoints the client calls.
//!
//! Auth endpoints return typed records; marketplace collections stay opaque
//! JSON. Admin moderation endpoints are shared by four collections and are
//! parameterized by [`ModerationKind`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{
    AuthResponse, CompanyRegistration, Credentials, JournalistRegistration, ModerationPage, ProfileResponse, Role,
    User,
};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_JOURNALIST_PATH: &str = "/auth/register-journalist";
pub const REGISTER_COMPANY_PATH: &str = "/auth/register-company";
pub const PROFILE_PATH: &str = "/auth/profile";

pub const JOBS_PATH: &str = "/jobs";
pub const JOURNALISTS_PATH: &str = "/journalists";
pub const COMPANIES_PATH: &str = "/companies";
pub const MEDIA_PATH: &str = "/media-content";
pub const MY_COMPANY_JOBS_PATH: &str = "/companies/my/jobs";
pub const MY_COMPANY_APPLICATIONS_PATH: &str = "/companies/my/applications";
pub const MY_MEDIA_PATH: &str = "/media-content/my/content";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const JOB_APPLICATIONS_PATH: &str = "/job-applications";
pub const SEARCH_PATH: &str = "/search";

/// Cover letter sent with a one-click job application.
pub const DEFAULT_COVER_LETTER: &str = "I am interested in this position.";

/// Rows per admin listing page.
pub const MODERATION_PAGE_SIZE: u32 = 10;

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Any [`ApiError`]; bad credentials arrive as [`ApiError::Unauthorized`].
pub async fn login(client: &HttpClient, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    client.post(LOGIN_PATH, credentials).await
}

/// `POST /auth/register-journalist`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn register_journalist(
    client: &HttpClient,
    registration: &JournalistRegistration,
) -> Result<AuthResponse, ApiError> {
    client.post(REGISTER_JOURNALIST_PATH, registration).await
}

/// `POST /auth/register-company`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn register_company(
    client: &HttpClient,
    registration: &CompanyRegistration,
) -> Result<AuthResponse, ApiError> {
    client.post(REGISTER_COMPANY_PATH, registration).await
}

/// `GET /auth/profile` using whatever token is persisted.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_profile(client: &HttpClient) -> Result<User, ApiError> {
    client.get::<ProfileResponse>(PROFILE_PATH, &[]).await.map(ProfileResponse::into_user)
}

// =============================================================================
// ADMIN MODERATION
// =============================================================================

/// Collections an admin approves or rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModerationKind {
    Jobs,
    Media,
    Journalists,
    Companies,
}

impl ModerationKind {
    pub const ALL: [Self; 4] = [Self::Jobs, Self::Media, Self::Journalists, Self::Companies];

    pub fn list_path(self) -> &'static str {
        match self {
            Self::Jobs => "/admin/jobs",
            Self::Media => "/admin/media",
            Self::Journalists => "/admin/journalists",
            Self::Companies => "/admin/companies",
        }
    }

    /// Key of the row array in a listing response.
    pub fn list_key(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Media => "mediaContent",
            Self::Journalists => "journalists",
            Self::Companies => "companies",
        }
    }

    /// Companies are "verified"; everything else is "approved".
    pub fn filter_param(self) -> &'static str {
        match self {
            Self::Companies => "verified",
            Self::Jobs | Self::Media | Self::Journalists => "approved",
        }
    }

    /// Key of the id array in a bulk-approve body.
    pub fn bulk_ids_key(self) -> &'static str {
        match self {
            Self::Jobs => "jobIds",
            Self::Media => "mediaIds",
            Self::Journalists => "journalistIds",
            Self::Companies => "companyIds",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Jobs => "Jobs",
            Self::Media => "Media Content",
            Self::Journalists => "Journalists",
            Self::Companies => "Companies",
        }
    }

    pub fn approve_path(self, id: &str) -> String {
        format!("{}/{id}/approve", self.list_path())
    }

    pub fn bulk_approve_path(self) -> String {
        format!("{}/bulk-approve", self.list_path())
    }
}

/// Listing filter on approval status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApprovalFilter {
    #[default]
    All,
    Approved,
    Pending,
}

impl ApprovalFilter {
    fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Approved => Some("true"),
            Self::Pending => Some("false"),
        }
    }
}

fn moderation_query(kind: ModerationKind, page: u32, filter: ApprovalFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.max(1).to_string()), ("limit", MODERATION_PAGE_SIZE.to_string())];
    if let Some(value) = filter.as_param() {
        query.push((kind.filter_param(), value.to_owned()));
    }
    query
}

fn bulk_decision_body(kind: ModerationKind, ids: &[String], approved: bool) -> Value {
    let mut body = serde_json::Map::new();
    body.insert(kind.bulk_ids_key().to_owned(), json!(ids));
    body.insert("approved".to_owned(), json!(approved));
    Value::Object(body)
}

/// `GET /admin/<kind>?page=..&limit=10[&approved|verified=..]`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn list_moderation(
    client: &HttpClient,
    kind: ModerationKind,
    page: u32,
    filter: ApprovalFilter,
) -> Result<ModerationPage, ApiError> {
    let query = moderation_query(kind, page, filter);
    let pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let body: Value = client.get(kind.list_path(), &pairs).await?;
    Ok(ModerationPage::from_value(kind.list_key(), &body))
}

/// `PUT /admin/<kind>/<id>/approve` with `{ approved, notes }`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn decide(
    client: &HttpClient,
    kind: ModerationKind,
    id: &str,
    approved: bool,
    notes: &str,
) -> Result<(), ApiError> {
    let body = json!({ "approved": approved, "notes": notes });
    client.put::<_, Value>(&kind.approve_path(id), &body).await.map(|_| ())
}

/// `POST /admin/<kind>/bulk-approve`. An empty selection sends nothing.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn bulk_decide(
    client: &HttpClient,
    kind: ModerationKind,
    ids: &[String],
    approved: bool,
) -> Result<(), ApiError> {
    if ids.is_empty() {
        return Ok(());
    }
    let body = bulk_decision_body(kind, ids, approved);
    client.post::<_, Value>(&kind.bulk_approve_path(), &body).await.map(|_| ())
}

fn users_query(page: u32, status: Option<&str>, role: Option<Role>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.max(1).to_string()), ("limit", MODERATION_PAGE_SIZE.to_string())];
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        query.push(("status", status.to_owned()));
    }
    if let Some(role) = role {
        query.push(("role", role.as_str().to_owned()));
    }
    query
}

/// `GET /admin/users?page=..&limit=10[&status=..][&role=..]`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn list_users(
    client: &HttpClient,
    page: u32,
    status: Option<&str>,
    role: Option<Role>,
) -> Result<ModerationPage, ApiError> {
    let query = users_query(page, status, role);
    let pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let body: Value = client.get(ADMIN_USERS_PATH, &pairs).await?;
    Ok(ModerationPage::from_value("users", &body))
}

pub fn user_status_path(user_id: &str) -> String {
    format!("/admin/users/{user_id}/status")
}

/// `PUT /admin/users/<id>/status` with `{ status }`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn update_user_status(client: &HttpClient, user_id: &str, status: &str) -> Result<(), ApiError> {
    client
        .put::<_, Value>(&user_status_path(user_id), &json!({ "status": status }))
        .await
        .map(|_| ())
}

/// Read `{ <section>: { total, pending } }` counters from the admin
/// dashboard payload; missing numbers read as zero.
pub fn dashboard_counter(stats: &Value, section: &str) -> (u64, u64) {
    let read = |field: &str| stats.get(section).and_then(|s| s.get(field)).and_then(Value::as_u64).unwrap_or(0);
    (read("total"), read("pending"))
}

pub fn job_path(id: &str) -> String {
    format!("{JOBS_PATH}/{id}")
}

pub fn journalist_path(id: &str) -> String {
    format!("{JOURNALISTS_PATH}/{id}")
}

pub fn company_path(id: &str) -> String {
    format!("{COMPANIES_PATH}/{id}")
}

/// A received application, as seen by the company that posted the job.
pub fn company_application_path(id: &str) -> String {
    format!("{MY_COMPANY_APPLICATIONS_PATH}/{id}")
}

pub fn my_media_item_path(id: &str) -> String {
    format!("{MEDIA_PATH}/my/{id}")
}

/// `POST /job-applications` with `{ jobId, coverLetter }`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn apply_to_job(client: &HttpClient, job_id: i64, cover_letter: &str) -> Result<(), ApiError> {
    let body = json!({ "jobId": job_id, "coverLetter": cover_letter });
    client.post::<_, Value>(JOB_APPLICATIONS_PATH, &body).await.map(|_| ())
}

/// `DELETE /media-content/my/<id>`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn delete_my_media(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client.delete(&my_media_item_path(id)).await
}

/// Which collections a global search covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    Journalists,
    Companies,
    Jobs,
    Media,
}

impl SearchScope {
    pub const ALL: [Self; 5] = [Self::All, Self::Journalists, Self::Companies, Self::Jobs, Self::Media];

    pub fn as_param(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Journalists => "journalists",
            Self::Companies => "companies",
            Self::Jobs => "jobs",
            Self::Media => "media",
        }
    }

    pub fn from_param(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_param() == raw).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Everything",
            Self::Journalists => "Journalists",
            Self::Companies => "Companies",
            Self::Jobs => "Jobs",
            Self::Media => "Media",
        }
    }
}

/// `GET /search?query=..&type=..`. An empty query returns everything.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn search(client: &HttpClient, query: &str, scope: SearchScope) -> Result<Value, ApiError> {
    client.get(SEARCH_PATH, &[("query", query.trim()), ("type", scope.as_param())]).await
}

/// Read-only admin record tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Applications,
    Purchases,
}

impl RecordKind {
    pub fn list_path(self) -> &'static str {
        match self {
            Self::Applications => "/admin/applications",
            Self::Purchases => "/admin/purchases",
        }
    }

    pub fn list_key(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Purchases => "purchases",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Applications => "Applications",
            Self::Purchases => "Purchases",
        }
    }
}

/// `GET /admin/<applications|purchases>?page=..&limit=10`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn list_records(client: &HttpClient, kind: RecordKind, page: u32) -> Result<ModerationPage, ApiError> {
    let page = page.max(1).to_string();
    let limit = MODERATION_PAGE_SIZE.to_string();
    let body: Value = client.get(kind.list_path(), &[("page", page.as_str()), ("limit", limit.as_str())]).await?;
    Ok(ModerationPage::from_value(kind.list_key(), &body))
}
