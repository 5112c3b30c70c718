//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! Only the identity and auth shapes are typed. Domain payloads (jobs, media,
//! companies, applications) are owned by the remote API and travel through
//! the client as opaque `serde_json::Value`s.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Journalist,
    Company,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Journalist => "journalist",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }
}

/// The authenticated user record held by the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric or string id, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Any further profile fields the API sends.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Name shown in the header; falls back to the email, then the id.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Successful body of the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `GET /auth/profile` answers either `{ "user": {...} }` or the bare user.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Wrapped { user: User },
    Bare(User),
}

impl ProfileResponse {
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Error body returned by the API. `message` may be a string or a list of
/// validation messages.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register-journalist`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalistRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub media_work_start_date: String,
    pub media_work_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

/// Body of `POST /auth/register-company`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistration {
    pub name: String,
    pub company_size: String,
    pub contact_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub description: String,
    pub required_services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// One page of an admin moderation listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModerationPage {
    pub items: Vec<serde_json::Value>,
    pub total_pages: u32,
}

impl ModerationPage {
    /// Pull the list stored under `list_key` plus `totalPages` out of a
    /// listing response. A missing list is an empty page.
    pub fn from_value(list_key: &str, value: &serde_json::Value) -> Self {
        let items = value
            .get(list_key)
            .and_then(serde_json::Value::as_array)
            .cloned()
            .unwrap_or_default();
        let total_pages = value
            .get("totalPages")
            .and_then(serde_json::Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1)
            .max(1);
        Self { items, total_pages }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
