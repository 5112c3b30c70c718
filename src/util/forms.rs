//! Client-side form validation, run before any request is sent.
//!
//! Each validator returns the first failing field's message, mirroring how
//! the forms show a single inline error.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{CompanyRegistration, JournalistRegistration};

const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MEDIA_WORK_TYPES: &[&str] = &[
    "Producer",
    "Reporter",
    "TV Cameraman",
    "Photographer",
    "Video Editor",
    "Trainer",
    "Graphic Designer",
    "Lawyer",
    "Voice-over artist",
    "Translator",
    "Analyst",
];

/// Services a company can ask for; same list as journalist work types.
pub const REQUIRED_SERVICES: &[&str] = MEDIA_WORK_TYPES;

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];

pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email address");
    }
    Ok(email.to_owned())
}

pub fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err("Password is required");
    }
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(raw.to_owned())
}

fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    let password = validate_password(password)?;
    if confirm.is_empty() {
        return Err("Please confirm your password");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(password)
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}

fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Split a comma-separated field, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// Login form: trimmed email and the untouched password.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    Ok((validate_email(email)?, validate_password(password)?))
}

/// Raw journalist sign-up fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JournalistForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub media_work_start_date: String,
    pub media_work_type: String,
    pub bio: String,
    pub skills: String,
    pub languages: String,
}

impl JournalistForm {
    pub fn validate(&self) -> Result<JournalistRegistration, &'static str> {
        let name = required(&self.name, "Full name is required")?;
        let email = validate_email(&self.email)?;
        let password = validate_new_password(&self.password, &self.confirm_password)?;
        let country = required(&self.country, "Country is required")?;
        let city = required(&self.city, "City is required")?;
        let phone_number = required(&self.phone_number, "Phone number is required")?;
        let date_of_birth = required(&self.date_of_birth, "Date of birth is required")?;
        let media_work_start_date = required(&self.media_work_start_date, "Media work start date is required")?;
        let media_work_type = required(&self.media_work_type, "Media work type is required")?;
        if !MEDIA_WORK_TYPES.contains(&media_work_type.as_str()) {
            return Err("Media work type is required");
        }
        Ok(JournalistRegistration {
            name,
            email,
            password,
            country,
            city,
            phone_number,
            date_of_birth,
            media_work_start_date,
            media_work_type,
            bio: optional(&self.bio),
            skills: split_list(&self.skills),
            languages: split_list(&self.languages),
        })
    }
}

/// Raw company sign-up fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub name: String,
    pub website: String,
    pub company_size: String,
    pub industry: String,
    pub contact_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub description: String,
    pub required_services: Vec<String>,
}

impl CompanyForm {
    /// Add or remove a service checkbox value.
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.required_services.iter().position(|s| s == service) {
            self.required_services.remove(pos);
        } else {
            self.required_services.push(service.to_owned());
        }
    }

    pub fn validate(&self) -> Result<CompanyRegistration, &'static str> {
        let name = required(&self.name, "Company name is required")?;
        let company_size = required(&self.company_size, "Company size is required")?;
        if !COMPANY_SIZES.contains(&company_size.as_str()) {
            return Err("Company size is required");
        }
        let contact_name = required(&self.contact_name, "Contact person name is required")?;
        let email = validate_email(&self.email)?;
        let password = validate_new_password(&self.password, &self.confirm_password)?;
        let country = required(&self.country, "Country is required")?;
        let city = required(&self.city, "City is required")?;
        let phone_number = required(&self.phone_number, "Phone number is required")?;
        let description = required(&self.description, "Company description is required")?;
        if self.required_services.is_empty() {
            return Err("Please select at least one service");
        }
        Ok(CompanyRegistration {
            name,
            company_size,
            contact_name,
            email,
            password,
            country,
            city,
            phone_number,
            description,
            required_services: self.required_services.clone(),
            website: optional(&self.website),
            industry: optional(&self.industry),
        })
    }
}
