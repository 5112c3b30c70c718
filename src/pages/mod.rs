//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guards are applied in `app`, never inside a page.

pub mod admin;
pub mod browse;
pub mod dashboard;
pub mod details;
pub mod home;
pub mod jobs;
pub mod login;
pub mod my_media;
pub mod register;
pub mod register_company;
pub mod register_journalist;
pub mod search;
