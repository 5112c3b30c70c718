//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and validation logic lives here so pages and components stay
//! thin and the rules are testable without a browser.

pub mod auth;
pub mod forms;
pub mod guard;
