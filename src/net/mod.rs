//! Networking: the configured HTTP client and the endpoints it serves.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs one exchange, `http` applies the bearer-token and
//! 401 policy on top of it, `events` carries the resulting auth events,
//! `api` names the endpoints, `resource` is the page-level loading helper,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod events;
pub mod http;
pub mod resource;
pub mod transport;
pub mod types;
