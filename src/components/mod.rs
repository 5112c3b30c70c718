//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Route guards wrap page components; `resource_list` and `moderation_table`
//! are the shared renderers for opaque API collections.

pub mod footer;
pub mod form_field;
pub mod header;
pub mod moderation_table;
pub mod resource_list;
pub mod route_guard;
