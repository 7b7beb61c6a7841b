//! External collaborators: the identity provider and the page server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` wraps the Firebase Auth SDK behind a trait, `api` handles the
//! one server call this layer makes, and `types` defines the user shape the
//! provider reports.

pub mod api;
pub mod identity;
pub mod types;
