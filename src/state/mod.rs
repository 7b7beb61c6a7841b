//! Page-scoped client state.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`) and each model derives a small
//! declarative view struct. Components render those views onto the DOM, so
//! the document always reflects the last state transition and nothing else.

pub mod auth;
pub mod theme;
