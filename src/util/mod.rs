//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! wiring so the decision logic stays testable without a DOM.

pub mod auth;
pub mod avatar;
pub mod dark_mode;
pub mod dom;
pub mod nav;
pub mod storage;
