//! Page components wired onto server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one slice of the DOM contract in `util::dom`, turns
//! events into state transitions, and renders the resulting view. None of
//! them reads another's state.

pub mod auth_gate;
pub mod logout_button;
pub mod nav_links;
pub mod theme_toggle;
