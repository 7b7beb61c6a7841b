//! Server calls made by the glue layer.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs that succeed, since there is no server session to end.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs and log failures; ending the server session
//! is best-effort and never blocks the redirect that follows sign-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::GlueError;

#[cfg(any(test, feature = "hydrate"))]
fn server_session_failed_message(status: u16) -> String {
    format!("logout endpoint returned {status}")
}

/// Clear the server-side session cookie by requesting `logout_path`.
///
/// # Errors
///
/// Returns [`GlueError::ServerSession`] if the request fails or the server
/// answers with a non-OK status.
pub async fn end_server_session(logout_path: &str) -> Result<(), GlueError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(logout_path)
            .send()
            .await
            .map_err(|e| GlueError::ServerSession(e.to_string()))?;
        if !resp.ok() {
            return Err(GlueError::ServerSession(server_session_failed_message(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = logout_path;
        Ok(())
    }
}
