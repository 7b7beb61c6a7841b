//! Error taxonomy for the glue layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Missing DOM elements are not errors at all and are
//! skipped at the call site; the variants below are logged and the page keeps
//! running with an unpersonalized UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while configuring or talking to external collaborators.
#[derive(Debug, thiserror::Error)]
pub enum GlueError {
    /// The embedded configuration JSON could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The configuration parsed but a field holds an unusable value.
    #[error("invalid config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The identity provider SDK could not be initialized or reached.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider rejected or failed the sign-out request.
    #[error("sign-out failed: {0}")]
    SignOut(String),

    /// The server-side session endpoint could not be reached.
    #[error("server session request failed: {0}")]
    ServerSession(String),
}

/// Stable machine-readable error codes used in log lines.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

impl ErrorCode for GlueError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::InvalidConfig { .. } => "E_INVALID_CONFIG",
            Self::ProviderUnavailable(_) => "E_PROVIDER_UNAVAILABLE",
            Self::SignOut(_) => "E_SIGN_OUT",
            Self::ServerSession(_) => "E_SERVER_SESSION",
        }
    }
}
