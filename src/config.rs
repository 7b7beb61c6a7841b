//! Page configuration embedded by the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates render a `<script id="app-config" type="application/json">`
//! block. Every field has a default, so a page without the block still gets
//! the canonical paths and storage keys. The optional `identity` section
//! carries the Firebase web config; when absent the identity shim reuses the
//! page's already-initialized Firebase app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::GlueError;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const LEGACY_THEME_STORAGE_KEY: &str = "color-theme";
pub const DEFAULT_FALLBACK_NAME: &str = "Pengguna";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Element id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub login_path: String,
    pub dashboard_path: String,
    pub logout_path: String,
    pub theme_storage_key: String,
    /// Older keys consulted (and migrated) when the primary key is empty.
    pub legacy_theme_keys: Vec<String>,
    /// Shown when the signed-in user has no display name.
    pub fallback_name: String,
    pub avatar: AvatarConfig,
    pub identity: Option<IdentityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            legacy_theme_keys: vec![LEGACY_THEME_STORAGE_KEY.to_owned()],
            fallback_name: DEFAULT_FALLBACK_NAME.to_owned(),
            avatar: AvatarConfig::default(),
            identity: None,
        }
    }
}

/// Generated-avatar service used when a user has no photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarConfig {
    pub base_url: String,
    pub background: String,
    pub color: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AVATAR_BASE_URL.to_owned(),
            background: "161B22".to_owned(),
            color: "E6EDF3".to_owned(),
        }
    }
}

/// Firebase web client identity. Serialized back out unchanged for the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl AppConfig {
    /// Parse and validate a config JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::ConfigParse`] for malformed JSON and
    /// [`GlueError::InvalidConfig`] when a path or identity field is unusable.
    pub fn from_json(raw: &str) -> Result<Self, GlueError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| GlueError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config block from the current document.
    ///
    /// A missing block yields defaults. A broken one is logged and also
    /// yields defaults, so theme and navigation keep working.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use crate::error::ErrorCode;

            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                    log::warn!("[{}] {e}; using defaults", e.error_code());
                    Self::default()
                }),
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    fn validate(&self) -> Result<(), GlueError> {
        check_path("loginPath", &self.login_path)?;
        check_path("dashboardPath", &self.dashboard_path)?;
        check_path("logoutPath", &self.logout_path)?;
        if self.theme_storage_key.trim().is_empty() {
            return Err(GlueError::InvalidConfig { field: "themeStorageKey", reason: "must not be empty".into() });
        }
        if let Some(identity) = &self.identity {
            if identity.api_key.trim().is_empty() {
                return Err(GlueError::InvalidConfig { field: "identity.apiKey", reason: "must not be empty".into() });
            }
            if identity.project_id.trim().is_empty() {
                return Err(GlueError::InvalidConfig {
                    field: "identity.projectId",
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}

fn check_path(field: &'static str, path: &str) -> Result<(), GlueError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(GlueError::InvalidConfig { field, reason: format!("must start with '/', got {path:?}") })
    }
}
