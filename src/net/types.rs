//! Wire shapes reported by the identity provider.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::error::GlueError;

/// The signed-in user as reported by the provider observer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub uid: String,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Parse the JSON form of a provider user object.
    ///
    /// # Errors
    ///
    /// Returns [`GlueError::ProviderUnavailable`] when the payload is not a
    /// user object.
    pub fn from_json(raw: &str) -> Result<Self, GlueError> {
        serde_json::from_str(raw).map_err(|e| GlueError::ProviderUnavailable(format!("bad user payload: {e}")))
    }

    /// Display name, with empty strings treated as absent.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.display_name.as_deref())
    }

    /// Photo URL, with empty strings treated as absent.
    pub fn photo_url(&self) -> Option<&str> {
        non_blank(self.photo_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
