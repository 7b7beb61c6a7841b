//! Generated-avatar URLs for users without a profile photo.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config::AvatarConfig;

/// Build the avatar-service URL for `name`.
pub fn generated_avatar_url(name: &str, avatar: &AvatarConfig) -> String {
    format!(
        "{}?name={}&background={}&color={}",
        avatar.base_url,
        urlencoding::encode(name),
        urlencoding::encode(&avatar.background),
        urlencoding::encode(&avatar.color),
    )
}
