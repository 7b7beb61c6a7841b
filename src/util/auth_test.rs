use super::*;
use crate::state::auth::UserView;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(UserView {
            display_name: "Dewi".to_owned(),
            avatar_url: "https://img.test/d.png".to_owned(),
        }),
        loading: false,
    }
}

fn signed_out() -> AuthState {
    AuthState { user: None, loading: false }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn signed_out_on_dashboard_redirects_to_login() {
    let cfg = AppConfig::default();
    assert_eq!(redirect_target(&signed_out(), "/dashboard", &cfg).as_deref(), Some("/login"));
}

#[test]
fn signed_out_on_login_stays() {
    let cfg = AppConfig::default();
    assert_eq!(redirect_target(&signed_out(), "/login", &cfg), None);
    assert_eq!(redirect_target(&signed_out(), "/login/", &cfg), None);
}

#[test]
fn signed_out_on_root_redirects() {
    let cfg = AppConfig::default();
    assert_eq!(redirect_target(&signed_out(), "/", &cfg).as_deref(), Some("/login"));
}

#[test]
fn signed_in_never_redirects() {
    let cfg = AppConfig::default();
    assert_eq!(redirect_target(&signed_in(), "/dashboard", &cfg), None);
}

#[test]
fn pending_never_redirects() {
    let cfg = AppConfig::default();
    assert_eq!(redirect_target(&AuthState::default(), "/dashboard", &cfg), None);
}

#[test]
fn custom_login_path_is_honoured() {
    let cfg = AppConfig { login_path: "/masuk".to_owned(), ..AppConfig::default() };
    assert_eq!(redirect_target(&signed_out(), "/login", &cfg).as_deref(), Some("/masuk"));
    assert_eq!(redirect_target(&signed_out(), "/masuk", &cfg), None);
}
