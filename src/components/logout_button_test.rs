use futures::executor::block_on;

use super::*;
use crate::net::identity::mock::MockProvider;

#[test]
fn successful_sign_out_redirects_to_login() {
    let provider = MockProvider::default();
    let target = block_on(perform_logout(&provider, &AppConfig::default())).unwrap();
    assert_eq!(target, "/login");
    assert_eq!(provider.sign_out_calls.get(), 1);
}

#[test]
fn successful_sign_out_uses_configured_login_path() {
    let provider = MockProvider::default();
    let config = AppConfig { login_path: "/masuk".to_owned(), ..AppConfig::default() };
    assert_eq!(block_on(perform_logout(&provider, &config)).unwrap(), "/masuk");
}

#[test]
fn failed_sign_out_returns_error_without_redirect() {
    let provider = MockProvider::failing("auth/network-request-failed");
    let err = block_on(perform_logout(&provider, &AppConfig::default())).unwrap_err();
    assert!(matches!(err, GlueError::SignOut(ref m) if m == "auth/network-request-failed"));
    assert_eq!(provider.sign_out_calls.get(), 1);
}

#[test]
fn failed_sign_out_is_not_retried() {
    let provider = MockProvider::failing("boom");
    let _ = block_on(perform_logout(&provider, &AppConfig::default()));
    assert_eq!(provider.sign_out_calls.get(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn install_without_browser_is_noop() {
    let provider = Rc::new(MockProvider::default());
    install(Rc::clone(&provider), Rc::new(AppConfig::default()));
    assert_eq!(provider.sign_out_calls.get(), 0);
}
