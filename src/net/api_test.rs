use super::*;

#[test]
fn server_session_failed_message_includes_status() {
    assert_eq!(server_session_failed_message(500), "logout endpoint returned 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn end_server_session_is_noop_without_browser() {
    let result = futures::executor::block_on(end_server_session("/logout"));
    assert!(result.is_ok());
}
