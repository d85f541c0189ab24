use super::*;
use crate::state::session::{MemorySessionStore, SessionStore};
use futures::executor::block_on;

#[test]
fn sign_in_with_invalid_username_leaves_store_untouched() {
    let store = MemorySessionStore::new();
    let auth = AuthContext::new(store.clone());
    let api = ApiClient::new("", auth.clone());

    let err = block_on(sign_in(&api, &auth, " a ")).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(store.read_token(), Ok(None));
}

#[cfg(not(feature = "csr"))]
#[test]
fn sign_in_outside_the_browser_fails_without_storing() {
    let store = MemorySessionStore::new();
    let auth = AuthContext::new(store.clone());
    let api = ApiClient::new("", auth.clone());

    let err = block_on(sign_in(&api, &auth, "alice.smith")).unwrap_err();

    assert_eq!(err, AppError::Unavailable);
    assert!(!auth.is_authenticated());
}
