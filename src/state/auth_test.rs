use super::*;
use forms::MemoryTokenStore;

#[test]
fn default_is_signed_out() {
    assert!(!AuthState::default().is_signed_in());
}

#[test]
fn from_store_reads_token_key() {
    let store = MemoryTokenStore::new();
    store.set("token", "T1").unwrap();
    let state = AuthState::from_store(&store);
    assert_eq!(state.token.as_deref(), Some("T1"));
    assert!(state.is_signed_in());
}

#[test]
fn empty_token_counts_as_signed_out() {
    let store = MemoryTokenStore::new();
    store.set("token", "").unwrap();
    assert!(!AuthState::from_store(&store).is_signed_in());
}

#[test]
fn missing_token_is_signed_out() {
    assert_eq!(AuthState::from_store(&MemoryTokenStore::new()), AuthState::default());
}
