use crate::ServerError;

use ht_store::StoreError;

/// WHAT: A store failure at startup converts into ServerError::Store
/// WHY: Every startup failure surfaces through the server error type, so
/// the store client build path must not bypass it
#[test]
fn test_store_error_converts_to_store_variant() {
    let error = ServerError::from(StoreError::api(503, "store unavailable".into()));

    assert!(matches!(error, ServerError::Store(_)));
    assert!(error.to_string().contains("Store client error"));
}
