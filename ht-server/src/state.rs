use ht_store::StoreClient;

/// Shared state handed to every handler.
///
/// The store client is the only shared resource; there is no in-process
/// state between requests, so handlers never need mutual exclusion here.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
}
