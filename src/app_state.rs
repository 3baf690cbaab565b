//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::transaction::TransactionStore;

/// The state of the REST server.
///
/// Handlers never reach for a global list of transactions. They receive the
/// parts of this state they need through axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory list of transactions shared by every request.
    pub transactions: TransactionStore,
}

impl AppState {
    /// Create a new [AppState] around `transactions`.
    pub fn new(transactions: TransactionStore) -> Self {
        Self { transactions }
    }
}

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transactions.clone()
    }
}
