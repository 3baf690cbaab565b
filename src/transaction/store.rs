//! The in-memory store that holds every transaction for the lifetime of the server.
//!
//! Mutations are applied to the list straight away. There is no backend to
//! confirm them with, so there is nothing to roll back.

use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;

use crate::{
    Error,
    transaction::core::{NewTransaction, Transaction, TransactionId, placeholder_transactions},
};

/// A handle to the shared, ordered list of transactions.
///
/// Cloning the handle is cheap and every clone refers to the same list, so
/// the store can be handed to each request handler through the app state.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    transactions: Vec<Transaction>,
    last_id: TransactionId,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions` in the given order.
    ///
    /// The IDs of `transactions` are expected to be unique. New IDs will
    /// always be greater than the largest ID in `transactions`.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let last_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or_default();

        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                transactions,
                last_id,
            })),
        }
    }

    /// Create a store holding the placeholder transactions.
    pub fn with_placeholder_data() -> Self {
        Self::with_transactions(placeholder_transactions())
    }

    /// Get a snapshot of all transactions in insertion order.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn list(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.transactions.clone())
    }

    /// Get the number of transactions in the store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn count(&self) -> Result<usize, Error> {
        Ok(self.lock()?.transactions.len())
    }

    /// Get the transaction with the ID `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a transaction in the store,
    /// - or [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock()?
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Assign a fresh ID to `new_transaction` and append it to the list.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn add(&self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut inner = self.lock()?;

        let id = next_id(inner.last_id, now_millis());
        inner.last_id = id;

        let transaction = new_transaction.with_id(id);
        inner.transactions.push(transaction.clone());
        tracing::debug!("Added transaction {id}");

        Ok(transaction)
    }

    /// Replace the transaction that has the same ID as `transaction`.
    ///
    /// The transaction keeps its position in the list.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if no transaction has the same ID,
    /// - or [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn update(&self, transaction: Transaction) -> Result<Transaction, Error> {
        let mut inner = self.lock()?;

        let existing = inner
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
            .ok_or(Error::UpdateMissingTransaction)?;

        *existing = transaction.clone();
        tracing::debug!("Updated transaction {}", transaction.id);

        Ok(transaction)
    }

    /// Remove the transaction with the ID `id` and return it.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if `id` does not refer to a transaction in the store,
    /// - or [Error::StoreLockError] if the lock on the store is poisoned.
    pub fn delete(&self, id: TransactionId) -> Result<Transaction, Error> {
        let mut inner = self.lock()?;

        let position = inner
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        let removed = inner.transactions.remove(position);
        tracing::debug!("Deleted transaction {id}");

        Ok(removed)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, Error> {
        self.inner
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

#[cfg(test)]
impl TransactionStore {
    /// Poison the lock by panicking on another thread while holding it.
    pub(crate) fn poison(&self) {
        let inner = Arc::clone(&self.inner);

        let _ = std::thread::spawn(move || {
            let _guard = inner.lock();
            panic!("panicked while holding the transaction store lock");
        })
        .join();
    }
}

/// IDs are the creation time in milliseconds since the Unix epoch.
///
/// Two transactions created within the same millisecond, or after the clock
/// has gone backwards, get the ID after the last one instead.
fn next_id(last_id: TransactionId, now_millis: TransactionId) -> TransactionId {
    now_millis.max(last_id + 1)
}

fn now_millis() -> TransactionId {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TransactionId
}
