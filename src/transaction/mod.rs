//! Transaction management for the sneaker tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the in-memory `TransactionStore`
//! - The form that turns user input into transaction records
//! - View and endpoint handlers for the transactions page and its dialogs

mod core;
mod create_endpoint;
mod delete_endpoint;
mod dialog;
mod edit_endpoint;
mod form;
mod store;
mod transactions_page;

pub use core::{
    Category, NewTransaction, Transaction, TransactionId, TransactionType,
    placeholder_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use dialog::{get_edit_transaction_dialog, get_new_transaction_dialog};
pub use edit_endpoint::edit_transaction_endpoint;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
