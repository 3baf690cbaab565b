//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use time::{Date, macros::date};

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    /// Money earned, e.g. from selling a pair of sneakers.
    Income,
    /// Money spent, e.g. buying stock or paying for shipping.
    #[default]
    Expense,
}

impl TransactionType {
    /// All transaction types in the order they are offered to the user.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The value used for this type in forms.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The human readable name of this type.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    /// Parse the form value of a transaction type, e.g. "income".
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|type_| type_.as_str() == text)
            .ok_or_else(|| Error::InvalidTransactionType(text.to_owned()))
    }
}

/// The brand a transaction is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Nike sneakers.
    #[default]
    Nike,
    /// Adidas sneakers.
    Adidas,
    /// Puma sneakers.
    Puma,
    /// Any other brand, or costs not tied to a brand.
    Other,
}

impl Category {
    /// All categories in the order they are offered to the user.
    pub const ALL: [Category; 4] = [
        Category::Nike,
        Category::Adidas,
        Category::Puma,
        Category::Other,
    ];

    /// The name of the category, used both for display and in forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Nike => "Nike",
            Category::Adidas => "Adidas",
            Category::Puma => "Puma",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == text)
            .ok_or_else(|| Error::InvalidCategory(text.to_owned()))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and add the result
/// to a [TransactionStore](crate::TransactionStore), which assigns the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The brand the transaction is for.
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction that has not been assigned an ID yet.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        date: Date,
        amount: f64,
        type_: TransactionType,
        category: Category,
    ) -> NewTransaction {
        NewTransaction {
            date,
            amount,
            type_,
            category,
        }
    }

    /// The fields of this transaction without its ID.
    #[cfg(test)]
    pub fn without_id(&self) -> NewTransaction {
        NewTransaction {
            date: self.date,
            amount: self.amount,
            type_: self.type_,
            category: self.category,
        }
    }
}

/// A transaction that has not been added to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned.
    ///
    /// The amount is stored as entered. Whether it is money in or out is
    /// decided by `type_`, not the sign.
    pub amount: f64,
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The brand the transaction is for.
    pub category: Category,
}

impl NewTransaction {
    /// Attach `id` to the transaction.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            type_: self.type_,
            category: self.category,
        }
    }
}

/// The transactions the app starts with so that there is something to look at.
pub fn placeholder_transactions() -> Vec<Transaction> {
    vec![
        Transaction::build(
            date!(2023 - 03 - 15),
            250.0,
            TransactionType::Expense,
            Category::Nike,
        )
        .with_id(1),
        Transaction::build(
            date!(2023 - 03 - 20),
            300.0,
            TransactionType::Income,
            Category::Adidas,
        )
        .with_id(2),
        Transaction::build(
            date!(2023 - 03 - 25),
            180.0,
            TransactionType::Expense,
            Category::Puma,
        )
        .with_id(3),
    ]
}
