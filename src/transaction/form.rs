//! The form for creating and editing transactions, and the conversion from
//! submitted form values to a transaction record.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::core::{Category, NewTransaction, Transaction, TransactionId, TransactionType},
};

/// The form data for creating or editing a transaction.
///
/// Every field is kept as the raw text the browser sent so that a malformed
/// or missing value can be reported to the user as an alert instead of being
/// rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    /// The date in the format YYYY-MM-DD.
    pub date: String,
    /// The value of the transaction in dollars, at most two decimal places.
    pub amount: String,
    /// Either "income" or "expense".
    pub type_: String,
    /// One of the [Category] names.
    pub category: String,
}

impl TransactionForm {
    /// Convert the submitted values into a transaction record.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if any field is empty,
    /// - [Error::InvalidDate] if the date is not in the format YYYY-MM-DD,
    /// - [Error::InvalidAmount] if the amount is not a finite number with at
    ///   most two decimal places,
    /// - [Error::InvalidTransactionType] if the type is not "income" or "expense",
    /// - or [Error::InvalidCategory] if the category is not a known brand.
    pub fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        let date = required(&self.date, "date")?;
        let amount = required(&self.amount, "amount")?;
        let type_ = required(&self.type_, "type")?;
        let category = required(&self.category, "category")?;

        let date = Date::parse(date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| Error::InvalidDate(date.to_owned()))?;

        Ok(Transaction::build(
            date,
            parse_amount(amount)?,
            type_.parse()?,
            category.parse()?,
        ))
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, Error> {
    match value.trim() {
        "" => Err(Error::MissingField(field)),
        value => Ok(value),
    }
}

/// Amounts are limited to cents so that the two decimal places shown in the
/// edit form always parse back to the stored value.
fn parse_amount(text: &str) -> Result<f64, Error> {
    let decimal_places = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());

    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && decimal_places <= 2)
        .ok_or_else(|| Error::InvalidAmount(text.to_owned()))
}

/// Where the form sends its values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormAction {
    /// POST a new transaction.
    Create,
    /// PUT the values over the transaction with this ID.
    Edit(TransactionId),
}

/// The values the form fields start with.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFormDefaults {
    pub date: Date,
    pub amount: Option<f64>,
    pub type_: TransactionType,
    pub category: Category,
}

impl TransactionFormDefaults {
    /// The defaults for a new transaction: today, no amount, a Nike expense.
    pub fn empty(today: Date) -> Self {
        Self {
            date: today,
            amount: None,
            type_: TransactionType::default(),
            category: Category::default(),
        }
    }
}

impl From<&Transaction> for TransactionFormDefaults {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date,
            amount: Some(transaction.amount),
            type_: transaction.type_,
            category: transaction.category,
        }
    }
}

/// Render the transaction form.
///
/// The form is rendered from `defaults` every time, so values entered into
/// one dialog never carry over into the next.
pub fn transaction_form(action: FormAction, defaults: &TransactionFormDefaults) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));
    let spinner = loading_spinner();

    let form_fields = html! {
        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="type_"
                class=(FORM_LABEL_STYLE)
            {
                "Type"
            }

            select
                name="type_"
                id="type_"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for type_ in TransactionType::ALL {
                    option value=(type_) selected[type_ == defaults.type_] { (type_.label()) }
                }
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in Category::ALL {
                    option value=(category) selected[category == defaults.category] { (category) }
                }
            }
        }

        button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
        {
            span
                id="indicator"
                class="inline htmx-indicator"
            {
                (spinner)
            }
            " Submit"
        }
    };

    match action {
        FormAction::Create => html! {
            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4"
            {
                (form_fields)
            }
        },
        FormAction::Edit(transaction_id) => html! {
            form
                hx-put=(format_endpoint(endpoints::TRANSACTION, transaction_id))
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4"
            {
                (form_fields)
            }
        },
    }
}
