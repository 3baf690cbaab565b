//! The page that lists every transaction with controls to add, edit and delete them.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_ADD_STYLE, BUTTON_ICON_STYLE, EXPENSE_BADGE_STYLE, INCOME_BADGE_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        dollar_input_styles, format_currency, pencil_icon, plus_icon, trash_icon,
    },
    transaction::{Transaction, TransactionStore, TransactionType, dialog::DIALOG_CONTAINER_ID},
};

/// Renders the transactions page from the current contents of the store.
pub async fn get_transactions_page(
    State(store): State<TransactionStore>,
) -> Result<Response, Error> {
    let transactions = store.list()?;

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let dialog_target = format!("#{DIALOG_CONTAINER_ID}");

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-4" { "Sneaker Side-Hustle Tracker" }

            div
            {
                button
                    type="button"
                    hx-get=(endpoints::NEW_TRANSACTION_VIEW)
                    hx-target=(dialog_target)
                    class=(BUTTON_ADD_STYLE)
                {
                    (plus_icon())
                    "Add Transaction"
                }
            }

            div id=(DIALOG_CONTAINER_ID) {}

            div class="relative overflow-x-auto shadow-md rounded-lg"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row_view(transaction, &dialog_target))
                        }

                        @if transactions.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="5" class="px-6 py-4 text-center"
                                {
                                    "No transactions yet. Add one to get started."
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[dollar_input_styles()], &content)
}

fn transaction_row_view(transaction: &Transaction, dialog_target: &str) -> Markup {
    let badge_style = match transaction.type_ {
        TransactionType::Income => INCOME_BADGE_STYLE,
        TransactionType::Expense => EXPENSE_BADGE_STYLE,
    };
    let confirm_message = format!(
        "Are you sure you want to delete the {} {} transaction from {}?",
        transaction.category,
        transaction.type_,
        transaction.date
    );

    html! {
        tr id={ "transaction-" (transaction.id) } class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(transaction.date) { (transaction.date) }
            }
            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(badge_style) { (transaction.type_) }
            }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-2"
                {
                    button
                        type="button"
                        aria-label="Edit transaction"
                        hx-get=(format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id))
                        hx-target=(dialog_target)
                        hx-target-error="#alert-container"
                        class=(BUTTON_ICON_STYLE)
                    {
                        (pencil_icon())
                    }

                    button
                        type="button"
                        aria-label="Delete transaction"
                        hx-delete=(format_endpoint(endpoints::TRANSACTION, transaction.id))
                        hx-confirm=(confirm_message)
                        hx-target="closest tr"
                        hx-target-error="#alert-container"
                        hx-swap="outerHTML"
                        class=(BUTTON_ICON_STYLE)
                    {
                        (trash_icon())
                    }
                }
            }
        }
    }
}
