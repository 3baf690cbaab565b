//! Alert messages for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the base page.

use maud::{Markup, html};

/// An alert message with a short summary and longer details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something worked and the user should know about it.
    Success { message: String, details: String },
    /// Something went wrong and the user may need to act.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        span class="font-medium" { (message) }

                        @if !details.is_empty() {
                            p { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into the alert container
    /// regardless of the request's target element.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}
