//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element that every page
//! renders, either as the target of a failed htmx request or out-of-band.

use maud::{Markup, html};

/// A dismissable message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (message, details, style) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
            ),
        };

        html!(
            div
                role="alert"
                class={ "flex items-start justify-between gap-4 p-4 mb-4 text-sm border rounded-lg " (style) }
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                    class="font-bold"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert so htmx swaps it into the alert container out-of-band.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div id="alert-container" hx-swap-oob="innerHTML" { (self.into_html()) }
        )
    }
}
