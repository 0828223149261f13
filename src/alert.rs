//! Error alerts for htmx requests.
//!
//! Alerts are rendered as out-of-band fragments so that htmx swaps them into
//! the `#alert-container` element regardless of the request's target.

use maud::{Markup, html};

/// An error message with optional details.
#[derive(Debug, Clone)]
pub struct Alert {
    /// The headline.
    pub message: String,
    /// More detail on what went wrong or how to fix it. Omitted when empty.
    pub details: String,
}

impl Alert {
    /// Render the alert as an out-of-band swap for `#alert-container`.
    pub fn into_html(self) -> Markup {
        let Alert { message, details } = self;

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    class="p-4 mb-4 rounded-lg border bg-red-50 border-red-300 \
                        dark:bg-gray-800 dark:border-red-800"
                    role="alert"
                {
                    div class="flex items-center justify-between"
                    {
                        h3 class="font-medium text-red-800 dark:text-red-400" { (message) }

                        button
                            type="button"
                            class="ms-auto text-gray-500 hover:text-gray-900 dark:hover:text-white"
                            aria-label="Close"
                            onclick="this.closest('#alert-container').classList.add('hidden')"
                        {
                            "×"
                        }
                    }

                    @if !details.is_empty() {
                        p class="mt-2 text-sm text-gray-700 dark:text-gray-300" { (details) }
                    }
                }
            }
        }
    }
}
