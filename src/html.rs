use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use serde::Deserialize;

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-3 bg-blue-600 \
    dark:bg-blue-600 disabled:opacity-50 disabled:cursor-not-allowed \
    hover:enabled:bg-blue-700 text-white font-medium rounded-lg";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-3 px-4 rounded-lg border \
    border-gray-300 text-gray-700 font-medium hover:enabled:bg-gray-50 \
    disabled:opacity-50 disabled:cursor-not-allowed dark:text-gray-200 \
    dark:border-gray-600 hover:enabled:dark:bg-gray-700";

pub const BUTTON_SMALL_STYLE: &str = "flex-1 py-2 px-3 text-sm bg-gray-100 \
    text-gray-700 rounded-lg hover:bg-gray-200 dark:bg-gray-700 \
    dark:text-gray-200 hover:dark:bg-gray-600";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card styles
pub const CARD_STYLE: &str = "bg-white rounded-xl shadow-sm border border-gray-200 \
    dark:bg-gray-800 dark:border-gray-700";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-screen-xl lg:py-5 text-gray-900 dark:text-white";

/// Extra elements to add to the `<head>` of a page.
pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Point of Sale" }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/response-targets.js" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A page header with a back link, a title and a subtitle.
///
/// `action` is rendered on the right hand side, e.g. an "Add Product" link.
pub fn page_header(back_url: &str, title: &str, subtitle: &str, action: Option<Markup>) -> Markup {
    html!(
        header class="bg-white shadow-sm border-b border-gray-200 dark:bg-gray-800 dark:border-gray-700"
        {
            div class="px-6 py-4 flex items-center justify-between"
            {
                div class="flex items-center"
                {
                    a
                        href=(back_url)
                        class="mr-4 p-2 rounded-lg text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                        aria-label="Back"
                    {
                        "←"
                    }

                    div
                    {
                        h1 class="text-2xl font-bold text-gray-800 dark:text-white" { (title) }
                        p class="text-gray-600 text-sm dark:text-gray-400" { (subtitle) }
                    }
                }

                @if let Some(action) = action {
                    (action)
                }
            }
        }
    )
}

/// The query string sent by [search_form].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A GET form that filters a product list by name or category.
pub fn search_form(endpoint: &str, search_term: &str) -> Markup {
    html!(
        form method="get" action=(endpoint) class="relative max-w-md" role="search"
        {
            label for="q" class="sr-only" { "Search products" }

            input
                id="q"
                type="search"
                name="q"
                value=(search_term)
                placeholder="Search products..."
                class="w-full px-4 py-3 border border-gray-300 rounded-lg
                    focus:ring-2 focus:ring-blue-500 focus:border-transparent
                    dark:bg-gray-700 dark:border-gray-600 dark:text-white";
        }
    )
}

/// A stat tile with a large number and a caption.
pub fn stat_card(value: &str, label: &str, value_style: &str) -> Markup {
    html!(
        div class={ (CARD_STYLE) " p-4" }
        {
            div class={ "text-2xl font-bold " (value_style) } { (value) }
            div class="text-sm text-gray-600 dark:text-gray-400" { (label) }
        }
    )
}

/// Returns the CSS styles for adding a dollar sign prefix to number inputs.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: block;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// Format a dollar amount with a thousands separator and two decimal places.
pub fn format_currency(number: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let number = (number * 100.0).round() / 100.0;

    if number == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let mut formatted_string = if number < 0.0 {
        format!("-{}", fmt.fmt_string(number.abs()))
    } else {
        fmt.fmt_string(number)
    };

    // numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3"
    match formatted_string.rfind('.') {
        Some(dot) => {
            for _ in formatted_string.len() - dot - 1..2 {
                formatted_string.push('0');
            }
        }
        None => formatted_string.push_str(".00"),
    }

    formatted_string
}
