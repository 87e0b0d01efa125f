//! Product creation page and endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base, dollar_input_styles,
    },
    navigation::NavBar,
    product::{CATEGORIES, DEFAULT_CATEGORY, ProductDraft},
    stock::stock_page::StockState,
};

/// Render the product creation page.
pub async fn get_new_product_page() -> Response {
    new_product_view().into_response()
}

/// Handle product creation form submission.
///
/// Invalid drafts re-render the form with the error message.
pub async fn create_product_endpoint(
    State(state): State<StockState>,
    Form(draft): Form<ProductDraft>,
) -> Response {
    let new_product = match draft.commit_new() {
        Ok(new_product) => new_product,
        Err(error) => {
            return new_product_form_view(&draft, &format!("Error: {error}")).into_response();
        }
    };

    let mut register = match state.register.lock() {
        Ok(register) => register,
        Err(error) => {
            tracing::error!("could not acquire register lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    register.catalog_mut().add_product(new_product);

    (
        HxRedirect(endpoints::STOCK_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

fn new_product_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_PRODUCT_VIEW).into_html();
    let form = new_product_form_view(&ProductDraft::default(), "");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="w-full mb-6 text-xl font-bold" { "Add New Product" }
            (form)
        }
    };

    base("Add Product", &[dollar_input_styles()], &content)
}

fn new_product_form_view(draft: &ProductDraft, error_message: &str) -> Markup {
    let selected_category = match draft.category.trim() {
        "" => DEFAULT_CATEGORY,
        category => category,
    };

    html! {
        form
            hx-post=(endpoints::PRODUCTS)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Product Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Enter product name"
                    value=(draft.name)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="price" class=(FORM_LABEL_STYLE) { "Price" }

                div class="input-wrapper"
                {
                    input
                        id="price"
                        type="number"
                        name="price"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        value=(draft.price)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in CATEGORIES {
                        option value=(category) selected[category == selected_category] { (category) }
                    }
                }
            }

            div
            {
                label for="stock" class=(FORM_LABEL_STYLE) { "Initial Stock" }

                input
                    id="stock"
                    type="number"
                    name="stock"
                    step="1"
                    min="0"
                    placeholder="0"
                    value=(draft.stock)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            div class="grid grid-cols-2 gap-3"
            {
                a href=(endpoints::STOCK_VIEW) class={ (BUTTON_SECONDARY_STYLE) " text-center" } { "Cancel" }
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Product" }
            }
        }
    }
}
