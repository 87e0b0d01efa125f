//! Product editing page and endpoint.
//!
//! The edit form is swapped into the product's card on the stock page. When
//! the page is opened directly it is rendered on a page of its own.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxRedirect, HxRequest};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    endpoints::{self, format_endpoint, with_search_query},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_CONTAINER_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, SearchQuery, base, dollar_input_styles,
    },
    navigation::NavBar,
    product::{CATEGORIES, Product, ProductDraft, ProductId},
    stock::stock_page::{StockState, stock_card_id},
};

/// The form sent when saving an edited product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditProductForm {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub category: String,
    /// The search on the stock page to return to after saving.
    #[serde(default)]
    pub q: String,
}

impl EditProductForm {
    fn from_product(product: &Product, search_term: &str) -> Self {
        Self {
            name: product.name.to_string(),
            price: format!("{:.2}", product.price),
            category: product.category.clone().unwrap_or_default(),
            q: search_term.trim().to_owned(),
        }
    }

    fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            stock: String::new(),
        }
    }
}

/// Render the edit form for a product.
///
/// htmx requests get the form as a card to swap into the stock page,
/// other requests get a full page.
pub async fn get_edit_product_page(
    Path(product_id): Path<ProductId>,
    State(state): State<StockState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let register = state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    let product = register
        .catalog()
        .get(product_id)
        .ok_or(Error::ProductNotFound(product_id))?;
    let form = EditProductForm::from_product(product, &query.q);

    let markup = if is_htmx_request {
        edit_product_card_view(product_id, &form)
    } else {
        edit_product_view(product_id, &form)
    };

    Ok(markup.into_response())
}

/// Handle product edit form submission.
///
/// Only the name, price and category change, the stock count is left as is.
pub async fn update_product_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<StockState>,
    Form(form): Form<EditProductForm>,
) -> Response {
    let edit = match form.draft().commit_edit() {
        Ok(edit) => edit,
        Err(error) => {
            return edit_product_form_view(product_id, &form, &format!("Error: {error}"))
                .into_response();
        }
    };

    let mut register = match state.register.lock() {
        Ok(register) => register,
        Err(error) => {
            tracing::error!("could not acquire register lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    match register.catalog_mut().edit_product(product_id, edit) {
        Ok(product) => {
            tracing::info!("updated product {} ({})", product.id, product.name);

            (
                HxRedirect(with_search_query(endpoints::STOCK_VIEW, &form.q)),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

fn edit_product_view(product_id: ProductId, form: &EditProductForm) -> Markup {
    let edit_endpoint = format_endpoint(endpoints::EDIT_PRODUCT_VIEW, product_id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="w-full mb-6 text-xl font-bold" { "Edit Product" }
            (edit_product_form_view(product_id, form, ""))
        }
    };

    base("Edit Product", &[dollar_input_styles()], &content)
}

fn edit_product_card_view(product_id: ProductId, form: &EditProductForm) -> Markup {
    html! {
        article
            id=(stock_card_id(product_id))
            data-product-id=(product_id)
            class={ (CARD_STYLE) " p-6" }
        {
            (edit_product_form_view(product_id, form, ""))
        }
    }
}

fn edit_product_form_view(
    product_id: ProductId,
    form: &EditProductForm,
    error_message: &str,
) -> Markup {
    let update_endpoint = format_endpoint(endpoints::PRODUCT, product_id);
    let cancel_url = with_search_query(endpoints::STOCK_VIEW, &form.q);
    let current_category = form.category.trim();
    let is_custom_category =
        !current_category.is_empty() && !CATEGORIES.contains(&current_category);

    html! {
        form
            hx-put=(update_endpoint)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            input type="hidden" name="q" value=(form.q);

            div
            {
                label for={ "name-" (product_id) } class=(FORM_LABEL_STYLE) { "Product Name" }

                input
                    id={ "name-" (product_id) }
                    type="text"
                    name="name"
                    value=(form.name)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for={ "price-" (product_id) } class=(FORM_LABEL_STYLE) { "Price" }

                div class="input-wrapper"
                {
                    input
                        id={ "price-" (product_id) }
                        type="number"
                        name="price"
                        step="0.01"
                        min="0"
                        value=(form.price)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for={ "category-" (product_id) } class=(FORM_LABEL_STYLE) { "Category" }

                select id={ "category-" (product_id) } name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[current_category.is_empty()] { "Uncategorized" }

                    @if is_custom_category {
                        option value=(current_category) selected { (current_category) }
                    }

                    @for category in CATEGORIES {
                        option value=(category) selected[category == current_category] { (category) }
                    }
                }
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            div class="grid grid-cols-2 gap-3"
            {
                a href=(cancel_url) class={ (BUTTON_SECONDARY_STYLE) " text-center" } { "Cancel" }
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
            }
        }
    }
}
