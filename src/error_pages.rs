//! Full page responses for requests that cannot be served.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, base},
};

/// A standalone page explaining why a request failed.
struct ErrorPage<'a> {
    status: StatusCode,
    title: &'a str,
    description: &'a str,
    fix: &'a str,
}

impl ErrorPage<'_> {
    fn into_html(self) -> Markup {
        let content = html!(
            main class="flex min-h-screen items-center justify-center px-4"
            {
                div class="max-w-md text-center text-gray-900 dark:text-white"
                {
                    p class="text-8xl font-extrabold text-blue-600 dark:text-blue-500"
                    {
                        (self.status.as_u16())
                    }

                    h1 class="mt-4 text-3xl font-bold" { (self.description) }

                    p class="mt-2 text-lg text-gray-600 dark:text-gray-300" { (self.fix) }

                    a
                        href=(endpoints::POS_VIEW)
                        class={ (BUTTON_PRIMARY_STYLE) " mt-6 inline-block" }
                    {
                        "Back to the Register"
                    }
                }
            }
        );

        base(self.title, &[], &content)
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let status = self.status;

        (status, Html(self.into_html().into_string())).into_response()
    }
}

/// The 404 page, for unknown routes and products.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        ErrorPage {
            status: StatusCode::NOT_FOUND,
            title: "Not Found",
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Head back to the register to keep selling.",
        }
        .into_response()
    }
}

/// The 500 page, shown when the register state is unusable.
#[derive(Default)]
pub struct InternalServerError;

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        ErrorPage {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Internal Server Error",
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs.",
        }
        .into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError.into_response()
}
