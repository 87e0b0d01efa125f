//! The admin dashboard: headline numbers and links to the admin sections.
//!
//! Only the low stock count is live, the other numbers and the activity feed
//! are placeholders until sales are recorded.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    endpoints::{self, format_endpoint},
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, page_header, stat_card},
    navigation::NavBar,
    register::Register,
};

/// A tile on the admin dashboard.
struct AdminSection {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    /// The page the tile opens, `None` for sections that do not exist yet.
    url: Option<&'static str>,
}

const ADMIN_SECTIONS: [AdminSection; 6] = [
    AdminSection {
        slug: "stock_management",
        title: "Stock Management",
        description: "Add, edit, and manage product inventory",
        url: Some(endpoints::STOCK_VIEW),
    },
    AdminSection {
        slug: "inventory_overview",
        title: "Inventory Overview",
        description: "View current stock levels and product information",
        url: Some(endpoints::INVENTORY_VIEW),
    },
    AdminSection {
        slug: "sales_reports",
        title: "Sales Reports",
        description: "View sales analytics and performance metrics",
        url: None,
    },
    AdminSection {
        slug: "financial_overview",
        title: "Financial Overview",
        description: "Track revenue, expenses, and profit margins",
        url: None,
    },
    AdminSection {
        slug: "user_management",
        title: "User Management",
        description: "Manage staff accounts and permissions",
        url: None,
    },
    AdminSection {
        slug: "system_settings",
        title: "System Settings",
        description: "Configure POS system preferences and settings",
        url: None,
    },
];

// Placeholder figures.
const TODAYS_SALES: f64 = 1247.50;
const ORDERS_TODAY: u32 = 47;
const ACTIVE_STAFF: u32 = 5;
const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Sale completed - $24.99", "2 minutes ago"),
    ("Stock updated - Burger Deluxe", "15 minutes ago"),
    ("Low stock alert - Greek Salad", "1 hour ago"),
];

/// The state needed for the admin page.
#[derive(Debug, Clone)]
pub struct AdminPageState {
    pub register: Arc<Mutex<Register>>,
}

impl FromRef<AppState> for AdminPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            register: state.register.clone(),
        }
    }
}

/// Render the admin dashboard.
pub async fn get_admin_page(State(state): State<AdminPageState>) -> Result<Response, Error> {
    let low_stock_count = state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)?
        .catalog()
        .summary()
        .low_stock;

    Ok(admin_view(low_stock_count).into_response())
}

/// Respond with an alert saying the admin section has not been built yet.
pub async fn get_coming_soon_alert(Path(section): Path<String>) -> Response {
    match ADMIN_SECTIONS
        .iter()
        .find(|admin_section| admin_section.slug == section && admin_section.url.is_none())
    {
        Some(admin_section) => Alert::Success {
            message: format!("{} - Coming Soon!", admin_section.title),
            details: "This section is not available yet.".to_owned(),
        }
        .into_html()
        .into_response(),
        None => Error::NotFound.into_alert_response(),
    }
}

fn admin_view(low_stock_count: usize) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADMIN_VIEW).into_html();

    let content = html!(
        (nav_bar)

        (page_header(
            endpoints::POS_VIEW,
            "Admin Dashboard",
            "Manage all aspects of your POS system",
            None,
        ))

        div class={ (PAGE_CONTAINER_STYLE) " gap-8 pb-24" }
        {
            div class="grid grid-cols-2 md:grid-cols-4 gap-4"
            {
                (stat_card(&format_currency(TODAYS_SALES), "Today's Sales", "text-gray-900 dark:text-white"))
                (stat_card(&ORDERS_TODAY.to_string(), "Orders Today", "text-gray-900 dark:text-white"))
                (stat_card(&low_stock_count.to_string(), "Low Stock Items", "text-yellow-600"))
                (stat_card(&ACTIVE_STAFF.to_string(), "Active Staff", "text-gray-900 dark:text-white"))
            }

            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"
            {
                @for section in &ADMIN_SECTIONS {
                    (admin_section_tile(section))
                }
            }

            section class=(CARD_STYLE)
            {
                h2 class="p-6 text-lg font-semibold border-b border-gray-200 dark:border-gray-700"
                {
                    "Recent Activity"
                }

                ul class="p-6 space-y-4"
                {
                    @for (activity, when) in RECENT_ACTIVITY {
                        li
                        {
                            p class="text-sm font-medium text-gray-800 dark:text-gray-200" { (activity) }
                            p class="text-xs text-gray-500 dark:text-gray-400" { (when) }
                        }
                    }
                }
            }
        }
    );

    base("Admin", &[], &content)
}

fn admin_section_tile(section: &AdminSection) -> Markup {
    let tile_body = html!(
        h3 class="mb-2 text-lg font-semibold text-gray-800 dark:text-white" { (section.title) }
        p class="text-sm leading-relaxed text-gray-600 dark:text-gray-400" { (section.description) }
        span class="mt-4 inline-block text-sm font-medium text-blue-600 dark:text-blue-400"
        {
            "Access " (section.title.to_lowercase()) " →"
        }
    );
    let tile_style = format!("{CARD_STYLE} block p-6 text-left hover:shadow-lg");

    html!(
        @match section.url {
            Some(url) => {
                a href=(url) data-section=(section.slug) class=(tile_style) { (tile_body) }
            }
            None => {
                button
                    type="button"
                    hx-get=(format_endpoint(endpoints::COMING_SOON, section.slug))
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    data-section=(section.slug)
                    class=(tile_style)
                {
                    (tile_body)
                }
            }
        }
    )
}
