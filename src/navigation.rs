//! The navigation bar shared by every page.
//!
//! Wide screens get a header bar with the links on the right, narrow screens
//! (e.g. a tablet mounted at the counter) get a tab bar pinned to the bottom.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the navigation bar, in display order.
const NAV_LINKS: [(&str, &str); 4] = [
    (endpoints::POS_VIEW, "Register"),
    (endpoints::INVENTORY_VIEW, "Inventory"),
    (endpoints::STOCK_VIEW, "Stock"),
    (endpoints::ADMIN_VIEW, "Admin"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Header,
    TabBar,
}

/// A link in the navigation bar, highlighted when it is the current page.
#[derive(Debug, Clone, Copy)]
struct Link {
    url: &'static str,
    title: &'static str,
    is_current: bool,
}

impl Link {
    fn into_html(self, placement: Placement) -> Markup {
        let style = match (placement, self.is_current) {
            (Placement::Header, true) => {
                "rounded-md bg-blue-600 px-3 py-2 text-sm font-semibold text-white"
            }
            (Placement::Header, false) => {
                "rounded-md px-3 py-2 text-sm font-medium text-gray-300 \
                hover:bg-gray-700 hover:text-white"
            }
            (Placement::TabBar, true) => {
                "flex w-full items-center justify-center rounded-lg bg-blue-600 \
                px-2 py-3 text-sm font-semibold text-white"
            }
            (Placement::TabBar, false) => {
                "flex w-full items-center justify-center rounded-lg px-2 py-3 \
                text-sm font-medium text-gray-300 active:bg-gray-700"
            }
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar {
    links: Vec<Link>,
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// The link that matches `active_endpoint`, if any, is highlighted.
    pub fn new(active_endpoint: &str) -> NavBar {
        let links = NAV_LINKS
            .into_iter()
            .map(|(url, title)| Link {
                url,
                title,
                is_current: active_endpoint == url,
            })
            .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="bg-gray-900 text-white shadow"
            {
                div class="mx-auto flex max-w-screen-xl items-center justify-between px-4 py-3"
                {
                    a href=(endpoints::POS_VIEW) class="text-xl font-bold tracking-wide"
                    {
                        "POS System"
                    }

                    nav class="hidden lg:block" aria-label="Primary"
                    {
                        ul class="flex gap-2"
                        {
                            @for link in &self.links {
                                li { (link.into_html(Placement::Header)) }
                            }
                        }
                    }
                }
            }

            nav
                class="fixed inset-x-0 bottom-0 z-40 border-t border-gray-700 bg-gray-900 lg:hidden"
                aria-label="Primary"
            {
                ul class="grid grid-cols-4 gap-2 px-3 py-2"
                {
                    @for link in self.links {
                        li class="min-w-0" { (link.into_html(Placement::TabBar)) }
                    }
                }
            }
        )
    }
}
