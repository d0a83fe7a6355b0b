use crate::app::layouts::RoutedNavigationBar;
use crate::shared::hooks::{use_store, StoreProvider};
use crate::shared::state::ShopStore;
use dioxus::prelude::*;
use dioxus::document;
use std::fmt;

/// Raw query string, kept verbatim so the route prints back the URL it was
/// parsed from. The router rewrites the address bar to the route's `Display`
/// on mount, so any query dropped here would vanish from the live URL too.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawQuery(String);

impl RawQuery {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RawQuery {
    fn from(query: &str) -> Self {
        Self(query.to_string())
    }
}

impl fmt::Display for RawQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/shop?:..query")]
    Shop { query: RawQuery },

    #[route("/wholesale?:..query")]
    Wholesale { query: RawQuery },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Storefront app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");
    let bag_count = use_signal(|| 0usize);
    let store = ShopStore { bag_count };

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        StoreProvider::<ShopStore> { store: store,
            header { class: "c-header",
                Link { to: Route::Home {}, class: "c-header__logo", "Storefront" }
                RoutedNavigationBar {}
                BagIndicator {}
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn BagIndicator() -> Element {
    let label = use_store::<ShopStore>()?.bag_label();

    rsx! {
        span { class: "c-header__bag", "{label}" }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        section { class: "c-home",
            h1 { "New season, new drop" }
            Link {
                to: Route::Shop { query: RawQuery::from("tag=new_drop") },
                "Shop what's new"
            }
        }
    }
}

#[component]
fn Shop(query: RawQuery) -> Element {
    let mut store = use_store::<ShopStore>()?;

    rsx! {
        section { class: "c-shop",
            h1 { "Shop" }
            if !query.is_empty() {
                p { class: "c-shop__filter", "Filtered by {query}" }
            }
            button {
                class: "c-button",
                onclick: move |_| store.add_to_bag(),
                "Add to bag"
            }
        }
    }
}

#[component]
fn Wholesale(query: RawQuery) -> Element {
    rsx! {
        section { class: "c-wholesale",
            h1 { "Wholesale" }
            p { "Stockists and trade orders." }
            if !query.is_empty() {
                p { class: "c-wholesale__filter", "Showing {query}" }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "c-not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the storefront" }
        }
    }
}
