use crate::domain::{resolve_nav_links, CurrentLocation};
use crate::shared::logging::log_nav_resolved;
use dioxus::prelude::*;

pub const DEFAULT_NAV_CLASS: &str = "c-storenav";

/// Shop navigation with the link for `location` marked active
#[component]
pub fn NavigationBar(
    location: CurrentLocation,
    #[props(into, default = DEFAULT_NAV_CLASS.to_string())] class: String,
) -> Element {
    let links = resolve_nav_links(&location);
    let active = links.iter().find(|link| link.active).map(|link| link.entry.label);
    log_nav_resolved(&location, active);

    rsx! {
        nav { class: "{class}", aria_label: "Shop",
            ul { class: "c-storenav__list",
                for link in links {
                    li { key: "{link.entry.href}",
                        a {
                            href: link.entry.href,
                            class: link.css_class(),
                            aria_current: link.aria_current(),
                            "{link.entry.label}"
                        }
                    }
                }
            }
        }
    }
}

/// [`NavigationBar`] fed from the live history URL.
///
/// Reads the raw address rather than the typed route, which would drop
/// undeclared query parameters and trailing slashes before matching.
#[component]
pub fn RoutedNavigationBar(
    #[props(into, default = DEFAULT_NAV_CLASS.to_string())] class: String,
) -> Element {
    // Subscribes to route changes as well as reading the URL
    let location = CurrentLocation::parse(&router().full_route_string());

    rsx! {
        NavigationBar { location, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::routes::Route;
    use crate::domain::NAV_ENTRIES;
    use dioxus::history::{provide_history_context, MemoryHistory};
    use std::rc::Rc;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn AppAt(url: String) -> Element {
        use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(&url))));
        rsx! { Router::<Route> {} }
    }

    /// Render the whole routed app with the address bar at `url`
    fn render_at(url: &str) -> String {
        let mut dom = VirtualDom::new_with_props(AppAt, AppAtProps { url: url.to_string() });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Markup of the `<a ...>` element whose text is `label`
    fn anchor_for<'a>(html: &'a str, label: &str) -> &'a str {
        let end = html
            .find(&format!(">{label}</a>"))
            .unwrap_or_else(|| panic!("no link labelled {label} in {html}"));
        let start = html[..end].rfind("<a").expect("anchor start");
        &html[start..end]
    }

    #[test]
    fn test_renders_basic_as_active() {
        fn app() -> Element {
            rsx! { NavigationBar { location: CurrentLocation::new("/shop", "?category=basic") } }
        }
        let html = render(app);
        assert_eq!(html.matches("c-storenav__link--active").count(), 1, "{html}");
        let basic = anchor_for(&html, "Basic");
        assert!(basic.contains("c-storenav__link--active"), "{basic}");
        assert!(basic.contains("aria-current=\"page\""), "{basic}");
        assert!(!anchor_for(&html, "Printed").contains("--active"));
    }

    #[test]
    fn test_renders_wholesale_as_active() {
        fn app() -> Element {
            rsx! { NavigationBar { location: CurrentLocation::new("/wholesale", "") } }
        }
        let html = render(app);
        assert_eq!(html.matches("c-storenav__link--active").count(), 1, "{html}");
        assert!(anchor_for(&html, "Wholesale").contains("--active"));
    }

    #[test]
    fn test_unmatched_location_has_no_active_link() {
        fn app() -> Element {
            rsx! {
                NavigationBar { location: CurrentLocation::new("/shop", "?category=printed&extra=1") }
            }
        }
        let html = render(app);
        assert!(!html.contains("--active"), "{html}");
        assert!(!html.contains("aria-current"), "{html}");
    }

    #[test]
    fn test_links_render_in_table_order() {
        fn app() -> Element {
            rsx! { NavigationBar { location: CurrentLocation::new("/wholesale", "") } }
        }
        let html = render(app);
        let positions: Vec<usize> = NAV_ENTRIES
            .iter()
            .map(|entry| html.find(&format!(">{}</a>", entry.label)).expect("label rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
        for entry in &NAV_ENTRIES {
            assert!(html.contains(&format!("href=\"{}\"", entry.href)), "{html}");
        }
    }

    #[test]
    fn test_class_override_only_changes_container() {
        fn app() -> Element {
            rsx! {
                NavigationBar {
                    location: CurrentLocation::new("/shop", "?tag=new_drop"),
                    class: "c-footer-nav",
                }
            }
        }
        let html = render(app);
        assert!(html.contains("class=\"c-footer-nav\""), "{html}");
        assert!(!html.contains("class=\"c-storenav\""), "{html}");
        assert!(anchor_for(&html, "New In").contains("--active"));
    }

    #[test]
    fn test_routed_bar_misses_wholesale_page_query() {
        let html = render_at("/wholesale?page=2");
        assert!(html.contains(">Wholesale</a>"), "{html}");
        assert!(!html.contains("c-storenav__link--active"), "{html}");
    }

    #[test]
    fn test_routed_bar_misses_extra_shop_parameter() {
        let html = render_at("/shop?category=basic&x=1");
        assert!(html.contains(">Basic</a>"), "{html}");
        assert!(!html.contains("c-storenav__link--active"), "{html}");
    }

    #[test]
    fn test_routed_bar_highlights_exact_url() {
        let html = render_at("/shop?category=basic");
        assert_eq!(html.matches("c-storenav__link--active").count(), 1, "{html}");
        assert!(anchor_for(&html, "Basic").contains("--active"), "{html}");
    }

    #[test]
    fn test_routed_bar_highlights_plain_wholesale() {
        let html = render_at("/wholesale");
        assert_eq!(html.matches("c-storenav__link--active").count(), 1, "{html}");
        assert!(anchor_for(&html, "Wholesale").contains("--active"), "{html}");
    }
}
