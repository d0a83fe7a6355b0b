//! Shop navigation table and active-link resolution.
//!
//! An entry is active only when `path + query` of the current location is
//! byte-for-byte equal to its `href`. Reordered query parameters, trailing
//! slashes or extra parameters all miss. This is a known limitation of the
//! storefront's link highlighting and is kept as-is.

use serde::Serialize;

/// One fixed navigation link (path with optional query string, plus label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    pub fn is_active(&self, location: &CurrentLocation) -> bool {
        // Compare the two halves in place instead of allocating `path + query`
        self.href
            .strip_prefix(location.path.as_str())
            .is_some_and(|rest| rest == location.query)
    }
}

/// Storefront navigation, in display order.
pub static NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry { href: "/shop?tag=new_drop", label: "New In" },
    NavEntry { href: "/shop?category=basic", label: "Basic" },
    NavEntry { href: "/shop?category=printed", label: "Printed" },
    NavEntry { href: "/shop?category=embroidery", label: "Embroidery" },
    NavEntry { href: "/shop?category=beaded", label: "Beaded" },
    NavEntry { href: "/wholesale", label: "Wholesale" },
];

/// Location as reported by the router.
///
/// `query` keeps its leading `?` when present and is empty otherwise, the
/// same shape as `window.location.search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentLocation {
    pub path: String,
    pub query: String,
}

impl CurrentLocation {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Split a router URL such as `/shop?category=basic` at its first `?`.
    ///
    /// A bare trailing `?` carries no query and is dropped.
    pub fn parse(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, "")) => Self::new(path, ""),
            Some((path, query)) => Self::new(path, format!("?{query}")),
            None => Self::new(url, ""),
        }
    }
}

/// A navigation entry resolved against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub entry: &'static NavEntry,
    pub active: bool,
}

impl NavLink {
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "c-storenav__link c-storenav__link--active"
        } else {
            "c-storenav__link"
        }
    }

    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }
}

/// Resolve every entry against `location`, preserving table order.
pub fn resolve_nav_links(location: &CurrentLocation) -> Vec<NavLink> {
    NAV_ENTRIES
        .iter()
        .map(|entry| NavLink {
            entry,
            active: entry.is_active(location),
        })
        .collect()
}
