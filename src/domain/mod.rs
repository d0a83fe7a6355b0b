pub mod navigation;

pub use navigation::{resolve_nav_links, CurrentLocation, NavEntry, NavLink, NAV_ENTRIES};
