pub mod navbar;

pub use navbar::{NavigationBar, RoutedNavigationBar, DEFAULT_NAV_CLASS};
