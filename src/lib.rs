// Public API exports (shared between web and desktop renderers)
pub mod domain;
pub mod shared;

pub mod app;
