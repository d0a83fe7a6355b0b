use crate::shared::errors::{Result, StoreError};
use crate::shared::logging::log_missing_store;
use dioxus::prelude::*;

/// Store value bound by a [`StoreProvider`].
///
/// Only the provider can build one, so a lookup never picks up some other
/// context value that happens to share the store's type.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreHandle<S>(S);

impl<S> StoreHandle<S> {
    pub fn get(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

/// Provider component binding `store` for its whole subtree.
///
/// The first `store` value is kept for the provider's lifetime; mutable state
/// belongs in signals inside the store.
#[component]
pub fn StoreProvider<S: Clone + PartialEq + 'static>(store: S, children: Element) -> Element {
    use_store_provider(|| store);
    children
}

/// Hook form of [`StoreProvider`] for components that own the store themselves
pub fn use_store_provider<S: Clone + 'static>(init: impl FnOnce() -> S) -> S {
    use_context_provider(|| StoreHandle(init())).into_inner()
}

/// Read the nearest store handle of type `S`
pub fn use_store_handle<S: Clone + 'static>() -> Result<StoreHandle<S>> {
    try_use_context::<StoreHandle<S>>().ok_or_else(|| {
        log_missing_store(std::any::type_name::<S>());
        StoreError::MissingProvider
    })
}

/// Read the store bound by the nearest enclosing `StoreProvider::<S>`.
///
/// Inside a component, `use_store::<S>()?` hands the error to the renderer.
pub fn use_store<S: Clone + 'static>() -> Result<S> {
    use_store_handle::<S>().map(StoreHandle::into_inner)
}
