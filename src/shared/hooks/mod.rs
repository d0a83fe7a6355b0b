// Custom Dioxus hooks
pub mod use_store;

pub use use_store::{use_store, use_store_handle, use_store_provider, StoreHandle, StoreProvider};
