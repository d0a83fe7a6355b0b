use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was read from a component with no `StoreProvider` above it.
    #[error("use_store must be called within a StoreProvider")]
    MissingProvider,
}

pub type Result<T> = std::result::Result<T, StoreError>;
