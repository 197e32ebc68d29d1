/// Error type for darwin-battery lifecycle operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// `open` was called on a reader that already holds a service handle.
    #[error("battery service already open")]
    AlreadyOpen,

    /// No entry for the battery service matched in the IORegistry.
    #[error("battery service not found")]
    ServiceNotFound,

    /// Releasing the service handle reported failure. The reader is
    /// closed regardless.
    #[error("failed to release battery service handle")]
    CloseFailed,
}

/// Result type for darwin-battery operations
pub type Result<T> = std::result::Result<T, Error>;
