//! Typed errors for state mutations.
//!
//! Every variant is locally recoverable: routes translate them into HTTP
//! status codes and the process keeps serving.

use thiserror::Error;

// ---

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// Deleting this source would leave the registry empty. The dashboard
    /// needs at least one source to display, so the operation is refused.
    #[error("At least one source must remain active.")]
    LastSource,

    /// The referenced source id is not in the registry. The id set shown to
    /// the user should always match the registry, so this points at a
    /// desynchronized client rather than a user mistake.
    #[error("Unknown source id: {id}")]
    SourceNotFound { id: String },
}
