//! Error handling for Trigproofs.
//!
//! Every rejectable editor operation reports a typed error; none of these
//! conditions are fatal to the process. Rejected updates leave the scene
//! state exactly as it was before the call.

use thiserror::Error;

/// Editor error type.
///
/// Represents errors raised by the scene-state transactions: lookups of
/// dead ids, structurally invalid updates, and dependency-cycle rejections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// No object with the given id exists in the scene.
    #[error("Object {id} not found")]
    ObjectNotFound {
        /// The id that failed to resolve.
        id: u64,
    },

    /// No parameter with the given id exists.
    #[error("Parameter {id} not found")]
    ParameterNotFound {
        /// The id that failed to resolve.
        id: u64,
    },

    /// The operation requires a circle but the id resolved to another kind.
    #[error("Object {id} is not a circle")]
    NotACircle {
        /// The offending object id.
        id: u64,
    },

    /// Accepting the update would make an object (transitively) follow
    /// its own center, so it was rejected before any mutation.
    #[error("Cannot center object {id} on {parent}: circular dependency")]
    CircularDependency {
        /// The object being edited.
        id: u64,
        /// The proposed parent that closes the cycle.
        parent: u64,
    },

}

/// Convenience result alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
