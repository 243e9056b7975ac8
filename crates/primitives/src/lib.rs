//! Core types shared by the read-only session crates: document identity,
//! document locations and async future aliases.

/// Async future aliases.
pub mod future;
/// Identifier types for documents.
pub mod ids;
/// Document locations: identity plus scheme.
pub mod location;

pub use future::BoxFutureLocal;
pub use ids::DocumentId;
pub use location::{DocumentLocation, FILE_SCHEME, LocationError};
