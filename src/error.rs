//! Inventory chain error types

use thiserror::Error;

/// Errors reported by article construction and mutation
///
/// Chain operations on absent handles do not produce errors; they degrade to
/// documented sentinel values (see [`crate::chain::Chain`]). `InvError` covers the
/// paths where the contract requires a reported failure instead of a sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvError {
    /// Article title was empty
    ///
    /// A successfully constructed article always carries a non-empty title;
    /// both [`crate::Article::new`] and [`crate::Article::set_title`] reject
    /// an empty one. On the setter's failure path the previous title is kept.
    #[error("article title must not be empty")]
    EmptyTitle,
}

/// Result type alias using InvError
pub type Result<T> = std::result::Result<T, InvError>;
