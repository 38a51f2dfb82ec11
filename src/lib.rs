#![doc = include_str!("../README.md")]

/// Inventory article records
pub mod article;
/// Arena-backed chain owning nodes by handle
pub mod chain;
mod error;
/// Chain nodes owning one article apiece
pub mod node;

pub use article::{Article, INVALID_ID, PRICE_SENTINEL};
pub use chain::{Chain, DESCRIBE_NONE, IterFrom, NodeId};
pub use error::{InvError, Result};
pub use node::Node;
