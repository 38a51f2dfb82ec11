//! Chain nodes owning one article apiece
//!
//! A [`Node`] is a singly-linked list element. It owns exactly one [`Article`],
//! obtained by deep copy at construction so the node never aliases caller data,
//! and carries an optional successor handle wired by the caller.
//!
//! # Teardown protocol
//!
//! A node has two ways out of existence, both expressed as ownership moves:
//!
//! - dropping it (directly, or via [`crate::Chain::remove`]) releases the node
//!   and its article together, the *full* teardown;
//! - [`Node::into_content`] consumes the node and returns the article to the
//!   caller, the *detach* teardown. The node no longer exists afterwards, so
//!   there is no second release to get wrong.
//!
//! # Examples
//!
//! ```
//! use invchain::{Article, Node};
//!
//! let widget = Article::new(1, "Widget", 9.99, 5)?;
//! let node = Node::new(&widget);
//!
//! // The node owns an independent copy; the caller's original is untouched.
//! assert_eq!(node.content(), &widget);
//!
//! // Detach: the node is consumed, the article is ours.
//! let owned = node.into_content();
//! assert_eq!(owned.title(), "Widget");
//! # Ok::<(), invchain::InvError>(())
//! ```

use crate::Article;
use crate::chain::NodeId;

/// A singly-linked list node owning one article by deep copy
///
/// The successor is a non-owning [`NodeId`] handle into a [`crate::Chain`];
/// nodes never own each other. A node built standalone can be handed to a
/// chain via [`crate::Chain::adopt`].
#[must_use]
#[derive(Debug, Clone)]
pub struct Node {
    content: Article,
    successor: Option<NodeId>,
}

impl Node {
    /// Create a node owning a deep copy of `article`
    ///
    /// The caller keeps its original and is free to drop or mutate it; the
    /// node's copy is independent. The successor starts unset.
    pub fn new(article: &Article) -> Self {
        Self {
            content: article.clone(),
            successor: None,
        }
    }

    /// Borrow the owned article
    ///
    /// The node remains the owner; callers must not attempt to keep this
    /// reference past the node's lifetime (the borrow checker enforces this).
    pub fn content(&self) -> &Article {
        &self.content
    }

    /// Mutably borrow the owned article
    pub fn content_mut(&mut self) -> &mut Article {
        &mut self.content
    }

    /// Get an independent deep copy of the owned article
    ///
    /// The caller owns the result; the node's own article is unaffected by
    /// anything done to the copy.
    pub fn content_copy(&self) -> Article {
        self.content.clone()
    }

    /// Consume the node and move its article out
    ///
    /// This is the detach teardown: the node ceases to exist, the article
    /// survives with the caller as its sole owner.
    pub fn into_content(self) -> Article {
        self.content
    }

    /// Get the successor handle, if any
    pub fn successor(&self) -> Option<NodeId> {
        self.successor
    }

    /// Set or clear the successor handle
    ///
    /// No reachability or acyclicity check is performed; wiring a cycle is
    /// possible and is the caller's responsibility to avoid.
    pub fn set_successor(&mut self, next: Option<NodeId>) {
        self.successor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Article {
        Article::new(1, "Widget", 9.99, 5).unwrap()
    }

    #[test]
    fn test_new_deep_copies_content() {
        let mut original = widget();
        let node = Node::new(&original);

        original.set_quantity(0);
        original.set_title("Mangled").unwrap();

        assert_eq!(node.content().quantity(), 5);
        assert_eq!(node.content().title(), "Widget");
    }

    #[test]
    fn test_successor_starts_unset() {
        let node = Node::new(&widget());
        assert!(node.successor().is_none());
    }

    #[test]
    fn test_content_copy_is_independent() {
        let node = Node::new(&widget());
        let mut copy = node.content_copy();

        copy.set_quantity(99);
        assert_eq!(node.content().quantity(), 5);
        assert_eq!(copy.quantity(), 99);
    }

    #[test]
    fn test_content_mut_edits_owned_article() {
        let mut node = Node::new(&widget());
        node.content_mut().set_price(4.25);
        assert!((node.content().price() - 4.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_into_content_moves_article_out() {
        let node = Node::new(&widget());
        let article = node.into_content();
        assert_eq!(article.id(), 1);
        assert_eq!(article.title(), "Widget");
        assert_eq!(article.quantity(), 5);
        // `node` is consumed; the article is the single remaining owner.
    }
}
