//! Arena-backed chain of nodes
//!
//! The [`Chain`] owns every node and hands out [`NodeId`] handles instead of
//! pointers or borrows. Handles are `Copy`, cheap to pass around, and safe to
//! hold forever: a handle to a node that has since been removed (or whose slot
//! has been reused) resolves to "absent" rather than dangling. This is the
//! arena rendition of a singly-linked list with non-owning successors: the
//! chain owns storage, the nodes own their articles, and the links between
//! nodes carry no ownership at all.
//!
//! # Sentinel contract
//!
//! Operations come in two registers. The `Option`/`bool` accessors
//! ([`Chain::content`], [`Chain::link`], ...) report absence structurally. The
//! lenient accessors ([`Chain::id_of`], [`Chain::price_of`], ...) degrade to
//! documented sentinel values for an absent handle ([`INVALID_ID`],
//! [`PRICE_SENTINEL`], quantity `0`, title `None`) and never panic. No
//! operation treats a stale handle as an error.
//!
//! # Examples
//!
//! ```
//! use invchain::{Article, Chain};
//!
//! let mut chain = Chain::new();
//! let n1 = chain.insert(&Article::new(1, "Widget", 9.99, 5)?);
//! let n2 = chain.insert(&Article::new(2, "Gadget", 24.50, 2)?);
//!
//! chain.link(n1, Some(n2));
//! assert_eq!(chain.successor(n1), Some(n2));
//!
//! // Detach n1: the slot is freed, the record is returned to us.
//! let widget = chain.detach(n1).unwrap();
//! assert_eq!(widget.quantity(), 5);
//! assert!(!chain.contains(n1));
//! # Ok::<(), invchain::InvError>(())
//! ```

use tracing::{debug, trace};

use crate::article::{Article, INVALID_ID, PRICE_SENTINEL};
use crate::node::Node;

/// Textual sentinel produced by [`Chain::describe`] for an absent handle
pub const DESCRIBE_NONE: &str = "[ none ]";

/// Handle to a node inside a [`Chain`]
///
/// A `NodeId` is a slot index paired with the generation the slot had when the
/// node was created. Removing the node bumps the slot's generation, so every
/// outstanding handle to it goes permanently stale, including across slot
/// reuse. Handles are only meaningful to the chain that issued them; resolving
/// one against a different chain is out of contract (it may land on an
/// unrelated node and is the handle-world analogue of a dangling pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// One arena slot; `node` is `None` while the slot sits on the free list
#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Generational arena owning a set of chainable nodes
///
/// See the [module docs](self) for the handle and sentinel contract. The chain
/// is single-threaded by design: every operation is a direct computation with
/// no internal locking. Layering threads on top requires external
/// synchronization, e.g. one lock per chain.
#[must_use]
#[derive(Debug, Default)]
pub struct Chain {
    slots: Vec<Slot>,
    free: Vec<usize>,
    len: usize,
}

impl Chain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chain holds no live nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` resolves to a live node
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Insert a new node owning a deep copy of `article`
    ///
    /// The caller keeps its original; the node's copy is independent. The new
    /// node's successor starts unset.
    pub fn insert(&mut self, article: &Article) -> NodeId {
        self.adopt(Node::new(article))
    }

    /// Take ownership of a standalone node
    ///
    /// The node keeps whatever successor it already carries; callers wiring
    /// pre-linked nodes are responsible for the handles being meaningful in
    /// this chain.
    pub fn adopt(&mut self, node: Node) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };
        self.len += 1;
        debug!(index = id.index, generation = id.generation, "node inserted");
        id
    }

    /// Full teardown: drop the node and its article together
    ///
    /// Returns `false` (a no-op) for an absent handle. Successor fields in
    /// other nodes that referred to the removed node resolve to absent from
    /// now on; they are not rewired.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.take(id) {
            Some(_node) => {
                debug!(index = id.index, "node removed, content dropped");
                true
            }
            None => false,
        }
    }

    /// Detach teardown: free the node, move its article out to the caller
    ///
    /// Returns `None` (a no-op) for an absent handle. On success the caller is
    /// the article's sole owner and `id` is permanently stale, so no sequence
    /// of further chain calls can release the article a second time.
    pub fn detach(&mut self, id: NodeId) -> Option<Article> {
        let node = self.take(id)?;
        debug!(index = id.index, "node detached, content transferred");
        Some(node.into_content())
    }

    /// Borrow a node
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    /// Mutably borrow a node
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    /// Borrow a node's article without copying
    ///
    /// The node remains the owner. Use [`Chain::detach`] when the article
    /// itself must outlive the node.
    #[must_use]
    pub fn content(&self, id: NodeId) -> Option<&Article> {
        self.node(id).map(Node::content)
    }

    /// Mutably borrow a node's article without copying
    #[must_use]
    pub fn content_mut(&mut self, id: NodeId) -> Option<&mut Article> {
        self.node_mut(id).map(Node::content_mut)
    }

    /// Get an independent deep copy of a node's article
    ///
    /// The caller owns the result; mutating it leaves the node's own article
    /// untouched. `None` for an absent handle.
    #[must_use]
    pub fn content_copy(&self, id: NodeId) -> Option<Article> {
        self.node(id).map(Node::content_copy)
    }

    /// Get a node's successor handle
    ///
    /// `None` for a terminal node and for an absent handle alike.
    #[must_use]
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::successor)
    }

    /// Wire `current`'s successor
    ///
    /// Returns `false` and changes nothing if `current` is absent. `next` is
    /// not validated: it may be stale, foreign, or create a cycle. Traversal
    /// treats a stale successor as end-of-chain, and [`Chain::iter_from`]
    /// bounds itself against cycles.
    pub fn link(&mut self, current: NodeId, next: Option<NodeId>) -> bool {
        match self.node_mut(current) {
            Some(node) => {
                node.set_successor(next);
                trace!(
                    from = current.index,
                    to = next.map(|n| n.index),
                    "successor wired"
                );
                true
            }
            None => false,
        }
    }

    /// Identifier of a node's article, or [`INVALID_ID`] for an absent handle
    #[must_use]
    pub fn id_of(&self, id: NodeId) -> u32 {
        self.content(id).map_or(INVALID_ID, Article::id)
    }

    /// Title of a node's article, or `None` for an absent handle
    #[must_use]
    pub fn title_of(&self, id: NodeId) -> Option<&str> {
        self.content(id).map(Article::title)
    }

    /// Unit price of a node's article, or [`PRICE_SENTINEL`] for an absent handle
    #[must_use]
    pub fn price_of(&self, id: NodeId) -> f32 {
        self.content(id).map_or(PRICE_SENTINEL, Article::price)
    }

    /// Quantity of a node's article, or `0` for an absent handle
    #[must_use]
    pub fn quantity_of(&self, id: NodeId) -> u32 {
        self.content(id).map_or(0, Article::quantity)
    }

    /// Human-readable form of a node's article
    ///
    /// The article's `Display` block for a live handle, [`DESCRIBE_NONE`]
    /// otherwise.
    #[must_use]
    pub fn describe(&self, id: NodeId) -> String {
        match self.content(id) {
            Some(article) => article.to_string(),
            None => DESCRIBE_NONE.to_string(),
        }
    }

    /// Walk the chain forward from `start`, following successors
    ///
    /// Yields `(NodeId, &Article)` pairs. The walk ends at a terminal node, at
    /// a stale successor, or after visiting [`Chain::len`] nodes, so a
    /// caller-constructed cycle terminates instead of hanging.
    pub fn iter_from(&self, start: NodeId) -> IterFrom<'_> {
        IterFrom {
            chain: self,
            next: Some(start),
            remaining: self.len,
        }
    }

    /// Free a slot and return the node that occupied it
    fn take(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        // Bump the generation so every outstanding handle to this slot goes
        // stale before the slot can be reused.
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }
}

/// Forward traversal over a chain, created by [`Chain::iter_from`]
#[must_use]
#[derive(Debug)]
pub struct IterFrom<'a> {
    chain: &'a Chain,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for IterFrom<'a> {
    type Item = (NodeId, &'a Article);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next.take()?;
        let node = self.chain.node(id)?;
        self.remaining -= 1;
        self.next = node.successor();
        Some((id, node.content()))
    }
}
