//! Inventory article records
//!
//! This module contains the [`Article`] record: a numeric identifier, an owned
//! title, a unit price, and a stocked quantity. An article is a plain mutable
//! value with no relationship to other articles; copies are always deep (the
//! title storage is duplicated, never shared).
//!
//! # Identifier conventions
//!
//! Two identifier values carry meaning by convention only:
//!
//! - `0` is reserved to mean "invalid/unset". It is documented, never validated.
//! - [`INVALID_ID`] (`u32::MAX`) is the sentinel returned by lenient chain
//!   accessors for an absent handle. It is a named constant rather than the
//!   result of unsigned wraparound.
//!
//! # Examples
//!
//! ```
//! use invchain::Article;
//!
//! let mut article = Article::new(1, "Widget", 9.99, 5)?;
//! assert_eq!(article.title(), "Widget");
//!
//! article.set_quantity(7);
//! assert_eq!(article.quantity(), 7);
//!
//! // The empty title is rejected; the previous title survives.
//! assert!(article.set_title("").is_err());
//! assert_eq!(article.title(), "Widget");
//! # Ok::<(), invchain::InvError>(())
//! ```

use std::fmt;

use crate::{InvError, Result};

/// Sentinel identifier for an absent article reference
///
/// Returned by [`crate::Chain::id_of`] when the handle does not resolve to a
/// live node. Distinct from the `0` "invalid/unset" convention, which marks a
/// real article that has not been assigned an identifier yet.
pub const INVALID_ID: u32 = u32::MAX;

/// Sentinel unit price for an absent article reference
///
/// Returned by [`crate::Chain::price_of`] when the handle does not resolve to a
/// live node. Valid articles carry whatever price the caller supplies; the
/// crate performs no currency validation.
pub const PRICE_SENTINEL: f32 = -1.0;

/// An inventory article record
///
/// Fields are private; reads go through the accessors and writes through the
/// setters so the single construction invariant (a non-empty title) holds for
/// the life of the value. Cloning duplicates the title storage, so a clone and
/// its source never alias.
///
/// # Examples
///
/// ```
/// use invchain::Article;
///
/// let article = Article::new(42, "Gadget", 24.50, 2)?;
/// let copy = article.clone();
/// assert_eq!(copy, article);
/// # Ok::<(), invchain::InvError>(())
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ArticleWire"))]
pub struct Article {
    /// Identifier (`0` is "invalid/unset" by convention)
    id: u32,
    /// Owned title, non-empty once construction succeeds
    title: String,
    /// Unit price
    price: f32,
    /// Stocked quantity
    quantity: u32,
}

impl Article {
    /// Create a new article
    ///
    /// Fails with [`InvError::EmptyTitle`] if `title` is empty; otherwise the
    /// title is moved (or copied) into owned storage and the scalar fields are
    /// taken as-is. Identifiers are not checked for uniqueness, prices are not
    /// checked for sign, and quantity has no upper bound.
    pub fn new(id: u32, title: impl Into<String>, price: f32, quantity: u32) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(InvError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            price,
            quantity,
        })
    }

    /// Get the identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the unit price
    pub fn price(&self) -> f32 {
        self.price
    }

    /// Get the stocked quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Set the identifier
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Replace the title
    ///
    /// Fails with [`InvError::EmptyTitle`] for an empty replacement, in which
    /// case the previous title is left in place. The old storage is reused
    /// where the new title fits.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(InvError::EmptyTitle);
        }
        self.title.clear();
        self.title.push_str(title);
        Ok(())
    }

    /// Set the unit price
    pub fn set_price(&mut self, price: f32) {
        self.price = price;
    }

    /// Set the stocked quantity
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Article {
    /// Block form matching the classic inventory printout
    ///
    /// ```text
    /// Article
    /// ID      1
    /// Title   Widget
    /// Price   €9.99
    /// Qty.    5
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Article")?;
        writeln!(f, "ID\t{}", self.id)?;
        writeln!(f, "Title\t{}", self.title)?;
        writeln!(f, "Price\t€{:.2}", self.price)?;
        write!(f, "Qty.\t{}", self.quantity)
    }
}

/// Serde proxy so deserialization re-checks the non-empty-title invariant
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ArticleWire {
    id: u32,
    title: String,
    price: f32,
    quantity: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<ArticleWire> for Article {
    type Error = InvError;

    fn try_from(wire: ArticleWire) -> Result<Self> {
        Self::new(wire.id, wire.title, wire.price, wire.quantity)
    }
}
