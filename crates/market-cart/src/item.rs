//! Line item types and the product identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product inside the cart.
///
/// Newtype over the catalog's string id; prevents mixing it up with other
/// string parameters and serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: f64,
    /// Quantity, always >= 1 while the item is in the cart.
    pub quantity: u32,
}

/// A candidate item coming from the catalog, before a quantity exists.
///
/// Turned into a [`LineItem`] with quantity 1 on first add.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: f64,
}

impl NewItem {
    /// Create a candidate item.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Build the initial line item for this candidate.
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}
