//! The ordered, mutable collection of weighted items.

use serde::Serialize;

use crate::error::{RrError, RrResult};
use crate::item::Item;

/// Ordered list of items. Insertion order is kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already validated items.
    pub(crate) fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append a Common item of weight 1.
    pub fn add(&mut self, name: impl Into<String>) -> RrResult<&Item> {
        let item = Item::new(name);
        item.validate()?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Append a fully specified item.
    pub fn push(&mut self, item: Item) -> RrResult<()> {
        item.validate()?;
        self.items.push(item);
        Ok(())
    }

    /// Replace the item at `index` wholesale.
    pub fn edit(&mut self, index: usize, updated: Item) -> RrResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(RrError::IndexOutOfRange { index, len })?;
        updated.validate()?;
        *slot = updated;
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn delete(&mut self, index: usize) -> RrResult<Item> {
        if index >= self.items.len() {
            return Err(RrError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items in insertion order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.weight)).sum()
    }
}
