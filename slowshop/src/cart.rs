//! Cart model
//!
//! An ordered list of line items. Display order is insertion order and the
//! same product added twice yields two entries. Every entry gets an
//! [`ItemId`] at add time that stays valid while other entries come and go,
//! so removal controls never point at a shifted position.

use std::fmt;

/// Stable identity of a cart entry within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    /// Image reference as given by the catalog (resolved path or key).
    pub image: String,
}

#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn add(&mut self, name: impl Into<String>, price: f64, image: impl Into<String>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(CartItem {
            id,
            name: name.into(),
            price,
            image: image.into(),
        });
        id
    }

    /// Remove the entry at `index`. Out-of-range positions are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the entry with `id`, wherever it currently sits.
    pub fn remove(&mut self, id: ItemId) -> Option<CartItem> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Sum of all prices; `0` when empty. `NaN` prices poison the sum.
    pub fn total(&self) -> f64 {
        self.items.iter().fold(0.0, |acc, item| acc + item.price)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Empty the cart. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order_and_duplicates() {
        let mut cart = Cart::new();
        let a = cart.add("Ring", 899.0, "ring.png");
        let b = cart.add("Bracelet", 450.0, "bracelet.png");
        let c = cart.add("Ring", 899.0, "ring.png");

        assert_eq!(names(&cart), ["Ring", "Bracelet", "Ring"]);
        assert_ne!(a, c);
        assert!(a < b && b < c);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 2248.0);
    }

    #[test]
    fn test_empty_total_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), 0.0);
        assert!(cart.total().is_sign_positive());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add("Ring", 899.0, "");
        assert!(cart.remove_at(1).is_none());
        assert!(cart.remove_at(usize::MAX).is_none());
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), 899.0);
    }

    #[test]
    fn test_remove_by_id_survives_shifts() {
        let mut cart = Cart::new();
        let first = cart.add("A", 1.0, "");
        let second = cart.add("B", 2.0, "");
        let third = cart.add("C", 3.0, "");

        assert_eq!(cart.remove(first).map(|i| i.name), Some("A".to_string()));
        // "C" moved from index 2 to 1; its id still finds it
        assert_eq!(cart.position(third), Some(1));
        assert_eq!(cart.remove(third).map(|i| i.price), Some(3.0));
        assert!(cart.remove(third).is_none());
        assert_eq!(names(&cart), ["B"]);
        assert_eq!(cart.position(second), Some(0));
    }

    #[test]
    fn test_nan_price_propagates() {
        let mut cart = Cart::new();
        cart.add("Ring", 899.0, "");
        cart.add("Mystery", f64::NAN, "");
        assert!(cart.total().is_nan());
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let mut cart = Cart::new();
        let before = cart.add("A", 1.0, "");
        cart.clear();
        assert!(cart.is_empty());
        let after = cart.add("A", 1.0, "");
        assert_ne!(before, after);
    }
}
