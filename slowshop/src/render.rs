//! Cart rendering
//!
//! Turns the cart into the rows, total and count shown in the drawer and
//! the status bar. The egui layer only paints a [`CartView`]; it never
//! reads the cart directly, so the displayed total and count always come
//! from the same pass.

use crate::cart::{Cart, ItemId};
use crate::price::{format_price, price_label};

/// Placeholder shown in the drawer when nothing has been added yet.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Identity the remove control acts on.
    pub id: ItemId,
    pub name: String,
    pub image: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
    /// Bare number, as in the drawer footer.
    pub total_label: String,
    pub count: usize,
    pub placeholder: Option<&'static str>,
}

impl Default for CartView {
    fn default() -> Self {
        render(&Cart::new(), "")
    }
}

/// Rebuild the drawer contents from scratch.
pub fn render(cart: &Cart, currency: &str) -> CartView {
    let lines: Vec<CartLine> = cart
        .items()
        .iter()
        .map(|item| CartLine {
            id: item.id,
            name: item.name.clone(),
            image: item.image.clone(),
            price_label: price_label(currency, item.price),
        })
        .collect();

    let total = cart.total();
    CartView {
        placeholder: lines.is_empty().then_some(EMPTY_CART_MESSAGE),
        lines,
        total,
        total_label: format_price(total),
        count: cart.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_shows_placeholder() {
        let view = render(&Cart::new(), "Rs.");
        assert!(view.lines.is_empty());
        assert_eq!(view.placeholder, Some(EMPTY_CART_MESSAGE));
        assert_eq!(view.total_label, "0");
        assert_eq!(view.count, 0);
        assert_eq!(CartView::default().total_label, "0");
    }

    #[test]
    fn test_lines_follow_cart_order() {
        let mut cart = Cart::new();
        let bracelet = cart.add("Bracelet", 450.0, "img/bracelet.png");
        let ring = cart.add("Ring", 899.0, "img/ring.png");

        let view = render(&cart, "Rs.");
        assert_eq!(view.placeholder, None);
        assert_eq!(view.count, 2);
        assert_eq!(view.total, 1349.0);
        assert_eq!(view.total_label, "1349");

        let ids: Vec<_> = view.lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, [bracelet, ring]);
        assert_eq!(view.lines[0].price_label, "Rs. 450");
        assert_eq!(view.lines[1].image, "img/ring.png");
    }

    #[test]
    fn test_total_tracks_arbitrary_edits() {
        let mut cart = Cart::new();
        let prices = [10.0, 20.5, 30.0, 0.25, 99.0];
        for (i, p) in prices.iter().enumerate() {
            cart.add(format!("item {}", i), *p, "");
        }
        cart.remove_at(1);
        cart.remove_at(7);
        cart.remove_at(2);

        let view = render(&cart, "");
        let expected: f64 = cart.items().iter().map(|i| i.price).sum();
        assert_eq!(view.total, expected);
        assert_eq!(view.count, cart.count());
        assert_eq!(view.lines.len(), 3);
    }

    #[test]
    fn test_nan_total_is_rendered() {
        let mut cart = Cart::new();
        cart.add("Odd", f64::NAN, "");
        let view = render(&cart, "Rs.");
        assert_eq!(view.total_label, "NaN");
        assert_eq!(view.lines[0].price_label, "Rs. NaN");
    }
}
