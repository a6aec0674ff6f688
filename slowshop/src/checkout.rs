//! Checkout flow
//!
//! No payment happens here: checkout reports the total, empties the cart
//! and closes the drawer. The result is turned into a [`Notice`] that the
//! app shows until the user acknowledges it.

use crate::cart::Cart;
use crate::drawer::Drawer;
use crate::price::price_label;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; cart and drawer were left alone.
    Empty,
    /// Cart was emptied. `total` is what it held before.
    Confirmed { total: f64, items: usize },
}

pub fn checkout(cart: &mut Cart, drawer: &mut Drawer) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::Empty;
    }

    let outcome = CheckoutOutcome::Confirmed {
        total: cart.total(),
        items: cart.count(),
    };
    cart.clear();
    drawer.toggle(Some(false));
    outcome
}

/// User-facing message waiting for acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn from_outcome(outcome: &CheckoutOutcome, currency: &str) -> Self {
        match outcome {
            CheckoutOutcome::Empty => Self {
                title: "cart",
                message: "Your cart is empty. Add some items first!".to_string(),
            },
            CheckoutOutcome::Confirmed { total, .. } => Self {
                title: "checkout",
                message: format!("Checkout successful! Total: {}", price_label(currency, *total)),
            },
        }
    }
}
