//! slowShop — storefront library: cart, drawer, checkout and product catalog.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod drawer;
pub mod error;
pub mod images;
pub mod price;
pub mod render;
pub mod store;

pub use error::{Result, ShopError};
pub use store::Store;
