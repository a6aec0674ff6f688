//! Storefront state controller
//!
//! `Store` owns everything the window shows: the cart and its rendered
//! view, the drawer, the product catalog, running acknowledgment flashes
//! and the pending notice. Every user action goes through one of its
//! methods, which keeps the rendered view in step with the cart.

use crate::cart::{Cart, ItemId};
use crate::catalog::{Catalog, SortKey, TileId};
use crate::checkout::{self, CheckoutOutcome, Notice};
use crate::config::StoreConfig;
use crate::drawer::Drawer;
use crate::price::parse_price;
use crate::render::{render, CartView};
use slowcore::FlashSet;
use std::path::Path;
use std::time::{Duration, Instant};

/// What a flash is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTarget {
    /// The add-to-cart button of a product tile.
    AddButton(TileId),
    CartBadge,
}

pub struct Store {
    title: String,
    currency: String,
    cart: Cart,
    view: CartView,
    drawer: Drawer,
    catalog: Catalog,
    flashes: FlashSet<FlashTarget>,
    flash_duration: Duration,
    show_badge: bool,
    notice: Option<Notice>,
}

impl Store {
    /// Set up the grid and filter controls and render the empty cart.
    pub fn new(config: &StoreConfig, base_dir: Option<&Path>) -> Self {
        let catalog = Catalog::setup(config.tiles(base_dir), config.filter_controls());
        let mut store = Self {
            title: config.title.clone(),
            currency: config.currency.clone(),
            cart: Cart::new(),
            view: CartView::default(),
            drawer: Drawer::new(config.show_overlay),
            catalog,
            flashes: FlashSet::new(),
            flash_duration: Duration::from_millis(config.flash_ms),
            show_badge: config.show_badge,
            notice: None,
        };
        store.render();
        store
    }

    fn render(&mut self) {
        self.view = render(&self.cart, &self.currency);
    }

    /// Put a product in the cart, acknowledge it and open the drawer.
    /// `price` is coerced like any other price text.
    pub fn add_to_cart(
        &mut self,
        name: &str,
        price: &str,
        image: &str,
        source: Option<TileId>,
        now: Instant,
    ) -> ItemId {
        let price = parse_price(price);
        let id = self.cart.add(name, price, image);
        self.render();
        tracing::info!(item = %id, name, price, count = self.view.count, "added to cart");

        if let Some(tile) = source {
            self.flashes.trigger(FlashTarget::AddButton(tile), now, self.flash_duration);
        }
        if self.show_badge {
            self.flashes.trigger(FlashTarget::CartBadge, now, self.flash_duration);
        }

        self.toggle_cart(Some(true));
        id
    }

    /// Add the product shown on tile `tile`, acknowledging on its button.
    pub fn add_tile(&mut self, tile: TileId, now: Instant) -> Option<ItemId> {
        let t = self.catalog.tile(tile)?;
        let (name, price, image) = (t.name.clone(), t.price_text.clone(), t.image.clone());
        Some(self.add_to_cart(&name, &price, &image, Some(tile), now))
    }

    /// Remove by stable id. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let removed = self.cart.remove(id);
        self.render();
        if let Some(item) = &removed {
            tracing::info!(item = %id, name = %item.name, count = self.view.count, "removed from cart");
        }
        removed.is_some()
    }

    /// Remove by position. Out-of-range positions change nothing.
    pub fn remove_at(&mut self, index: usize) -> bool {
        let removed = self.cart.remove_at(index);
        self.render();
        if removed.is_none() {
            tracing::debug!(index, "remove ignored, no such position");
        }
        removed.is_some()
    }

    /// Check out and queue the notice describing the result.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        let outcome = checkout::checkout(&mut self.cart, &mut self.drawer);
        match &outcome {
            CheckoutOutcome::Empty => tracing::info!("checkout refused, cart is empty"),
            CheckoutOutcome::Confirmed { total, items } => {
                tracing::info!(total, items, "checkout complete");
                self.render();
            }
        }
        self.notice = Some(Notice::from_outcome(&outcome, &self.currency));
        outcome
    }

    pub fn toggle_cart(&mut self, explicit: Option<bool>) -> bool {
        let open = self.drawer.toggle(explicit);
        tracing::debug!(open, "cart drawer");
        open
    }

    pub fn select_filter(&mut self, index: usize) {
        self.catalog.select_filter(index);
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.catalog.sort(key);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Expire finished flashes. Returns when the next one ends, if any runs.
    pub fn tick(&mut self, now: Instant) -> Option<Instant> {
        self.flashes.update(now);
        self.flashes.next_deadline()
    }

    pub fn is_flashing(&self, target: FlashTarget, now: Instant) -> bool {
        self.flashes.is_active(&target, now)
    }

    /// Eased progress of the badge bump, `None` when idle.
    pub fn badge_bump(&self, now: Instant) -> Option<f32> {
        self.flashes.progress(&FlashTarget::CartBadge, now)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> &CartView {
        &self.view
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_badge(&self) -> bool {
        self.show_badge
    }
}
