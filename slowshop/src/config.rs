//! Store configuration
//!
//! The catalog (products, filter buttons, currency, a few display switches)
//! is a JSON file. It is looked up in this order:
//!
//! 1. the first command-line argument
//! 2. `$SLOWSHOP_CATALOG`
//! 3. `catalog.json` in the slowshop config directory
//!
//! When none exists the built-in demo catalog is used. A file that exists
//! but cannot be read is reported and the demo catalog is used instead.
//! Image paths inside a catalog file are relative to that file.

use crate::catalog::{FilterControl, Tile, TileId};
use crate::error::{Result, ShopError};
use crate::price::{format_price, parse_price};
use serde::{Deserialize, Serialize};
use slowcore::storage::{config_dir, load_json, resolve_relative};
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "SLOWSHOP_CATALOG";
pub const CATALOG_FILE: &str = "catalog.json";

/// A price as it may appear in JSON: a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    pub fn value(&self) -> f64 {
        match self {
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => parse_price(s),
        }
    }

    pub fn text(&self) -> String {
        match self {
            RawPrice::Number(n) => format_price(*n),
            RawPrice::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub category: String,
    pub material: String,
    pub price: RawPrice,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub title: String,
    pub currency: String,
    /// Dim the grid while the cart drawer is open.
    pub show_overlay: bool,
    /// Show the item count badge in the toolbar.
    pub show_badge: bool,
    /// Length of the add-to-cart acknowledgment, in milliseconds.
    pub flash_ms: u64,
    pub filters: Vec<FilterControl>,
    pub products: Vec<ProductSpec>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: "shop".to_string(),
            currency: "Rs.".to_string(),
            show_overlay: true,
            show_badge: true,
            flash_ms: 380,
            filters: Vec::new(),
            products: Vec::new(),
        }
    }
}

/// A config together with the directory its relative paths hang off.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: StoreConfig,
    pub base_dir: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: StoreConfig = load_json(path)?;
        if config.products.is_empty() {
            return Err(ShopError::EmptyCatalog(path.to_path_buf()));
        }
        Ok(config)
    }

    /// Demo jewellery catalog used when no file is configured.
    pub fn builtin() -> Self {
        let product = |name: &str, category: &str, material: &str, price: &str, image: &str| ProductSpec {
            name: name.to_string(),
            category: category.to_string(),
            material: material.to_string(),
            price: RawPrice::Text(price.to_string()),
            image: image.to_string(),
        };
        Self {
            filters: vec![
                FilterControl::new("all", "all"),
                FilterControl::new("rings", "rings"),
                FilterControl::new("necklaces", "necklaces"),
                FilterControl::new("bracelets", "bracelets"),
                FilterControl::new("earrings", "earrings"),
                FilterControl::new("gold", "gold"),
                FilterControl::new("silver", "silver"),
            ],
            products: vec![
                product("Bracelet", "bracelets", "silver", "450", "images/bracelet.png"),
                product("Ring", "rings", "gold", "899", "images/ring.png"),
                product("Pearl Necklace", "necklaces", "silver", "1299", "images/pearl-necklace.png"),
                product("Hoop Earrings", "earrings", "gold", "650", "images/hoops.png"),
                product("Signet Ring", "rings", "silver", "540", "images/signet.png"),
                product("Chain Necklace", "necklaces", "gold", "1750", "images/chain.png"),
                product("Cuff", "bracelets", "gold", "980", "images/cuff.png"),
                product("Studs", "earrings", "silver", "320", "images/studs.png"),
            ],
            ..Self::default()
        }
    }

    /// Grid tiles in catalog order, all visible, images resolved against `base`.
    pub fn tiles(&self, base: Option<&Path>) -> Vec<Tile> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| Tile {
                id: TileId(i),
                name: p.name.clone(),
                category: p.category.clone(),
                material: p.material.clone(),
                price: p.price.value(),
                price_text: p.price.text(),
                image: resolve_image(base, &p.image),
                visible: true,
            })
            .collect()
    }

    /// Filter buttons; a catalog without any gets a lone "all".
    pub fn filter_controls(&self) -> Vec<FilterControl> {
        if self.filters.is_empty() {
            vec![FilterControl::new("all", crate::catalog::FILTER_ALL)]
        } else {
            self.filters.clone()
        }
    }
}

fn resolve_image(base: Option<&Path>, image: &str) -> String {
    match base {
        Some(dir) if !image.is_empty() => resolve_relative(dir, image).to_string_lossy().into_owned(),
        _ => image.to_string(),
    }
}

/// Paths to try, in priority order.
pub fn candidate_paths(arg: Option<PathBuf>, env: Option<PathBuf>, config_home: PathBuf) -> Vec<PathBuf> {
    arg.into_iter()
        .chain(env)
        .chain(std::iter::once(config_home.join(CATALOG_FILE)))
        .collect()
}

/// Resolve the catalog for this run. Never fails; falls back to [`StoreConfig::builtin`].
pub fn load(arg: Option<PathBuf>) -> LoadedConfig {
    let env = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
    load_from(candidate_paths(arg, env, config_dir("slowshop")))
}

pub fn load_from(candidates: Vec<PathBuf>) -> LoadedConfig {
    for path in candidates {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog here");
            continue;
        }
        return match StoreConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), products = config.products.len(), "catalog loaded");
                LoadedConfig {
                    config,
                    base_dir: path.parent().map(Path::to_path_buf),
                    source: Some(path),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in catalog");
                builtin_loaded()
            }
        };
    }
    tracing::info!("using built-in catalog");
    builtin_loaded()
}

fn builtin_loaded() -> LoadedConfig {
    LoadedConfig {
        config: StoreConfig::builtin(),
        base_dir: None,
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "title": "silver & gold",
        "currency": "EUR",
        "show_overlay": false,
        "filters": [{ "label": "all", "value": "all" }, { "label": "rings", "value": "rings" }],
        "products": [
            { "name": "Ring", "category": "rings", "material": "gold", "price": 899, "image": "img/ring.png" },
            { "name": "Bracelet", "category": "bracelets", "material": "silver", "price": "450" },
            { "name": "Odd", "category": "misc", "material": "tin", "price": "n/a" }
        ]
    }"#;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: StoreConfig = serde_json::from_str(CATALOG).unwrap();
        assert_eq!(config.currency, "EUR");
        assert!(!config.show_overlay);
        assert!(config.show_badge);
        assert_eq!(config.flash_ms, 380);
        assert_eq!(config.products.len(), 3);
    }

    #[test]
    fn test_prices_are_coerced() {
        let config: StoreConfig = serde_json::from_str(CATALOG).unwrap();
        let tiles = config.tiles(None);
        assert_eq!(tiles[0].price, 899.0);
        assert_eq!(tiles[0].price_text, "899");
        assert_eq!(tiles[1].price, 450.0);
        assert!(tiles[2].price.is_nan());
        assert_eq!(tiles[2].price_text, "n/a");
        assert!(tiles.iter().all(|t| t.visible));
    }

    #[test]
    fn test_images_resolve_against_catalog_dir() {
        let config: StoreConfig = serde_json::from_str(CATALOG).unwrap();
        let tiles = config.tiles(Some(Path::new("/shop")));
        assert_eq!(tiles[0].image, "/shop/img/ring.png");
        assert_eq!(tiles[1].image, "");
    }

    #[test]
    fn test_candidate_order() {
        let paths = candidate_paths(
            Some(PathBuf::from("arg.json")),
            Some(PathBuf::from("env.json")),
            PathBuf::from("/home/u/.config/slowshop"),
        );
        assert_eq!(
            paths,
            [
                PathBuf::from("arg.json"),
                PathBuf::from("env.json"),
                PathBuf::from("/home/u/.config/slowshop/catalog.json"),
            ]
        );
        assert_eq!(candidate_paths(None, None, PathBuf::from("/c")).len(), 1);
    }

    #[test]
    fn test_load_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();

        let loaded = load_from(vec![dir.path().join("missing.json"), path.clone()]);
        assert_eq!(loaded.source, Some(path));
        assert_eq!(loaded.base_dir.as_deref(), Some(dir.path()));
        assert_eq!(loaded.config.title, "silver & gold");
    }

    #[test]
    fn test_broken_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ broken").unwrap();

        let loaded = load_from(vec![path]);
        assert!(loaded.source.is_none());
        assert_eq!(loaded.config, StoreConfig::builtin());
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{ "products": [] }"#).unwrap();
        assert!(matches!(StoreConfig::from_file(&path), Err(ShopError::EmptyCatalog(_))));
    }

    #[test]
    fn test_builtin_has_all_filter_first() {
        let config = StoreConfig::builtin();
        assert_eq!(config.filter_controls()[0].value, "all");
        assert!(!config.products.is_empty());
        assert_eq!(StoreConfig::default().filter_controls().len(), 1);
    }
}
