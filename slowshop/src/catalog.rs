//! Product grid: filtering and sorting
//!
//! Tiles carry read-only product metadata. Filtering only flips each tile's
//! `visible` flag and sorting only reorders the tiles, so the two compose:
//! a hidden tile stays hidden after a re-sort and a filter keeps the
//! current order. Every sort starts over from catalog order, so `featured`
//! restores it and equal keys always keep it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filter value that matches every tile.
pub const FILTER_ALL: &str = "all";

/// Identity of a tile, fixed at setup and independent of grid position.
/// Ids follow catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    pub category: String,
    pub material: String,
    pub price: f64,
    /// Price as written in the catalog; passed along verbatim on add-to-cart.
    pub price_text: String,
    pub image: String,
    pub visible: bool,
}

/// One filter button: what it says and what it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControl {
    pub label: String,
    pub value: String,
}

impl FilterControl {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    Name,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Featured, SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh];

    /// Selector values `name`, `low`, `high`; anything else is catalog order.
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "low" => SortKey::PriceLow,
            "high" => SortKey::PriceHigh,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "default",
            SortKey::Name => "name",
            SortKey::PriceLow => "low",
            SortKey::PriceHigh => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Name => "name a-z",
            SortKey::PriceLow => "price: low to high",
            SortKey::PriceHigh => "price: high to low",
        }
    }

    fn compare(self, a: &Tile, b: &Tile) -> Ordering {
        match self {
            SortKey::Featured => Ordering::Equal,
            SortKey::Name => locale_cmp(&a.name, &b.name),
            SortKey::PriceLow => price_cmp(a.price, b.price, false),
            SortKey::PriceHigh => price_cmp(a.price, b.price, true),
        }
    }
}

/// Numeric price order; unreadable (`NaN`) prices go last in either direction
/// so the comparison stays a total order.
fn price_cmp(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.total_cmp(&a),
        (false, false) => a.total_cmp(&b),
    }
}

/// Human ordering for names: accents and case are ignored first, then
/// unaccented before accented and lowercase before uppercase.
///
/// Accent folding covers Latin-1 and Latin Extended-A letters only; other
/// scripts compare by code point.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().flat_map(char::to_lowercase).map(strip_accent).collect::<String>();
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Base letter of a lowercase accented Latin letter.
fn strip_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

/// Whether `tile` passes `selected`: everything passes `all`, otherwise the
/// value must equal the tile's category or its material.
pub fn tile_matches(tile: &Tile, selected: &str) -> bool {
    selected == FILTER_ALL || tile.category == selected || tile.material == selected
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tiles: Vec<Tile>,
    filters: Vec<FilterControl>,
    active_filter: Option<usize>,
    sort: SortKey,
}

impl Catalog {
    /// Build the grid and its filter controls. The first control starts active.
    pub fn setup(tiles: Vec<Tile>, filters: Vec<FilterControl>) -> Self {
        let active_filter = if filters.is_empty() { None } else { Some(0) };
        tracing::debug!(tiles = tiles.len(), filters = filters.len(), "catalog set up");
        Self {
            tiles,
            filters,
            active_filter,
            sort: SortKey::Featured,
        }
    }

    /// Show the tiles matching `selected`, hide the rest.
    pub fn filter(&mut self, selected: &str) -> usize {
        for tile in &mut self.tiles {
            tile.visible = tile_matches(tile, selected);
        }
        let shown = self.visible_tiles().count();
        tracing::debug!(filter = selected, shown, "filter applied");
        shown
    }

    /// Activate the filter control at `index` and apply its value.
    /// Unknown indices are ignored.
    pub fn select_filter(&mut self, index: usize) -> Option<usize> {
        let value = self.filters.get(index)?.value.clone();
        self.active_filter = Some(index);
        Some(self.filter(&value))
    }

    /// Reorder the grid from catalog order; equal keys stay in catalog order.
    pub fn sort(&mut self, key: SortKey) {
        self.sort = key;
        self.tiles.sort_by(|a, b| key.compare(a, b).then_with(|| a.id.cmp(&b.id)));
        tracing::debug!(sort = key.as_str(), "tiles sorted");
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn visible_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.visible)
    }

    pub fn filters(&self) -> &[FilterControl] {
        &self.filters
    }

    pub fn active_filter(&self) -> Option<usize> {
        self.active_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }
}
