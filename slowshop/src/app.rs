//! slowShop application window

use crate::cart::ItemId;
use crate::catalog::{SortKey, Tile, TileId};
use crate::config::LoadedConfig;
use crate::images::ImageCache;
use crate::price::price_label;
use crate::store::{FlashTarget, Store};
use egui::{Context, Key, TextureHandle};
use slowcore::dither;
use slowcore::repaint::RepaintController;
use slowcore::theme::{menu_bar, SlowColors, SlowTheme};
use slowcore::widgets::{status_bar, toolbar_separator, CountBadge, SlowButton};
use std::path::PathBuf;
use std::time::Instant;

const TILE_WIDTH: f32 = 180.0;
const TILE_IMAGE: f32 = 120.0;
const DRAWER_WIDTH: f32 = 300.0;
const CART_THUMB: f32 = 40.0;

/// Deferred user actions; collected while painting, applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    AddTile(TileId),
    Remove(ItemId),
    Checkout,
    ToggleCart(Option<bool>),
    SelectFilter(usize),
    Sort(SortKey),
    DismissNotice,
    ShowAbout,
    Quit,
}

pub struct SlowShopApp {
    store: Store,
    images: ImageCache,
    catalog_path: Option<PathBuf>,
    show_about: bool,
    repaint: RepaintController,
}

impl SlowShopApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, loaded: LoadedConfig) -> Self {
        let store = Store::new(&loaded.config, loaded.base_dir.as_deref());
        Self {
            store,
            images: ImageCache::new(),
            catalog_path: loaded.source,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn apply(&mut self, action: Action, ctx: &Context, now: Instant) {
        match action {
            Action::AddTile(tile) => {
                self.store.add_tile(tile, now);
            }
            Action::Remove(id) => {
                self.store.remove_item(id);
            }
            Action::Checkout => {
                self.store.checkout();
            }
            Action::ToggleCart(explicit) => {
                self.store.toggle_cart(explicit);
            }
            Action::SelectFilter(index) => self.store.select_filter(index),
            Action::Sort(key) => self.store.select_sort(key),
            Action::DismissNotice => self.store.dismiss_notice(),
            Action::ShowAbout => self.show_about = true,
            Action::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
        self.repaint.mark_needs_repaint();
    }

    fn handle_keys(&self, ctx: &Context, actions: &mut Vec<Action>) {
        slowcore::theme::consume_special_keys(ctx);

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                if self.store.notice().is_some() {
                    actions.push(Action::DismissNotice);
                } else if self.store.drawer().is_open() {
                    actions.push(Action::ToggleCart(Some(false)));
                }
            }
            if i.modifiers.command && i.key_pressed(Key::B) {
                actions.push(Action::ToggleCart(None));
            }
            if i.modifiers.command && i.key_pressed(Key::Enter) {
                actions.push(Action::Checkout);
            }
            if i.modifiers.command && i.key_pressed(Key::Q) {
                actions.push(Action::Quit);
            }
        });
    }

    fn render_menu(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                if ui.button("quit  ⌘q").clicked() {
                    actions.push(Action::Quit);
                    ui.close_menu();
                }
            });
            ui.menu_button("cart", |ui| {
                let label = if self.store.drawer().is_open() { "close cart  ⌘b" } else { "open cart  ⌘b" };
                if ui.button(label).clicked() {
                    actions.push(Action::ToggleCart(None));
                    ui.close_menu();
                }
                if ui.button("checkout  ⌘↵").clicked() {
                    actions.push(Action::Checkout);
                    ui.close_menu();
                }
            });
            ui.menu_button("help", |ui| {
                if ui.button("about").clicked() {
                    actions.push(Action::ShowAbout);
                    ui.close_menu();
                }
            });
        });
    }

    fn render_toolbar(&self, ui: &mut egui::Ui, now: Instant, actions: &mut Vec<Action>) {
        let catalog = self.store.catalog();
        ui.horizontal(|ui| {
            for (index, control) in catalog.filters().iter().enumerate() {
                let active = catalog.active_filter() == Some(index);
                if ui.add(SlowButton::new(&control.label).selected(active)).clicked() {
                    actions.push(Action::SelectFilter(index));
                }
            }

            toolbar_separator(ui);

            let current = catalog.sort_key();
            egui::ComboBox::from_id_source("sort")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        if ui.selectable_label(current == key, key.label()).clicked() && key != current {
                            actions.push(Action::Sort(key));
                        }
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.store.show_badge() {
                    let badge = CountBadge::new(self.store.view().count).bump(self.store.badge_bump(now));
                    if ui.add(badge).clicked() {
                        actions.push(Action::ToggleCart(None));
                    }
                }
                let open = self.store.drawer().is_open();
                if ui.add(SlowButton::new("cart").selected(open)).clicked() {
                    actions.push(Action::ToggleCart(None));
                }
            });
        });
    }

    fn render_tile(
        ui: &mut egui::Ui,
        tile: &Tile,
        texture: Option<TextureHandle>,
        currency: &str,
        flashing: bool,
    ) -> bool {
        let mut clicked = false;
        SlowTheme::panel_frame(6.0).show(ui, |ui| {
            ui.set_width(TILE_WIDTH - 14.0);
            ui.vertical_centered(|ui| {
                paint_thumbnail(ui, texture.as_ref(), egui::vec2(TILE_IMAGE, TILE_IMAGE));
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&tile.name).strong());
                ui.label(
                    egui::RichText::new(format!("{} · {}", tile.category, tile.material)).small(),
                );
                ui.label(price_label(currency, tile.price));
                ui.add_space(2.0);
                clicked = ui
                    .add(SlowButton::new("add to cart").flashing(flashing).min_width(TILE_WIDTH - 30.0))
                    .clicked();
            });
        });
        clicked
    }

    fn render_grid(&mut self, ui: &mut egui::Ui, ctx: &Context, now: Instant, actions: &mut Vec<Action>) {
        let store = &self.store;
        let images = &mut self.images;
        let visible: Vec<&Tile> = store.catalog().visible_tiles().collect();
        let scroll_locked = store.drawer().scroll_locked();

        egui::ScrollArea::vertical()
            .enable_scrolling(!scroll_locked)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if visible.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.label("no products match this filter");
                    });
                    return;
                }

                let spacing = ui.spacing().item_spacing.x;
                let columns = ((ui.available_width() + spacing) / (TILE_WIDTH + spacing))
                    .floor()
                    .max(1.0) as usize;

                for row in visible.chunks(columns) {
                    ui.horizontal_top(|ui| {
                        for tile in row {
                            let texture = images.get(ctx, &tile.image);
                            let flashing = store.is_flashing(FlashTarget::AddButton(tile.id), now);
                            if Self::render_tile(ui, tile, texture, store.currency(), flashing) {
                                actions.push(Action::AddTile(tile.id));
                            }
                        }
                    });
                    ui.add_space(spacing);
                }
            });

        if store.drawer().overlay_open() {
            let rect = ui.max_rect();
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::PanelResizeLine,
                egui::Id::new("shop_overlay"),
            ));
            dither::draw_dither_overlay(&painter, rect);
            let overlay = ui.interact(rect, ui.id().with("overlay"), egui::Sense::click());
            if overlay.clicked() {
                actions.push(Action::ToggleCart(Some(false)));
            }
        }
    }

    fn render_drawer(&mut self, ui: &mut egui::Ui, ctx: &Context, actions: &mut Vec<Action>) {
        let view = self.store.view();
        let images = &mut self.images;

        ui.horizontal(|ui| {
            ui.heading("cart");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(SlowButton::new("close")).clicked() {
                    actions.push(Action::ToggleCart(Some(false)));
                }
            });
        });
        ui.separator();

        let footer_height = 64.0;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - footer_height).max(40.0))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if let Some(placeholder) = view.placeholder {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(placeholder);
                    });
                }
                for line in &view.lines {
                    ui.horizontal(|ui| {
                        let texture = images.get(ctx, &line.image);
                        paint_thumbnail(ui, texture.as_ref(), egui::vec2(CART_THUMB, CART_THUMB));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&line.name).strong());
                            ui.label(&line.price_label);
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(SlowButton::new("remove")).clicked() {
                                actions.push(Action::Remove(line.id));
                            }
                        });
                    });
                    ui.separator();
                }
            });

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("total: {}", prefixed(self.store.currency(), &view.total_label)))
                .strong(),
        );
        ui.add_space(4.0);
        if ui.add(SlowButton::new("checkout").min_width(DRAWER_WIDTH - 24.0)).clicked() {
            actions.push(Action::Checkout);
        }
    }

    fn render_notice(&self, ctx: &Context, actions: &mut Vec<Action>) {
        let Some(notice) = self.store.notice() else {
            return;
        };
        let resp = egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        actions.push(Action::DismissNotice);
                    }
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        let screen_rect = ctx.screen_rect();
        let max_h = (screen_rect.height() - 40.0).max(120.0);
        let source = self
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string());
        let resp = egui::Window::new("about shop")
            .collapsible(false)
            .resizable(false)
            .default_width(280.0)
            .max_height(max_h)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(self.store.title());
                    ui.label("version 0.2.2");
                    ui.add_space(4.0);
                    ui.label("storefront for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label(format!("catalog: {}", source));
                ui.label(format!("products: {}", self.store.catalog().tiles().len()));
                ui.add_space(2.0);
                ui.label("keys: ⌘b cart  ⌘↵ checkout  esc close");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn status_text(&self) -> String {
        let view = self.store.view();
        let catalog = self.store.catalog();
        let filter = catalog
            .active_filter()
            .and_then(|i| catalog.filters().get(i))
            .map(|f| f.label.as_str())
            .unwrap_or("-");
        format!(
            "{} in cart  |  total {}  |  showing {} of {} ({})",
            view.count,
            prefixed(self.store.currency(), &view.total_label),
            catalog.visible_tiles().count(),
            catalog.tiles().len(),
            filter,
        )
    }
}

impl eframe::App for SlowShopApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        let now = Instant::now();
        self.store.tick(now);

        let mut actions = Vec::new();
        self.handle_keys(ctx, &mut actions);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.render_menu(ui, &mut actions);
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui, now, &mut actions);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });

        if self.store.drawer().is_open() {
            egui::SidePanel::right("cart_drawer")
                .resizable(false)
                .exact_width(DRAWER_WIDTH)
                .frame(SlowTheme::panel_frame(8.0))
                .show(ctx, |ui| {
                    self.render_drawer(ui, ctx, &mut actions);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_grid(ui, ctx, now, &mut actions);
            });

        self.render_notice(ctx, &mut actions);
        if self.show_about {
            self.render_about(ctx);
        }

        for action in actions {
            self.apply(action, ctx, now);
        }

        if let Some(deadline) = self.store.tick(now) {
            self.repaint.repaint_at(deadline);
        }
        self.repaint.end_frame(ctx);
    }
}

fn prefixed(currency: &str, amount: &str) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", currency, amount)
    }
}

/// Draw a texture scaled into `size`, or an outlined cross when there is none.
fn paint_thumbnail(ui: &mut egui::Ui, texture: Option<&TextureHandle>, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    let stroke = egui::Stroke::new(1.0, SlowColors::BLACK);
    match texture {
        Some(tex) => {
            let tex_size = tex.size_vec2();
            let scale = (size.x / tex_size.x).min(size.y / tex_size.y);
            let fitted = egui::Rect::from_center_size(rect.center(), tex_size * scale);
            painter.image(
                tex.id(),
                fitted,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            painter.rect_stroke(rect, 0.0, stroke);
            painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
            painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
        }
    }
}
