//! Slow Computer theme — e-ink optimized
//!
//! Pure black and white. No grays. 1px black outlines.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::PathBuf;

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl SlowTheme {
    /// Candidate locations for a system font file, next to the exe first.
    fn font_search_paths(font_name: &str) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.join("fonts").join(font_name));
                paths.push(dir.join(font_name));
            }
        }
        paths.push(PathBuf::from("/usr/share/slowos/fonts").join(font_name));
        paths.push(PathBuf::from("/usr/share/fonts").join(font_name));
        paths
    }

    fn load_font(font_name: &str) -> Option<Vec<u8>> {
        Self::font_search_paths(font_name)
            .into_iter()
            .find_map(|path| std::fs::read(path).ok())
    }

    /// Install IBM Plex Sans / JetBrains Mono when they are installed on disk.
    /// Falls back to egui's bundled fonts otherwise.
    fn install_fonts(ctx: &egui::Context) {
        let mut fonts = FontDefinitions::default();
        let mut changed = false;

        for (key, file, family) in [
            ("IBMPlexSans", "IBMPlexSans-Text.otf", FontFamily::Proportional),
            ("JetBrainsMono", "JetBrainsMono-Regular.ttf", FontFamily::Monospace),
        ] {
            match Self::load_font(file) {
                Some(data) => {
                    fonts.font_data.insert(key.to_owned(), FontData::from_owned(data));
                    fonts.families.entry(family).or_default().insert(0, key.to_owned());
                    changed = true;
                }
                None => tracing::debug!(font = file, "system font not found, using egui default"),
            }
        }

        if changed {
            ctx.set_fonts(fonts);
        }
    }

    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        Self::install_fonts(ctx);

        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        // --- visuals: pure black & white ---
        let mut visuals = Visuals::light();

        visuals.window_fill = SlowColors::WHITE;
        visuals.panel_fill = SlowColors::WHITE;
        visuals.faint_bg_color = SlowColors::WHITE;
        visuals.extreme_bg_color = SlowColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, SlowColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = SlowColors::WHITE;
            ws.weak_bg_fill = SlowColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // shadows are dithered by hand
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Plain white panel with a 1px black outline
    pub fn panel_frame(margin: f32) -> egui::Frame {
        egui::Frame::none()
            .fill(SlowColors::WHITE)
            .stroke(Stroke::new(1.0, SlowColors::BLACK))
            .inner_margin(egui::Margin::same(margin))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Tab focus cycling and Cmd+/Cmd- zoom before widgets see them.
/// Call this at the start of your app's update() function.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => !(modifiers.command
                && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)),
            _ => true,
        });
    });
}
