//! Custom widgets — pure black and white, dithered overlays

use egui::{Response, Ui, Widget};
use crate::dither;
use crate::flash::lerp;
use crate::theme::SlowColors;

/// A button: white bg, 1px outline. Dithered when pressed, selected or flashing.
pub struct SlowButton<'a> {
    text: &'a str,
    selected: bool,
    flashing: bool,
    min_width: f32,
}

impl<'a> SlowButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, selected: false, flashing: false, min_width: 0.0 }
    }

    /// Persistent "active" marker, e.g. the current filter.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Transient acknowledgment after the button did something.
    pub fn flashing(mut self, flashing: bool) -> Self {
        self.flashing = flashing;
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }
}

impl<'a> Widget for SlowButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::FontId::proportional(14.0);
        let galley = ui.painter().layout_no_wrap(self.text.to_owned(), font.clone(), SlowColors::BLACK);
        let padding = egui::vec2(16.0, 4.0);
        let desired_size = egui::vec2(
            (galley.size().x + padding.x * 2.0).max(self.min_width),
            ui.spacing().interact_size.y,
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, SlowColors::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, SlowColors::BLACK));

            let pressed = response.is_pointer_button_down_on() || self.selected || self.flashing;
            if pressed {
                dither::draw_dither_selection(painter, rect);
            } else if response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                font,
                if pressed { SlowColors::WHITE } else { SlowColors::BLACK },
            );
        }

        response
    }
}

/// Small boxed counter (e.g. items in a cart). `bump` is the eased progress
/// of a running flash; the box swells and settles back while it runs.
pub struct CountBadge {
    count: usize,
    bump: Option<f32>,
}

impl CountBadge {
    pub fn new(count: usize) -> Self {
        Self { count, bump: None }
    }

    pub fn bump(mut self, progress: Option<f32>) -> Self {
        self.bump = progress;
        self
    }
}

impl Widget for CountBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        let base = egui::vec2(22.0, 18.0);
        let (outer, response) = ui.allocate_exact_size(base + egui::vec2(6.0, 6.0), egui::Sense::click());

        if ui.is_rect_visible(outer) {
            let scale = self.bump.map(|t| lerp(1.3, 1.0, t)).unwrap_or(1.0);
            let rect = egui::Rect::from_center_size(outer.center(), base * scale);
            let painter = ui.painter();
            let inverted = self.bump.is_some();
            let (bg, fg) = if inverted {
                (SlowColors::BLACK, SlowColors::WHITE)
            } else {
                (SlowColors::WHITE, SlowColors::BLACK)
            };
            painter.rect_filled(rect, 0.0, bg);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, SlowColors::BLACK));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.count.to_string(),
                egui::FontId::proportional(12.0 * scale),
                fg,
            );
        }

        response
    }
}

/// Toolbar separator (vertical 1px black line)
pub fn toolbar_separator(ui: &mut Ui) {
    let height = ui.spacing().interact_size.y;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().vline(
            rect.center().x,
            rect.y_range(),
            egui::Stroke::new(1.0, SlowColors::BLACK),
        );
    }
}

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
