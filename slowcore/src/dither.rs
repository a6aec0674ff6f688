//! Dither pattern drawing for e-ink style overlays.
//!
//! Instead of opaque black boxes we draw a checkerboard dither so the content
//! underneath stays readable: selections, hover states, window shadows and
//! the page-dimming overlay behind slide-out panels.

use egui::{Color32, Painter, Pos2, Rect};

/// Draw a checkerboard dither pattern over a rectangle.
/// `density` controls spacing: 1 = every other pixel, 2 = sparser, 3 = sparse.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let density = density.max(1) as i32;

    // Clamp inward once so every (x, y) visited lies inside `rect`.
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let y_step = density;
    let x_step = density * 2;
    let pixel = egui::Vec2::splat(1.0);

    let mut y = y0;
    while y < y1 {
        let row_offset = if ((y - y0) / density) % 2 == 0 { 0 } else { density };

        let mut x = x0 + row_offset;
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel),
                0.0,
                color,
            );
            x += x_step;
        }
        y += y_step;
    }
}

/// Dithered selection highlight (tight 1px checkerboard).
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Lighter dither for hover states.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Sparse dither used to dim a page while a panel is slid over it.
pub fn draw_dither_overlay(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 3);
}

/// Dithered drop shadow for a window.
/// Call after `egui::Window::show()` with the window rect.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = window_rect.translate(egui::vec2(4.0, 4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}
