//! slowcore — shared library for slow computer applications

pub mod dither;
pub mod flash;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use flash::FlashSet;
pub use repaint::RepaintController;
pub use theme::SlowTheme;
