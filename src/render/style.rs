//! Fixed figure geometry, in pixels unless noted.

/// 6.4 × 4.8 inch figure at 100 dpi.
pub const FIGURE_WIDTH: u32 = 640;
pub const FIGURE_HEIGHT: u32 = 480;

pub const MARGIN_LEFT: f32 = 80.0;
pub const MARGIN_RIGHT: f32 = 64.0;
pub const MARGIN_TOP: f32 = 57.6;
pub const MARGIN_BOTTOM: f32 = 52.8;

/// Padding added around the data limits, as a fraction of the data span.
pub const DATA_MARGIN: f64 = 0.05;

pub const MARKER_RADIUS: f32 = 4.0;
pub const FRAME_WIDTH: f32 = 0.8;
pub const TICK_LENGTH: f32 = 5.0;
pub const MAX_TICKS: usize = 8;

pub const BACKGROUND: [u8; 3] = [255, 255, 255];
pub const FOREGROUND: [u8; 3] = [0, 0, 0];
