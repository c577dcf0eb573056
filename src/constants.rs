//! Sizing, color, and styling constants for the picker.

use crate::color::Rgb;

/// Default width of the tint strip
pub const TINT_STRIP_WIDTH: f64 = 30.0;

/// Default border frame width
pub const BORDER_WIDTH: f64 = 5.0;

/// Default border frame color (any CSS color string)
pub const BORDER_COLOR: &str = "black";

/// Distance the contrast cursor keeps from every edge of the contrast square
pub const CURSOR_MARGIN: f64 = 7.0;

/// Contrast cursor ring radius
pub const CURSOR_RADIUS: f64 = 4.0;

/// Contrast cursor ring stroke width
pub const CURSOR_STROKE: f64 = 3.0;

/// Tint cursor line stroke width
pub const TINT_CURSOR_STROKE: f64 = 2.0;

/// Marker token hosts append to trigger and panel class lists when expanded
pub const TOGGLED_CLASS: &str = "color-picker-toggled";

/// Hue stops for the tint strip, evenly spaced. Red twice closes the wheel.
pub const TINT_STOPS: [Rgb; 7] = [
    Rgb::new(255, 0, 0),   // red
    Rgb::new(255, 0, 255), // magenta
    Rgb::new(0, 0, 255),   // blue
    Rgb::new(0, 255, 255), // cyan
    Rgb::new(0, 128, 0),   // green
    Rgb::new(255, 255, 0), // yellow
    Rgb::new(255, 0, 0),   // red
];

/// Default panel size used by the Floem view before its first layout
pub const PANEL_WIDTH: f64 = 232.0;
pub const PANEL_HEIGHT: f64 = 160.0;

/// Trigger swatch side length
pub const SWATCH_SIZE: f32 = 24.0;

/// Gap between trigger and panel
pub const GAP: f32 = 8.0;
