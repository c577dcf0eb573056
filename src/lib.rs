//! # floem-tint
//!
//! A tint strip and shade square color picker for [Floem](https://github.com/lapce/floem).
//!
//! A trigger toggles a panel holding a pixel surface. The narrow strip on
//! the right picks a tint; the square on the left blends white→tint across
//! and fades to black downwards. Picked colors are read back from the
//! rendered pixels and reported as `#RRGGBB`.
//!
//! The picker itself is headless: [`ColorPicker`] drives any [`PickerHost`].
//! [`tint_picker`] hosts it in a Floem view tree.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_tint::{tint_picker, Rgb};
//!
//! let color = RwSignal::new(Rgb::WHITE);
//! // Use `tint_picker(color)?` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod geometry;
mod math;
mod picker;
mod raster;
mod render;
mod view;

pub use color::Rgb;
pub use config::{PickCallback, PickerConfig, PickerOptions};
pub use constants::{CURSOR_MARGIN, TOGGLED_CLASS};
pub use geometry::{compute_bounds, Bounds};
pub use math::{channel_to_hex, channels_to_hex, Channel};
pub use picker::{
    create_color_picker, ColorPicker, Element, PickerError, PickerHost, Selection, ToggleState,
};
pub use raster::{Canvas, LinearGradient, Paint, Rgba, SampleError};
pub use render::RenderSurface;

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker's trigger and panel with default options.
///
/// `color` is updated on every pick.
pub fn tint_picker(color: RwSignal<Rgb>) -> Result<impl IntoView, PickerError> {
    tint_picker_with(color, PickerOptions::new())
}

/// Creates the picker's trigger and panel.
///
/// `color` is updated on every pick before `options.on_pick` runs.
pub fn tint_picker_with(
    color: RwSignal<Rgb>,
    options: PickerOptions,
) -> Result<impl IntoView, PickerError> {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    view::tint_picker(color, options)
}
