//! Picker configuration.
//!
//! [`PickerOptions`] carries caller overrides; [`PickerConfig`] is the
//! immutable result of laying them over the defaults, key by key.

use std::fmt;

use crate::constants;

/// Callback receiving every picked color as `#RRGGBB`.
pub type PickCallback = Box<dyn FnMut(&str)>;

/// Partial configuration. Unset fields keep their defaults.
#[derive(Default)]
pub struct PickerOptions {
    pub on_pick: Option<PickCallback>,
    pub tint_strip_width: Option<f64>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pick(mut self, on_pick: impl FnMut(&str) + 'static) -> Self {
        self.on_pick = Some(Box::new(on_pick));
        self
    }

    pub fn tint_strip_width(mut self, width: f64) -> Self {
        self.tint_strip_width = Some(width);
        self
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("on_pick", &self.on_pick.is_some())
            .field("tint_strip_width", &self.tint_strip_width)
            .field("border_width", &self.border_width)
            .field("border_color", &self.border_color)
            .finish()
    }
}

/// Resolved picker configuration, fixed for the picker's lifetime.
///
/// Widths are stored as given; geometry sanitizes malformed values.
pub struct PickerConfig {
    on_pick: PickCallback,
    tint_strip_width: f64,
    border_width: f64,
    border_color: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            on_pick: Box::new(|_| {}),
            tint_strip_width: constants::TINT_STRIP_WIDTH,
            border_width: constants::BORDER_WIDTH,
            border_color: constants::BORDER_COLOR.to_string(),
        }
    }
}

impl PickerConfig {
    /// Merge caller overrides onto the defaults.
    pub fn from_options(options: PickerOptions) -> Self {
        let defaults = Self::default();
        Self {
            on_pick: options.on_pick.unwrap_or(defaults.on_pick),
            tint_strip_width: options
                .tint_strip_width
                .unwrap_or(defaults.tint_strip_width),
            border_width: options.border_width.unwrap_or(defaults.border_width),
            border_color: options.border_color.unwrap_or(defaults.border_color),
        }
    }

    pub fn tint_strip_width(&self) -> f64 {
        self.tint_strip_width
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub(crate) fn notify(&mut self, color: &str) {
        (self.on_pick)(color);
    }
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("tint_strip_width", &self.tint_strip_width)
            .field("border_width", &self.border_width)
            .field("border_color", &self.border_color)
            .finish_non_exhaustive()
    }
}
