//! Picker controller: toggling, pointer routing and selection state.
//!
//! The controller is written against [`PickerHost`], the host's side of the
//! widget (element offsets, layout size, presentation state and listener
//! registration). Every selection samples the surface after repainting the
//! region it reads, so a cursor marker is never picked up as a color.

use floem::kurbo::{Point, Rect, Size};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::color::Rgb;
use crate::config::{PickerConfig, PickerOptions};
use crate::geometry::{self, Bounds};
use crate::raster::SampleError;
use crate::render::RenderSurface;

/// Errors produced by picker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The picker was destroyed; no further operations are valid.
    #[error("color picker has been destroyed")]
    Destroyed,

    /// Reading the surface back failed.
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// The two host elements whose presentation follows the toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Trigger,
    Panel,
}

/// Panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded,
}

/// How a click was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Collapsed panel, or a point on the border frame.
    Ignored,
    Tint,
    Contrast,
}

/// Host capabilities the picker relies on.
pub trait PickerHost {
    /// Page position of the surface's top-left corner.
    fn panel_offset(&self) -> Point;

    /// Layout size of the element containing the surface.
    fn surface_size(&self) -> Size;

    /// Show the expanded or collapsed presentation of `element`.
    fn set_presentation_state(&mut self, element: Element, expanded: bool);

    fn attach_listeners(&mut self) {}

    fn detach_listeners(&mut self) {}
}

/// Headless tint/shade color picker.
pub struct ColorPicker<H: PickerHost> {
    host: H,
    config: PickerConfig,
    border_color: Rgb,
    bounds: Bounds,
    surface: RenderSurface,
    state: ToggleState,
    tint: Rgb,
    color: Rgb,
    cursor: Point,
    tint_cursor_y: f64,
    destroyed: bool,
}

/// Build a picker for `host`, render it and register its listeners.
///
/// The initial selection fires `on_pick` once.
pub fn create_color_picker<H: PickerHost>(
    host: H,
    options: PickerOptions,
) -> Result<ColorPicker<H>, PickerError> {
    ColorPicker::new(host, options)
}

impl<H: PickerHost> ColorPicker<H> {
    pub fn new(host: H, options: PickerOptions) -> Result<Self, PickerError> {
        let config = PickerConfig::from_options(options);
        let border_color = Rgb::from_css(config.border_color()).unwrap_or_else(|| {
            warn!(
                border_color = config.border_color(),
                "unrecognized border color, using black"
            );
            Rgb::BLACK
        });

        let size = host.surface_size();
        let surface = RenderSurface::new(size);
        let bounds = geometry::compute_bounds(
            surface.size(),
            config.border_width(),
            config.tint_strip_width(),
        );
        let cursor = bounds.clamp_cursor(bounds.contrast_anchor());

        let mut picker = Self {
            host,
            config,
            border_color,
            bounds,
            surface,
            state: ToggleState::Collapsed,
            tint: Rgb::BLACK,
            color: Rgb::BLACK,
            cursor,
            tint_cursor_y: bounds.tint.center().y,
            destroyed: false,
        };

        picker.surface.draw_frame(border_color);
        picker.surface.draw_tint_strip(bounds.tint);
        picker.apply_tint(bounds.tint_anchor())?;
        picker.apply_contrast(bounds.contrast_anchor())?;
        picker.host.attach_listeners();

        debug!(
            width = size.width,
            height = size.height,
            tint = %picker.tint,
            color = %picker.color,
            "color picker created"
        );
        Ok(picker)
    }

    /// Flip between collapsed and expanded, updating both host elements.
    pub fn toggle(&mut self) -> Result<ToggleState, PickerError> {
        self.ensure_live()?;
        self.state = match self.state {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        };
        let expanded = self.is_expanded();
        self.host.set_presentation_state(Element::Trigger, expanded);
        self.host.set_presentation_state(Element::Panel, expanded);
        debug!(expanded, "color picker toggled");
        Ok(self.state)
    }

    /// Route a click at page position `page` to a tint or contrast selection.
    pub fn handle_click(&mut self, page: Point) -> Result<Selection, PickerError> {
        self.ensure_live()?;
        let offset = self.host.panel_offset();
        let local = Point::new(page.x - offset.x, page.y - offset.y);

        if !self.is_expanded() {
            trace!(x = local.x, y = local.y, "click ignored, panel collapsed");
            return Ok(Selection::Ignored);
        }
        if !self.bounds.accepts(local) {
            trace!(x = local.x, y = local.y, "click ignored, outside bounds");
            return Ok(Selection::Ignored);
        }

        if self.bounds.in_tint_strip(local.x) {
            self.select_tint(local)?;
            Ok(Selection::Tint)
        } else {
            self.select_contrast(local)?;
            Ok(Selection::Contrast)
        }
    }

    /// Pick a tint at surface point `p`, then re-pick the color at the
    /// current cursor so it follows the new tint.
    pub fn select_tint(&mut self, p: Point) -> Result<(), PickerError> {
        self.ensure_live()?;
        self.apply_tint(p)?;
        self.apply_contrast(self.cursor)
    }

    /// Pick the final color at surface point `p` and notify `on_pick`.
    pub fn select_contrast(&mut self, p: Point) -> Result<(), PickerError> {
        self.ensure_live()?;
        self.apply_contrast(p)
    }

    /// Recompute bounds for a new surface size and repaint.
    ///
    /// The tint is kept; the cursors are re-clamped and the color is re-picked.
    pub fn resize(&mut self, size: Size) -> Result<(), PickerError> {
        self.ensure_live()?;
        self.surface.resize(size);
        self.bounds = geometry::compute_bounds(
            self.surface.size(),
            self.config.border_width(),
            self.config.tint_strip_width(),
        );
        debug!(
            width = self.bounds.surface().width,
            height = self.bounds.surface().height,
            "color picker resized"
        );

        self.surface.draw_frame(self.border_color);
        self.surface.draw_tint_strip(self.bounds.tint);
        self.tint_cursor_y = self.bounds.clamp_tint_y(self.tint_cursor_y);
        self.surface.draw_tint_cursor_at(self.bounds.tint, self.tint_cursor_y);
        self.apply_contrast(self.bounds.clamp_cursor(self.cursor))
    }

    /// Detach listeners. The picker is unusable afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.host.detach_listeners();
        self.destroyed = true;
        debug!("color picker destroyed");
    }

    pub fn tint(&self) -> Rgb {
        self.tint
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Current contrast cursor, always inside the contrast square.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn tint_cursor_y(&self) -> f64 {
        self.tint_cursor_y
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == ToggleState::Expanded
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn ensure_live(&self) -> Result<(), PickerError> {
        if self.destroyed {
            return Err(PickerError::Destroyed);
        }
        Ok(())
    }

    fn apply_tint(&mut self, p: Point) -> Result<(), PickerError> {
        let strip = self.bounds.tint;
        // Repaint first: the previous tint cursor may cover `p`.
        self.surface.draw_tint_strip(strip);
        self.tint = self.sample_in(strip, p)?;
        self.surface.draw_contrast_square(self.bounds.contrast, self.tint);
        self.tint_cursor_y = self.bounds.clamp_tint_y(p.y);
        self.surface.draw_tint_cursor_at(strip, self.tint_cursor_y);
        debug!(tint = %self.tint, y = self.tint_cursor_y, "tint selected");
        Ok(())
    }

    fn apply_contrast(&mut self, p: Point) -> Result<(), PickerError> {
        let square = self.bounds.contrast;
        // Repaint first: this also clears the previous cursor ring.
        self.surface.draw_contrast_square(square, self.tint);
        self.color = self.sample_in(square, p)?;
        let hex = self.color.to_string();
        self.config.notify(&hex);
        self.cursor = self.bounds.clamp_cursor(p);
        self.surface.draw_contrast_cursor_at(self.cursor);
        debug!(color = %hex, x = self.cursor.x, y = self.cursor.y, "color selected");
        Ok(())
    }

    /// Sample the pixel at `p` clamped into `region`.
    ///
    /// An empty surface has nothing to read and yields black, which is what
    /// reading a cleared pixel would give.
    fn sample_in(&self, region: Rect, p: Point) -> Result<Rgb, PickerError> {
        match self.bounds.pixel_in(region, p) {
            Some((x, y)) => Ok(self.surface.sample_color_at(x, y)?),
            None => Ok(Rgb::BLACK),
        }
    }
}

impl<H: PickerHost> Drop for ColorPicker<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
