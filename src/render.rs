//! Picker surface rendering.
//!
//! Paints the tint strip, the contrast square and both cursors onto a
//! [`Canvas`]. Colors are never computed analytically: a selection reads the
//! rendered pixel back, so the stop lists and overlay order below decide
//! which colors the picker can produce.

use floem::kurbo::{Point, Rect, Size};

use crate::color::Rgb;
use crate::constants;
use crate::raster::{Canvas, LinearGradient, Paint, Rgba, SampleError};

/// Owns the picker's pixel surface.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    canvas: Canvas,
}

/// Whole pixels covered by a layout size.
fn pixel_dims(size: Size) -> (u32, u32) {
    let dim = |v: f64| {
        if v.is_finite() && v > 0.0 {
            v.floor().min(u32::MAX as f64) as u32
        } else {
            0
        }
    };
    (dim(size.width), dim(size.height))
}

impl RenderSurface {
    pub fn new(size: Size) -> Self {
        let (w, h) = pixel_dims(size);
        Self {
            canvas: Canvas::new(w, h),
        }
    }

    /// Reallocate the surface. Previous content is discarded.
    pub fn resize(&mut self, size: Size) {
        let (w, h) = pixel_dims(size);
        self.canvas = Canvas::new(w, h);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Size in whole pixels.
    pub fn size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    /// Fill the whole surface with the frame color; regions are painted over it.
    pub fn draw_frame(&mut self, border_color: Rgb) {
        let full = Rect::from_origin_size(Point::ZERO, self.size());
        self.canvas.fill_rect(full, Paint::Solid(border_color.into()));
    }

    /// Vertical hue gradient down the strip.
    pub fn draw_tint_strip(&mut self, tint: Rect) {
        let gradient =
            LinearGradient::new(Point::new(tint.x0, tint.y0), Point::new(tint.x0, tint.y1))
                .with_stops(constants::TINT_STOPS);
        self.canvas.fill_rect(tint, Paint::Linear(&gradient));
    }

    /// White→tint across, then transparent→black down. Order matters: the
    /// black overlay must land on top of the hue blend.
    pub fn draw_contrast_square(&mut self, contrast: Rect, tint: Rgb) {
        let across = LinearGradient::new(
            Point::new(contrast.x0, contrast.y0),
            Point::new(contrast.x1, contrast.y0),
        )
        .with_stops([Rgba::WHITE, tint.into()]);
        self.canvas.fill_rect(contrast, Paint::Linear(&across));

        let down = LinearGradient::new(
            Point::new(contrast.x0, contrast.y0),
            Point::new(contrast.x0, contrast.y1),
        )
        .with_stops([Rgba::TRANSPARENT, Rgba::BLACK]);
        self.canvas.fill_rect(contrast, Paint::Linear(&down));
    }

    /// Read the color of a single pixel; alpha is ignored.
    pub fn sample_color_at(&self, x: u32, y: u32) -> Result<Rgb, SampleError> {
        self.canvas.pixel(x, y).map(Rgb::from)
    }

    /// Horizontal marker across the tint strip at offset `y`.
    pub fn draw_tint_cursor_at(&mut self, tint: Rect, y: f64) {
        self.canvas.stroke_hline(
            tint.x0,
            tint.x1,
            y,
            constants::TINT_CURSOR_STROKE,
            Rgba::WHITE,
        );
    }

    /// Ring marker centred on `p`.
    pub fn draw_contrast_cursor_at(&mut self, p: Point) {
        self.canvas.stroke_circle(
            p,
            constants::CURSOR_RADIUS,
            constants::CURSOR_STROKE,
            Rgba::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_bounds;

    fn surface() -> (RenderSurface, crate::geometry::Bounds) {
        let size = Size::new(200.0, 150.0);
        (RenderSurface::new(size), compute_bounds(size, 5.0, 30.0))
    }

    #[test]
    fn frame_fills_everything() {
        let (mut s, _) = surface();
        s.draw_frame(Rgb::BLACK);
        assert_eq!(s.canvas().pixel(0, 0), Ok([0, 0, 0, 255]));
        assert_eq!(s.canvas().pixel(199, 149), Ok([0, 0, 0, 255]));
    }

    #[test]
    fn tint_strip_runs_through_the_hue_stops() {
        let (mut s, b) = surface();
        s.draw_tint_strip(b.tint);
        // First and last rows sit next to the red stops.
        let top = s.sample_color_at(170, 5).unwrap();
        let bottom = s.sample_color_at(170, 144).unwrap();
        assert_eq!(top.r, 255);
        assert_eq!(bottom.r, 255);
        assert!(top.g == 0 && top.b < 8);
        // Row 75 is just past the cyan stop at the midpoint.
        let mid = s.sample_color_at(180, 75).unwrap();
        assert_eq!(mid.r, 0);
        assert!(mid.g > 240 && mid.b > 240);
        // Row 28: centre 28.5 is t ≈ 0.168, right at magenta.
        let magenta = s.sample_color_at(170, 28).unwrap();
        assert!(magenta.r > 250 && magenta.b > 250 && magenta.g < 5);
    }

    #[test]
    fn strip_paints_nothing_outside_its_rect() {
        let (mut s, b) = surface();
        s.draw_tint_strip(b.tint);
        assert_eq!(s.canvas().pixel(164, 50), Ok([0, 0, 0, 0]));
        assert_eq!(s.canvas().pixel(195, 50), Ok([0, 0, 0, 0]));
    }

    #[test]
    fn contrast_square_is_white_top_left_and_dark_at_bottom() {
        let (mut s, b) = surface();
        s.draw_contrast_square(b.contrast, Rgb::new(255, 0, 0));
        let top_left = s.sample_color_at(5, 5).unwrap();
        assert!(top_left.r >= 253 && top_left.g >= 250 && top_left.b >= 250);
        let top_right = s.sample_color_at(154, 5).unwrap();
        assert!(top_right.r >= 250 && top_right.g < 5 && top_right.b < 5);
        let bottom = s.sample_color_at(80, 144).unwrap();
        assert!(bottom.r < 3 && bottom.g < 3 && bottom.b < 3);
    }

    #[test]
    fn contrast_square_is_fully_opaque() {
        let (mut s, b) = surface();
        s.draw_contrast_square(b.contrast, Rgb::new(0, 0, 255));
        assert_eq!(s.canvas().pixel(100, 100).unwrap()[3], 255);
    }

    #[test]
    fn drawing_is_deterministic() {
        let (mut a, b) = surface();
        let (mut c, _) = surface();
        for s in [&mut a, &mut c] {
            s.draw_frame(Rgb::BLACK);
            s.draw_tint_strip(b.tint);
            s.draw_contrast_square(b.contrast, Rgb::new(10, 200, 30));
        }
        assert_eq!(a.canvas(), c.canvas());
    }

    #[test]
    fn sampling_outside_fails() {
        let (s, _) = surface();
        assert!(matches!(
            s.sample_color_at(200, 0),
            Err(SampleError::OutOfBounds { width: 200, .. })
        ));
    }

    #[test]
    fn fractional_sizes_floor() {
        let s = RenderSurface::new(Size::new(10.9, f64::NAN));
        assert_eq!(s.size(), Size::new(10.0, 0.0));
    }
}
