//! Picker geometry: the tint strip and contrast square carved out of the
//! surface, plus every clamp that maps a pointer onto them.
//!
//! Layout, with `bw` the border width and `tsw` the strip width:
//!
//! ```text
//! | bw | contrast ... | bw | bw | tint (tsw) | bw |
//! ```

use floem::kurbo::{Point, Rect, Size};

use crate::constants;
use crate::math::clamp_span;

/// Regions derived from the surface size and border/strip widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Inner right edge, `width - border`.
    pub right: f64,
    /// Inner bottom edge, `height - border`.
    pub bottom: f64,
    pub tint: Rect,
    pub contrast: Rect,
    border_width: f64,
    surface: Size,
}

/// Widths that are negative or not finite count as zero.
fn sanitize(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Derive the picker regions for a surface.
///
/// Oversized borders or strips collapse a region to zero area instead of
/// producing negative dimensions; the tint strip never starts left of the
/// contrast square's right edge.
pub fn compute_bounds(surface: Size, border_width: f64, tint_strip_width: f64) -> Bounds {
    let w = sanitize(surface.width);
    let h = sanitize(surface.height);
    let bw = sanitize(border_width);
    let tsw = sanitize(tint_strip_width);

    let top = bw;
    let bottom_edge = (h - bw).max(top);

    let contrast_x0 = bw;
    let contrast_x1 = (w - 3.0 * bw - tsw).max(contrast_x0);

    let tint_x0 = (w - bw - tsw).max(contrast_x1);
    let tint_x1 = (w - bw).max(tint_x0);

    Bounds {
        right: w - bw,
        bottom: h - bw,
        tint: Rect::new(tint_x0, top, tint_x1, bottom_edge),
        contrast: Rect::new(contrast_x0, top, contrast_x1, bottom_edge),
        border_width: bw,
        surface: Size::new(w, h),
    }
}

impl Bounds {
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Whether a surface-local point lies inside the border frame.
    pub fn accepts(&self, p: Point) -> bool {
        let bw = self.border_width;
        p.x >= bw && p.x <= self.right && p.y >= bw && p.y <= self.bottom
    }

    /// Whether `x` falls in the tint strip's horizontal extent.
    pub fn in_tint_strip(&self, x: f64) -> bool {
        x >= self.tint.x0
    }

    /// Clamp a contrast cursor so its marker stays inside the contrast square.
    ///
    /// This is the only place the cursor span is computed.
    pub fn clamp_cursor(&self, p: Point) -> Point {
        let m = constants::CURSOR_MARGIN;
        let c = self.contrast;
        Point::new(
            clamp_span(p.x, c.x0 + m, c.x1 - m),
            clamp_span(p.y, c.y0 + m, c.y1 - m),
        )
    }

    /// Clamp a tint cursor offset into the strip's vertical extent.
    pub fn clamp_tint_y(&self, y: f64) -> f64 {
        clamp_span(y, self.tint.y0, self.tint.y1)
    }

    /// Where the first tint is picked: the centre of the strip.
    pub fn tint_anchor(&self) -> Point {
        self.tint.center()
    }

    /// Where the first contrast selection is made.
    pub fn contrast_anchor(&self) -> Point {
        Point::new(self.border_width, self.bottom)
    }

    /// Clamp `p` to an integer pixel inside `region`, then inside the surface.
    ///
    /// A zero-area region resolves to its origin pixel. Returns `None` only
    /// when the surface itself has no pixels.
    pub fn pixel_in(&self, region: Rect, p: Point) -> Option<(u32, u32)> {
        let w = self.surface.width.floor();
        let h = self.surface.height.floor();
        if w < 1.0 || h < 1.0 {
            return None;
        }
        let x = clamp_span(p.x, region.x0, (region.x1 - 1.0).max(region.x0));
        let y = clamp_span(p.y, region.y0, (region.y1 - 1.0).max(region.y0));
        let x = x.floor().max(0.0).min(w - 1.0);
        let y = y.floor().max(0.0).min(h - 1.0);
        Some((x as u32, y as u32))
    }
}
