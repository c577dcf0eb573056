//! Software pixel surface.
//!
//! An RGBA8 straight-alpha buffer with the handful of 2-D context operations
//! the picker needs: solid and linear-gradient rect fills, a horizontal line
//! stroke and a ring stroke, all composited source-over. Coverage is sampled
//! at pixel centres, so fills on integer rects are exact.

use floem::kurbo::{Point, Rect};
use thiserror::Error;

use crate::color::Rgb;

/// Errors produced when reading pixels back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The coordinate lies outside the surface.
    #[error("pixel ({x}, {y}) out of bounds for surface of size ({width}, {height})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Straight-alpha color with components in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        Self::new(
            c.r as f64 / 255.0,
            c.g as f64 / 255.0,
            c.b as f64 / 255.0,
            1.0,
        )
    }
}

/// Linear gradient between two points, with sorted color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    start: Point,
    end: Point,
    stops: Vec<(f64, Rgba)>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a stop at `offset` (clamped to 0.0–1.0). Stops stay sorted;
    /// equal offsets keep insertion order.
    pub fn add_stop(&mut self, offset: f64, color: impl Into<Rgba>) {
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, 1.0)
        };
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color.into()));
    }

    /// Builder form: spread `colors` evenly over 0.0–1.0.
    pub fn with_stops<C: Into<Rgba>>(mut self, colors: impl IntoIterator<Item = C>) -> Self {
        let colors: Vec<Rgba> = colors.into_iter().map(Into::into).collect();
        let last = colors.len().saturating_sub(1).max(1) as f64;
        for (i, c) in colors.into_iter().enumerate() {
            self.add_stop(i as f64 / last, c);
        }
        self
    }

    /// Color at `p`, projected onto the gradient axis.
    pub fn color_at(&self, p: Point) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::TRANSPARENT;
        };
        let axis = self.end - self.start;
        let len2 = axis.hypot2();
        if len2 == 0.0 {
            // Degenerate axis paints nothing, as a 2-D context does.
            return Rgba::TRANSPARENT;
        }
        let t = ((p - self.start).dot(axis) / len2).clamp(0.0, 1.0);
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        let hi = self.stops.partition_point(|(o, _)| *o <= t);
        let (o0, c0) = self.stops[hi - 1];
        let (o1, c1) = self.stops[hi];
        let span = o1 - o0;
        if span <= 0.0 {
            return c1;
        }
        lerp_premultiplied(c0, c1, (t - o0) / span)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate in premultiplied space so transparent stops don't tint.
fn lerp_premultiplied(c0: Rgba, c1: Rgba, t: f64) -> Rgba {
    let a = lerp(c0.a, c1.a, t);
    if a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    Rgba::new(
        lerp(c0.r * c0.a, c1.r * c1.a, t) / a,
        lerp(c0.g * c0.a, c1.g * c1.a, t) / a,
        lerp(c0.b * c0.a, c1.b * c1.a, t) / a,
        a,
    )
}

/// Fill style for rect fills.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Solid(Rgba),
    Linear(&'a LinearGradient),
}

impl Paint<'_> {
    fn color_at(&self, p: Point) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.color_at(p),
        }
    }
}

/// RGBA8 pixel buffer, row-major, straight alpha. Starts fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4], SampleError> {
        if x >= self.width || y >= self.height {
            return Err(SampleError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let offset = self.offset(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[offset..offset + 4]);
        Ok(px)
    }

    /// Fill every pixel whose centre lies inside `rect`.
    pub fn fill_rect(&mut self, rect: Rect, paint: Paint<'_>) {
        let (x0, x1) = self.span(rect.x0, rect.x1, self.width);
        let (y0, y1) = self.span(rect.y0, rect.y1, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let centre = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                self.blend(px, py, paint.color_at(centre), 1.0);
            }
        }
    }

    /// Stroke a horizontal line from `x0` to `x1` at `y` with the given width.
    pub fn stroke_hline(&mut self, x0: f64, x1: f64, y: f64, width: f64, color: Rgba) {
        let half = width / 2.0;
        let rect = Rect::new(x0.min(x1), y - half, x0.max(x1), y + half);
        self.fill_rect(rect, Paint::Solid(color));
    }

    /// Stroke a circle of `radius` around `center`, anti-aliased over one pixel.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgba) {
        let half = width / 2.0;
        let reach = radius + half + 1.0;
        let (x0, x1) = self.span(center.x - reach, center.x + reach, self.width);
        let (y0, y1) = self.span(center.y - reach, center.y + reach, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let d = Point::new(px as f64 + 0.5, py as f64 + 0.5).distance(center);
                let coverage = (half + 0.5 - (d - radius).abs()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }

    /// Pixel index range whose centres fall in `[lo, hi)`.
    fn span(&self, lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().max(0.0);
        if start >= end {
            return (0, 0);
        }
        let limit = limit as f64;
        (start.min(limit) as u32, end.min(limit) as u32)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Source-over composite of `src` scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, src: Rgba, coverage: f64) {
        let offset = self.offset(x, y);
        let dst = &mut self.pixels[offset..offset + 4];
        let sa = (src.a * coverage).clamp(0.0, 1.0);
        let da = dst[3] as f64 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            dst.copy_from_slice(&[0, 0, 0, 0]);
            return;
        }
        let channel = |s: f64, d: u8| {
            let d = d as f64 / 255.0;
            let v = (s * sa + d * da * (1.0 - sa)) / out_a;
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        let r = channel(src.r, dst[0]);
        let g = channel(src.g, dst[1]);
        let b = channel(src.b, dst[2]);
        dst[0] = r;
        dst[1] = g;
        dst[2] = b;
        dst[3] = (out_a * 255.0).round() as u8;
    }
}
