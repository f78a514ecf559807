//! # Raster Canvas
//!
//! A tiny immediate-mode rasteriser over an [`RgbaImage`].
//!
//! Coordinates are in pixels with `(0, 0)` at the top-left corner; a pixel is
//! addressed by its integer coordinate and every primitive writes opaque
//! colours directly, clipping anything outside the image.

use image::{Rgba, RgbaImage};
use std::ops::Range;

/// Fully transparent pixel, the canvas background.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Builds an opaque colour from a `0xRRGGBB` value.
pub const fn rgb(hex: u32) -> Rgba<u8> {
    Rgba([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, u8::MAX])
}

/// An axis-aligned bounding box, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Bounds {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Shrinks the box by `amount` on every side.
    pub fn inset(self, amount: f32) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    fn radii(&self) -> (f32, f32) {
        (
            ((self.x1 - self.x0) / 2.0).max(0.5),
            ((self.y1 - self.y0) / 2.0).max(0.5),
        )
    }
}

/// Drawing surface for procedural icons.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Gets the colour at a pixel, if it lies on the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Consumes the canvas, returning the drawn image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fills every pixel inside the inclusive rectangle.
    pub fn rectangle(&mut self, bounds: Bounds, color: Rgba<u8>) {
        for y in span(bounds.y0.ceil(), bounds.y1.floor(), self.height()) {
            for x in span(bounds.x0.ceil(), bounds.x1.floor(), self.width()) {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Draws a straight line of the given stroke width.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba<u8>, width: f32) {
        let half = width.max(1.0) / 2.0;
        let xs = span(
            (from.0.min(to.0) - half).floor(),
            (from.0.max(to.0) + half).ceil(),
            self.width(),
        );
        let ys = span(
            (from.1.min(to.1) - half).floor(),
            (from.1.max(to.1) + half).ceil(),
            self.height(),
        );

        for y in ys {
            for x in xs.clone() {
                if segment_distance((x as f32, y as f32), from, to) <= half {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Fills the ellipse inscribed in `bounds`.
    pub fn ellipse(&mut self, bounds: Bounds, color: Rgba<u8>) {
        self.fill_where(bounds, color, |_, _| true);
    }

    /// Draws the outline of the ellipse inscribed in `bounds`.
    pub fn ellipse_outline(&mut self, bounds: Bounds, color: Rgba<u8>, width: f32) {
        let inner = bounds.inset(width.max(1.0));
        self.fill_where(bounds, color, |x, y| !inside_ellipse(inner, x, y));
    }

    /// Draws part of an ellipse outline between two angles.
    ///
    /// Angles are in degrees, measured clockwise from the positive x axis.
    pub fn arc(&mut self, bounds: Bounds, start: f32, end: f32, color: Rgba<u8>, width: f32) {
        let inner = bounds.inset(width.max(1.0));
        let (cx, cy) = bounds.center();
        let (rx, ry) = bounds.radii();
        let from = start.rem_euclid(360.0);
        let sweep = end - start;

        self.fill_where(bounds, color, |x, y| {
            if inside_ellipse(inner, x, y) {
                return false;
            }
            if sweep >= 360.0 {
                return true;
            }
            let angle = ((y - cy) / ry).atan2((x - cx) / rx).to_degrees();
            (angle - from).rem_euclid(360.0) <= sweep
        });
    }

    /// Fills a polygon using the even-odd rule.
    pub fn polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        for y in span(min_y.floor(), max_y.ceil(), self.height()) {
            for x in span(min_x.floor(), max_x.ceil(), self.width()) {
                if inside_polygon(points, x as f32, y as f32) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Paints pixels inside the ellipse of `bounds` that also satisfy `keep`.
    fn fill_where<F>(&mut self, bounds: Bounds, color: Rgba<u8>, keep: F)
    where
        F: Fn(f32, f32) -> bool,
    {
        for y in span(bounds.y0.floor(), bounds.y1.ceil(), self.height()) {
            for x in span(bounds.x0.floor(), bounds.x1.ceil(), self.width()) {
                let (fx, fy) = (x as f32, y as f32);
                if inside_ellipse(bounds, fx, fy) && keep(fx, fy) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Pixel indices from `lo` to `hi` inclusive, clipped to `0..limit`.
fn span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = lo.max(0.0);
    let end = (hi + 1.0).min(limit as f32);
    if end <= start {
        0..0
    } else {
        start as u32..end as u32
    }
}

fn inside_ellipse(bounds: Bounds, x: f32, y: f32) -> bool {
    if bounds.x1 < bounds.x0 || bounds.y1 < bounds.y0 {
        return false;
    }
    let (cx, cy) = bounds.center();
    let (rx, ry) = bounds.radii();
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn inside_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut previous = points[points.len() - 1];
    for &current in points {
        let (x0, y0) = previous;
        let (x1, y1) = current;
        if (y0 > y) != (y1 > y) && x < (x1 - x0) * (y - y0) / (y1 - y0) + x0 {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

fn segment_distance(point: (f32, f32), from: (f32, f32), to: (f32, f32)) -> f32 {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((point.0 - from.0) * dx + (point.1 - from.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (px, py) = (from.0 + t * dx, from.1 + t * dy);
    ((point.0 - px).powi(2) + (point.1 - py).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = rgb(0xFF0000);

    fn painted(canvas: &Canvas) -> usize {
        canvas
            .clone()
            .into_image()
            .pixels()
            .filter(|p| **p != TRANSPARENT)
            .count()
    }

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(0xFFD700), Rgba([255, 215, 0, 255]));
        assert_eq!(rgb(0x8B4513), Rgba([139, 69, 19, 255]));
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(8, 4);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert_eq!(painted(&canvas), 0);
    }

    #[test]
    fn test_rectangle_is_inclusive_and_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.rectangle(Bounds::new(2.0, 2.0, 4.0, 3.0), RED);
        assert_eq!(painted(&canvas), 6);
        assert_eq!(canvas.pixel(4, 3), Some(RED));
        assert_eq!(canvas.pixel(5, 3), Some(TRANSPARENT));

        let mut canvas = Canvas::new(10, 10);
        canvas.rectangle(Bounds::new(-5.0, -5.0, 20.0, 20.0), RED);
        assert_eq!(painted(&canvas), 100);
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line((1.0, 5.0), (8.0, 5.0), RED, 1.0);
        assert_eq!(painted(&canvas), 8);
        assert_eq!(canvas.pixel(1, 5), Some(RED));
        assert_eq!(canvas.pixel(1, 4), Some(TRANSPARENT));
    }

    #[test]
    fn test_ellipse_and_outline() {
        let mut filled = Canvas::new(21, 21);
        filled.ellipse(Bounds::new(0.0, 0.0, 20.0, 20.0), RED);
        assert_eq!(filled.pixel(10, 10), Some(RED));
        assert_eq!(filled.pixel(0, 0), Some(TRANSPARENT));

        let mut ring = Canvas::new(21, 21);
        ring.ellipse_outline(Bounds::new(0.0, 0.0, 20.0, 20.0), RED, 2.0);
        assert_eq!(ring.pixel(10, 10), Some(TRANSPARENT));
        assert_eq!(ring.pixel(10, 0), Some(RED));
        assert!(painted(&ring) < painted(&filled));
    }

    #[test]
    fn test_arc_covers_only_its_angles() {
        let mut canvas = Canvas::new(21, 21);
        canvas.arc(Bounds::new(0.0, 0.0, 20.0, 20.0), 0.0, 180.0, RED, 2.0);
        // Clockwise from east with y pointing down: the lower half.
        assert_eq!(canvas.pixel(10, 20), Some(RED));
        assert_eq!(canvas.pixel(10, 0), Some(TRANSPARENT));

        let mut canvas = Canvas::new(21, 21);
        canvas.arc(Bounds::new(0.0, 0.0, 20.0, 20.0), -30.0, 30.0, RED, 2.0);
        assert_eq!(canvas.pixel(20, 10), Some(RED));
        assert_eq!(canvas.pixel(0, 10), Some(TRANSPARENT));
    }

    #[test]
    fn test_polygon() {
        let mut canvas = Canvas::new(10, 10);
        canvas.polygon(&[(1.0, 1.0), (8.0, 1.0), (8.0, 8.0), (1.0, 8.0)], RED);
        assert_eq!(canvas.pixel(4, 4), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(TRANSPARENT));

        let mut degenerate = Canvas::new(10, 10);
        degenerate.polygon(&[(1.0, 1.0), (8.0, 8.0)], RED);
        assert_eq!(painted(&degenerate), 0);
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut canvas = Canvas::new(0, 0);
        canvas.ellipse(Bounds::new(0.0, 0.0, 10.0, 10.0), RED);
        canvas.line((0.0, 0.0), (5.0, 5.0), RED, 3.0);
        assert_eq!(canvas.into_image().len(), 0);
    }
}
