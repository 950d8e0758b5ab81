//! The off-screen pixel buffer and its software rasterizer.
//!
//! A [`Pixmap`] is plain memory: a `width * height` grid of `0x00RR_GGBB`
//! pixels. All shape drawing happens here, clipped per pixel to the buffer
//! bounds, so the whole rasterizer is testable without a window. The canvas
//! owns one and blits it to the visible surface on present.

use crate::units::{Color, Recti, Vec2i};

/// Which parts of a shape get rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Fill,
    Stroke,
    Both,
}

impl Mode {
    fn has_fill(self) -> bool {
        matches!(self, Self::Fill | Self::Both)
    }

    fn has_stroke(self) -> bool {
        matches!(self, Self::Stroke | Self::Both)
    }
}

/// Fill and stroke settings for one shape call.
///
/// Replaces per-shape parameter permutations with a single argument; the
/// constructors cover the three common cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub mode: Mode,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: i32,
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Self {
            mode: Mode::Fill,
            fill: color,
            stroke: Color::BLACK,
            stroke_width: 1,
        }
    }

    pub fn stroke(color: Color, width: i32) -> Self {
        Self {
            mode: Mode::Stroke,
            fill: Color::BLACK,
            stroke: color,
            stroke_width: width,
        }
    }

    pub fn fill_stroke(fill: Color, stroke: Color, width: i32) -> Self {
        Self {
            mode: Mode::Both,
            fill,
            stroke,
            stroke_width: width,
        }
    }
}

pub struct Pixmap {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl Pixmap {
    /// Allocates a black buffer of the given size. Negative dimensions
    /// collapse to zero.
    pub fn new(size: Vec2i) -> Self {
        let width = size.x.max(0);
        let height = size.y.max(0);
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vec2i {
        Vec2i::new(self.width, self.height)
    }

    /// The packed pixel rows, top to bottom.
    pub fn data(&self) -> &[u32] {
        &self.pixels
    }

    /// The color at `p`, or `None` outside the buffer.
    pub fn pixel_at(&self, p: Vec2i) -> Option<Color> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(Color::from_pixel(self.pixels[(p.y * self.width + p.x) as usize]))
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    pub fn set_pixel(&mut self, p: Vec2i, color: Color) {
        self.put(p.x, p.y, color.to_pixel());
    }

    fn put(&mut self, x: i32, y: i32, pixel: u32) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = pixel;
        }
    }

    /// Bresenham line from `a` to `b`, stamped `width` pixels thick.
    pub fn line(&mut self, a: Vec2i, b: Vec2i, color: Color, width: i32) {
        let pixel = color.to_pixel();
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (a.x, a.y);

        loop {
            self.stamp(x, y, width, pixel);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stamp(&mut self, x: i32, y: i32, width: i32, pixel: u32) {
        if width <= 1 {
            self.put(x, y, pixel);
            return;
        }
        let half = width / 2;
        for oy in 0..width {
            for ox in 0..width {
                self.put(x + ox - half, y + oy - half, pixel);
            }
        }
    }

    /// Draws a rectangle. In [`Mode::Both`] the fill lands first and the
    /// stroke second, so the outline stays visible on the boundary.
    pub fn rect(&mut self, rect: Recti, style: Style) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        if style.mode.has_fill() {
            self.fill_rect_area(rect, style.fill);
        }
        if style.mode.has_stroke() {
            self.stroke_rect_area(rect, style.stroke, style.stroke_width);
        }
    }

    fn fill_rect_area(&mut self, rect: Recti, color: Color) {
        let pixel = color.to_pixel();
        let x0 = rect.x.clamp(0, self.width);
        let y0 = rect.y.clamp(0, self.height);
        let x1 = (rect.x + rect.w).clamp(0, self.width);
        let y1 = (rect.y + rect.h).clamp(0, self.height);
        if x1 <= x0 {
            return;
        }
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(pixel);
        }
    }

    fn stroke_rect_area(&mut self, rect: Recti, color: Color, width: i32) {
        let pixel = color.to_pixel();
        // Concentric one-pixel rings growing inward from the rect bounds.
        for i in 0..width.max(1) {
            let ring = Recti::new(rect.x + i, rect.y + i, rect.w - 2 * i, rect.h - 2 * i);
            if ring.w <= 0 || ring.h <= 0 {
                break;
            }
            for x in ring.x..ring.x + ring.w {
                self.put(x, ring.y, pixel);
                self.put(x, ring.y + ring.h - 1, pixel);
            }
            for y in ring.y..ring.y + ring.h {
                self.put(ring.x, y, pixel);
                self.put(ring.x + ring.w - 1, y, pixel);
            }
        }
    }

    pub fn circle(&mut self, center: Vec2i, radius: i32, style: Style) {
        self.ellipse(center, Vec2i::splat(radius), style);
    }

    /// Draws an axis-aligned ellipse spanning `center - radii` to
    /// `center + radii` on both axes.
    pub fn ellipse(&mut self, center: Vec2i, radii: Vec2i, style: Style) {
        if radii.x <= 0 || radii.y <= 0 {
            return;
        }
        if style.mode.has_fill() {
            self.fill_ellipse_area(center, radii, style.fill);
        }
        if style.mode.has_stroke() {
            self.stroke_ellipse_area(center, radii, style.stroke, style.stroke_width);
        }
    }

    fn fill_ellipse_area(&mut self, center: Vec2i, radii: Vec2i, color: Color) {
        let pixel = color.to_pixel();
        let (rx, ry) = (radii.x as f32, radii.y as f32);
        for dy in -radii.y..=radii.y {
            for dx in -radii.x..=radii.x {
                let nx = dx as f32 / rx;
                let ny = dy as f32 / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.put(center.x + dx, center.y + dy, pixel);
                }
            }
        }
    }

    fn stroke_ellipse_area(&mut self, center: Vec2i, radii: Vec2i, color: Color, width: i32) {
        let pixel = color.to_pixel();
        let (rx, ry) = (radii.x as f32, radii.y as f32);
        let inner = radii - width.max(1);
        let (irx, iry) = (inner.x as f32, inner.y as f32);
        for dy in -radii.y..=radii.y {
            for dx in -radii.x..=radii.x {
                let (fx, fy) = (dx as f32, dy as f32);
                let outer = (fx / rx).powi(2) + (fy / ry).powi(2);
                if outer > 1.0 {
                    continue;
                }
                let in_hole = inner.x > 0
                    && inner.y > 0
                    && (fx / irx).powi(2) + (fy / iry).powi(2) <= 1.0;
                if !in_hole {
                    self.put(center.x + dx, center.y + dy, pixel);
                }
            }
        }
    }

    /// Draws a polygon over an ordered vertex list. The outline closes the
    /// ring back to the first vertex; the fill uses even-odd scanlines.
    pub fn polygon(&mut self, points: &[Vec2i], style: Style) {
        if style.mode.has_fill() && points.len() >= 3 {
            self.fill_polygon_area(points, style.fill);
        }
        if style.mode.has_stroke() && points.len() >= 2 {
            for i in 0..points.len() {
                let next = points[(i + 1) % points.len()];
                self.line(points[i], next, style.stroke, style.stroke_width);
            }
        }
    }

    fn fill_polygon_area(&mut self, points: &[Vec2i], color: Color) {
        let pixel = color.to_pixel();
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(-1)
            .min(self.height - 1);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            // Sample at the scanline center so vertices on the line do not
            // double-count.
            let yc = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let p = points[i].as_vec2f();
                let q = points[(i + 1) % points.len()].as_vec2f();
                if (p.y <= yc && q.y > yc) || (q.y <= yc && p.y > yc) {
                    let t = (yc - p.y) / (q.y - p.y);
                    crossings.push(p.x + t * (q.x - p.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let x0 = pair[0].ceil() as i32;
                let x1 = pair[1].ceil() as i32;
                for x in x0..x1 {
                    self.put(x, y, pixel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pm(w: i32, h: i32) -> Pixmap {
        Pixmap::new(Vec2i::new(w, h))
    }

    #[test]
    fn new_buffer_is_black_and_sized() {
        let p = pm(4, 3);
        assert_eq!(p.size(), Vec2i::new(4, 3));
        assert_eq!(p.data().len(), 12);
        assert!(p.data().iter().all(|&px| px == 0));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut p = pm(3, 3);
        p.clear(Color::RED);
        assert!(p.data().iter().all(|&px| px == Color::RED.to_pixel()));
    }

    #[test]
    fn out_of_bounds_drawing_is_discarded() {
        let mut p = pm(2, 2);
        p.set_pixel(Vec2i::new(-1, 0), Color::WHITE);
        p.set_pixel(Vec2i::new(5, 5), Color::WHITE);
        p.rect(Recti::new(-10, -10, 100, 100), Style::fill(Color::GREEN));
        p.circle(Vec2i::new(50, 50), 100, Style::stroke(Color::WHITE, 3));
        assert_eq!(p.pixel_at(Vec2i::new(0, 0)), Some(Color::GREEN));
        assert_eq!(p.pixel_at(Vec2i::new(5, 5)), None);
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut p = pm(10, 10);
        p.line(Vec2i::new(1, 1), Vec2i::new(8, 5), Color::WHITE, 1);
        assert_eq!(p.pixel_at(Vec2i::new(1, 1)), Some(Color::WHITE));
        assert_eq!(p.pixel_at(Vec2i::new(8, 5)), Some(Color::WHITE));
    }

    #[test]
    fn thick_line_stamps_around_the_path() {
        let mut p = pm(10, 10);
        p.line(Vec2i::new(5, 2), Vec2i::new(5, 7), Color::WHITE, 3);
        assert_eq!(p.pixel_at(Vec2i::new(4, 4)), Some(Color::WHITE));
        assert_eq!(p.pixel_at(Vec2i::new(6, 4)), Some(Color::WHITE));
    }

    #[test]
    fn rect_stroke_stays_on_top_of_fill() {
        let mut p = pm(20, 20);
        let rect = Recti::new(2, 2, 10, 8);
        p.rect(rect, Style::fill_stroke(Color::BLUE, Color::YELLOW, 1));

        // Boundary pixels keep the stroke color, the interior the fill color.
        assert_eq!(p.pixel_at(Vec2i::new(2, 2)), Some(Color::YELLOW));
        assert_eq!(p.pixel_at(Vec2i::new(11, 9)), Some(Color::YELLOW));
        assert_eq!(p.pixel_at(Vec2i::new(6, 5)), Some(Color::BLUE));
        // One past the rect is untouched.
        assert_eq!(p.pixel_at(Vec2i::new(12, 2)), Some(Color::BLACK));
    }

    #[test]
    fn rect_stroke_width_grows_inward() {
        let mut p = pm(20, 20);
        p.rect(Recti::new(0, 0, 12, 12), Style::stroke(Color::WHITE, 3));
        assert_eq!(p.pixel_at(Vec2i::new(2, 6)), Some(Color::WHITE));
        assert_eq!(p.pixel_at(Vec2i::new(3, 6)), Some(Color::BLACK));
        assert_eq!(p.pixel_at(Vec2i::new(6, 6)), Some(Color::BLACK));
    }

    #[test]
    fn circle_stroke_sits_at_center_plus_minus_radius_on_both_axes() {
        let mut p = pm(40, 40);
        let center = Vec2i::new(20, 17);
        p.circle(center, 9, Style::fill_stroke(Color::RED, Color::WHITE, 1));

        for probe in [
            Vec2i::new(center.x + 9, center.y),
            Vec2i::new(center.x - 9, center.y),
            Vec2i::new(center.x, center.y + 9),
            Vec2i::new(center.x, center.y - 9),
        ] {
            assert_eq!(p.pixel_at(probe), Some(Color::WHITE));
        }
        assert_eq!(p.pixel_at(center), Some(Color::RED));
        assert_eq!(p.pixel_at(Vec2i::new(center.x + 10, center.y)), Some(Color::BLACK));
    }

    #[test]
    fn ellipse_respects_independent_radii() {
        let mut p = pm(40, 40);
        let center = Vec2i::new(20, 20);
        p.ellipse(center, Vec2i::new(12, 5), Style::fill(Color::CYAN));
        assert_eq!(p.pixel_at(Vec2i::new(center.x + 12, center.y)), Some(Color::CYAN));
        assert_eq!(p.pixel_at(Vec2i::new(center.x, center.y + 5)), Some(Color::CYAN));
        assert_eq!(p.pixel_at(Vec2i::new(center.x, center.y + 6)), Some(Color::BLACK));
        assert_eq!(p.pixel_at(Vec2i::new(center.x + 12, center.y + 5)), Some(Color::BLACK));
    }

    #[test]
    fn degenerate_shapes_draw_nothing() {
        let mut p = pm(8, 8);
        p.rect(Recti::new(2, 2, 0, 5), Style::fill(Color::WHITE));
        p.circle(Vec2i::new(4, 4), 0, Style::fill(Color::WHITE));
        p.polygon(&[Vec2i::new(1, 1)], Style::fill_stroke(Color::WHITE, Color::WHITE, 1));
        assert!(p.data().iter().all(|&px| px == 0));
    }

    #[test]
    fn polygon_fill_covers_the_interior_only() {
        let mut p = pm(30, 30);
        let triangle = [Vec2i::new(5, 5), Vec2i::new(25, 5), Vec2i::new(5, 25)];
        p.polygon(&triangle, Style::fill(Color::GREEN));

        assert_eq!(p.pixel_at(Vec2i::new(8, 8)), Some(Color::GREEN));
        // Beyond the hypotenuse.
        assert_eq!(p.pixel_at(Vec2i::new(24, 24)), Some(Color::BLACK));
    }

    #[test]
    fn polygon_outline_closes_the_ring() {
        let mut p = pm(30, 30);
        let square = [
            Vec2i::new(4, 4),
            Vec2i::new(20, 4),
            Vec2i::new(20, 20),
            Vec2i::new(4, 20),
        ];
        p.polygon(&square, Style::stroke(Color::WHITE, 1));
        // A point on the closing edge from the last vertex back to the first.
        assert_eq!(p.pixel_at(Vec2i::new(4, 12)), Some(Color::WHITE));
        assert_eq!(p.pixel_at(Vec2i::new(12, 12)), Some(Color::BLACK));
    }
}
