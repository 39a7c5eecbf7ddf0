//! Shape descriptors and their rasterizers
//!
//! All coordinates are integer pixel positions with the origin in the top-left
//! corner of the canvas. Every rasterizer validates the shape against the
//! canvas it draws to, and either draws the whole shape or leaves the canvas
//! untouched and returns an error.
use crate::{Canvas, Color, RasterError};
use std::fmt;

/// Common interface to all shapes that can be drawn on a canvas
pub trait Rasterize: fmt::Debug {
    /// Name of the shape used in diagnostics
    fn name(&self) -> &'static str;

    /// Draw shape on the canvas, later draws overwrite earlier ones
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError>;
}

impl<R: Rasterize + ?Sized> Rasterize for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        (**self).draw(canvas)
    }
}

impl<R: Rasterize + ?Sized> Rasterize for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        (**self).draw(canvas)
    }
}

/// Signed canvas extent `(width, height)`
#[inline]
fn extent(canvas: &Canvas) -> (i64, i64) {
    (canvas.width() as i64, canvas.height() as i64)
}

/// Report and return rejection of the shape
fn reject<R: Rasterize + ?Sized>(shape: &R, error: RasterError) -> Result<(), RasterError> {
    tracing::warn!(shape = shape.name(), %error, "shape is not drawn");
    Err(error)
}

/// Axis aligned filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Row of the top-left corner
    pub top: i64,
    /// Column of the top-left corner
    pub left: i64,
    pub height: i64,
    pub width: i64,
    pub color: Color,
}

impl Rect {
    pub fn new(top: i64, left: i64, height: i64, width: i64, color: Color) -> Self {
        Self {
            top,
            left,
            height,
            width,
            color,
        }
    }
}

impl Rasterize for Rect {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        let (canvas_width, canvas_height) = extent(canvas);
        let Rect {
            top,
            left,
            height,
            width,
            color,
        } = *self;
        if top < 0
            || top > canvas_height
            || left < 0
            || left > canvas_width
            || left.saturating_add(width) > canvas_width
            || top.saturating_add(height) > canvas_height
        {
            return reject(self, RasterError::OutOfBounds { shape: self.name() });
        }
        if height < 0 || width < 0 {
            return reject(
                self,
                RasterError::InvalidGeometry {
                    shape: self.name(),
                    reason: "rectangle has negative size",
                },
            );
        }

        for row in top..top + height {
            for col in left..left + width {
                canvas[(row as usize, col as usize)] = color;
            }
        }
        tracing::debug!(top, left, height, width, %color, "drew a rectangle");
        Ok(())
    }
}

/// Filled circle (disc)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
    pub color: Color,
}

impl Circle {
    pub fn new(center_x: i64, center_y: i64, radius: i64, color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            color,
        }
    }
}

impl Rasterize for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        let (canvas_width, canvas_height) = extent(canvas);
        let Circle {
            center_x: cx,
            center_y: cy,
            radius,
            color,
        } = *self;
        if cx > canvas_width
            || cx < 0
            || cy > canvas_height
            || cy < 0
            || cy.saturating_add(radius) > canvas_height
            || cy.saturating_sub(radius) < 0
            || cx.saturating_add(radius) > canvas_width
            || cx.saturating_sub(radius) < 0
        {
            return reject(self, RasterError::OutOfBounds { shape: self.name() });
        }
        if radius < 0 {
            return reject(
                self,
                RasterError::InvalidGeometry {
                    shape: self.name(),
                    reason: "radius is negative",
                },
            );
        }

        // Bounding box may touch `width`/`height`, that single column/row is clipped.
        let radius_squared = radius * radius;
        for x in -radius..=radius {
            let col = cx + x;
            if col >= canvas_width {
                continue;
            }
            let y = ((radius_squared - x * x) as f64).sqrt() as i64;
            for row in (cy - y..=(cy + y).min(canvas_height - 1)).rev() {
                canvas[(row as usize, col as usize)] = color;
            }
        }
        tracing::debug!(cx, cy, radius, %color, "drew a circle");
        Ok(())
    }
}

/// Filled x-major ellipse with left-to-right color gradient
///
/// Columns are swept over `[-minor_axis, minor_axis]` around the center and the
/// gradient fraction advances by one step per column, so both the covered
/// columns and the colors depend on the minor axis. This sweep is kept as is
/// to reproduce reference images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientEllipse {
    pub center_x: i64,
    pub center_y: i64,
    /// Full width of the ellipse
    pub major_axis: i64,
    /// Full height of the ellipse, must not exceed `major_axis`
    pub minor_axis: i64,
    /// Color of the left edge
    pub color_start: Color,
    /// Color the gradient approaches on the right edge
    pub color_end: Color,
}

impl GradientEllipse {
    pub fn new(
        center_x: i64,
        center_y: i64,
        major_axis: i64,
        minor_axis: i64,
        color_start: Color,
        color_end: Color,
    ) -> Self {
        Self {
            center_x,
            center_y,
            major_axis,
            minor_axis,
            color_start,
            color_end,
        }
    }

    /// Half height of the column at offset `x` from the center
    ///
    /// Returns `None` if the column does not intersect the ellipse.
    fn half_height(&self, x: i64) -> Option<i64> {
        let half_major = self.major_axis / 2;
        let half_minor = self.minor_axis / 2;
        let radicand = (half_major + x) * (half_major - x);
        if half_major == 0 || radicand < 0 {
            return None;
        }
        let y = half_minor as f64 * (radicand as f64).sqrt() / half_major as f64;
        Some(y as f32 as i64)
    }

    /// Gradient fraction of the column with the provided sweep index
    fn fraction(&self, index: usize) -> f32 {
        if self.minor_axis == 0 {
            0.0
        } else {
            index as f32 / (self.minor_axis * 2) as f32
        }
    }
}

impl Rasterize for GradientEllipse {
    fn name(&self) -> &'static str {
        "ellipse"
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        let (canvas_width, canvas_height) = extent(canvas);
        let GradientEllipse {
            center_x: cx,
            center_y: cy,
            major_axis,
            minor_axis,
            color_start,
            color_end,
        } = *self;
        let (half_major, half_minor) = (major_axis / 2, minor_axis / 2);
        if cx > canvas_width
            || cx < 0
            || cy > canvas_height
            || cy < 0
            || cy.saturating_add(half_minor) > canvas_height
            || cy.saturating_sub(half_minor) < 0
            || cx.saturating_add(half_major) > canvas_width
            || cx.saturating_sub(half_major) < 0
        {
            return reject(self, RasterError::OutOfBounds { shape: self.name() });
        }
        if minor_axis > major_axis {
            return reject(
                self,
                RasterError::InvalidGeometry {
                    shape: self.name(),
                    reason: "minor axis is greater than the major axis",
                },
            );
        }
        if minor_axis < 0 {
            return reject(
                self,
                RasterError::InvalidGeometry {
                    shape: self.name(),
                    reason: "axis is negative",
                },
            );
        }

        for (index, x) in (-minor_axis..=minor_axis).enumerate() {
            let Some(y) = self.half_height(x) else {
                continue;
            };
            let color = color_start.lerp_trunc(color_end, self.fraction(index));
            let col = cx + x;
            for row in (cy - y..=cy + y).rev() {
                if canvas.contains(row, col) {
                    canvas[(row as usize, col as usize)] = color;
                }
            }
        }
        tracing::debug!(
            cx,
            cy,
            major_axis,
            minor_axis,
            %color_start,
            %color_end,
            "drew an ellipse"
        );
        Ok(())
    }
}

/// Draw a rectangle with the top-left corner at `(top, left)`
pub fn draw_rect(
    canvas: &mut Canvas,
    top: i64,
    left: i64,
    height: i64,
    width: i64,
    color: Color,
) -> Result<(), RasterError> {
    Rect::new(top, left, height, width, color).draw(canvas)
}

/// Draw a filled circle
pub fn draw_circle(
    canvas: &mut Canvas,
    center_x: i64,
    center_y: i64,
    radius: i64,
    color: Color,
) -> Result<(), RasterError> {
    Circle::new(center_x, center_y, radius, color).draw(canvas)
}

/// Draw a filled ellipse with horizontal color gradient
pub fn draw_gradient_ellipse(
    canvas: &mut Canvas,
    center_x: i64,
    center_y: i64,
    major_axis: i64,
    minor_axis: i64,
    color_start: Color,
    color_end: Color,
) -> Result<(), RasterError> {
    GradientEllipse::new(
        center_x,
        center_y,
        major_axis,
        minor_axis,
        color_start,
        color_end,
    )
    .draw(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Error = Box<dyn std::error::Error>;

    fn assert_disc(canvas: &Canvas, cx: i64, cy: i64, r: i64, color: Color) {
        for row in 0..canvas.height() {
            for col in 0..canvas.width() {
                let (dx, dy) = (col as i64 - cx, row as i64 - cy);
                let inside = dx * dx + dy * dy <= r * r;
                assert_eq!(
                    canvas[(row, col)] == color,
                    inside,
                    "pixel row={row} col={col}"
                );
            }
        }
    }

    #[test]
    fn test_rect() -> Result<(), Error> {
        let mut canvas = Canvas::new(60, 40)?;
        draw_rect(&mut canvas, 5, 10, 3, 4, Color::RED)?;
        for row in 0..40 {
            for col in 0..60 {
                let inside = (5..8).contains(&row) && (10..14).contains(&col);
                let expected = if inside { Color::RED } else { Color::BLACK };
                assert_eq!(canvas[(row, col)], expected, "pixel row={row} col={col}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_rect_full_width() -> Result<(), Error> {
        let mut canvas = Canvas::new(600, 400)?;
        draw_rect(&mut canvas, 380, 0, 10, 600, Color::RED)?;
        assert_eq!(canvas[(380, 0)], Color::RED);
        assert_eq!(canvas[(389, 599)], Color::RED);
        assert_eq!(canvas[(390, 0)], Color::BLACK);

        // touching the bottom edge is still inside
        draw_rect(&mut canvas, 390, 590, 10, 10, Color::WHITE)?;
        assert_eq!(canvas[(399, 599)], Color::WHITE);
        Ok(())
    }

    #[test]
    fn test_rect_idempotent() -> Result<(), Error> {
        let rect = Rect::new(2, 3, 10, 7, Color::new(1, 2, 3));
        let mut once = Canvas::new(20, 20)?;
        rect.draw(&mut once)?;
        let mut twice = once.clone();
        rect.draw(&mut twice)?;
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_rect_order() -> Result<(), Error> {
        let a = Rect::new(0, 0, 10, 10, Color::RED);
        let b = Rect::new(5, 5, 10, 10, Color::WHITE);

        let mut canvas = Canvas::new(20, 20)?;
        a.draw(&mut canvas)?;
        b.draw(&mut canvas)?;
        assert_eq!(canvas[(7, 7)], Color::WHITE);
        assert_eq!(canvas[(2, 2)], Color::RED);

        let mut canvas = Canvas::new(20, 20)?;
        b.draw(&mut canvas)?;
        a.draw(&mut canvas)?;
        assert_eq!(canvas[(7, 7)], Color::RED);
        assert_eq!(canvas[(12, 12)], Color::WHITE);
        Ok(())
    }

    #[test]
    fn test_rect_out_of_bounds() -> Result<(), Error> {
        let mut canvas = Canvas::new(60, 40)?;
        let reference = canvas.clone();
        for rect in [
            Rect::new(0, 50, 5, 11, Color::RED),
            Rect::new(35, 0, 6, 5, Color::RED),
            Rect::new(-1, 0, 5, 5, Color::RED),
            Rect::new(0, -1, 5, 5, Color::RED),
            Rect::new(41, 0, 0, 0, Color::RED),
            Rect::new(0, 0, 5, i64::MAX, Color::RED),
        ] {
            let result = rect.draw(&mut canvas);
            assert!(
                matches!(result, Err(RasterError::OutOfBounds { shape: "rectangle" })),
                "{rect:?}"
            );
        }
        assert_eq!(canvas, reference);

        // bounds follow the actual canvas size
        let mut canvas = Canvas::new(600, 400)?;
        assert!(draw_rect(&mut canvas, 0, 0, 10, 600, Color::RED).is_ok());
        let mut canvas = Canvas::new(100, 100)?;
        assert!(draw_rect(&mut canvas, 0, 0, 10, 600, Color::RED).is_err());
        Ok(())
    }

    #[test]
    fn test_rect_negative_size() -> Result<(), Error> {
        let mut canvas = Canvas::new(10, 10)?;
        let result = draw_rect(&mut canvas, 5, 5, -2, 3, Color::RED);
        assert!(matches!(result, Err(RasterError::InvalidGeometry { .. })));
        assert!(canvas.pixels().iter().all(|c| *c == Color::BLACK));
        Ok(())
    }

    #[test]
    fn test_circle_membership() -> Result<(), Error> {
        for (cx, cy, r) in [(200, 200, 40), (50, 60, 7), (300, 200, 1), (599, 399, 0)] {
            let mut canvas = Canvas::new(600, 400)?;
            draw_circle(&mut canvas, cx, cy, r, Color::WHITE)?;
            assert_disc(&canvas, cx, cy, r, Color::WHITE);
        }
        Ok(())
    }

    #[test]
    fn test_circle_zero_radius() -> Result<(), Error> {
        let mut canvas = Canvas::new(10, 10)?;
        draw_circle(&mut canvas, 4, 6, 0, Color::RED)?;
        let red: Vec<_> = canvas
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Color::RED)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(red, vec![6 * 10 + 4]);
        Ok(())
    }

    #[test]
    fn test_circle_touching_edges() -> Result<(), Error> {
        // bounding box reaches row 400 and columns 100..=500, row 400 is clipped
        let mut canvas = Canvas::new(600, 400)?;
        draw_circle(&mut canvas, 300, 200, 200, Color::new(255, 68, 25))?;
        assert_disc(&canvas, 300, 200, 200, Color::new(255, 68, 25));

        let mut canvas = Canvas::new(10, 10)?;
        draw_circle(&mut canvas, 5, 5, 5, Color::RED)?;
        assert_disc(&canvas, 5, 5, 5, Color::RED);
        Ok(())
    }

    #[test]
    fn test_circle_rejected() -> Result<(), Error> {
        let mut canvas = Canvas::new(600, 400)?;
        for circle in [
            Circle::new(30, 200, 31, Color::RED),
            Circle::new(580, 200, 21, Color::RED),
            Circle::new(300, 10, 11, Color::RED),
            Circle::new(300, 390, 11, Color::RED),
            Circle::new(601, 200, 0, Color::RED),
            Circle::new(-1, 200, 0, Color::RED),
            Circle::new(300, 200, i64::MAX, Color::RED),
        ] {
            let result = circle.draw(&mut canvas);
            assert!(
                matches!(result, Err(RasterError::OutOfBounds { shape: "circle" })),
                "{circle:?}"
            );
        }
        assert!(matches!(
            draw_circle(&mut canvas, 300, 200, -3, Color::RED),
            Err(RasterError::InvalidGeometry { .. })
        ));
        assert!(canvas.pixels().iter().all(|c| *c == Color::BLACK));
        Ok(())
    }

    #[test]
    fn test_ellipse_gradient() -> Result<(), Error> {
        let start = Color::new(255, 255, 100);
        let end = Color::new(255, 250, 150);
        let mut canvas = Canvas::new(600, 400)?;
        draw_gradient_ellipse(&mut canvas, 300, 200, 200, 200, start, end)?;

        // columns are swept over [-200, 200] but only [-100, 100] intersect the ellipse
        assert_eq!(canvas[(200, 199)], Color::BLACK);
        assert_eq!(canvas[(200, 401)], Color::BLACK);

        // leftmost column: sweep index 100 of 400
        let left = canvas[(200, 200)];
        assert_eq!(left, Color::new(255, 253, 112));
        assert!(start.green() - left.green() <= 2);
        assert_eq!(canvas[(199, 200)], Color::BLACK);

        // center column spans the full minor axis
        assert_eq!(canvas[(100, 300)], Color::new(255, 252, 125));
        assert_eq!(canvas[(300, 300)], Color::new(255, 252, 125));
        assert_eq!(canvas[(99, 300)], Color::BLACK);
        assert_eq!(canvas[(301, 300)], Color::BLACK);

        // rightmost column approaches the end color
        let right = canvas[(200, 400)];
        assert_eq!(right, Color::new(255, 251, 137));
        assert!(right.green() - end.green() <= 1);

        // gradient is constant along a column
        for row in 101..300 {
            assert_eq!(canvas[(row, 300)], canvas[(100, 300)]);
        }
        Ok(())
    }

    #[test]
    fn test_ellipse_shape() -> Result<(), Error> {
        let mut canvas = Canvas::new(600, 400)?;
        let ellipse = GradientEllipse::new(300, 200, 300, 200, Color::WHITE, Color::WHITE);
        ellipse.draw(&mut canvas)?;
        for row in 0..400 {
            for col in 0..600 {
                let x = col as i64 - 300;
                let covered = canvas[(row, col)] == Color::WHITE;
                if x.abs() > 150 {
                    assert!(!covered, "pixel row={row} col={col}");
                    continue;
                }
                let dy = (row as f64 - 200.0) / 100.0;
                let dx = x as f64 / 150.0;
                if covered {
                    assert!(dx * dx + dy * dy <= 1.0 + 1e-6, "pixel row={row} col={col}");
                }
            }
        }
        assert_eq!(canvas[(200, 150)], Color::WHITE);
        assert_eq!(canvas[(200, 450)], Color::WHITE);
        assert_eq!(canvas[(100, 300)], Color::WHITE);
        Ok(())
    }

    #[test]
    fn test_ellipse_clipped_per_pixel() -> Result<(), Error> {
        let mut canvas = Canvas::new(20, 10)?;
        draw_gradient_ellipse(&mut canvas, 10, 5, 20, 10, Color::RED, Color::WHITE)?;
        // bottom row and right column of the bounding box lie outside and are skipped
        assert_ne!(canvas[(0, 10)], Color::BLACK);
        assert_ne!(canvas[(9, 10)], Color::BLACK);
        assert_ne!(canvas[(5, 19)], Color::BLACK);
        Ok(())
    }

    #[test]
    fn test_ellipse_rejected() -> Result<(), Error> {
        let mut canvas = Canvas::new(600, 400)?;
        let red = Color::RED;
        assert!(matches!(
            draw_gradient_ellipse(&mut canvas, 300, 200, 100, 200, red, red),
            Err(RasterError::InvalidGeometry { shape: "ellipse", .. })
        ));
        assert!(matches!(
            draw_gradient_ellipse(&mut canvas, 100, 200, 300, 200, red, red),
            Err(RasterError::OutOfBounds { shape: "ellipse" })
        ));
        assert!(matches!(
            draw_gradient_ellipse(&mut canvas, 300, 50, 300, 200, red, red),
            Err(RasterError::OutOfBounds { .. })
        ));
        // bounds are checked before geometry
        assert!(matches!(
            draw_gradient_ellipse(&mut canvas, 700, 200, 10, 20, red, red),
            Err(RasterError::OutOfBounds { .. })
        ));
        assert!(matches!(
            draw_gradient_ellipse(&mut canvas, 300, 200, -4, -6, red, red),
            Err(RasterError::InvalidGeometry { .. })
        ));
        assert!(canvas.pixels().iter().all(|c| *c == Color::BLACK));
        Ok(())
    }

    #[test]
    fn test_ellipse_degenerate() -> Result<(), Error> {
        let mut canvas = Canvas::new(10, 10)?;
        draw_gradient_ellipse(&mut canvas, 5, 5, 0, 0, Color::RED, Color::WHITE)?;
        draw_gradient_ellipse(&mut canvas, 5, 5, 1, 1, Color::RED, Color::WHITE)?;
        assert!(canvas.pixels().iter().all(|c| *c == Color::BLACK));

        draw_gradient_ellipse(&mut canvas, 5, 5, 2, 0, Color::RED, Color::WHITE)?;
        assert_eq!(canvas[(5, 5)], Color::RED);
        assert_eq!(canvas.pixels().iter().filter(|c| **c == Color::RED).count(), 1);
        Ok(())
    }

    #[test]
    fn test_boxed_shapes() -> Result<(), Error> {
        let shapes: Vec<Box<dyn Rasterize>> = vec![
            Box::new(Rect::new(0, 0, 2, 2, Color::RED)),
            Box::new(Circle::new(5, 5, 1, Color::WHITE)),
        ];
        let mut canvas = Canvas::new(10, 10)?;
        for shape in &shapes {
            shape.draw(&mut canvas)?;
        }
        assert_eq!(shapes[0].name(), "rectangle");
        assert_eq!(canvas[(1, 1)], Color::RED);
        assert_eq!(canvas[(5, 6)], Color::WHITE);
        Ok(())
    }
}
