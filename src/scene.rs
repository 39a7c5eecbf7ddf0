use crate::{Canvas, Circle, Color, GradientEllipse, RasterError, Rasterize, Rect};
use std::fmt;

/// Any shape that can be part of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    GradientEllipse(GradientEllipse),
}

impl Shape {
    /// Noun phrase used in status messages
    fn article_name(&self) -> &'static str {
        match self {
            Shape::Rect(_) => "A rectangle",
            Shape::Circle(_) => "A circle",
            Shape::GradientEllipse(_) => "An ellipse",
        }
    }
}

impl Rasterize for Shape {
    fn name(&self) -> &'static str {
        match self {
            Shape::Rect(rect) => rect.name(),
            Shape::Circle(circle) => circle.name(),
            Shape::GradientEllipse(ellipse) => ellipse.name(),
        }
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        match self {
            Shape::Rect(rect) => rect.draw(canvas),
            Shape::Circle(circle) => circle.draw(canvas),
            Shape::GradientEllipse(ellipse) => ellipse.draw(canvas),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<GradientEllipse> for Shape {
    fn from(ellipse: GradientEllipse) -> Self {
        Shape::GradientEllipse(ellipse)
    }
}

/// Outcome of a single draw attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStatus {
    Drawn,
    OutOfBounds,
    InvalidGeometry,
}

/// Status of a single shape of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct DrawReport {
    /// Position of the shape in the scene
    pub index: usize,
    pub shape: Shape,
    pub status: DrawStatus,
}

impl fmt::Display for DrawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            DrawStatus::Drawn => match self.shape {
                Shape::Rect(_) => write!(f, "Drew a rectangle."),
                Shape::Circle(_) => write!(f, "Drew a circle."),
                Shape::GradientEllipse(_) => write!(f, "Drew an ellipse."),
            },
            DrawStatus::OutOfBounds => write!(
                f,
                "{} is not being drawn because it is out of bounds!",
                self.shape.article_name()
            ),
            DrawStatus::InvalidGeometry => match self.shape {
                Shape::GradientEllipse(_) => write!(
                    f,
                    "An ellipse was not drawn because the minorAxis is greater than the majorAxis!"
                ),
                _ => write!(
                    f,
                    "{} was not drawn because its size is negative!",
                    self.shape.article_name()
                ),
            },
        }
    }
}

/// Ordered list of shapes drawn on a single canvas
///
/// Shapes are drawn in order, later shapes overwrite earlier ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub background: Color,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            background: Color::default(),
            shapes: Vec::new(),
        }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub fn push(&mut self, shape: impl Into<Shape>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    /// Draw all shapes on a new canvas
    ///
    /// Rejected shapes are skipped and reported, only an invalid canvas size
    /// fails the whole scene.
    pub fn render(&self) -> Result<(Canvas, Vec<DrawReport>), RasterError> {
        let _span = tracing::debug_span!(
            "[render]",
            width = self.width,
            height = self.height,
            shapes = self.shapes.len()
        )
        .entered();
        let mut canvas = Canvas::new_with(self.width, self.height, self.background)?;
        let mut reports = Vec::with_capacity(self.shapes.len());
        for (index, shape) in self.shapes.iter().enumerate() {
            let status = match shape.draw(&mut canvas) {
                Ok(()) => DrawStatus::Drawn,
                Err(RasterError::OutOfBounds { .. }) => DrawStatus::OutOfBounds,
                Err(RasterError::InvalidGeometry { .. }) => DrawStatus::InvalidGeometry,
                Err(error) => return Err(error),
            };
            reports.push(DrawReport {
                index,
                shape: *shape,
                status,
            });
        }
        Ok((canvas, reports))
    }

    /// Load scene from its JSON representation
    #[cfg(feature = "serde")]
    pub fn from_json(reader: impl std::io::Read) -> Result<Self, RasterError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The 600x400 "orange design" composition
    ///
    /// Orange disc covering the whole height, two nested gradient ellipses,
    /// a small white disc in the center and two red bands.
    pub fn reference() -> Self {
        const WIDTH: i64 = 600;
        const HEIGHT: i64 = 400;
        let (cx, cy) = (WIDTH / 2, HEIGHT / 2);

        let mut scene = Scene::new(WIDTH as usize, HEIGHT as usize);
        scene
            .push(Circle::new(cx, cy, HEIGHT / 2, Color::new(255, 68, 25)))
            .push(GradientEllipse::new(
                cx,
                cy,
                HEIGHT - 30,
                HEIGHT - 30,
                Color::new(255, 115, 0),
                Color::new(255, 2, 4),
            ))
            .push(GradientEllipse::new(
                cx,
                cy,
                WIDTH / 2,
                HEIGHT / 2,
                Color::new(255, 255, 0),
                Color::new(255, 120, 50),
            ))
            .push(GradientEllipse::new(
                cx,
                cy,
                100,
                100,
                Color::new(255, 255, 0),
                Color::new(255, 120, 50),
            ))
            .push(Circle::new(cx, cy, 40, Color::WHITE))
            .push(Rect::new(20, 0, 10, WIDTH, Color::RED))
            .push(Rect::new(HEIGHT - 20, 0, 10, WIDTH, Color::RED));
        scene
    }
}
