//! Small library that rasterizes simple 2D shapes into an in-memory canvas
//! and saves the result as a plain text pixel map (PPM `P3`).
//!
//! Main features:
//!  - Filled rectangles, circles and gradient ellipses with integer geometry
//!  - All-or-nothing bounds validation against the actual canvas size
//!  - Ordered scenes with per-shape status reports
//!
#![deny(warnings)]

mod canvas;
mod color;
mod error;
mod ppm;
mod scene;
mod shapes;

pub use canvas::{Canvas, Size};
pub use color::{Color, ColorError};
pub use error::RasterError;
pub use ppm::{save_ppm, write_ppm, MAX_CHANNEL};
pub use scene::{DrawReport, DrawStatus, Scene, Shape};
pub use shapes::{
    draw_circle, draw_gradient_ellipse, draw_rect, Circle, GradientEllipse, Rasterize, Rect,
};
