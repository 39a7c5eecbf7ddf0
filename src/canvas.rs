use crate::{Color, RasterError};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Size of the canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Fixed size grid of colors stored in row-major order
///
/// Origin is the top-left corner, columns grow to the right and rows grow down.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    data: Vec<Color>,
}

impl Canvas {
    /// Create canvas filled with the default (black) color
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        Self::new_with(width, height, Color::default())
    }

    /// Create canvas filled with the provided color
    pub fn new_with(width: usize, height: usize, color: Color) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(RasterError::InvalidDimensions { width, height })?;
        Ok(Self {
            size: Size { width, height },
            data: vec![color; len],
        })
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size.width + col
    }

    /// Check if signed pixel coordinates address a cell of this canvas
    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0
            && col >= 0
            && (row as u64) < self.size.height as u64
            && (col as u64) < self.size.width as u64
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.size.height && col < self.size.width {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Color> {
        if row < self.size.height && col < self.size.width {
            let offset = self.offset(row, col);
            Some(&mut self.data[offset])
        } else {
            None
        }
    }

    /// Set every cell to the color
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color]> + '_ {
        self.data.chunks_exact(self.size.width)
    }
}

impl Index<(usize, usize)> for Canvas {
    type Output = Color;

    /// Panics if `(row, col)` is outside of the canvas
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size.height && col < self.size.width,
            "pixel ({row}, {col}) is outside of {}x{} canvas",
            self.size.width,
            self.size.height,
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Canvas {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size.height && col < self.size.width,
            "pixel ({row}, {col}) is outside of {}x{} canvas",
            self.size.width,
            self.size.height,
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.size.width)
            .field("height", &self.size.height)
            .finish()
    }
}
