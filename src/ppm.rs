//! Plain text pixel map (PPM `P3`) output
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b>      one line per pixel, row-major
//! ...
//!                  blank line after every row
//! ```
use crate::{Canvas, RasterError};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Maximum channel value written into the header
pub const MAX_CHANNEL: u8 = 255;

/// Write canvas in the `P3` format
pub fn write_ppm(canvas: &Canvas, mut out: impl Write) -> io::Result<()> {
    let _span = tracing::debug_span!("[write_ppm]", width = canvas.width(), height = canvas.height())
        .entered();
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;
    writeln!(out, "{}", MAX_CHANNEL)?;

    let mut buffer = [0u8; lexical_core::BUFFER_SIZE];
    for row in canvas.rows() {
        for pixel in row {
            let [r, g, b] = pixel.to_rgb();
            out.write_all(lexical_core::write(r, &mut buffer))?;
            out.write_all(b" ")?;
            out.write_all(lexical_core::write(g, &mut buffer))?;
            out.write_all(b" ")?;
            out.write_all(lexical_core::write(b, &mut buffer))?;
            out.write_all(b"\n")?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Save canvas in the `P3` format, `-` path means standard output
///
/// Any failure to create or write the destination is reported as
/// [`RasterError::Write`], content of the destination is unspecified then.
pub fn save_ppm(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), RasterError> {
    let path = path.as_ref();
    let result = if path == Path::new("-") {
        write_ppm(canvas, io::stdout().lock())
    } else {
        File::create(path).and_then(|file| write_ppm(canvas, BufWriter::new(file)))
    };
    result.map_err(|source| {
        tracing::error!(path = %path.display(), %source, "failed to save image");
        RasterError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl Canvas {
    /// Write canvas in the `P3` format
    pub fn write_ppm(&self, out: impl Write) -> io::Result<()> {
        write_ppm(self, out)
    }

    /// Render canvas into the `P3` text
    pub fn to_ppm_string(&self) -> String {
        let mut out = Vec::with_capacity(self.width() * self.height() * 12 + 32);
        // writing into a vector never fails
        let _ = write_ppm(self, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}
