//! Everything that can stop a render.  Pixels that land off the
//! canvas are not in here; those are reported through
//! [`SkippedWrites`](../buffer/struct.SkippedWrites.html) and never
//! interrupt drawing.

use std::io;
use std::path::PathBuf;

use failure::Fail;

/// The renderer's error type.
#[derive(Debug, Fail)]
pub enum Error {
    /// The canvas has no pixels to draw on.
    #[fail(display = "canvas must not be empty, got {}x{}", width, height)]
    EmptyCanvas {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The pixel buffer could not be reserved.
    #[fail(display = "could not allocate {} bytes for the pixel buffer", bytes)]
    Allocation {
        /// Size of the failed request.
        bytes: usize,
    },

    /// The bitmap file could not be created or written.
    #[fail(display = "could not write {}: {}", path, cause)]
    Io {
        /// The file being written, for display.
        path: String,
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },

    /// The post-process conversion did not produce an image.
    #[fail(display = "conversion failed: {}", _0)]
    Conversion(String),
}

impl Error {
    /// Wraps an I/O failure with the path it happened on.
    pub fn io<P: Into<PathBuf>>(path: P, cause: io::Error) -> Self {
        Error::Io {
            path: path.into().display().to_string(),
            cause,
        }
    }

    /// Errors the process can keep going after.
    pub fn is_recoverable(&self) -> bool {
        match *self {
            Error::Conversion(_) => true,
            _ => false,
        }
    }
}
