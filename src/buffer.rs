//! The pixel buffer the tree is drawn into, and the single primitive
//! that writes to it.

use num::clamp;
use tracing::{info, trace};

use error::Error;
use planes::{Pixel, PlaneMapper, Point};

/// An ink color, as the value each channel takes at full intensity.
/// Lower intensities scale all three channels by the same factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red channel scale.
    pub red: f64,
    /// Green channel scale.
    pub green: f64,
    /// Blue channel scale.
    pub blue: f64,
}

impl Color {
    /// The pink the trees are drawn in.
    pub const ROSE: Color = Color {
        red: 255.0,
        green: 192.0,
        blue: 203.0,
    };

    /// The three channel values at the given intensity, truncated into
    /// a byte.
    pub fn at(&self, intensity: f64) -> [u8; 3] {
        [
            clamp(intensity * self.red, 0.0, 255.0) as u8,
            clamp(intensity * self.green, 0.0, 255.0) as u8,
            clamp(intensity * self.blue, 0.0, 255.0) as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::ROSE
    }
}

/// A record of the writes that landed off the canvas.  Every one is
/// counted, but only the first few are kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkippedWrites {
    /// How many writes were skipped.
    pub count: usize,
    /// The first `SAMPLE_LIMIT` pixels that were skipped.
    pub samples: Vec<Pixel>,
}

impl SkippedWrites {
    /// How many skipped pixels are kept for inspection.
    pub const SAMPLE_LIMIT: usize = 64;

    /// Note one skipped pixel.
    pub fn record(&mut self, pixel: Pixel) {
        self.count += 1;
        if self.samples.len() < Self::SAMPLE_LIMIT {
            self.samples.push(pixel);
        }
    }

    /// Fold another record into this one.
    pub fn merge(&mut self, other: SkippedWrites) {
        self.count += other.count;
        let room = Self::SAMPLE_LIMIT.saturating_sub(self.samples.len());
        self.samples.extend(other.samples.into_iter().take(room));
    }

    /// True if nothing was skipped.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A width x height grid of RGB triples, stored row by row from the
/// top, three bytes to a pixel.  The buffer never changes size after
/// it is made, and is released when dropped.
pub struct PixelBuffer {
    plane: PlaneMapper,
    color: Color,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed (black) buffer for a canvas of the given
    /// size, to be drawn on in the given color.
    pub fn new(width: usize, height: usize, color: Color) -> Result<Self, Error> {
        let plane = PlaneMapper::new(width, height)?;
        let bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(Error::Allocation {
                bytes: usize::max_value(),
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| Error::Allocation { bytes })?;
        data.resize(bytes, 0);
        info!(width, height, bytes, "buffer created");
        Ok(PixelBuffer { plane, color, data })
    }

    /// The mapping from the logical plane onto this buffer.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.plane.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.plane.height()
    }

    /// The color strokes are drawn in.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The raw bytes, exactly as they go into a PPM payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Map a logical point to a pixel of this buffer.
    pub fn point_to_pixel(&self, point: &Point) -> Pixel {
        self.plane.point_to_pixel(point)
    }

    /// The RGB triple at a pixel, or None if it is off the canvas.
    pub fn get_pixel(&self, pixel: Pixel) -> Option<[u8; 3]> {
        self.plane
            .pixel_to_offset(&pixel)
            .map(|i| [self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Paint a pixel in the buffer's color at the given intensity.  A
    /// pixel off the canvas is not written; that is logged and
    /// reported by returning false.
    pub fn set_pixel(&mut self, pixel: Pixel, intensity: f64) -> bool {
        match self.plane.pixel_to_offset(&pixel) {
            Some(offset) => {
                let rgb = self.color.at(intensity);
                self.data[offset..offset + 3].copy_from_slice(&rgb);
                true
            }
            None => {
                trace!(x = pixel.0, y = pixel.1, "invalid pixel coordinates");
                false
            }
        }
    }

    /// Number of pixels that are not black.
    pub fn lit(&self) -> usize {
        self.data
            .chunks(3)
            .filter(|rgb| rgb.iter().any(|&c| c != 0))
            .count()
    }
}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        info!(bytes = self.data.len(), "buffer released");
    }
}
