//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper-left corner, and the logical plane, a square running from
//! -1 to 1 on both axes with the origin in the middle and y growing
//! upwards.

use error::Error;

/// A location on the logical plane.  Nothing holds on to these; they
/// are made, mapped and dropped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, -1 at the left edge.
    pub x: f64,
    /// Vertical coordinate, -1 at the bottom edge.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Direction from this point towards another, in radians.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// The point `length` away from this one in direction `angle`.
    pub fn offset(&self, length: f64, angle: f64) -> Point {
        Point::new(self.x + length * angle.cos(), self.y + length * angle.sin())
    }

    /// The point a fraction `t` of the way towards `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

/// Describes the column and row of a pixel.  Signed, because points
/// off the logical plane map to pixels off the canvas, and whoever
/// writes the pixel has to be able to tell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub i64, pub i64);

/// Maps points on the logical plane onto a canvas of a fixed size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the canvas, neither
    /// of which may be zero, and whose RGB bytes must be addressable.
    pub fn new(width: usize, height: usize) -> Result<PlaneMapper, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(3)).is_none() {
            return Err(Error::Allocation {
                bytes: usize::max_value(),
            });
        }
        Ok(PlaneMapper { width, height })
    }

    /// Width of the canvas in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the canvas in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels on the canvas.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false, since a mapper is never built for a canvas
    /// without pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given a point on the logical plane, map it to the nearest pixel.
    /// The edges of the logical square land on the outermost rows and
    /// columns.  Nothing is clamped: points outside the square map
    /// outside the canvas.
    pub fn point_to_pixel(&self, point: &Point) -> Pixel {
        let left = (point.x + 1.0) * 0.5 * ((self.width - 1) as f64);
        let top = (1.0 - (point.y + 1.0) * 0.5) * ((self.height - 1) as f64);
        Pixel(left.round() as i64, top.round() as i64)
    }

    /// Given a pixel, return the index of its red channel in an RGB
    /// buffer, or None if the pixel is off the canvas.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> Option<usize> {
        let Pixel(left, top) = *pixel;
        if left < 0 || top < 0 || left as u64 >= self.width as u64 || top as u64 >= self.height as u64 {
            return None;
        }
        Some(((top as usize) * self.width + (left as usize)) * 3)
    }
}
