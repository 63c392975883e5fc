// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Line drawing.
//!
//! Lines are drawn by walking from one end to the other in steps of
//! roughly one pixel and painting wherever each step lands.  A thick
//! line paints a disk at every step instead of a single pixel; the
//! disks overlap, and since every write is the same color the order
//! they are painted in does not matter.

use itertools::iproduct;

use buffer::{PixelBuffer, SkippedWrites};
use planes::{Pixel, PlaneMapper, Point};

/// Strokes are always drawn fully opaque.
pub const FULL_INTENSITY: f64 = 1.0;

/// The pixels visited walking from `start` to `end`.  The number of
/// steps is the pixel distance between the two ends, truncated, but
/// never less than one, so even a segment that starts and ends on the
/// same pixel visits both of its ends.
pub fn walk<'a>(
    plane: &'a PlaneMapper,
    start: Point,
    end: Point,
) -> impl Iterator<Item = Pixel> + 'a {
    let from = plane.point_to_pixel(&start);
    let to = plane.point_to_pixel(&end);
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let steps = ((dx * dx + dy * dy).sqrt() as u64).max(1);
    (0..=steps).map(move |i| {
        let t = i as f64 / steps as f64;
        plane.point_to_pixel(&start.lerp(&end, t))
    })
}

/// The offsets of a disk of the given radius: every point of the
/// (2r+1)-square around the origin no further than r from it, row by
/// row from the top.
pub fn disk(radius: u32) -> Vec<(i64, i64)> {
    let r = i64::from(radius);
    iproduct!(-r..=r, -r..=r)
        .filter(|&(dy, dx)| dx * dx + dy * dy <= r * r)
        .map(|(dy, dx)| (dx, dy))
        .collect()
}

/// Draw a one-pixel line between two points on the logical plane.
pub fn draw_line(buffer: &mut PixelBuffer, start: Point, end: Point) -> SkippedWrites {
    let plane = *buffer.plane();
    let mut skipped = SkippedWrites::default();
    for pixel in walk(&plane, start, end) {
        if !buffer.set_pixel(pixel, FULL_INTENSITY) {
            skipped.record(pixel);
        }
    }
    skipped
}

/// Draw a line between two points on the logical plane, painting a
/// disk of radius `thickness` pixels around every step.  With a
/// thickness of zero this is exactly `draw_line`.
pub fn draw_thick_line(
    buffer: &mut PixelBuffer,
    start: Point,
    end: Point,
    thickness: u32,
) -> SkippedWrites {
    let plane = *buffer.plane();
    let brush = disk(thickness);
    let mut skipped = SkippedWrites::default();
    for Pixel(px, py) in walk(&plane, start, end) {
        for &(dx, dy) in &brush {
            let pixel = Pixel(px + dx, py + dy);
            if !buffer.set_pixel(pixel, FULL_INTENSITY) {
                skipped.record(pixel);
            }
        }
    }
    skipped
}
