// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Growing the tree.
//!
//! Every segment of the tree is a `Branch`.  Drawing a branch strokes
//! it, and unless it is a leaf, sprouts two children from its far end:
//! each half as long, turned `theta` to the left and to the right, and
//! drawn with a thinner stroke.  A tree of depth `d` therefore has
//! 2^(d+1) - 1 segments, which grows fast; nothing here limits the
//! depth a caller asks for.
//!
//! Pending branches are kept on an explicit stack rather than the call
//! stack, but they are visited in the same order plain recursion
//! would: a branch, then everything under its left child, then
//! everything under its right child.

use buffer::{PixelBuffer, SkippedWrites};
use planes::Point;
use raster::draw_thick_line;

/// Whatever a tree is drawn on.  The pixel buffer is the only real
/// one; the trait exists so that the shape of a tree can be examined
/// without rasterizing it.
pub trait Canvas {
    /// Draw one segment with a stroke of the given radius, returning
    /// the writes that fell off the canvas.
    fn stroke(&mut self, start: Point, end: Point, thickness: u32) -> SkippedWrites;
}

impl Canvas for PixelBuffer {
    fn stroke(&mut self, start: Point, end: Point, thickness: u32) -> SkippedWrites {
        draw_thick_line(self, start, end, thickness)
    }
}

/// One segment of the tree, waiting to be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Branch {
    /// Where the segment starts.
    pub start: Point,
    /// Where the segment ends, and its children start.
    pub end: Point,
    /// Generations still to grow below this one.
    pub depth: i32,
    /// Stroke radius in pixels.
    pub thickness: u32,
}

impl Branch {
    /// The two children of this branch, left then right, or None for
    /// a leaf.
    pub fn children(&self, theta: f64, decay: f64) -> Option<(Branch, Branch)> {
        if self.depth <= 0 {
            return None;
        }
        let length = self.start.distance(&self.end) / 2.0;
        let angle = self.start.angle_to(&self.end);
        let thickness = next_thickness(self.thickness, decay);
        let child = |turn: f64| Branch {
            start: self.end,
            end: self.end.offset(length, angle + turn),
            depth: self.depth - 1,
            thickness,
        };
        Some((child(theta), child(-theta)))
    }
}

/// The stroke radius of the next generation: the current one scaled by
/// `decay` and rounded down, but never thinner than a single pixel.
pub fn next_thickness(thickness: u32, decay: f64) -> u32 {
    let scaled = (f64::from(thickness) * decay).floor();
    if scaled < 1.0 {
        1
    } else {
        scaled as u32
    }
}

/// The outcome of growing one or more trees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Growth {
    /// Segments stroked.
    pub segments: usize,
    /// Writes that fell off the canvas.
    pub skipped: SkippedWrites,
}

impl Growth {
    /// Fold another outcome into this one.
    pub fn merge(&mut self, other: Growth) {
        self.segments += other.segments;
        self.skipped.merge(other.skipped);
    }
}

/// Grow a tree from the segment `start` to `end`.  The segment is
/// drawn with a stroke of radius `thickness`; if `depth` is above zero
/// two children sprout from `end`, turned by `theta` radians either
/// way, and grow with one less generation to go.
pub fn grow<C: Canvas>(
    canvas: &mut C,
    start: Point,
    end: Point,
    theta: f64,
    depth: i32,
    thickness: u32,
    decay: f64,
) -> Growth {
    let mut growth = Growth::default();
    let mut pending = vec![Branch {
        start,
        end,
        depth,
        thickness,
    }];
    while let Some(branch) = pending.pop() {
        let skipped = canvas.stroke(branch.start, branch.end, branch.thickness);
        growth.segments += 1;
        growth.skipped.merge(skipped);
        if let Some((left, right)) = branch.children(theta, decay) {
            pending.push(right);
            pending.push(left);
        }
    }
    growth
}

#[cfg(test)]
mod tests {
    use super::*;
    use buffer::Color;
    use std::f64::consts::FRAC_PI_4;

    /// Remembers every stroke instead of drawing it.
    #[derive(Default)]
    struct Recorder {
        strokes: Vec<(Point, Point, u32)>,
    }

    impl Canvas for Recorder {
        fn stroke(&mut self, start: Point, end: Point, thickness: u32) -> SkippedWrites {
            self.strokes.push((start, end, thickness));
            SkippedWrites::default()
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn record(depth: i32, thickness: u32) -> (Recorder, Growth) {
        let mut recorder = Recorder::default();
        let growth = grow(
            &mut recorder,
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.5),
            FRAC_PI_4,
            depth,
            thickness,
            0.7,
        );
        (recorder, growth)
    }

    #[test]
    fn depth_zero_draws_only_the_trunk() {
        let (recorder, growth) = record(0, 20);
        assert_eq!(growth.segments, 1);
        assert_eq!(
            recorder.strokes,
            vec![(Point::new(0.0, 0.0), Point::new(0.0, 0.5), 20)]
        );
    }

    #[test]
    fn negative_depth_is_a_leaf() {
        let (_, growth) = record(-3, 20);
        assert_eq!(growth.segments, 1);
    }

    #[test]
    fn depth_two_draws_seven_segments() {
        let (recorder, growth) = record(2, 20);
        assert_eq!(growth.segments, 7);
        assert_eq!(recorder.strokes.len(), 7);
    }

    #[test]
    fn segment_count_doubles_each_generation() {
        for depth in 0..10 {
            let (_, growth) = record(depth, 20);
            assert_eq!(growth.segments, (1usize << (depth + 1)) - 1);
        }
    }

    #[test]
    fn thickness_shrinks_by_generation() {
        let (recorder, _) = record(3, 20);
        let mut seen: Vec<u32> = recorder.strokes.iter().map(|s| s.2).collect();
        seen.dedup();
        // Depth first, left first: the leftmost path is visited first.
        assert_eq!(&seen[..4], &[20, 14, 9, 6]);
        assert_eq!(recorder.strokes.iter().filter(|s| s.2 == 6).count(), 8);
    }

    #[test]
    fn thickness_never_drops_below_one() {
        assert_eq!(next_thickness(20, 0.7), 14);
        assert_eq!(next_thickness(14, 0.7), 9);
        assert_eq!(next_thickness(9, 0.7), 6);
        assert_eq!(next_thickness(2, 0.7), 1);
        assert_eq!(next_thickness(1, 0.7), 1);
        assert_eq!(next_thickness(0, 0.7), 1);
    }

    #[test]
    fn children_halve_and_turn() {
        let (recorder, _) = record(1, 4);
        let (_, trunk_end, _) = recorder.strokes[0];
        let (left_start, left_end, left_thickness) = recorder.strokes[1];
        let (right_start, right_end, _) = recorder.strokes[2];
        assert_eq!(left_start, trunk_end);
        assert_eq!(right_start, trunk_end);
        assert_eq!(left_thickness, 2);

        let arm = 0.25 * FRAC_PI_4.cos();
        assert!(close(left_end, Point::new(-arm, 0.5 + arm)));
        assert!(close(right_end, Point::new(arm, 0.5 + arm)));
        assert!((left_start.distance(&left_end) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn growing_twice_gives_identical_pixels() {
        let draw = || {
            let mut buffer = PixelBuffer::new(101, 101, Color::ROSE).unwrap();
            grow(
                &mut buffer,
                Point::new(0.0, -0.5),
                Point::new(0.0, 0.0),
                FRAC_PI_4,
                5,
                4,
                0.7,
            );
            buffer.as_bytes().to_vec()
        };
        let first = draw();
        assert_eq!(first, draw());
        assert!(first.iter().any(|&b| b != 0));
    }

    #[test]
    fn branches_off_the_canvas_are_counted() {
        let mut buffer = PixelBuffer::new(21, 21, Color::ROSE).unwrap();
        let growth = grow(
            &mut buffer,
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.9),
            FRAC_PI_4,
            2,
            2,
            0.7,
        );
        assert_eq!(growth.segments, 7);
        assert!(growth.skipped.count > 0);
        assert!(!growth.skipped.samples.is_empty());
    }
}
