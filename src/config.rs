//! The fixed rendering parameters: canvas size, branch angle, depth,
//! stroke thickness and its decay, ink color, the eight root segments,
//! and the output file names.

use std::f64::consts::FRAC_PI_4;

use buffer::Color;
use planes::Point;

/// Canvas width in pixels.
pub const WIDTH: usize = 3200;
/// Canvas height in pixels.
pub const HEIGHT: usize = 3200;
/// Angle between a branch and each of its children, in radians.
pub const THETA: f64 = FRAC_PI_4;
/// Generations grown below each root.
pub const DEPTH: i32 = 8;
/// Stroke radius of the roots, in pixels.
pub const THICKNESS: u32 = 20;
/// Factor applied to the stroke radius at each generation.
pub const THICKNESS_DECAY: f64 = 0.7;
/// Where the bitmap is written.
pub const PPM_PATH: &str = "output.ppm";
/// Where the converted image is written.
pub const PNG_PATH: &str = "output.png";

/// Everything needed to draw a forest of trees.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Angle between a branch and each of its children, in radians.
    pub theta: f64,
    /// Generations grown below each root.
    pub depth: i32,
    /// Stroke radius of the roots, in pixels.
    pub thickness: u32,
    /// Factor applied to the stroke radius at each generation.
    pub thickness_decay: f64,
    /// The ink.
    pub color: Color,
    /// The first segment of each tree, start then end.
    pub roots: Vec<(Point, Point)>,
}

/// Eight roots meeting at the origin: four growing outwards along the
/// axes, and four growing inwards from the same points.
pub fn compass_roots(reach: f64) -> Vec<(Point, Point)> {
    let origin = Point::new(0.0, 0.0);
    let tips = [
        Point::new(0.0, reach),
        Point::new(0.0, -reach),
        Point::new(-reach, 0.0),
        Point::new(reach, 0.0),
    ];
    let outward = tips.iter().map(|&tip| (origin, tip));
    let inward = tips.iter().map(|&tip| (tip, origin));
    outward.chain(inward).collect()
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            width: WIDTH,
            height: HEIGHT,
            theta: THETA,
            depth: DEPTH,
            thickness: THICKNESS,
            thickness_decay: THICKNESS_DECAY,
            color: Color::ROSE,
            roots: compass_roots(0.5),
        }
    }
}
