#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fractal tree renderer
//!
//! A fractal tree starts as a single segment.  From the far end of
//! that segment two children sprout, each half as long as its parent
//! and turned by a fixed angle to either side.  Each child does the
//! same, and so on, until a fixed number of generations has been
//! drawn.  The strokes get thinner as the tree grows, so the trunk is
//! heavy and the twigs are hairline.
//!
//! Everything is drawn in a logical plane running from -1 to 1 on
//! both axes, then mapped onto an RGB pixel buffer, written out as a
//! binary PPM, and finally handed to a converter to produce a PNG.

extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate tracing;

pub mod buffer;
pub mod config;
pub mod convert;
pub mod error;
pub mod planes;
pub mod ppm;
pub mod raster;
pub mod tree;

pub use buffer::{Color, PixelBuffer, SkippedWrites};
pub use config::TreeConfig;
pub use error::Error;
pub use planes::{Pixel, PlaneMapper, Point};
pub use tree::{grow, Canvas, Growth};

use tracing::debug;

/// Allocates a fresh buffer for the configured canvas and grows every
/// root of the configuration into it, one after the other.  The
/// buffer is returned to the caller, who owns it from then on.
pub fn render(config: &TreeConfig) -> Result<(PixelBuffer, Growth), Error> {
    let mut buffer = PixelBuffer::new(config.width, config.height, config.color)?;
    let mut growth = Growth::default();
    for (i, &(start, end)) in config.roots.iter().enumerate() {
        let root = grow(
            &mut buffer,
            start,
            end,
            config.theta,
            config.depth,
            config.thickness,
            config.thickness_decay,
        );
        debug!(
            root = i,
            segments = root.segments,
            skipped = root.skipped.count,
            "grew root"
        );
        growth.merge(root);
    }
    Ok((buffer, growth))
}
