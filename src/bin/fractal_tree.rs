// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate fractal_tree;
extern crate tracing;
extern crate tracing_subscriber;

use std::path::Path;
use std::process;

use fractal_tree::config::{PNG_PATH, PPM_PATH};
use fractal_tree::convert::{convert_with, BuiltinConverter, Converter, ExternalConverter};
use fractal_tree::{ppm, render, Error, TreeConfig};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn run() -> Result<(), Error> {
    let config = TreeConfig::default();
    info!(
        width = config.width,
        height = config.height,
        depth = config.depth,
        roots = config.roots.len(),
        "rendering"
    );

    let (buffer, growth) = render(&config)?;
    if !growth.skipped.is_empty() {
        warn!(
            count = growth.skipped.count,
            first = ?growth.skipped.samples.first(),
            "writes fell off the canvas"
        );
    }
    info!(segments = growth.segments, lit = buffer.lit(), "buffer drawn");

    ppm::save_ppm(PPM_PATH, &buffer)?;
    drop(buffer);

    let external = ExternalConverter::imagemagick();
    let builtin = BuiltinConverter;
    let converters: [&dyn Converter; 2] = [&external, &builtin];
    if let Err(e) = convert_with(&converters, Path::new(PPM_PATH), Path::new(PNG_PATH)) {
        warn!(error = %e, bitmap = PPM_PATH, "keeping the bitmap only");
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();

    if let Err(e) = run() {
        error!("{}", e);
        let code = match e {
            Error::Io { .. } => 2,
            _ => 1,
        };
        process::exit(code);
    }
}
