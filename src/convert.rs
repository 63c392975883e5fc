//! Turning the PPM into something smaller.  The bitmap on disk is the
//! real product; a conversion that fails leaves it in place and the
//! caller is expected to carry on.

use std::path::Path;
use std::process::Command;

use image;
use tracing::{info, warn};

use error::Error;

/// Converts one image file into another, choosing the output format
/// from the destination's extension.
pub trait Converter {
    /// A short name for log messages.
    fn name(&self) -> &str;

    /// Read `from` and write the converted image to `to`.
    fn convert(&self, from: &Path, to: &Path) -> Result<(), Error>;
}

/// Runs an external program as `<program> <from> <to>`.
#[derive(Clone, Debug)]
pub struct ExternalConverter {
    program: String,
}

impl ExternalConverter {
    /// Constructor.
    pub fn new<S: Into<String>>(program: S) -> Self {
        ExternalConverter {
            program: program.into(),
        }
    }

    /// ImageMagick's `convert`.
    pub fn imagemagick() -> Self {
        ExternalConverter::new("convert")
    }
}

impl Converter for ExternalConverter {
    fn name(&self) -> &str {
        &self.program
    }

    fn convert(&self, from: &Path, to: &Path) -> Result<(), Error> {
        let status = Command::new(&self.program)
            .arg(from)
            .arg(to)
            .status()
            .map_err(|e| Error::Conversion(format!("could not run {}: {}", self.program, e)))?;
        if !status.success() {
            return Err(Error::Conversion(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Decodes and re-encodes in process with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinConverter;

impl Converter for BuiltinConverter {
    fn name(&self) -> &str {
        "builtin"
    }

    fn convert(&self, from: &Path, to: &Path) -> Result<(), Error> {
        let img = image::open(from)
            .map_err(|e| Error::Conversion(format!("could not read {}: {}", from.display(), e)))?;
        img.save(to)
            .map_err(|e| Error::Conversion(format!("could not write {}: {}", to.display(), e)))
    }
}

/// Tries each converter in turn until one succeeds.  Returns the last
/// error if none does.
pub fn convert_with(converters: &[&dyn Converter], from: &Path, to: &Path) -> Result<(), Error> {
    let mut last = Error::Conversion("no converter available".to_string());
    for converter in converters {
        match converter.convert(from, to) {
            Ok(()) => {
                info!(
                    converter = converter.name(),
                    path = %to.display(),
                    "image converted"
                );
                return Ok(());
            }
            Err(e) => {
                warn!(converter = converter.name(), error = %e, "conversion failed");
                last = e;
            }
        }
    }
    Err(last)
}
