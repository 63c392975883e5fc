//! Writing the buffer out as a binary PPM: a short ASCII header giving
//! the dimensions and the maximum channel value, then the raw RGB
//! bytes row by row, with no padding and no compression.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use buffer::PixelBuffer;
use error::Error;

/// The header that opens every file we write.
pub fn header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Write the buffer as a PPM to any writer.
pub fn write_ppm<W: Write>(mut writer: W, buffer: &PixelBuffer) -> ::std::io::Result<()> {
    writer.write_all(header(buffer.width(), buffer.height()).as_bytes())?;
    writer.write_all(buffer.as_bytes())?;
    writer.flush()
}

/// Write the buffer as a PPM to a file, replacing whatever was there.
pub fn save_ppm<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<(), Error> {
    let path = path.as_ref();
    let output = File::create(path).map_err(|e| Error::io(path, e))?;
    write_ppm(BufWriter::new(output), buffer).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "image saved");
    Ok(())
}
