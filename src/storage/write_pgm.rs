use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes the buffer as a plain-text PGM (P2) image: one line per grid row,
/// pixels space-separated, maximum grey value 255.
pub fn write_pgm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P2")?;
    writeln!(out, "{} {}", buffer.x_num(), buffer.y_num())?;
    writeln!(out, "255")?;

    for row in buffer.as_bytes().chunks(buffer.x_num() as usize) {
        let line = row
            .iter()
            .map(|pixel| pixel.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }

    out.flush()
}
