use std::io::Write;

use crate::testgen::common::Result;
use crate::testgen::ram::RamImage;
use crate::testgen::serialize::writer::RamWriter;

/// Writes one human-readable line per test case with its dimensions, pixel
/// count and full RAM content. Zero-based numbering. Inspection only, never
/// re-parsed.
pub struct ListingWriter;

impl RamWriter for ListingWriter {
    fn write_case(&self, index: usize, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        let values = image
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(
            output,
            "{index}) {} cols, {} rows: {} pixels \t\t RAM: {values}",
            image.width(),
            image.height(),
            image.pixel_count()
        )?;

        Ok(())
    }
}
