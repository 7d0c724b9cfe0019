use std::io::Write;

use crate::testgen::common::Result;
use crate::testgen::ram::RamImage;
use crate::testgen::serialize::writer::RamWriter;

/// Writes one line per test case: the case number, a closing bracket and the
/// space-separated RAM values. Numbering is one-based.
pub struct RawBatchWriter;

impl RamWriter for RawBatchWriter {
    fn write_case(&self, index: usize, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        let values = image
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(output, "{}) {values}", index + 1)?;

        Ok(())
    }
}
