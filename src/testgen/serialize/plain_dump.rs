use std::io::Write;

use crate::testgen::common::Result;
use crate::testgen::ram::RamImage;
use crate::testgen::serialize::writer::RamWriter;

/// Writes every RAM value on its own line, in address order.
///
/// This is the literal memory-initialization data a simulation harness
/// loads, so there is no header, delimiter or numbering.
pub struct PlainDumpWriter;

impl RamWriter for PlainDumpWriter {
    fn write_case(&self, _index: usize, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        for &value in image.values() {
            writeln!(output, "{value}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::ram::Dimensions;

    #[test]
    fn test_one_value_per_line_in_address_order() {
        let dims = Dimensions::new(2, 1, 128).unwrap();
        let image = RamImage::assemble(dims, &[10, 250], &[0, 255]).unwrap();

        let mut output = Vec::new();
        PlainDumpWriter.write_case(0, &image, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "2\n1\n10\n250\n0\n255\n");
    }
}
