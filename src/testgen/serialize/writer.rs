use std::io::Write;

use crate::testgen::common::Result;
use crate::testgen::ram::RamImage;

pub trait RamWriter {
    /// Serializes one test case. `index` is the zero-based position of the
    /// case within its batch; writers that number their output decide their
    /// own numbering base.
    fn write_case(&self, index: usize, image: &RamImage, output: &mut dyn Write) -> Result<()>;
}
