use crate::testgen::common::Result;
use crate::testgen::ram::Dimensions;

pub trait PixelSource {
    fn draw_dimensions(&mut self, bound: usize) -> Result<Dimensions>;
    fn generate(&mut self, dimensions: Dimensions) -> Result<Vec<u8>>;
}
