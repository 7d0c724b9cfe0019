use crate::testgen::common::{GenerationError, Result};

/// Largest dimension value that still fits the one-byte header fields.
pub const MAX_DIMENSION: usize = 255;

/// Validated width/height pair of a test image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validates `width` and `height` against the configured bound.
    ///
    /// Both must be in `1..=bound`; a bound above [`MAX_DIMENSION`] is
    /// capped, since each dimension is stored as a single RAM byte.
    pub fn new(width: usize, height: usize, bound: usize) -> Result<Self> {
        let bound = bound.min(MAX_DIMENSION);
        if width == 0 || height == 0 || width > bound || height > bound {
            return Err(GenerationError::InvalidDimension {
                width,
                height,
                bound,
            });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// The full addressable memory content for one test case.
///
/// Layout is `[width, height, pixel_1..pixel_N, eq_1..eq_N]` with
/// `N = width * height`; there is no leading pixel-count byte. The input
/// region starts at address 2, the expected-output region (the working
/// zone the testbench asserts on) at address `2 + N`. Immutable once
/// assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RamImage {
    data: Vec<u8>,
}

impl RamImage {
    /// Concatenates the dimension header, pixel region and equalized region.
    ///
    /// Fails fast on a region-length disagreement rather than producing a
    /// partially valid memory image.
    pub fn assemble(dimensions: Dimensions, pixels: &[u8], equalized: &[u8]) -> Result<Self> {
        if pixels.len() != equalized.len() {
            return Err(GenerationError::LengthMismatch {
                pixels: pixels.len(),
                equalized: equalized.len(),
            });
        }

        if pixels.len() != dimensions.pixel_count() {
            return Err(GenerationError::WrongPixelCount {
                expected: dimensions.pixel_count(),
                actual: pixels.len(),
            });
        }

        let mut data = Vec::with_capacity(2 + 2 * pixels.len());
        data.push(dimensions.width() as u8);
        data.push(dimensions.height() as u8);
        data.extend_from_slice(pixels);
        data.extend_from_slice(equalized);

        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data[0] as usize
    }

    pub fn height(&self) -> usize {
        self.data[1] as usize
    }

    /// Number of pixels in each region (`width * height`).
    pub fn pixel_count(&self) -> usize {
        (self.data.len() - 2) / 2
    }

    /// The circuit's input working set.
    pub fn pixels(&self) -> &[u8] {
        &self.data[2..2 + self.pixel_count()]
    }

    /// The expected content of the working zone after the circuit runs.
    pub fn expected(&self) -> &[u8] {
        &self.data[2 + self.pixel_count()..]
    }

    /// Every RAM value in address order, header included.
    pub fn values(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_within_bound() {
        let dims = Dimensions::new(4, 3, 128).unwrap();

        assert_eq!(dims.width(), 4);
        assert_eq!(dims.height(), 3);
        assert_eq!(dims.pixel_count(), 12);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let result = Dimensions::new(0, 3, 128);

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::InvalidDimension { width: 0, height: 3, .. }
        ));
    }

    #[test]
    fn test_dimension_above_bound_is_rejected() {
        let result = Dimensions::new(4, 129, 128);

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::InvalidDimension { .. }
        ));
    }

    #[test]
    fn test_bound_is_capped_to_one_byte() {
        let result = Dimensions::new(300, 1, 1000);

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::InvalidDimension { bound: 255, .. }
        ));
    }

    #[test]
    fn test_assemble_round_trip() {
        let dims = Dimensions::new(3, 2, 128).unwrap();
        let pixels = [10, 20, 30, 40, 50, 60];
        let equalized = [0, 40, 80, 120, 160, 200];

        let image = RamImage::assemble(dims, &pixels, &equalized).unwrap();

        assert_eq!(image.len(), 2 + 2 * 6);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel_count(), 6);
        assert_eq!(image.pixels(), &pixels);
        assert_eq!(image.expected(), &equalized);
        assert_eq!(image.values()[..2], [3, 2]);
    }

    #[test]
    fn test_assemble_rejects_region_length_mismatch() {
        let dims = Dimensions::new(3, 2, 128).unwrap();

        let result = RamImage::assemble(dims, &[1, 2, 3, 4, 5, 6], &[1, 2, 3]);

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::LengthMismatch { pixels: 6, equalized: 3 }
        ));
    }

    #[test]
    fn test_assemble_rejects_wrong_pixel_count() {
        let dims = Dimensions::new(3, 2, 128).unwrap();

        let result = RamImage::assemble(dims, &[1, 2, 3], &[1, 2, 3]);

        assert!(matches!(
            result.unwrap_err(),
            GenerationError::WrongPixelCount { expected: 6, actual: 3 }
        ));
    }

    #[test]
    fn test_single_pixel_image() {
        let dims = Dimensions::new(1, 1, 128).unwrap();

        let image = RamImage::assemble(dims, &[77], &[0]).unwrap();

        assert_eq!(image.values(), &[1, 1, 77, 0]);
    }
}
