//! Reference equalization module
//!
//! Implements the fixed-point contrast-stretch transform the circuit under
//! test is expected to compute. This is the golden model every generated
//! testbench checks the hardware against.

use crate::testgen::common::{GenerationError, Result};

/// Equalizes a pixel array with the circuit's contrast-stretch algorithm.
///
/// With `delta = max - min`, each pixel is mapped to
/// `min(255, (p - min) << (8 - floor(log2(delta + 1))))`. The shift amount
/// is computed with integer `ilog2`, which is exact at power-of-two
/// boundaries where a floating-point log2 could round the wrong way.
///
/// A flat image (`delta = 0`) maps every pixel to `0`; that degenerate
/// all-black output is the algorithm's defined behavior, not an error. The
/// clamp is required because the shift is conservative and can overshoot
/// `255` near the top of the range.
///
/// Returns [`GenerationError::EmptyImage`] for an empty input, since the
/// transform is undefined without a minimum and maximum.
pub fn equalize(pixels: &[u8]) -> Result<Vec<u8>> {
    if pixels.is_empty() {
        return Err(GenerationError::EmptyImage);
    }

    let mut min_v = u8::MAX;
    let mut max_v = u8::MIN;
    for &p in pixels {
        min_v = min_v.min(p);
        max_v = max_v.max(p);
    }

    let delta = max_v - min_v;
    // delta + 1 is in [1, 256], so the shift lands in [0, 8].
    let shift = 8 - (u16::from(delta) + 1).ilog2();

    Ok(pixels
        .iter()
        .map(|&p| {
            let scaled = u32::from(p - min_v) << shift;
            scaled.min(255) as u8
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_from_project_document() {
        // 4x3 example batch 1 from the project document: min=46, max=131,
        // delta=85, shift=2.
        let pixels = [76, 131, 109, 89, 46, 121, 62, 59, 46, 77, 68, 94];

        let equalized = equalize(&pixels).unwrap();

        assert_eq!(
            equalized,
            vec![120, 255, 252, 172, 0, 255, 64, 52, 0, 124, 88, 192]
        );
    }

    #[test]
    fn test_project_document_example_batch_2() {
        let pixels = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 120];

        let equalized = equalize(&pixels).unwrap();

        assert_eq!(
            equalized,
            vec![0, 40, 80, 120, 160, 200, 240, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_project_document_example_batch_3() {
        let pixels = [122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133];

        let equalized = equalize(&pixels).unwrap();

        assert_eq!(
            equalized,
            vec![0, 32, 64, 96, 128, 160, 192, 224, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_flat_image_is_all_black() {
        let pixels = [93u8; 64];

        let equalized = equalize(&pixels).unwrap();

        assert!(equalized.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_full_range_image_is_shifted_by_min_only() {
        // Contains both 0 and 255, so delta=255, shift=0 and no clamping.
        let pixels = [0, 17, 128, 200, 255];

        let equalized = equalize(&pixels).unwrap();

        assert_eq!(equalized, pixels.to_vec());
    }

    #[test]
    fn test_shift_is_exact_at_power_of_two_deltas() {
        // delta+1 = 16 and delta+1 = 32 are exact powers of two, where a
        // rounded floating-point log2 could land on the wrong side.
        let equalized = equalize(&[100, 115]).unwrap();
        assert_eq!(equalized, vec![0, 240]);

        let equalized = equalize(&[100, 116]).unwrap();
        assert_eq!(equalized, vec![0, 255]);

        let equalized = equalize(&[100, 131]).unwrap();
        assert_eq!(equalized, vec![0, 248]);
    }

    #[test]
    fn test_single_pixel_image() {
        let equalized = equalize(&[201]).unwrap();

        assert_eq!(equalized, vec![0]);
    }

    #[test]
    fn test_preserves_length() {
        let pixels: Vec<u8> = (0..=255).collect();

        let equalized = equalize(&pixels).unwrap();

        assert_eq!(equalized.len(), pixels.len());
    }

    #[test]
    fn test_is_deterministic() {
        let pixels = [3, 141, 59, 26, 53, 58, 97, 93];

        assert_eq!(equalize(&pixels).unwrap(), equalize(&pixels).unwrap());
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let result = equalize(&[]);

        assert!(matches!(result.unwrap_err(), GenerationError::EmptyImage));
    }
}
