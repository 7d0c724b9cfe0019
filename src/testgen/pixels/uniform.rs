use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::testgen::common::{GenerationError, Result};
use crate::testgen::pixels::source::PixelSource;
use crate::testgen::ram::{Dimensions, MAX_DIMENSION};

/// Draws dimensions and pixel values uniformly from a `StdRng`.
///
/// Pixels are always drawn from `0..=255`; an unseeded source pulls its
/// state from OS entropy, a seeded one is fully reproducible.
pub struct UniformPixelSource {
    rng: StdRng,
}

impl UniformPixelSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PixelSource for UniformPixelSource {
    fn draw_dimensions(&mut self, bound: usize) -> Result<Dimensions> {
        // Validated before anything is drawn: a zero bound admits no
        // dimensions at all, and a bound above MAX_DIMENSION would let the
        // draw exceed the one-byte header fields.
        if bound == 0 {
            return Err(GenerationError::InvalidDimension {
                width: 0,
                height: 0,
                bound,
            });
        }
        let bound = bound.min(MAX_DIMENSION);

        let width = self.rng.random_range(1..=bound);
        let height = self.rng.random_range(1..=bound);
        Dimensions::new(width, height, bound)
    }

    fn generate(&mut self, dimensions: Dimensions) -> Result<Vec<u8>> {
        debug!(
            "Drawing {} pixels for a {}x{} image",
            dimensions.pixel_count(),
            dimensions.width(),
            dimensions.height()
        );

        Ok((0..dimensions.pixel_count())
            .map(|_| self.rng.random_range(0..=255u8))
            .collect())
    }
}
