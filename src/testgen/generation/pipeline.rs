use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::testgen::common::{GenerationError, Result};
use crate::testgen::equalize::equalize;
use crate::testgen::generation::types::{GenerationConfig, OutputFormat};
use crate::testgen::pixels::{PixelSource, UniformPixelSource};
use crate::testgen::ram::RamImage;
use crate::testgen::serialize::{
    ListingWriter, PlainDumpWriter, RamWriter, RawBatchWriter, TestbenchWriter,
};

/// Generates a batch of test cases and serializes it into the configured
/// output formats.
///
/// Each case is independent: draw dimensions, draw pixels, compute the
/// reference output, assemble the RAM image. The batch is generated in full
/// before any file is written; a failing case aborts the run without
/// emitting a partial RAM image anywhere.
pub struct BatchGenerator<S: PixelSource> {
    source: S,
    config: GenerationConfig,
}

impl BatchGenerator<UniformPixelSource> {
    pub fn new(config: GenerationConfig) -> Self {
        let source = match config.seed {
            Some(seed) => UniformPixelSource::seeded(seed),
            None => UniformPixelSource::from_entropy(),
        };

        Self { source, config }
    }
}

impl<S: PixelSource> BatchGenerator<S> {
    pub fn with_source(source: S, config: GenerationConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn generate_case(&mut self) -> Result<RamImage> {
        let dimensions = self.source.draw_dimensions(self.config.dimension_bound)?;
        let pixels = self.source.generate(dimensions)?;
        let equalized = equalize(&pixels)?;

        RamImage::assemble(dimensions, &pixels, &equalized)
    }

    pub fn generate_batch(&mut self) -> Result<Vec<RamImage>> {
        let mut batch = Vec::with_capacity(self.config.count);
        for index in 0..self.config.count {
            let image = self.generate_case()?;
            debug!(
                "Generated test {}/{}: {}x{} ({} RAM bytes)",
                index + 1,
                self.config.count,
                image.width(),
                image.height(),
                image.len()
            );
            batch.push(image);
        }

        Ok(batch)
    }

    pub fn write_outputs(&self, batch: &[RamImage], out_dir: &Path) -> Result<()> {
        for format in &self.config.formats {
            match format {
                OutputFormat::PlainDump => {
                    self.write_batch_file(batch, &out_dir.join("ram_content.txt"), &PlainDumpWriter)?
                }
                OutputFormat::Listing => {
                    self.write_batch_file(batch, &out_dir.join("test_values.txt"), &ListingWriter)?
                }
                OutputFormat::RawBatch => {
                    self.write_batch_file(batch, &out_dir.join("tests.txt"), &RawBatchWriter)?
                }
                OutputFormat::Testbench => self.write_testbenches(batch, out_dir)?,
                OutputFormat::Snippets => self.write_snippets(batch, out_dir)?,
            }
        }

        Ok(())
    }

    pub fn run(&mut self, out_dir: &Path) -> Result<()> {
        info!(
            "Generating {} test cases (dimension bound {})",
            self.config.count, self.config.dimension_bound
        );

        let batch = self.generate_batch()?;
        self.write_outputs(&batch, out_dir)
    }

    fn write_batch_file(
        &self,
        batch: &[RamImage],
        path: &Path,
        writer: &dyn RamWriter,
    ) -> Result<()> {
        let mut sink = create_sink(path)?;
        for (index, image) in batch.iter().enumerate() {
            writer.write_case(index, image, &mut sink)?;
        }
        sink.flush()?;

        info!("Wrote {} test cases to {}", batch.len(), path.display());
        Ok(())
    }

    fn write_testbenches(&self, batch: &[RamImage], out_dir: &Path) -> Result<()> {
        for (index, image) in batch.iter().enumerate() {
            let number = index + 1;
            let path = out_dir.join(format!("test{number}.vhd"));

            let mut sink = create_sink(&path)?;
            TestbenchWriter.write_case(number, image, &mut sink)?;
            sink.flush()?;

            info!(
                "Generated \"test{number}.vhd\" for a test cols:{} and rows:{}",
                image.width(),
                image.height()
            );
        }

        Ok(())
    }

    fn write_snippets(&self, batch: &[RamImage], out_dir: &Path) -> Result<()> {
        for (index, image) in batch.iter().enumerate() {
            let number = index + 1;

            let init_path = out_dir.join(format!("test{number}.txt"));
            let mut sink = create_sink(&init_path)?;
            TestbenchWriter.write_init_snippet(image, &mut sink)?;
            sink.flush()?;

            let assert_path = out_dir.join(format!("solution{number}.txt"));
            let mut sink = create_sink(&assert_path)?;
            TestbenchWriter.write_assertion_snippet(image, &mut sink)?;
            sink.flush()?;

            info!(
                "Generated \"test{number}.txt\" and \"solution{number}.txt\" for a test with {} bytes",
                image.pixel_count()
            );
        }

        Ok(())
    }
}

fn create_sink(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        GenerationError::SinkUnavailable(format!("{}: {}", path.display(), e))
    })?;

    Ok(BufWriter::new(file))
}
