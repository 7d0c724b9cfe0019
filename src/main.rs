use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use ramgen_rs::logger;
use ramgen_rs::testgen::{BatchGenerator, GenerationConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(version, about = "Generates randomized RAM test vectors for the image-equalization circuit", long_about = None)]
struct Args {
    /// Number of tests to generate
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Maximum row/col size
    #[arg(short, long, default_value_t = 128)]
    limit: usize,

    /// Seed the random source for a reproducible batch
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output formats to emit
    #[arg(short, long, value_enum, default_values = ["plain-dump", "listing"])]
    format: Vec<FormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    /// One RAM value per line (ram_content.txt)
    PlainDump,
    /// One readable line per test case (test_values.txt)
    Listing,
    /// One raw line per test case (tests.txt)
    RawBatch,
    /// One importable .vhd testbench per test case
    Testbench,
    /// RAM initializer and assertion snippet pair per test case
    Snippets,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::PlainDump => OutputFormat::PlainDump,
            FormatArg::Listing => OutputFormat::Listing,
            FormatArg::RawBatch => OutputFormat::RawBatch,
            FormatArg::Testbench => OutputFormat::Testbench,
            FormatArg::Snippets => OutputFormat::Snippets,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    info!("Starting ramgen...");

    let config = GenerationConfig::builder()
        .count(args.count)
        .dimension_bound(args.limit)
        .seed(args.seed)
        .formats(args.format.iter().map(|&f| OutputFormat::from(f)).collect())
        .build();

    info!("Tests: {}", config.count);
    info!("Dimension bound: {}", config.dimension_bound);
    info!(
        "Randomness: {}",
        match config.seed {
            Some(seed) => format!("seeded ({seed})"),
            None => "OS entropy".to_string(),
        }
    );

    let mut generator = BatchGenerator::new(config);

    match generator.run(&args.out_dir) {
        Ok(()) => info!("Generation successful!"),
        Err(e) => {
            error!("Generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
