/// Output formats a batch run can emit. The first three are batch files,
/// the last two produce one file (or file pair) per test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    PlainDump,
    Listing,
    RawBatch,
    Testbench,
    Snippets,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub count: usize,
    pub dimension_bound: usize,
    pub seed: Option<u64>,
    pub formats: Vec<OutputFormat>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: 100,
            dimension_bound: 128,
            seed: None,
            formats: vec![OutputFormat::PlainDump, OutputFormat::Listing],
        }
    }
}

impl GenerationConfig {
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    count: Option<usize>,
    dimension_bound: Option<usize>,
    seed: Option<Option<u64>>,
    formats: Option<Vec<OutputFormat>>,
}

impl GenerationConfigBuilder {
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn dimension_bound(mut self, bound: usize) -> Self {
        self.dimension_bound = Some(bound);
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = Some(formats);
        self
    }

    pub fn build(self) -> GenerationConfig {
        let default = GenerationConfig::default();
        GenerationConfig {
            count: self.count.unwrap_or(default.count),
            dimension_bound: self.dimension_bound.unwrap_or(default.dimension_bound),
            seed: self.seed.unwrap_or(default.seed),
            formats: self.formats.unwrap_or(default.formats),
        }
    }
}
