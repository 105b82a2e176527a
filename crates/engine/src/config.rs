use crate::input::InputSource;
use crate::options::{KeyOrder, OutputFormat, RunMode};
use derive_builder::Builder;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Sources in the order given; empty means stdin.
    #[builder(default)]
    pub inputs: Vec<InputSource>,
    #[builder(default = "1")]
    pub jobs: usize,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub mode: RunMode,

    #[builder(default)]
    pub verbose: bool,
    #[builder(default)]
    pub key_order: KeyOrder,
    #[builder(default)]
    pub format: OutputFormat,

    /// Per-source limit on processed (non-comment) lines in entries mode.
    #[builder(default)]
    pub max_entries: Option<usize>,
}

impl Config {
    /// Inputs to read, falling back to stdin.
    #[must_use]
    pub fn sources(&self) -> Vec<InputSource> {
        if self.inputs.is_empty() {
            vec![InputSource::Stdin]
        } else {
            self.inputs.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            jobs: 1,
            strict: false,
            mode: RunMode::Count,
            verbose: false,
            key_order: KeyOrder::Unordered,
            format: OutputFormat::Text,
            max_entries: None,
        }
    }
}
