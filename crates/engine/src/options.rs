use serde::{Deserialize, Serialize};

pub use ccdict_count_core::KeyOrder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// What a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Count entries per headword and in total
    #[default]
    Count,
    /// Expand every line into single-reading, single-gloss entries
    Entries,
    /// Count, and compare each line's count with its expanded entries
    Check,
}
