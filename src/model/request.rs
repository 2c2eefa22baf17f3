use crate::model::ModelEntry;
use std::fmt;
use std::path::{Path, PathBuf};

/// Build configuration of the Core ML artifacts; selects which `compiled`
/// directory is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    #[default]
    #[value(name = "original")]
    Original,
    #[value(name = "split_einsum")]
    SplitEinsum,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::SplitEinsum => "split_einsum",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Include patterns for a variant, in the order they are handed to the hub.
pub fn include_patterns(variant: Variant) -> Vec<String> {
    vec![
        format!("*{}/compiled/*", variant),
        "*.json".to_string(),
        "*.txt".to_string(),
        "LICENSE".to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub hf_repo_id: String,
    pub destination: PathBuf,
    pub variant: Variant,
    pub include_patterns: Vec<String>,
    pub use_symlinks: bool,
}

impl DownloadRequest {
    pub fn for_model(entry: &ModelEntry, models_root: &Path, variant: Variant) -> Self {
        Self {
            hf_repo_id: entry.hf_repo_id.to_string(),
            destination: models_root.join(entry.dir_name()),
            variant,
            include_patterns: include_patterns(variant),
            use_symlinks: false,
        }
    }

    /// Directory whose presence marks the model as installed.
    pub fn compiled_dir(&self) -> PathBuf {
        self.destination.join(self.variant.as_str()).join("compiled")
    }
}
