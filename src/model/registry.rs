/// A downloadable Core ML model, addressed by its menu key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub hf_repo_id: &'static str,
    pub size: &'static str,
}

impl ModelEntry {
    /// Local directory name for this model: the repo id with `/` replaced by `_`.
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.hf_repo_id.replace('/', "_")
    }
}

/// Fixed, ordered table of the models offered by the menu.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
}

impl ModelCatalog {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ModelEntry {
                    key: "1",
                    name: "Stable Diffusion 1.5",
                    hf_repo_id: "apple/coreml-stable-diffusion-v1-5",
                    size: "~2.5 GB",
                },
                ModelEntry {
                    key: "2",
                    name: "Stable Diffusion 2.1 Base",
                    hf_repo_id: "apple/coreml-stable-diffusion-2-1-base",
                    size: "~2.5 GB",
                },
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    /// Key range shown in the prompt, e.g. `1-2`.
    pub fn key_range(&self) -> String {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) if first.key != last.key => {
                format!("{}-{}", first.key, last.key)
            }
            (Some(only), _) => only.key.to_string(),
            _ => String::new(),
        }
    }
}
