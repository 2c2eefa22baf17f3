use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "Picturesque";
pub const MODELS_DIR_NAME: &str = "CoreMLModels";

const MODELS_DIR_ENV: &str = "PICTURESQUE_MODELS_DIR";
const TOKEN_ENV: &str = "HF_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
	/// Root under which each model gets its own subdirectory. Not created here.
	pub models_root: PathBuf,
	pub hf_token: Option<String>,
}

impl Config {
	pub fn from_env() -> crate::error::Result<Self> {
		let models_root = match std::env::var(MODELS_DIR_ENV) {
			Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
			_ => resolve_destination_root()?,
		};
		let hf_token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty());

		Ok(Self {
			models_root,
			hf_token,
		})
	}

	pub fn with_models_root(mut self, models_root: Option<PathBuf>) -> Self {
		if let Some(root) = models_root {
			self.models_root = root;
		}
		self
	}

	pub fn with_token(mut self, token: Option<String>) -> Self {
		if token.is_some() {
			self.hf_token = token;
		}
		self
	}
}

/// `<data dir>/Picturesque/CoreMLModels`.
///
/// On macOS the data dir is `~/Library/Application Support`; elsewhere the
/// platform's user data directory is used instead.
pub fn resolve_destination_root() -> crate::error::Result<PathBuf> {
	let base_dirs = BaseDirs::new().ok_or_else(|| {
		crate::error::Error::ConfigError("Could not determine home directory".to_string())
	})?;

	Ok(models_root_under(base_dirs.data_dir()))
}

fn models_root_under(data_dir: &Path) -> PathBuf {
	data_dir.join(APP_DIR_NAME).join(MODELS_DIR_NAME)
}
