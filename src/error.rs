use hf_hub::api::sync::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("{repo_id}: {message}")]
	DownloadFailed { repo_id: String, message: String },

	#[error("HuggingFace Hub error: {0}")]
	Hub(#[from] ApiError),

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

impl Error {
	/// Collapse any error raised while fetching `repo_id` into a download failure.
	pub fn download_failed(repo_id: &str, cause: &Error) -> Self {
		match cause {
			Error::DownloadFailed { message, .. } => Error::DownloadFailed {
				repo_id: repo_id.to_string(),
				message: message.clone(),
			},
			other => Error::DownloadFailed {
				repo_id: repo_id.to_string(),
				message: other.to_string(),
			},
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
