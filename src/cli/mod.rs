pub mod menu;

use crate::model::Variant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coreml-fetch")]
#[command(version, about = "Download Core ML Stable Diffusion models from HuggingFace", long_about = None)]
pub struct Cli {
	/// Without a subcommand, pick a model interactively and download it
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory that holds downloaded models [env: PICTURESQUE_MODELS_DIR]
	#[arg(long, global = true)]
	pub models_dir: Option<PathBuf>,

	/// HuggingFace access token [env: HF_TOKEN]
	#[arg(long, global = true)]
	pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Download a model (prompts when no selection is given)
	Pull {
		/// Menu key of the model (e.g., "1"), or "q" to quit
		selection: Option<String>,

		/// Which compiled variant to fetch
		#[arg(long, value_enum, default_value_t = Variant::Original)]
		variant: Variant,
	},

	/// List available models and whether they are installed
	List {
		/// Variant to check for
		#[arg(long, value_enum, default_value_t = Variant::Original)]
		variant: Variant,
	},
}
