use crate::cli::menu::{self, Selection};
use crate::error::{Error, Result};
use crate::model::{DownloadRequest, ModelCatalog, ModelDownloader, SnapshotDownload, Variant};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 60;

/// How a pull ended. Only a failed download is a failure exit.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    InvalidSelection,
    Succeeded(PathBuf),
    Failed,
}

impl Outcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Failed => 1,
            Outcome::Cancelled | Outcome::InvalidSelection | Outcome::Succeeded(_) => 0,
        }
    }
}

pub struct App<'a, S: SnapshotDownload> {
    catalog: &'a ModelCatalog,
    models_root: &'a Path,
    downloader: &'a ModelDownloader<S>,
}

impl<'a, S: SnapshotDownload> App<'a, S> {
    pub fn new(
        catalog: &'a ModelCatalog,
        models_root: &'a Path,
        downloader: &'a ModelDownloader<S>,
    ) -> Self {
        Self {
            catalog,
            models_root,
            downloader,
        }
    }

    /// Runs one pull: prompt (unless `selection` is given), resolve, download.
    pub fn pull<R: BufRead, W: Write>(
        &self,
        selection: Option<String>,
        variant: Variant,
        input: &mut R,
        out: &mut W,
    ) -> Result<Outcome> {
        write_banner(out, &["Core ML Stable Diffusion Model Downloader"])?;
        writeln!(out)?;

        let choice = match selection {
            Some(choice) => choice.trim().to_string(),
            None => menu::present_menu(self.catalog, input, out)?,
        };

        let entry = match menu::resolve_selection(&choice, self.catalog) {
            Selection::Cancelled => {
                writeln!(out, "Cancelled.")?;
                return Ok(Outcome::Cancelled);
            }
            Selection::Invalid => {
                tracing::debug!("Rejected selection {:?}", choice);
                writeln!(out, "Invalid choice.")?;
                return Ok(Outcome::InvalidSelection);
            }
            Selection::Selected(entry) => entry,
        };

        let request = DownloadRequest::for_model(entry, self.models_root, variant);

        writeln!(out)?;
        writeln!(out, "Downloading: {}", entry.name)?;
        writeln!(out, "This will download approximately {}", entry.size)?;
        writeln!(out)?;

        match self.downloader.download(&request, out) {
            Ok(_) => {
                let saved_to = format!("Model saved to: {}", request.destination.display());
                writeln!(out)?;
                write_banner(out, &["✓ Download complete!", saved_to.as_str()])?;
                Ok(Outcome::Succeeded(request.destination))
            }
            Err(Error::DownloadFailed { .. }) => {
                writeln!(out)?;
                write_banner(out, &["✗ Download failed. Please try again."])?;
                Ok(Outcome::Failed)
            }
            Err(e) => Err(e),
        }
    }
}

/// Prints every known model with its install location and status.
pub fn list_models<W: Write>(
    catalog: &ModelCatalog,
    models_root: &Path,
    variant: Variant,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Models ({} variant):\n", variant)?;
    for entry in catalog.entries() {
        let request = DownloadRequest::for_model(entry, models_root, variant);
        let status = if request.compiled_dir().is_dir() {
            "installed"
        } else {
            "not installed"
        };

        writeln!(out, "  {}. {} ({})", entry.key, entry.name, entry.size)?;
        writeln!(out, "    Repository: {}", entry.hf_repo_id)?;
        writeln!(out, "    Path: {}", request.destination.display())?;
        writeln!(out, "    Status: {}", status)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, lines: &[&str]) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}
