use crate::error::Result;
use crate::model::pattern;
use crate::model::DownloadRequest;
use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Fetches the subset of a repository matching a request's include patterns
/// into the request's destination, mirroring remote relative paths.
pub trait SnapshotDownload {
    /// Returns the local directory holding the snapshot.
    fn snapshot_download(&self, request: &DownloadRequest) -> Result<PathBuf>;
}

/// Snapshot download backed by the HuggingFace Hub client and its cache.
///
/// The client is built per download so that setup failures surface as
/// download failures.
pub struct HubSnapshot {
    token: Option<String>,
}

impl HubSnapshot {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn api(&self) -> Result<Api> {
        let mut builder = ApiBuilder::new().with_progress(true);
        // Without an explicit token the builder keeps the cached login.
        if self.token.is_some() {
            builder = builder.with_token(self.token.clone());
        }
        Ok(builder.build()?)
    }
}

impl SnapshotDownload for HubSnapshot {
    fn snapshot_download(&self, request: &DownloadRequest) -> Result<PathBuf> {
        let api = self.api()?;
        let repo = api.repo(Repo::new(request.hf_repo_id.clone(), RepoType::Model));

        tracing::info!("Fetching file list for {}", request.hf_repo_id);
        let info = repo.info()?;

        let files = select_files(
            info.siblings.iter().map(|s| s.rfilename.as_str()),
            &request.include_patterns,
        );
        tracing::info!(
            "{} of {} files match {:?}",
            files.len(),
            info.siblings.len(),
            request.include_patterns
        );

        for file in &files {
            tracing::debug!("Fetching {}", file);
            let cached = repo.get(file)?;
            place_file(&cached, &request.destination, file, request.use_symlinks)?;
        }

        Ok(request.destination.clone())
    }
}

/// Repository files matching at least one pattern, in listing order.
///
/// Paths that would escape the destination directory are skipped.
pub fn select_files<'a, I>(files: I, patterns: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    files
        .into_iter()
        .filter(|file| pattern::matches_any(patterns, file))
        .filter(|file| {
            let safe = is_relative_within(file);
            if !safe {
                tracing::warn!("Skipping repository file with unsafe path: {}", file);
            }
            safe
        })
        .map(str::to_string)
        .collect()
}

fn is_relative_within(file: &str) -> bool {
    !file.is_empty()
        && Path::new(file)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Materializes a cached hub file at `local_dir/rfilename`, replacing any
/// existing file there.
pub fn place_file(
    cached: &Path,
    local_dir: &Path,
    rfilename: &str,
    use_symlinks: bool,
) -> Result<PathBuf> {
    let target = local_dir.join(rfilename);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    // The hub cache hands out symlinks into its blob store.
    let source = fs::canonicalize(cached)?;

    // Unlink first: copying onto a hard link of the source would truncate it.
    if fs::symlink_metadata(&target).is_ok() {
        fs::remove_file(&target)?;
    }

    if use_symlinks {
        link_to_cache(&source, &target)?;
    } else if let Err(e) = fs::hard_link(&source, &target) {
        tracing::debug!("Hard link failed ({}), copying {}", e, rfilename);
        fs::copy(&source, &target)?;
    }

    Ok(target)
}

#[cfg(unix)]
fn link_to_cache(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(not(unix))]
fn link_to_cache(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::copy(source, target).map(|_| ())
}
