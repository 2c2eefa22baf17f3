use crate::error::{Error, Result};
use crate::model::{DownloadRequest, SnapshotDownload};
use std::io::Write;
use std::path::PathBuf;

pub struct ModelDownloader<S: SnapshotDownload> {
    source: S,
}

impl<S: SnapshotDownload> ModelDownloader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Downloads the files selected by `request` into its destination.
    ///
    /// Every failure, including creating the destination, is printed to
    /// `out` and returned as [`Error::DownloadFailed`].
    pub fn download<W: Write>(&self, request: &DownloadRequest, out: &mut W) -> Result<PathBuf> {
        writeln!(
            out,
            "Downloading {} ({} variant)...",
            request.hf_repo_id, request.variant
        )?;
        writeln!(out, "Destination: {}", request.destination.display())?;

        match self.fetch(request) {
            Ok(local_path) => {
                tracing::info!(
                    "Model '{}' downloaded to {:?}",
                    request.hf_repo_id,
                    local_path
                );
                writeln!(out, "✓ Download complete: {}", local_path.display())?;
                Ok(local_path)
            }
            Err(e) => {
                tracing::error!("Download of '{}' failed: {}", request.hf_repo_id, e);
                writeln!(out, "✗ Download failed: {}", e)?;
                Err(Error::download_failed(&request.hf_repo_id, &e))
            }
        }
    }

    fn fetch(&self, request: &DownloadRequest) -> Result<PathBuf> {
        std::fs::create_dir_all(&request.destination)?;
        self.source.snapshot_download(request)
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::FakeSnapshot;
    use crate::model::{ModelCatalog, Variant};
    use tempfile::TempDir;

    fn request_under(root: &std::path::Path) -> DownloadRequest {
        let catalog = ModelCatalog::builtin();
        DownloadRequest::for_model(catalog.get("1").unwrap(), root, Variant::Original)
    }

    #[test]
    fn test_creates_destination_recursively() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Picturesque").join("CoreMLModels");
        let request = request_under(&root);
        let downloader = ModelDownloader::new(FakeSnapshot::succeeding());

        let mut out = Vec::new();
        let local_path = downloader.download(&request, &mut out).unwrap();

        assert!(request.destination.is_dir());
        assert_eq!(local_path, request.destination);
        assert!(downloader.source().saw_existing_destination());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Downloading apple/coreml-stable-diffusion-v1-5 (original variant)..."));
        assert!(out.contains(&format!("✓ Download complete: {}", local_path.display())));
    }

    #[test]
    fn test_existing_non_empty_destination() {
        let tmp = TempDir::new().unwrap();
        let request = request_under(tmp.path());
        std::fs::create_dir_all(request.compiled_dir()).unwrap();
        std::fs::write(request.destination.join("LICENSE"), "license").unwrap();

        let downloader = ModelDownloader::new(FakeSnapshot::succeeding());
        let mut out = Vec::new();

        assert!(downloader.download(&request, &mut out).is_ok());
        assert!(downloader.download(&request, &mut out).is_ok());
        assert_eq!(downloader.source().calls().len(), 2);
    }

    #[test]
    fn test_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        let request = request_under(tmp.path());
        let downloader = ModelDownloader::new(FakeSnapshot::failing("401 Unauthorized"));

        let mut out = Vec::new();
        let err = downloader.download(&request, &mut out).unwrap_err();

        match err {
            Error::DownloadFailed { repo_id, message } => {
                assert_eq!(repo_id, "apple/coreml-stable-diffusion-v1-5");
                assert!(message.contains("401 Unauthorized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("✗ Download failed:"));
        assert!(out.contains("401 Unauthorized"));
    }

    #[test]
    fn test_uncreatable_destination_is_a_download_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let request = request_under(&blocker);
        let downloader = ModelDownloader::new(FakeSnapshot::succeeding());

        let mut out = Vec::new();
        let err = downloader.download(&request, &mut out).unwrap_err();

        assert!(matches!(err, Error::DownloadFailed { .. }));
        assert!(downloader.source().calls().is_empty());
    }
}
