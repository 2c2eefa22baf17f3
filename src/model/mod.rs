pub mod downloader;
pub mod pattern;
pub mod registry;
pub mod request;
pub mod snapshot;

#[cfg(test)]
pub mod testing;

pub use downloader::ModelDownloader;
pub use registry::{ModelCatalog, ModelEntry};
pub use request::{DownloadRequest, Variant};
pub use snapshot::{HubSnapshot, SnapshotDownload};
