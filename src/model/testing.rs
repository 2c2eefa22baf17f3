use crate::error::{Error, Result};
use crate::model::{DownloadRequest, SnapshotDownload};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory stand-in for the hub that records every request it receives.
pub struct FakeSnapshot {
    failure: Option<String>,
    calls: RefCell<Vec<DownloadRequest>>,
    destination_existed: RefCell<Vec<bool>>,
}

impl FakeSnapshot {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: RefCell::new(Vec::new()),
            destination_existed: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<DownloadRequest> {
        self.calls.borrow().clone()
    }

    pub fn saw_existing_destination(&self) -> bool {
        let seen = self.destination_existed.borrow();
        !seen.is_empty() && seen.iter().all(|&existed| existed)
    }
}

impl SnapshotDownload for FakeSnapshot {
    fn snapshot_download(&self, request: &DownloadRequest) -> Result<PathBuf> {
        self.calls.borrow_mut().push(request.clone());
        self.destination_existed
            .borrow_mut()
            .push(request.destination.is_dir());

        match &self.failure {
            Some(message) => Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                message.clone(),
            ))),
            None => Ok(request.destination.clone()),
        }
    }
}
