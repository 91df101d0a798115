//! File storage: records, list filters and the endpoint facade.

mod client;
mod options;

pub use crate::models::filestorage::*;
pub use client::FileStorageClient;
pub use options::{DriveListOptions, FileListOptions, FolderListOptions};
