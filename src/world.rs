//! Abstracts the environment the fetcher runs in.
//! The world mediates access to the file system, the network, and the progress log.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::FetchError;
use crate::manifest::{self, DictionaryManifest};
use crate::reporting::Log;

/// The context for downloading dictionaries.
#[cfg_attr(feature = "test", mockall::automock(type Logger = crate::test_utils::VecLog;))]
#[async_trait]
pub trait World: Send + Sync + 'static {
    /// The Logger type used by this world
    type Logger: Log;

    /// The log to which to write progress updates and errors.
    /// This method returns an owned value; usually it will actually be a _handle_ to the actual
    /// logger.
    fn log(&self) -> Self::Logger;

    /// Returns the catalogue of dictionaries to download.
    fn manifest(&self) -> manifest::Result<DictionaryManifest>;

    /// Creates a directory and all missing parents. Succeeds if the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Retrieves a resource with a single GET request and returns the complete body. A response
    /// with a non-success status is an error.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Writes a file, replacing any previous content.
    async fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// The default context, accessing the real web and filesystem, and logging to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWorld;

impl DefaultWorld {
    /// Creates the default world.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl World for DefaultWorld {
    type Logger = io::Stderr;

    fn log(&self) -> Self::Logger {
        io::stderr()
    }

    fn manifest(&self) -> manifest::Result<DictionaryManifest> {
        DictionaryManifest::builtin()
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = reqwest::get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let content = response.bytes().await?;
        Ok(content.to_vec())
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(path).await?;
        file.write_all(content).await?;
        file.flush().await?;
        Ok(())
    }
}
