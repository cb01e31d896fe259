//! Error types for the dictionary fetcher

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::manifest;

/// An error that prevents the run from starting
#[derive(Error, Debug)]
pub enum Error {
    /// The built-in catalogue could not be read
    #[error("the list of dictionaries could not be determined")]
    Manifest(#[from] manifest::Error),
    /// The target directory does not exist and could not be created
    #[error("target directory {} could not be created", path.display())]
    Directory {
        /// The directory that was to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// An error retrieving a resource from the web
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed, e.g. because the connection failed or timed out
    #[error("network I/O error during download")]
    Network(#[from] reqwest::Error),
    /// The server answered with a status other than success
    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// An error during downloading a single resource. Errors of this kind are reported, but do not
/// stop the run.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The resource could not be retrieved
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The retrieved resource could not be saved
    #[error("file I/O error during download")]
    File(#[from] io::Error),
}

/// Result type alias that defaults error to [enum@Error].
pub type Result<T, E = Error> = std::result::Result<T, E>;
