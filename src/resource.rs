//! Resources to download and the outcome of downloading them

use std::path::PathBuf;
use std::slice;

/// An ordered list of URLs. The order is the order in which they are downloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceList(Vec<String>);

impl ResourceList {
    /// Creates a resource list from URLs.
    pub fn new(locators: Vec<String>) -> Self {
        Self(locators)
    }

    /// The URLs in download order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// The number of URLs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there is nothing to download.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for ResourceList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The name a downloaded resource is saved under: everything after the URL's last `/`.
///
/// No sanitization takes place. Two URLs ending in the same segment map to the same file, and the
/// one downloaded later wins.
pub fn derive_filename(locator: &str) -> &str {
    locator
        .rsplit_once('/')
        .map_or(locator, |(_, filename)| filename)
}

/// The outcome of downloading a single resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    /// The resource was saved to this path.
    Saved(PathBuf),
    /// The resource could not be downloaded or saved.
    Failed {
        /// The URL that failed
        locator: String,
        /// A human-readable description of the problem
        cause: String,
    },
}

impl DownloadResult {
    /// Whether the resource was saved.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}
