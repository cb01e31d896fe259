//! Downloading the resources and saving them into the target directory

use std::path::{Path, PathBuf};

use derive_more::Debug;

use crate::error::{DownloadError, Error, Result};
use crate::log;
use crate::manifest::DictionaryManifest;
use crate::reporting::ErrorExt;
use crate::resource::{DownloadResult, ResourceList, derive_filename};
use crate::world::World;

/// Downloads a list of resources, one after the other, into a directory.
#[derive(Debug)]
pub struct Fetcher<W: World> {
    #[debug(skip)]
    world: W,
    directory: PathBuf,
    resources: ResourceList,
}

impl<W: World> Fetcher<W> {
    /// Creates a fetcher for the given resources and target directory.
    pub fn new(world: W, directory: PathBuf, resources: ResourceList) -> Self {
        Self {
            world,
            directory,
            resources,
        }
    }

    /// Creates a fetcher for everything listed in a catalogue.
    pub fn from_manifest(world: W, manifest: &DictionaryManifest) -> Self {
        Self::new(world, manifest.directory.clone(), manifest.resources())
    }

    /// The directory files are saved to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The resources to download, in order.
    pub fn resources(&self) -> &ResourceList {
        &self.resources
    }

    /// Makes sure the target directory exists. This is the only failure that stops the run.
    pub async fn ensure_directory(&self) -> Result<()> {
        self.world
            .create_dir_all(&self.directory)
            .await
            .map_err(|source| Error::Directory {
                path: self.directory.clone(),
                source,
            })
    }

    /// Downloads one resource and saves it in the target directory. Errors are logged and
    /// returned as [DownloadResult::Failed]; they never abort the run.
    pub async fn fetch_and_save(&self, locator: &str) -> DownloadResult {
        let mut l = self.world.log();
        let path = self.directory.join(derive_filename(locator));
        log!(l, "Downloading {} ...", path.display());

        match self.do_download(locator, &path).await {
            Ok(()) => DownloadResult::Saved(path),
            Err(error) => {
                let cause = error.error_chain().to_string();
                log!(l, "Failed to download {locator}: {cause}");
                DownloadResult::Failed {
                    locator: locator.to_string(),
                    cause,
                }
            }
        }
    }

    async fn do_download(&self, locator: &str, path: &Path) -> Result<(), DownloadError> {
        let content = self.world.fetch(locator).await?;
        self.world.write_file(path, &content).await?;
        Ok(())
    }

    /// Downloads all resources in order, then reports completion. Individual failures have
    /// already been reported and don't affect the outcome.
    pub async fn run_all(&self) {
        for locator in &self.resources {
            self.fetch_and_save(locator).await;
        }

        let mut l = self.world.log();
        log!(l, "All done!");
    }
}
