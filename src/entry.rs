//! Contains the executable's entry point

use clap::Parser;

use crate::args::CliArguments;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::world::{DefaultWorld, World};

/// Entry point; handles the command line, then downloads the built-in dictionaries.
#[tokio::main]
pub async fn main() -> Result<()> {
    CliArguments::parse();
    run(DefaultWorld::new()).await
}

/// Downloads all dictionaries listed in the world's catalogue. Fails only if the catalogue is
/// invalid or the target directory can't be created; failed downloads are logged and skipped.
pub async fn run<W: World>(world: W) -> Result<()> {
    let manifest = world.manifest()?;
    let fetcher = Fetcher::from_manifest(world, &manifest);

    fetcher.ensure_directory().await?;
    fetcher.run_all().await;

    Ok(())
}
