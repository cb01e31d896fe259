//! The built-in dictionary catalogue

use std::path::PathBuf;

use serde::Deserialize;

use crate::resource::ResourceList;

pub use error::*;

/// The catalogue shipped with this tool.
pub const BUILTIN: &str = include_str!("../dictionaries.toml");

/// Which dictionaries to download, and where to put them.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DictionaryManifest {
    /// The directory the files are saved to, relative to the working directory
    pub directory: PathBuf,
    /// Common prefix of all dictionary URLs
    pub base_url: String,
    /// The files downloaded per language, identified by their extension (e.g. `dic`)
    pub extensions: Vec<String>,
    /// The languages to download, in order
    pub languages: Vec<Language>,
}

/// A single language's entry in the catalogue.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// The locale code, which is also the name of the files and of the directory they're served
    /// from, e.g. `en_US`
    pub code: String,
    /// The language's name (for human consumption)
    pub name: String,
}

impl DictionaryManifest {
    /// Parses a catalogue from its TOML source.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        if manifest.languages.is_empty() {
            return Err(Error::NoLanguages);
        }
        Ok(manifest)
    }

    /// Parses the catalogue shipped with this tool.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    /// The URLs to download: every extension of every language, languages first.
    pub fn resources(&self) -> ResourceList {
        let base_url = self.base_url.trim_end_matches('/');
        self.languages
            .iter()
            .flat_map(|language| {
                let code = &language.code;
                self.extensions
                    .iter()
                    .map(move |ext| format!("{base_url}/{code}/{code}.{ext}"))
            })
            .collect()
    }
}

mod error {
    use thiserror::Error;

    /// Errors that can occur when reading the dictionary catalogue
    #[derive(Error, Debug)]
    pub enum Error {
        /// The catalogue is not valid TOML or does not have the expected structure
        #[error("the dictionary catalogue is not valid")]
        Invalid(#[from] toml::de::Error),
        /// The catalogue does not list any languages
        #[error("the dictionary catalogue does not list any languages")]
        NoLanguages,
    }

    /// Result type alias that defaults error to [enum@Error].
    pub type Result<T, E = Error> = std::result::Result<T, E>;
}
