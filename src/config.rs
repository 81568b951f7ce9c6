//! Load time augmentation manifests.
//!
//! A manifest lists, per language, the functions, types and names a site
//! wants highlighted, for example:
//!
//! ```toml
//! language = "cpp"
//! promote = "copy"
//!
//! [[augment]]
//! functions = ["lerp", "clamp"]
//! types = ["vec3"]
//!
//! [[augment]]
//! language = "c"
//! names = ["restrict"]
//! promote_to_literals = true
//! ```
use crate::augmenter::{Augmenter, AugmenterConfig, PromoteMode, DEFAULT_LANGUAGE};
use crate::registry::LanguageRegistry;
use crate::Error;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

const DEFAULT_LANGUAGE_FN: fn() -> String = || DEFAULT_LANGUAGE.to_string();

/// One batch of additions to a single language
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Augmentation {
    /// Falls back to the manifest's language when missing
    pub language: Option<String>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub promote_to_literals: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "DEFAULT_LANGUAGE_FN")]
    pub language: String,
    #[serde(default)]
    pub promote: PromoteMode,
    #[serde(default)]
    pub augment: Vec<Augmentation>,
}

impl Default for Config {
    fn default() -> Self {
        Self { language: DEFAULT_LANGUAGE_FN(), promote: PromoteMode::default(), augment: vec![] }
    }
}

impl Config {
    pub fn from_toml(string: &str) -> Result<Config, Error> {
        Ok(basic_toml::from_str(string)?)
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Config, Error> {
        let string = read_to_string(path)?;
        let config = Self::from_toml(&string)?;
        tracing::debug!(path = %path.display(), entries = config.augment.len(), "loaded manifest");
        Ok(config)
    }

    pub fn augmenter_config(&self) -> AugmenterConfig {
        AugmenterConfig { language: self.language.clone(), promote: self.promote }
    }

    /// Creates an augmenter set up with this manifest's defaults
    pub fn augmenter<R: LanguageRegistry>(&self, registry: R) -> Augmenter<R> {
        Augmenter::with_config(registry, self.augmenter_config())
    }

    /// Run every entry in file order, stopping at the first failure.
    ///
    /// Within an entry, functions are added first, then types, then names,
    /// and finally the promotion (if asked for) runs.
    pub fn apply<R: LanguageRegistry>(&self, augmenter: &mut Augmenter<R>) -> Result<(), Error> {
        let _span = tracing::info_span!("apply_manifest", entries = self.augment.len()).entered();
        for entry in &self.augment {
            let language = Some(entry.language.as_deref().unwrap_or(self.language.as_str()));
            augmenter.add_custom_fns(entry.functions.iter().cloned(), language)?;
            augmenter.add_custom_types(entry.types.iter().cloned(), language)?;
            augmenter.add_custom_names(entry.names.iter().cloned(), language)?;
            if entry.promote_to_literals {
                augmenter.promote_types_and_keywords_to_literals(language)?;
            }
        }
        Ok(())
    }
}
