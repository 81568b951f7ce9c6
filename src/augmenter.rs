use crate::languages::LanguageDef;
use crate::registry::LanguageRegistry;
use crate::{Bucket, Error};
use serde::Deserialize;

/// The language used when an operation is not given one
pub const DEFAULT_LANGUAGE: &str = "cpp";

/// What promotion does to the `type` and `keyword` buckets once their
/// tokens have been copied into `literal`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoteMode {
    /// Leave them as they were
    #[default]
    Copy,
    /// Empty them
    Move,
}

/// Settings for an [`Augmenter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmenterConfig {
    /// Language to use when an operation is given `None`
    pub language: String,
    pub promote: PromoteMode,
}

impl Default for AugmenterConfig {
    fn default() -> Self {
        Self { language: DEFAULT_LANGUAGE.to_string(), promote: PromoteMode::default() }
    }
}

/// Appends tokens to the keyword buckets of registered languages.
///
/// Every operation either applies fully or leaves the registry untouched.
///
/// # Example
/// ```
/// use highlight_keywords::{Augmenter, Bucket, LanguageRegistry, Registry};
///
/// let mut aug = Augmenter::new(Registry::with_builtins());
/// aug.add_custom_types(["vec3", "mat4"], None).unwrap();
/// let cpp = aug.registry().get("cpp").unwrap();
/// assert_eq!(cpp.keywords.bucket(Bucket::Type).unwrap().last().unwrap(), "mat4");
/// ```
#[derive(Debug)]
pub struct Augmenter<R> {
    registry: R,
    config: AugmenterConfig,
}

impl<R: LanguageRegistry> Augmenter<R> {
    /// Creates an augmenter defaulting to the "cpp" language
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, AugmenterConfig::default())
    }

    pub fn with_config(registry: R, config: AugmenterConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &AugmenterConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Hands back the (augmented) registry
    pub fn into_inner(self) -> R {
        self.registry
    }

    /// Append tokens, in order, to a bucket of a language.
    /// A `language` of `None` uses the configured default.
    pub fn add_keywords<I, S>(&mut self, tokens: I, bucket: Bucket, language: Option<&str>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let language = language.unwrap_or(self.config.language.as_str());
        let def = lookup(&mut self.registry, language)?;
        let Some(existing) = def.keywords.bucket_mut(bucket) else {
            tracing::warn!(language, %bucket, "language has no such bucket");
            return Err(Error::MissingBucket { language: language.to_string(), bucket });
        };
        let before = existing.len();
        existing.extend(tokens.into_iter().map(Into::into));
        tracing::debug!(language, %bucket, added = existing.len() - before, "added keywords");
        Ok(())
    }

    /// Add function names to the `built_in` bucket
    pub fn add_custom_fns<I, S>(&mut self, fns: I, language: Option<&str>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_keywords(fns, Bucket::BuiltIn, language)
    }

    /// Add type names to the `type` bucket
    pub fn add_custom_types<I, S>(&mut self, types: I, language: Option<&str>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_keywords(types, Bucket::Type, language)
    }

    /// Add identifiers to the `keyword` bucket
    pub fn add_custom_names<I, S>(&mut self, names: I, language: Option<&str>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_keywords(names, Bucket::Keyword, language)
    }

    /// Append every `type` token and then every `keyword` token onto `literal`.
    ///
    /// With [`PromoteMode::Copy`] the source buckets keep their tokens,
    /// with [`PromoteMode::Move`] they are emptied afterwards.
    pub fn promote_types_and_keywords_to_literals(&mut self, language: Option<&str>) -> Result<(), Error> {
        let language = language.unwrap_or(self.config.language.as_str());
        let mode = self.config.promote;
        let keywords = &mut lookup(&mut self.registry, language)?.keywords;
        // All three buckets must exist before anything is touched
        let (types, names, literals) =
            match (keywords.r#type.as_mut(), keywords.keyword.as_mut(), keywords.literal.as_mut()) {
                (Some(types), Some(names), Some(literals)) => (types, names, literals),
                (types, names, _) => {
                    let bucket = if types.is_none() {
                        Bucket::Type
                    } else if names.is_none() {
                        Bucket::Keyword
                    } else {
                        Bucket::Literal
                    };
                    tracing::warn!(language, %bucket, "language has no such bucket");
                    return Err(Error::MissingBucket { language: language.to_string(), bucket });
                }
            };
        literals.extend(types.iter().cloned());
        literals.extend(names.iter().cloned());
        tracing::debug!(language, ?mode, promoted = types.len() + names.len(), "promoted to literals");
        if mode == PromoteMode::Move {
            types.clear();
            names.clear();
        }
        Ok(())
    }
}

fn lookup<'r, R: LanguageRegistry>(registry: &'r mut R, language: &str) -> Result<&'r mut LanguageDef, Error> {
    match registry.get_mut(language) {
        Some(def) => Ok(def),
        None => {
            tracing::warn!(language, "language is not registered");
            Err(Error::UnknownLanguage(language.to_string()))
        }
    }
}
