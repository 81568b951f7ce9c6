//! Augment the keyword tables of syntax highlighter language definitions.
//!
//! Highlighters ship with a fixed idea of which words are functions, types
//! and keywords. This crate lets a site add its own, e.g. the names of an
//! engine's math types, before any highlighting pass reads the tables.
//!
//! ```
//! use highlight_keywords::{Augmenter, Bucket, LanguageRegistry, Registry};
//!
//! let mut aug = Augmenter::new(Registry::with_builtins());
//! aug.add_custom_fns(["lerp", "clamp"], None).unwrap();
//! aug.add_custom_names(["self"], Some("c")).unwrap();
//! aug.promote_types_and_keywords_to_literals(None).unwrap();
//!
//! let registry = aug.into_inner();
//! let literals = registry.get("c++").unwrap().keywords.bucket(Bucket::Literal).unwrap();
//! assert!(literals.contains(&"int".to_string()));
//! ```
pub mod augmenter;
pub mod config;
pub mod keywords;
pub mod languages;
pub mod registry;

pub use augmenter::{Augmenter, AugmenterConfig, PromoteMode, DEFAULT_LANGUAGE};
pub use config::{Augmentation, Config};
pub use keywords::{Bucket, Keywords};
pub use languages::LanguageDef;
pub use registry::{LanguageRegistry, Registry};

use thiserror::Error;

/// Errors that occur while augmenting keyword tables
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("language {language} has no {bucket} bucket")]
    MissingBucket { language: String, bucket: Bucket },

    #[error("unknown bucket name: {0}")]
    UnknownBucket(String),

    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to parse manifest: {0}")]
    Config(#[from] basic_toml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
