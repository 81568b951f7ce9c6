//! Keyword buckets of a language definition
//!
//! A highlighter colours each bucket differently, e.g. `built_in` for library
//! functions and `literal` for constants such as `true` or `nullptr`.
use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named category of tokens within a keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    /// Built in functions, `built_in`
    #[serde(rename = "built_in")]
    BuiltIn,
    /// Type names, `type`
    #[serde(rename = "type")]
    Type,
    /// Plain keywords, `keyword`
    #[serde(rename = "keyword")]
    Keyword,
    /// Literal values, `literal`
    #[serde(rename = "literal")]
    Literal,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::BuiltIn, Bucket::Type, Bucket::Keyword, Bucket::Literal];

    /// The name a highlighter uses for this bucket
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Bucket::BuiltIn => "built_in",
            Bucket::Type => "type",
            Bucket::Keyword => "keyword",
            Bucket::Literal => "literal",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| Error::UnknownBucket(s.to_string()))
    }
}

/// The keyword table of a language.
///
/// A slot set to `None` means the language has no such bucket at all,
/// which is different from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    pub built_in: Option<Vec<String>>,
    pub r#type: Option<Vec<String>>,
    pub keyword: Option<Vec<String>>,
    pub literal: Option<Vec<String>>,
}

impl Keywords {
    /// Creates a keyword table with every bucket present and empty
    #[must_use]
    pub fn new() -> Self {
        Self {
            built_in: Some(vec![]),
            r#type: Some(vec![]),
            keyword: Some(vec![]),
            literal: Some(vec![]),
        }
    }

    /// Fills a bucket, creating it if needed (used when building definitions)
    #[must_use]
    pub fn with(mut self, bucket: Bucket, tokens: &[&str]) -> Self {
        *self.slot_mut(bucket) = Some(tokens.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Removes a bucket entirely
    #[must_use]
    pub fn without(mut self, bucket: Bucket) -> Self {
        *self.slot_mut(bucket) = None;
        self
    }

    pub fn bucket(&self, bucket: Bucket) -> Option<&Vec<String>> {
        match bucket {
            Bucket::BuiltIn => self.built_in.as_ref(),
            Bucket::Type => self.r#type.as_ref(),
            Bucket::Keyword => self.keyword.as_ref(),
            Bucket::Literal => self.literal.as_ref(),
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> Option<&mut Vec<String>> {
        self.slot_mut(bucket).as_mut()
    }

    fn slot_mut(&mut self, bucket: Bucket) -> &mut Option<Vec<String>> {
        match bucket {
            Bucket::BuiltIn => &mut self.built_in,
            Bucket::Type => &mut self.r#type,
            Bucket::Keyword => &mut self.keyword,
            Bucket::Literal => &mut self.literal,
        }
    }

    /// Builds a whole-word regex matching any token in a bucket.
    ///
    /// Tokens are escaped, so regex metacharacters within them match literally.
    /// A word boundary is only required on a side of a token that ends in a
    /// word character, so `println!` or `operator<<` still match.
    /// Longer tokens are tried first.
    /// Returns `Ok(None)` when the bucket is missing or empty.
    ///
    /// # Example
    /// ```
    /// use highlight_keywords::{Bucket, Keywords};
    ///
    /// let kw = Keywords::new().with(Bucket::Type, &["vec3", "mat4"]);
    /// let re = kw.pattern(Bucket::Type).unwrap().unwrap();
    /// assert!(re.is_match("vec3 pos;"));
    /// assert!(!re.is_match("vec34 pos;"));
    /// ```
    pub fn pattern(&self, bucket: Bucket) -> Result<Option<Regex>, regex::Error> {
        let mut tokens: Vec<&str> = match self.bucket(bucket) {
            Some(tokens) => tokens.iter().map(String::as_str).filter(|t| !t.is_empty()).collect(),
            None => return Ok(None),
        };
        if tokens.is_empty() {
            return Ok(None);
        }
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = tokens.into_iter().map(bounded).collect::<Vec<_>>().join("|");
        Regex::new(&format!("({alternation})")).map(Some)
    }
}

fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Escapes a token and adds `\b` on the sides that start or end with a word character
fn bounded(token: &str) -> String {
    let start = if token.starts_with(is_word) { r"\b" } else { "" };
    let end = if token.ends_with(is_word) { r"\b" } else { "" };
    format!("{start}{}{end}", regex::escape(token))
}
