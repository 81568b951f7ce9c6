//! Where language definitions live
use crate::languages::{self, LanguageDef};
use std::collections::HashMap;

/// Lookup of language definitions by identifier.
///
/// The augmenter only ever talks to this trait, so any highlighter that keeps
/// its own language table can be augmented by implementing it.
pub trait LanguageRegistry {
    /// Find a language definition by name or alias
    fn get(&self, id: &str) -> Option<&LanguageDef>;
    /// Find a language definition by name or alias, for mutation
    fn get_mut(&mut self, id: &str) -> Option<&mut LanguageDef>;
}

impl<R: LanguageRegistry + ?Sized> LanguageRegistry for &mut R {
    fn get(&self, id: &str) -> Option<&LanguageDef> {
        (**self).get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut LanguageDef> {
        (**self).get_mut(id)
    }
}

/// An in memory table of language definitions
#[derive(Debug, Default, Clone)]
pub struct Registry {
    languages: HashMap<String, LanguageDef>,
    aliases: HashMap<String, String>,
}

impl Registry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built in language
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut result = Self::new();
        for def in languages::all() {
            result.register(def);
        }
        result
    }

    /// Register a language definition, replacing any with the same name
    pub fn register(&mut self, def: LanguageDef) {
        let name = def.name.to_lowercase();
        for alias in &def.aliases {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }
        self.languages.insert(name, def);
    }

    /// Names of every registered language, sorted
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.languages.values().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn resolve(&self, id: &str) -> Option<String> {
        let id = id.to_lowercase();
        if self.languages.contains_key(&id) {
            return Some(id);
        }
        self.aliases.get(&id).cloned()
    }
}

impl LanguageRegistry for Registry {
    fn get(&self, id: &str) -> Option<&LanguageDef> {
        let key = self.resolve(id)?;
        self.languages.get(&key)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut LanguageDef> {
        let key = self.resolve(id)?;
        self.languages.get_mut(&key)
    }
}
