//! Resolver boundary
//!
//! A resolver materializes an executable artifact on disk for a tool name
//! and an option set. Concrete strategies live behind [`ResolverFactory`]
//! so the install pipeline stays ignorant of resolution backends.

pub mod local;

use crate::error::{DotGetError, Result};
use std::path::PathBuf;

use local::LocalArtifactResolver;

/// Intent forwarded to resolvers so an update can be treated as a
/// re-fetch/upgrade rather than a fresh install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionType {
    Install,
    Update,
}

/// Option set supplied at install time: name-unique string pairs that keep
/// insertion order. Built once at construction, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    pairs: Vec<(String, String)>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.insert(key, value);
        }
        options
    }

    /// Insert a pair; a repeated name replaces the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Order-independent set equality.
impl PartialEq for ResolverOptions {
    fn eq(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self
                .pairs
                .iter()
                .all(|(k, v)| other.get(k) == Some(v.as_str()))
    }
}

impl Eq for ResolverOptions {}

pub trait Resolver {
    /// Materialize the executable artifact and return its path.
    fn resolve(&self) -> Result<PathBuf>;
}

pub trait ResolverFactory {
    fn get_resolver(
        &self,
        tool: &str,
        options: &ResolverOptions,
        resolution: ResolutionType,
    ) -> Result<Box<dyn Resolver>>;
}

/// Strategy selection for the built-in resolvers.
pub struct DefaultResolverFactory;

impl ResolverFactory for DefaultResolverFactory {
    fn get_resolver(
        &self,
        tool: &str,
        options: &ResolverOptions,
        resolution: ResolutionType,
    ) -> Result<Box<dyn Resolver>> {
        if let Some(path) = options.get("path") {
            return Ok(Box::new(LocalArtifactResolver::new(
                tool,
                path,
                resolution,
            )));
        }

        Err(DotGetError::NoResolver {
            tool: tool.to_string(),
            reason: "no 'path' option was given and no feed resolver is configured".into(),
        })
    }
}
