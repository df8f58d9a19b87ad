use std::collections::HashSet;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use super::path_ext::PathExt;

/// Why a directory is part of the search path.
///
/// The order of the variants is the search precedence, i.e. directories of
/// earlier tiers shadow units in directories of later tiers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DirectoryTier {
    EnvironmentInjected,
    AdministratorOverride,
    RuntimeGenerated,
    GeneratorOutput,
    PersistentConfig,
    VendorSupplied,
}

impl DirectoryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryTier::EnvironmentInjected => "environment",
            DirectoryTier::AdministratorOverride => "admin",
            DirectoryTier::RuntimeGenerated => "runtime",
            DirectoryTier::GeneratorOutput => "generator",
            DirectoryTier::PersistentConfig => "config",
            DirectoryTier::VendorSupplied => "vendor",
        }
    }
}

impl Display for DirectoryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory which may end up in the search path, not normalized yet
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidatePath {
    pub path: PathBuf,
    pub tier: DirectoryTier,
}

impl CandidatePath {
    pub fn new<P: Into<PathBuf>>(path: P, tier: DirectoryTier) -> Self {
        Self {
            path: path.into(),
            tier,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchPath {
    pub path: PathBuf,
    pub tier: DirectoryTier,
}

/// Ordered list of directories to look for unit files in, highest priority first.
/// No two entries are the same path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchPathSet(Vec<SearchPath>);

impl SearchPathSet {
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.0.iter().any(|entry| entry.path == path)
    }

    pub fn entries(&self) -> &[SearchPath] {
        &self.0
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.0.into_iter().map(|entry| entry.path).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> SearchPathSetIterator<'_> {
        SearchPathSetIterator {
            inner: self.0.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a SearchPathSet {
    type Item = &'a Path;
    type IntoIter = SearchPathSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct SearchPathSetIterator<'a> {
    inner: std::slice::Iter<'a, SearchPath>,
}

impl<'a> Iterator for SearchPathSetIterator<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.path.as_path())
    }
}

/// Makes every candidate absolute (relative ones are resolved against `base`)
/// and cleans it without touching the filesystem. Only the first occurrence
/// of every path is kept, the order is preserved.
pub fn normalize<I: IntoIterator<Item = CandidatePath>>(candidates: I, base: &Path) -> SearchPathSet {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut entries = Vec::new();

    for candidate in candidates {
        if candidate.path.as_os_str().is_empty() {
            continue;
        }

        let path = candidate.path.absolute_from(base);

        if seen.contains(&path) {
            continue;
        }

        seen.insert(path.clone());
        entries.push(SearchPath {
            path,
            tier: candidate.tier,
        });
    }

    SearchPathSet(entries)
}
