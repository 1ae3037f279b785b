//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Packages keep insertion order; symbols within a package are sorted, so the
/// rendered import block is deterministic.
///
/// # Example
///
/// ```
/// use wrapgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_wildcard("scala.jdk.CollectionConverters");
/// imports.add("scala.collection.immutable", "ListMap");
///
/// let packages: Vec<_> = imports.iter().map(|(package, _)| package).collect();
/// assert_eq!(packages, ["scala.jdk.CollectionConverters", "scala.collection.immutable"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> symbols; `_` marks a wildcard import
    imports: IndexMap<String, BTreeSet<String>>,
}

/// Symbol recorded for a wildcard import.
pub const WILDCARD: &str = "_";

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import one symbol from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Import every member of a package or object.
    pub fn add_wildcard(&mut self, package: &str) {
        self.add(package, WILDCARD);
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (package, symbols) in &other.imports {
            self.imports
                .entry(package.clone())
                .or_default()
                .extend(symbols.iter().cloned());
        }
    }

    pub fn has_package(&self, package: &str) -> bool {
        self.imports.contains_key(package)
    }

    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol) || symbols.contains(WILDCARD))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
