//! Cross-reference registry for one batch.
//!
//! Built once from every successfully extracted class before any class is
//! emitted, then shared read-only by all phase-2 workers.

use std::collections::BTreeMap;

use serde::Serialize;
use wrapgen_core::to_pascal_case;
use wrapgen_ir::ClassDescriptor;
use wrapgen_manifest::Manifest;

use crate::{ClassFailure, NamingCollisionError};

/// Where the wrapper for one batch class lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub qualified_name: String,
    pub wrapper_package: String,
    /// Wrapper type name before language escaping.
    pub wrapper_name: String,
    pub is_enum: bool,
}

impl RegistryEntry {
    /// Qualified wrapper name, e.g. `example.wrappers.Customer`.
    pub fn wrapper_qualified_name(&self) -> String {
        if self.wrapper_package.is_empty() {
            self.wrapper_name.clone()
        } else {
            format!("{}.{}", self.wrapper_package, self.wrapper_name)
        }
    }
}

/// Immutable index of batch classes and external type mappings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassRegistry {
    classes: BTreeMap<String, RegistryEntry>,
    external_types: BTreeMap<String, String>,
}

impl ClassRegistry {
    /// Register every class, reporting classes whose wrapper name is taken.
    ///
    /// Nested classes flatten `Outer$Inner` to `OuterInner`, so two host
    /// classes can claim one wrapper; the first in input order keeps it.
    pub fn build(classes: &[ClassDescriptor], manifest: &Manifest) -> (Self, Vec<ClassFailure>) {
        let mut registry = Self {
            classes: BTreeMap::new(),
            external_types: manifest.external_types.clone(),
        };
        let mut claimed: BTreeMap<(String, String), String> = BTreeMap::new();
        let mut failures = Vec::new();

        for class in classes {
            let entry = RegistryEntry {
                qualified_name: class.qualified_name.clone(),
                wrapper_package: manifest.wrapper_package(class.package()),
                wrapper_name: to_pascal_case(class.simple_name()),
                is_enum: class.is_enum,
            };
            let key = (entry.wrapper_package.clone(), entry.wrapper_name.clone());
            if let Some(owner) = claimed.get(&key) {
                failures.push(ClassFailure::new(
                    &class.qualified_name,
                    NamingCollisionError::new(
                        entry.wrapper_qualified_name(),
                        format!("wrapper name already taken by `{}`", owner),
                    ),
                ));
                continue;
            }
            claimed.insert(key, class.qualified_name.clone());
            registry
                .classes
                .insert(class.qualified_name.clone(), entry);
        }

        (registry, failures)
    }

    /// Drop a class whose wrapper will not be generated.
    ///
    /// References to it stop resolving, so dependents fail instead of
    /// pointing at a missing wrapper.
    pub fn remove(&mut self, qualified_name: &str) -> Option<RegistryEntry> {
        self.classes.remove(qualified_name)
    }

    /// Drop every class whose wrapper name `shadows` a type the target
    /// language relies on, reporting each as a naming collision.
    pub fn reject_shadowing(&mut self, shadows: impl Fn(&str) -> bool) -> Vec<ClassFailure> {
        let rejected: Vec<String> = self
            .classes
            .values()
            .filter(|entry| shadows(&entry.wrapper_name))
            .map(|entry| entry.qualified_name.clone())
            .collect();

        rejected
            .iter()
            .filter_map(|name| self.classes.remove(name))
            .map(|entry| {
                ClassFailure::new(
                    &entry.qualified_name,
                    NamingCollisionError::new(
                        entry.wrapper_qualified_name(),
                        format!("wrapper would shadow the standard type `{}`", entry.wrapper_name),
                    ),
                )
            })
            .collect()
    }

    /// The wrapper for a batch class.
    pub fn lookup(&self, qualified_name: &str) -> Option<&RegistryEntry> {
        self.classes.get(qualified_name)
    }

    /// The configured target expression for a type outside the batch.
    pub fn external(&self, qualified_name: &str) -> Option<&str> {
        self.external_types.get(qualified_name).map(String::as_str)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.classes.contains_key(qualified_name)
    }

    /// Entries ordered by qualified name.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_places_wrappers_under_suffix() {
        let classes = [
            ClassDescriptor::class("example.Customer"),
            ClassDescriptor::enumeration("example.CustomerType", ["RETAIL"]),
            ClassDescriptor::class("Orphan"),
        ];
        let (registry, failures) = ClassRegistry::build(&classes, &Manifest::default());
        assert!(failures.is_empty());
        assert_eq!(registry.len(), 3);

        let customer = registry.lookup("example.Customer").unwrap();
        assert_eq!(customer.wrapper_qualified_name(), "example.wrappers.Customer");
        assert!(registry.lookup("example.CustomerType").unwrap().is_enum);
        assert_eq!(
            registry.lookup("Orphan").unwrap().wrapper_qualified_name(),
            "wrappers.Orphan"
        );
    }

    #[test]
    fn test_nested_class_collision() {
        let classes = [
            ClassDescriptor::class("example.Outer$Inner"),
            ClassDescriptor::class("example.OuterInner"),
        ];
        let (registry, failures) = ClassRegistry::build(&classes, &Manifest::default());
        assert_eq!(registry.len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].class, "example.OuterInner");
        assert_eq!(failures[0].error.kind(), "naming collision");
    }

    #[test]
    fn test_reject_shadowing_and_remove() {
        let classes = [
            ClassDescriptor::class("example.Option"),
            ClassDescriptor::class("example.Customer"),
            ClassDescriptor::class("example.Order"),
        ];
        let (mut registry, _) = ClassRegistry::build(&classes, &Manifest::default());

        let failures = registry.reject_shadowing(|name| name == "Option");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].class, "example.Option");
        assert_eq!(failures[0].error.kind(), "naming collision");
        assert!(failures[0].error.to_string().contains("shadow the standard type `Option`"));
        assert!(!registry.contains("example.Option"));

        assert!(registry.remove("example.Customer").is_some());
        assert!(registry.remove("example.Customer").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_external_types() {
        let mut manifest = Manifest::default();
        manifest
            .external_types
            .insert("java.util.UUID".into(), "java.util.UUID".into());
        let (registry, _) = ClassRegistry::build(&[], &manifest);
        assert!(registry.is_empty());
        assert_eq!(registry.external("java.util.UUID"), Some("java.util.UUID"));
        assert_eq!(registry.external("java.time.Instant"), None);
    }
}
