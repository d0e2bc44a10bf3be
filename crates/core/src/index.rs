//! Merged annotation index and its builder.
//!
//! The `IndexBuilder` folds the per-module tables of every requested module
//! into a single `AnnotationIndex`. It's the mutable construction side; the
//! result is immutable and held for the rest of the process lifetime, so the
//! injection runtime can answer "which classes use this annotation kind"
//! without any startup-time scanning.

use crate::error::{NeedleError, Result};
use crate::registry::DatabaseRegistry;
use needle_api::{AnnotationDatabase, InjectionPoint};
use std::collections::{HashMap, HashSet};

/// Merged view over all aggregated annotation databases.
///
/// Built once at startup, read-only afterwards.
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    classes_by_annotation: HashMap<String, HashSet<InjectionPoint>>,
    injected_classes: HashSet<String>,
}

impl AnnotationIndex {
    /// Annotation-kind name → classes containing injection points of that
    /// kind, unioned across all aggregated modules.
    pub fn classes_containing_injection_points(&self) -> &HashMap<String, HashSet<InjectionPoint>> {
        &self.classes_by_annotation
    }

    /// All classes needing injection, unioned across all aggregated modules.
    pub fn injected_classes(&self) -> &HashSet<String> {
        &self.injected_classes
    }

    /// Classes containing injection points of the given annotation kind.
    pub fn classes_for(&self, annotation: &str) -> Option<&HashSet<InjectionPoint>> {
        self.classes_by_annotation.get(annotation)
    }

    pub fn is_injected(&self, class_name: &str) -> bool {
        self.injected_classes.contains(class_name)
    }

    /// All annotation kinds present in the index, unordered.
    pub fn annotation_kinds(&self) -> impl Iterator<Item = &str> {
        self.classes_by_annotation.keys().map(String::as_str)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            annotation_kinds: self.classes_by_annotation.len(),
            injection_points: self.classes_by_annotation.values().map(HashSet::len).sum(),
            injected_classes: self.injected_classes.len(),
        }
    }
}

/// Summary counts over a built index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub annotation_kinds: usize,
    pub injection_points: usize,
    pub injected_classes: usize,
}

/// Builds an `AnnotationIndex` from a registry and a module list.
///
/// Construction either yields a complete index covering every requested
/// module or fails; a partial index is never returned. A module without a
/// registered database is a packaging error, not a recoverable condition.
pub struct IndexBuilder<'a> {
    registry: &'a DatabaseRegistry,
    modules: Vec<String>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(registry: &'a DatabaseRegistry) -> Self {
        Self {
            registry,
            modules: Vec::new(),
        }
    }

    /// Set the modules to aggregate, in order.
    pub fn with_modules(mut self, modules: impl IntoIterator<Item = String>) -> Self {
        self.modules = modules.into_iter().collect();
        self
    }

    /// Resolve every module against the registry and fold its table into the
    /// merged index.
    pub fn build(self) -> Result<AnnotationIndex> {
        let mut index = AnnotationIndex::default();

        for module in &self.modules {
            let database =
                self.registry
                    .get(module)
                    .ok_or_else(|| NeedleError::MissingDatabase {
                        module: module.clone(),
                    })?;
            merge_database(&mut index, database.as_ref());
            tracing::debug!(module = %module, "merged annotation database");
        }

        Ok(index)
    }
}

/// Fold one module's table into the index: set union per annotation kind,
/// plus the union of injected classes. Unioning makes the fold idempotent;
/// seeing the same table twice changes nothing.
fn merge_database(index: &mut AnnotationIndex, database: &dyn AnnotationDatabase) {
    for (annotation, points) in database.classes_containing_injection_points() {
        index
            .classes_by_annotation
            .entry(annotation)
            .or_default()
            .extend(points);
    }
    index
        .injected_classes
        .extend(database.injected_classes());
}
