use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identifies a class that contains at least one injection point.
///
/// Descriptors are emitted by the offline annotation compiler, one per class,
/// and compare by value so that the same class reported by several module
/// tables collapses to a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InjectionPoint {
    /// Fully qualified name of the class containing the injection point(s).
    pub class_name: String,
}

impl InjectionPoint {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

impl std::fmt::Display for InjectionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class_name)
    }
}

/// Per-module annotation lookup table.
///
/// One implementation exists per code module, generated by the offline
/// annotation compiler. Tables are read-only: the aggregator folds them into
/// the merged index at startup and never calls back afterwards.
pub trait AnnotationDatabase: Send + Sync {
    /// Module name this table was generated for, e.g., "needle"
    fn module(&self) -> &str;

    /// Annotation-kind name → classes containing injection points of that
    /// kind, in the order the annotation compiler emitted them.
    fn classes_containing_injection_points(&self) -> HashMap<String, Vec<InjectionPoint>>;

    /// All classes in this module that need injection.
    fn injected_classes(&self) -> HashSet<String>;
}
