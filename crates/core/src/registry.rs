//! Explicit registry of per-module annotation databases.
//!
//! The registry replaces runtime lookup of generated table classes by name:
//! the application assembles it at startup with one entry per module, and the
//! index builder resolves module names against it.

use needle_api::AnnotationDatabase;
use std::collections::HashMap;
use std::sync::Arc;

/// Module name → generated annotation database.
#[derive(Default)]
pub struct DatabaseRegistry {
    databases: HashMap<String, Arc<dyn AnnotationDatabase>>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self {
            databases: HashMap::new(),
        }
    }

    /// Register a database under its own module name.
    ///
    /// Registering the same module twice replaces the earlier entry, so the
    /// aggregation result is the same as registering it once.
    pub fn register(&mut self, database: Arc<dyn AnnotationDatabase>) {
        self.databases
            .insert(database.module().to_string(), database);
    }

    /// Register several databases at once.
    pub fn register_batch(
        &mut self,
        databases: impl IntoIterator<Item = Arc<dyn AnnotationDatabase>>,
    ) {
        for database in databases {
            self.register(database);
        }
    }

    pub fn get(&self, module: &str) -> Option<&Arc<dyn AnnotationDatabase>> {
        self.databases.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.databases.contains_key(module)
    }

    /// Names of all registered modules, unordered.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.databases.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }
}
