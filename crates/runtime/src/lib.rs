use needle_api::MetadataSource;
use needle_core::{AnnotationIndex, DatabaseRegistry, IndexBuilder, Result, parse_module_list};

pub mod manifest;
pub use manifest::{JsonManifestSource, StaticMetadataSource};

/// Conventional metadata key listing the modules that contribute annotation
/// databases.
pub const ANNOTATION_MODULES_KEY: &str = "needle.annotations.modules";

/// Bootstraps the merged annotation index for the injection runtime.
///
/// Reads the module list from the packaging metadata, resolves every module
/// (plus the framework's own) against the registry, and folds the tables into
/// one index. Unreadable metadata only means the app declares no extra
/// modules; a module whose table is missing from the registry is a packaging
/// error and fails the whole bootstrap. The caller decides whether to abort.
pub fn build_annotation_index(
    source: &dyn MetadataSource,
    registry: &DatabaseRegistry,
) -> Result<AnnotationIndex> {
    let value = match source.value(ANNOTATION_MODULES_KEY) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("packaging metadata not readable, loading no extra modules: {e}");
            None
        }
    };

    let modules = parse_module_list(value.as_deref());
    tracing::debug!(?modules, "aggregating annotation databases");

    IndexBuilder::new(registry)
        .with_modules(modules)
        .build()
        .inspect_err(|e| tracing::error!("failed to build annotation index: {e}"))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str) -> Option<impl Drop> {
    Some(needle_core::logging::init_logging(component, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use needle_api::{AnnotationDatabase, InjectionPoint, MetadataError, MetadataResult};
    use needle_core::{DEFAULT_MODULE, NeedleError};
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    struct EmptyTable(String);

    impl AnnotationDatabase for EmptyTable {
        fn module(&self) -> &str {
            &self.0
        }

        fn classes_containing_injection_points(&self) -> HashMap<String, Vec<InjectionPoint>> {
            HashMap::from([(
                "inject".to_string(),
                vec![InjectionPoint::new(format!("{}.Generated", self.0))],
            )])
        }

        fn injected_classes(&self) -> HashSet<String> {
            HashSet::from([format!("{}.Generated", self.0)])
        }
    }

    fn registry_with(modules: &[&str]) -> DatabaseRegistry {
        let mut registry = DatabaseRegistry::new();
        for module in modules {
            registry.register(Arc::new(EmptyTable(module.to_string())));
        }
        registry
    }

    struct BrokenSource;

    impl MetadataSource for BrokenSource {
        fn value(&self, _key: &str) -> MetadataResult<Option<String>> {
            Err(MetadataError::Unreadable {
                reason: "store offline".to_string(),
            })
        }
    }

    #[test]
    fn bootstrap_merges_configured_and_default_modules() {
        let source =
            StaticMetadataSource::new().with_value(ANNOTATION_MODULES_KEY, "app, lib");
        let registry = registry_with(&["app", "lib", DEFAULT_MODULE]);

        let index = build_annotation_index(&source, &registry).unwrap();
        assert!(index.is_injected("app.Generated"));
        assert!(index.is_injected("lib.Generated"));
        assert!(index.is_injected("needle.Generated"));
    }

    #[test]
    fn no_metadata_value_loads_only_the_default_module() {
        let source = StaticMetadataSource::new();
        let registry = registry_with(&[DEFAULT_MODULE]);

        let index = build_annotation_index(&source, &registry).unwrap();
        assert_eq!(index.injected_classes().len(), 1);
        assert!(index.is_injected("needle.Generated"));
    }

    #[test]
    fn unreadable_metadata_is_a_warning_not_a_failure() {
        let registry = registry_with(&[DEFAULT_MODULE]);

        let index = build_annotation_index(&BrokenSource, &registry).unwrap();
        assert!(index.is_injected("needle.Generated"));
    }

    #[test]
    fn missing_default_table_is_fatal() {
        // Even with readable metadata, the framework's own table must exist.
        let source = StaticMetadataSource::new();
        let registry = DatabaseRegistry::new();

        let result = build_annotation_index(&source, &registry);
        match result {
            Err(NeedleError::MissingDatabase { module }) => assert_eq!(module, DEFAULT_MODULE),
            other => panic!("expected MissingDatabase, got {other:?}"),
        }
    }

    #[test]
    fn missing_configured_table_is_fatal() {
        let source = StaticMetadataSource::new().with_value(ANNOTATION_MODULES_KEY, "ghost");
        let registry = registry_with(&[DEFAULT_MODULE]);

        assert!(build_annotation_index(&source, &registry).is_err());
    }
}
