pub mod database;
pub mod metadata;

// Re-export commonly used types
pub use database::{AnnotationDatabase, InjectionPoint};
pub use metadata::{MetadataError, MetadataResult, MetadataSource};
