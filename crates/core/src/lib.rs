pub mod error;
pub mod index;
pub mod logging;
pub mod modules;
pub mod registry;

pub use error::{NeedleError, Result};
pub use index::{AnnotationIndex, IndexBuilder, IndexStats};
pub use modules::{DEFAULT_MODULE, parse_module_list};
pub use registry::DatabaseRegistry;
