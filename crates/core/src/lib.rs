pub mod error;
pub mod logging;
pub mod util;

pub mod classify;
pub mod include;
pub mod ops;
pub mod path;
pub mod registry;
pub mod scan;
pub mod shell;

pub use classify::Classifier;
pub use error::Result;
pub use include::resolve_includes;
pub use registry::{AssetCategory, ExtensionRegistry, NativeKind};
pub use scan::DirectoryScanner;
