mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{AllocatorConfig, CONFIG_VERSION, Config, DEFAULT_COUNT, OutputConfig};
pub use validation::{config_warnings, validate_config_semantics};
