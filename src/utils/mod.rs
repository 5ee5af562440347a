//! Utility modules: paths, logging.

pub mod logging;
pub mod paths;

pub use logging::init_file_logging;
pub use paths::{app_dir, default_assets_dir, default_log_path};
