//! Configuration files
//!
//! YAML (de)serialization for any config type plus the standard location
//! under the platform config directory.
//!
//! ```ignore
//! use filebay_core::config::{default_config_path, load_config, save_config};
//!
//! let path = default_config_path("config.yaml");
//! let config: AppConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;

pub use io::{load_config, read_config, save_config};
pub use paths::{config_dir, default_config_path};
