//! # Config Loader
//!
//! Locates configuration files on disk and decodes them with `json_codec`.
//!
//! ```no_run
//! use config_loader::{find_config_file, load_config_file, load_json_config};
//! use json_codec::JsonValue;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Raw text, caller decides how to parse
//!     let path = find_config_file("config.json")?;
//!     let content = load_config_file(&path)?;
//!
//!     // Decoded straight into any `FromJson` type
//!     let value: JsonValue = load_json_config(&path)?;
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use json_codec::FromJson;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the search in [`find_config_file`].
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Reads a configuration file into a string without interpreting it.
///
/// ```no_run
/// use config_loader::load_config_file;
///
/// let content = load_config_file("./config/config.json")?;
/// println!("Config content: {}", content);
/// # Ok::<(), config_loader::ConfigError>(())
/// ```
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Reads a file and decodes it as JSON into `T`.
pub fn load_json_config<T: FromJson, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = load_config_file(path)?;
    Ok(json_codec::from_str(&content)?)
}

/// Searches common locations for a configuration file.
///
/// Order:
/// 1. The path in `CONFIG_PATH`, if set and present
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    search_dirs(filename, &[Path::new("./config"), Path::new("./")]).ok_or_else(|| {
        ConfigError::FileNotFound(format!(
            "'{}' not found. Searched: {} env var, ./config/{}, ./{}",
            filename, CONFIG_PATH_ENV, filename, filename
        ))
    })
}

fn search_dirs(filename: &str, dirs: &[&Path]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// [`find_config_file`] followed by [`load_config_file`].
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}
