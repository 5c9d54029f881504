//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Settings file name, looked up in the working directory first
pub const CONFIG_FILE_NAME: &str = "runman.json";

/// Home-directory fallback folder for the settings file
pub const CONFIG_DIR_NAME: &str = ".runman";

/// Log file used when the settings do not name one
pub const DEFAULT_LOG_FILE: &str = "runman.log";

/// Default file name offered when saving the collection
pub const DEFAULT_SAVE_FILE: &str = "collection.json";

/// Name given to interactively added requests when none is entered
pub const DEFAULT_REQUEST_NAME: &str = "New Request";

/// Method given to interactively added requests when none is entered
pub const DEFAULT_METHOD: &str = "GET";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
