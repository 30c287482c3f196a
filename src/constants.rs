//! Application-wide constants.

/// The display name of the window manager.
pub const APP_NAME: &str = "Perch";

/// Directory under the user configuration root holding Perch files.
pub const CONFIG_DIR_NAME: &str = "perch";

/// The configuration file name.
pub const CONFIG_FILE_NAME: &str = "perch.toml";
