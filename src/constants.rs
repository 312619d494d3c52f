//! Constants used throughout the view engine

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["view-engine.json", "view-engine.yaml", "view-engine.yml"];

/// Default option values applied when neither the host nor an override sets a field.
pub mod defaults {
    pub const ROOT_PATH: &str = ".";
    pub const VIEW_PATH: &str = "views";
    pub const PARTIAL_PATH: &str = "partials";
    pub const LAYOUT_PATH: &str = "layouts";
    pub const EXT_NAME: &str = ".hbs";
    pub const LAYOUT: &str = "main";
}

/// Name of the data field a layout receives the rendered view under.
pub const LAYOUT_BODY_KEY: &str = "body";

/// Separator used when joining path segments.
pub const PATH_SEPARATOR: &str = "/";

/// URL schemes the default fetch understands besides plain paths.
pub mod schemes {
    pub const FILE: &str = "file";
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
}
