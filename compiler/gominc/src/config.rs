//! Driver configuration.

use gomin_rewrite::RewriteOptions;

/// Extension of the files gomin rewrites.
pub const DEFAULT_EXTENSION: &str = ".go";

/// Inserted before the extension to form the output name.
pub const DEFAULT_SUFFIX: &str = "_min";

/// Settings for one `gomin` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinifyConfig {
    /// Extension marker located in the input path, e.g. `.go`.
    pub extension: String,
    /// Text inserted before the extension in the output path.
    pub suffix: String,
    pub rewrite: RewriteOptions,
    /// Suppress the rename report.
    pub quiet: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_owned(),
            suffix: DEFAULT_SUFFIX.to_owned(),
            rewrite: RewriteOptions::default(),
            quiet: false,
        }
    }
}
