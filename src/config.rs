use std::path::PathBuf;

/// Paths and switches for one generation run.
///
/// Every stage receives this (or values derived from it) explicitly; nothing
/// is read from ambient state, and the template is re-read on every run so
/// edits take effect without restarting.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Path of the HTML template.
    pub template_path: PathBuf,
    /// Path the assembled document is written to.
    pub dest_path: PathBuf,
    /// Whether to re-read and byte-compare the destination after writing.
    pub verify_after_save: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("assets/animals_template.html"),
            dest_path: PathBuf::from("animals.html"),
            verify_after_save: true,
        }
    }
}

impl GeneratorConfig {
    /// Override the template path.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Override the destination path.
    pub fn with_dest(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_path = path.into();
        self
    }

    /// Enable or disable the post-write verification read.
    pub fn with_verify_after_save(mut self, verify: bool) -> Self {
        self.verify_after_save = verify;
        self
    }
}
