use derive_builder::Builder;
use std::path::PathBuf;

/// Scan parameters.
///
/// `extensions: None` accepts every extension; an empty list accepts none.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default)]
    pub extensions: Option<Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: None,
        }
    }
}
