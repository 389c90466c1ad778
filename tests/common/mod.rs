pub mod fixtures;

use pytt_help::{FramePlan, Preview, Viewport};
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Writes `config` to a temporary JSON file and loads a preview from it.
///
/// The file is returned so it outlives the preview's use in the test.
pub fn preview_from_json(config: &Value) -> Result<(Preview, NamedTempFile), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(serde_json::to_string(config)?.as_bytes())?;
    let preview = Preview::from_config_file(file.path())?;
    Ok((preview, file))
}

/// Frame plan with the stock configuration.
pub fn default_plan(url: &str, viewport: Viewport) -> FramePlan {
    Preview::default()
        .plan(url, viewport)
        .expect("default configuration is valid")
}
