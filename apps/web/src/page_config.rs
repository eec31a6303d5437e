use crate::error::{WebError, WebErrorExt};
use tour::domain::config::PageConfig;
use tour::kernel::config::{FileFormat, load_config_str};

/// Reads the inline `<script type="application/json" id="page-config">` block.
///
/// A page without the block, or with an empty one, gets the defaults.
///
/// # Errors
/// [`WebError::Config`] when the block is not valid JSON or a value has the wrong type.
pub fn parse_page_config(raw: Option<&str>) -> Result<PageConfig, WebError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(PageConfig::default()),
        Some(raw) => {
            load_config_str::<PageConfig>(raw, FileFormat::Json).context("Reading #page-config")
        },
    }
}
