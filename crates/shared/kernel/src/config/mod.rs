use config::{Config, File};
pub use config::FileFormat;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, info};

/// Custom error type for config loading.
#[tour_derive::tour_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Deserializes configuration from an inline source (e.g. a JSON `<script>` block).
///
/// Missing keys fall back to the target type's serde defaults, so a page only needs to
/// carry the values it overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] if `raw` is not valid `format` or does not match `T`.
///
/// # Example
/// ```rust
/// use tour_domain::config::PageConfig;
/// use tour_kernel::config::{FileFormat, load_config_str};
///
/// let cfg: PageConfig =
///     load_config_str(r#"{ "booking": { "endpoint": "/api/book" } }"#, FileFormat::Json).unwrap();
/// assert_eq!(cfg.booking.endpoint, "/api/book");
/// assert_eq!(cfg.effects.delay_ms, 150);
/// ```
pub fn load_config_str<T>(raw: &str, format: FileFormat) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    debug!(?format, bytes = raw.len(), "Loading inline config");

    let config = Config::builder()
        .add_source(File::from_str(raw, format))
        .build()
        .context("Failed to build inline config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize inline config")?;

    Ok(config)
}

/// A configuration loader that combines file-based settings with environment overrides.
///
/// 1. **Base File**: Loads settings from a file (e.g., `page.toml`). If no path is provided, it
///    defaults to `"page"` in the current working directory.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `TOUR__`.
///    Nested structures use double underscores (e.g., `TOUR__BOOKING__ENDPOINT` maps to
///    `booking.endpoint`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config<T>(path: Option<impl AsRef<std::path::Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    use config::Environment;
    use std::path::PathBuf;

    let effective_path = path.map_or_else(|| PathBuf::from("page"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("TOUR").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
