//! Errors raised while loading and checking `folio.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not a valid folio config")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("config file `{0}` not found")]
    MissingConfig(PathBuf),

    #[error("[build.data] `{0}` not found")]
    MissingData(PathBuf),

    #[error("[view.page_size] must be greater than 0")]
    PageSizeZero,

    #[error("[base.url] `{0}` must start with http:// or https://")]
    UrlScheme(String),

    #[error("[base.url] is required when [build.rss] is enabled")]
    RssNeedsUrl,
}
