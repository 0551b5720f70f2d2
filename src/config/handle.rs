//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is loaded once in `main`
//! and installed with [`init_config`]; the build and the serve loop read it
//! through [`cfg`].

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Initialized with the default config, replaced with the loaded one in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`. Thread-safe and wait-free.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the loaded config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_replaces_default() {
        let mut config = SiteConfig::default();
        config.base.title = "Installed".into();
        init_config(config);

        assert_eq!(cfg().base.title, "Installed");
    }
}
