//! Config Commands

use log::{info, warn};

use crate::models::SiteConfig;

/// `<script type="application/json">` element that may override the build config
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Page-embedded config if present and valid, else build-time defaults
pub fn load_site_config() -> SiteConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(json) = embedded else {
        return SiteConfig::from_build_env();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            info!("[CONFIG] using page config");
            config
        }
        Err(e) => {
            warn!("[CONFIG] ignoring page config: {}", e);
            SiteConfig::from_build_env()
        }
    }
}
