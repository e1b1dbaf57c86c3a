//! Dialog stub.
//!
//! The markup contract names a `dialog` widget type, but no dialog
//! behavior ships yet: opening validates the configuration and logs.
//! Nothing is rendered and no contract beyond the config shape is
//! promised.

use crate::Placement;
use dom::Document;
use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub title: String,
    pub content: String,
    pub modal: bool,
    pub position: Placement,
    pub auto_hide: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            modal: true,
            position: Placement::BottomLeft,
            auto_hide: false,
        }
    }
}

/// Validate and acknowledge an open request. A config with neither
/// title nor content is silently dropped.
pub fn open_dialog(_doc: &mut Document, config: &DialogConfig) {
    if config.title.is_empty() && config.content.is_empty() {
        return;
    }
    warn!(
        "dialog widget is not implemented; dropping open request (title {:?})",
        config.title
    );
}
