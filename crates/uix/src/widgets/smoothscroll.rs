//! Smooth scrolling to per-link targets.

use super::{WidgetHandle, resolve};
use crate::{Easing, Error};
use dom::{Document, NodeId};
use log::warn;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Selector for the scroll triggers; each carries a `data-scroll`
    /// attribute naming its target (a Y offset or a selector).
    #[serde(rename = "toggle")]
    pub toggle_selector: String,
    pub easing: Easing,
    /// Scroll animation duration in milliseconds.
    pub duration: u64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            toggle_selector: "a".into(),
            easing: Easing::Swing,
            duration: 300,
        }
    }
}

pub fn init_smoothscroll(
    doc: &mut Document,
    container: &str,
    config: &SmoothScrollConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_smoothscroll_at(doc, node, config),
        None => Ok(None),
    }
}

/// Delegate clicks inside the container: the clicked element's
/// `data-scroll` is a numeric offset, or a selector whose element's top
/// offset is used; missing or unresolvable targets scroll to 0.
pub fn init_smoothscroll_at(
    doc: &mut Document,
    container: NodeId,
    config: &SmoothScrollConfig,
) -> Result<Option<WidgetHandle>, Error> {
    let toggles = selectors::parse_selector_list(&config.toggle_selector)?;
    let duration = Duration::from_millis(config.duration);
    let easing: dom::Easing = config.easing.into();

    let handle = WidgetHandle::new();
    let id = doc.add_delegated_listener(container, &toggles, "click", move |doc, ctx| {
        let target = doc.data(ctx.current, "scroll").unwrap_or("").to_string();
        let destination = scroll_target(doc, &target);
        doc.animate_scroll(destination, duration, easing);
    });
    handle.track_listener(id);
    Ok(Some(handle))
}

fn scroll_target(doc: &Document, target: &str) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    if let Ok(offset) = target.parse::<f64>() {
        return offset;
    }
    match doc.query_first(target) {
        Ok(Some(node)) => doc.offset(node).top,
        Ok(None) => 0.0,
        Err(error) => {
            warn!("bad data-scroll target {target:?}: {error}");
            0.0
        }
    }
}
