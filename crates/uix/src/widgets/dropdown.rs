//! Dropdown panel.

use super::{WidgetHandle, resolve};
use crate::{Effect, Error, Speed};
use dom::{Document, NodeId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    #[serde(rename = "toggle")]
    pub toggle_selector: String,
    #[serde(rename = "content")]
    pub content_selector: String,
    pub trigger: String,
    pub effect: Effect,
    /// Gap between the container's bottom edge and the panel, in pixels.
    pub offset: f64,
    pub speed: Speed,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".dropdown__trigger".into(),
            content_selector: ".dropdown__content".into(),
            trigger: "click".into(),
            effect: Effect::Show,
            offset: 5.0,
            speed: Speed::Fast,
        }
    }
}

pub fn init_dropdown(
    doc: &mut Document,
    container: &str,
    config: &DropdownConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_dropdown_at(doc, node, config),
        None => Ok(None),
    }
}

/// Pre-position the panel under the container (bind time only; nothing
/// re-computes on resize) and flip its visibility on the trigger event.
pub fn init_dropdown_at(
    doc: &mut Document,
    container: NodeId,
    config: &DropdownConfig,
) -> Result<Option<WidgetHandle>, Error> {
    let toggles = doc.query_within(container, &config.toggle_selector)?;
    let contents = doc.query_within(container, &config.content_selector)?;

    for &content in &contents {
        doc.set_css_px(content, "width", doc.width(container) - 2.0);
        doc.set_css_px(content, "top", doc.height(container) + config.offset);
    }

    let handle = WidgetHandle::new();
    for &toggle in &toggles {
        let contents = contents.clone();
        let effect = config.effect;
        let speed = config.speed;
        let id = doc.add_listener(toggle, &config.trigger, move |doc, _| {
            for &content in &contents {
                effect.toggle(doc, content, speed);
            }
        });
        handle.track_listener(id);
    }
    Ok(Some(handle))
}
