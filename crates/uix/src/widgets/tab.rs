//! Tab switcher.

use super::{WidgetHandle, resolve};
use crate::{Effect, Error, Speed};
use dom::{Document, NodeId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    /// Selector for the tab toggles, scoped to the container.
    #[serde(rename = "toggle")]
    pub toggle_selector: String,
    /// Selector for the content sheets, scoped to the container.
    #[serde(rename = "sheet")]
    pub sheet_selector: String,
    /// Class marking the active toggle.
    pub current_class: String,
    /// Reveal effect for the activated sheet.
    pub effect: Effect,
    /// Event type that switches tabs.
    pub trigger: String,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".tab__nav a".into(),
            sheet_selector: ".tab__sheet".into(),
            current_class: "current".into(),
            effect: Effect::Show,
            trigger: "click".into(),
        }
    }
}

pub fn init_tab(
    doc: &mut Document,
    container: &str,
    config: &TabConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_tab_at(doc, node, config),
        None => Ok(None),
    }
}

/// Bind the tab transition on every toggle: activation moves the current
/// class to the activated toggle and reveals the sheet at the same
/// position, hiding all others. Toggle/sheet correspondence is
/// positional.
pub fn init_tab_at(
    doc: &mut Document,
    container: NodeId,
    config: &TabConfig,
) -> Result<Option<WidgetHandle>, Error> {
    let toggles = doc.query_within(container, &config.toggle_selector)?;
    let sheets = doc.query_within(container, &config.sheet_selector)?;

    let handle = WidgetHandle::new();
    for (index, &toggle) in toggles.iter().enumerate() {
        let toggles = toggles.clone();
        let sheets = sheets.clone();
        let current_class = config.current_class.clone();
        let effect = config.effect;
        let id = doc.add_listener(toggle, &config.trigger, move |doc, _| {
            for &other in &toggles {
                doc.remove_class(other, &current_class);
            }
            doc.add_class(toggle, &current_class);
            for &sheet in &sheets {
                doc.hide(sheet);
            }
            if let Some(&sheet) = sheets.get(index) {
                effect.reveal(doc, sheet, Speed::default());
            }
        });
        handle.track_listener(id);
    }
    Ok(Some(handle))
}
