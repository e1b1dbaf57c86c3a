//! Placeholder polyfill for inputs in environments without native
//! placeholder support.

use super::{WidgetHandle, resolve};
use crate::Error;
use dom::{Document, NodeId};
use serde::Deserialize;
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

const HINT_COLOR: &str = "#999";
const INPUT_COLOR: &str = "#000";

/// When the hint text gets out of the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HideMode {
    /// Clear on focus, restore on blur if the field stayed empty.
    #[default]
    Focus,
    /// Keep the hint while typing starts: each key-up either restores
    /// the hint (field emptied) or strips the hint prefix the first time
    /// real input appears.
    Change,
}

impl FromStr for HideMode {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        match input {
            "focus" => Ok(Self::Focus),
            "change" => Ok(Self::Change),
            other => Err(Error::UnknownHideMode(other.into())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub hide: HideMode,
}

pub fn init_placeholder(
    doc: &mut Document,
    container: &str,
    config: &PlaceholderConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_placeholder_at(doc, node, config),
        None => Ok(None),
    }
}

/// No-op when the environment supports placeholders natively or the
/// field has no `placeholder` attribute. Otherwise the field is seeded
/// with the hint text in the hint color.
pub fn init_placeholder_at(
    doc: &mut Document,
    field: NodeId,
    config: &PlaceholderConfig,
) -> Result<Option<WidgetHandle>, Error> {
    if doc.supports_placeholder() {
        return Ok(None);
    }
    let Some(placeholder) = doc.attr(field, "placeholder").map(str::to_string) else {
        return Ok(None);
    };

    doc.set_css(field, "color", HINT_COLOR);
    doc.set_value(field, &placeholder);

    let handle = WidgetHandle::new();
    match config.hide {
        HideMode::Focus => {
            let hint = placeholder.clone();
            let id = doc.add_listener(field, "focus", move |doc, _| {
                if doc.value(field) == hint {
                    doc.set_css(field, "color", INPUT_COLOR);
                    doc.set_value(field, "");
                }
            });
            handle.track_listener(id);

            let hint = placeholder;
            let id = doc.add_listener(field, "blur", move |doc, _| {
                if doc.value(field).is_empty() {
                    doc.set_css(field, "color", HINT_COLOR);
                    doc.set_value(field, &hint);
                }
            });
            handle.track_listener(id);
        }
        HideMode::Change => {
            let showing_hint = Rc::new(Cell::new(true));
            let id = doc.add_listener(field, "keyup", move |doc, _| {
                let value = doc.value(field);
                if value.is_empty() {
                    doc.set_css(field, "color", HINT_COLOR);
                    doc.set_value(field, &placeholder);
                    showing_hint.set(true);
                } else if showing_hint.get() {
                    let typed: String = value.chars().skip(placeholder.chars().count()).collect();
                    doc.set_css(field, "color", INPUT_COLOR);
                    doc.set_value(field, &typed);
                    showing_hint.set(false);
                }
            });
            handle.track_listener(id);
        }
    }
    Ok(Some(handle))
}
