//! Auto-hide panels driven by the custom `autohide` signal.

use super::{WidgetHandle, resolve};
use crate::{Effect, Error, Speed};
use dom::{Document, NodeId};
use serde::Deserialize;
use std::time::Duration;

/// What arms the hide once the `autohide` signal arrives: a delay in
/// milliseconds, or a selector whose element's click hides the panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AutoHideTrigger {
    Delay(u64),
    Selector(String),
}

impl Default for AutoHideTrigger {
    fn default() -> Self {
        Self::Selector("body".into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AutoHideConfig {
    pub trigger: AutoHideTrigger,
    pub effect: Effect,
}

pub fn init_autohide(
    doc: &mut Document,
    container: &str,
    config: &AutoHideConfig,
) -> Result<Option<WidgetHandle>, Error> {
    match resolve(doc, container)? {
        Some(node) => init_autohide_at(doc, node, config),
        None => Ok(None),
    }
}

/// Nothing happens until the `autohide` signal is dispatched on the
/// container; the signal is synthetic and must come from the host.
/// A delay trigger then schedules the hide; a selector trigger binds a
/// click on that element to hide the container. A trigger selector that
/// resolves to nothing is a no-op.
pub fn init_autohide_at(
    doc: &mut Document,
    container: NodeId,
    config: &AutoHideConfig,
) -> Result<Option<WidgetHandle>, Error> {
    // Surface a bad trigger selector now rather than at signal time.
    if let AutoHideTrigger::Selector(selector) = &config.trigger {
        selectors::parse_selector_list(selector)?;
    }

    let handle = WidgetHandle::new();
    let tracker = handle.tracker();
    let trigger = config.trigger.clone();
    let effect = config.effect;

    let id = doc.add_listener(container, "autohide", move |doc, _| match &trigger {
        AutoHideTrigger::Delay(ms) => {
            let timer = doc.set_timeout(Duration::from_millis(*ms), move |doc| {
                effect.conceal(doc, container, Speed::default());
            });
            tracker.track_timer(timer);
        }
        AutoHideTrigger::Selector(selector) => {
            let Ok(Some(target)) = doc.query_first(selector) else {
                return;
            };
            let tracker = tracker.clone();
            let listener = doc.add_listener(target, "click", move |doc, _| {
                effect.conceal(doc, container, Speed::default());
            });
            tracker.track_listener(listener);
        }
    });
    handle.track_listener(id);
    Ok(Some(handle))
}
