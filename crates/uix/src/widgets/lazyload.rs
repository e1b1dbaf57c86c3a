//! Scroll-driven progressive image loading.

use super::WidgetHandle;
use crate::{Error, throttle};
use dom::{Document, ListenerId, NodeId};
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LazyloadConfig {
    /// Selector marking candidate images; each stages its real source in
    /// `data-src`.
    pub selector: String,
    /// Throttle window for the scroll listener, in milliseconds.
    pub throttle_ms: u64,
}

impl Default for LazyloadConfig {
    fn default() -> Self {
        Self {
            selector: ".lazy".into(),
            throttle_ms: 50,
        }
    }
}

/// Start lazyloading: candidates whose top offset is inside the
/// viewport's bottom bound get their `src` assigned from `data-src` and
/// leave the candidate set for good. One pass runs immediately so
/// above-the-fold images load without a scroll; the rest load from a
/// throttled scroll listener that detaches itself once the set empties.
pub fn init_lazyload(
    doc: &mut Document,
    config: &LazyloadConfig,
) -> Result<Option<WidgetHandle>, Error> {
    let candidates = doc.query(&config.selector)?;
    if candidates.is_empty() {
        return Ok(None);
    }

    let pending = Rc::new(RefCell::new(candidates));
    let listener: Rc<RefCell<Option<ListenerId>>> = Rc::new(RefCell::new(None));

    assign_visible(doc, &pending, &listener);
    if pending.borrow().is_empty() {
        return Ok(None);
    }

    let handle = WidgetHandle::new();
    let scroll_handler = {
        let pending = Rc::clone(&pending);
        let listener = Rc::clone(&listener);
        throttle(
            Duration::from_millis(config.throttle_ms),
            move |doc, _| assign_visible(doc, &pending, &listener),
        )
    };
    let id = doc.add_listener(doc.root(), "scroll", scroll_handler);
    *listener.borrow_mut() = Some(id);
    handle.track_listener(id);
    Ok(Some(handle))
}

/// Partition the candidate set against the current viewport bound,
/// assigning sources to everything now visible. Detaches the scroll
/// listener when nothing is left.
fn assign_visible(
    doc: &mut Document,
    pending: &Rc<RefCell<Vec<NodeId>>>,
    listener: &Rc<RefCell<Option<ListenerId>>>,
) {
    let bound = doc.scroll_top() + doc.viewport_height();
    pending.borrow_mut().retain(|&image| {
        if doc.offset(image).top <= bound {
            if let Some(source) = doc.data(image, "src").map(str::to_string) {
                doc.set_attr(image, "src", &source);
            }
            false
        } else {
            true
        }
    });
    if pending.borrow().is_empty()
        && let Some(id) = listener.borrow_mut().take()
    {
        doc.remove_listener(id);
    }
}
