//! Widget initializers.
//!
//! Every initializer shares one contract shape: resolve the container
//! (nothing found is a silent no-op returning `Ok(None)`), merge the
//! supplied configuration over the widget's defaults, bind listeners on
//! the container's descendants, and hand back a [`WidgetHandle`] that
//! unbinds everything again.

mod autohide;
mod dialog;
mod dropdown;
mod lazyload;
mod placeholder;
mod select;
mod smoothscroll;
mod tab;

pub use autohide::{AutoHideConfig, AutoHideTrigger, init_autohide, init_autohide_at};
pub use dialog::{DialogConfig, open_dialog};
pub use dropdown::{DropdownConfig, init_dropdown, init_dropdown_at};
pub use lazyload::{LazyloadConfig, init_lazyload};
pub use placeholder::{HideMode, PlaceholderConfig, init_placeholder, init_placeholder_at};
pub use select::{SelectConfig, init_select, init_select_at};
pub use smoothscroll::{SmoothScrollConfig, init_smoothscroll, init_smoothscroll_at};
pub use tab::{TabConfig, init_tab, init_tab_at};

use crate::Error;
use dom::{Document, ListenerId, NodeId, TimerId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct HandleState {
    listeners: Vec<ListenerId>,
    timers: Vec<TimerId>,
}

/// Disposer returned by every initializer: unbinds the widget's
/// listeners and cancels its pending timers, making re-initialization
/// safe.
pub struct WidgetHandle {
    state: Rc<RefCell<HandleState>>,
}

impl WidgetHandle {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HandleState::default())),
        }
    }

    pub(crate) fn track_listener(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.push(id);
    }

    /// A shared tracker for closures that bind listeners or schedule
    /// timers after initialization (auto-hide does both).
    pub(crate) fn tracker(&self) -> HandleTracker {
        HandleTracker(Rc::clone(&self.state))
    }

    /// Unbind every listener this widget bound and cancel its timers.
    pub fn dispose(self, doc: &mut Document) {
        let state = self.state.borrow_mut();
        for &id in &state.listeners {
            doc.remove_listener(id);
        }
        for &id in &state.timers {
            doc.cancel_timer(id);
        }
    }
}

#[derive(Clone)]
pub(crate) struct HandleTracker(Rc<RefCell<HandleState>>);

impl HandleTracker {
    pub(crate) fn track_listener(&self, id: ListenerId) {
        self.0.borrow_mut().listeners.push(id);
    }

    pub(crate) fn track_timer(&self, id: TimerId) {
        self.0.borrow_mut().timers.push(id);
    }
}

/// Resolve a container selector to its first match.
pub(crate) fn resolve(doc: &Document, selector: &str) -> Result<Option<NodeId>, Error> {
    Ok(doc.query_first(selector)?)
}
