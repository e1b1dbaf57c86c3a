//! Event listener registry and synthetic dispatch.
//!
//! Listeners are bound per node and fire in registration order. Dispatch
//! bubbles from the target to the document root; a delegated listener on
//! an ancestor fires when some node on the target path below it matches
//! its delegate selector, with that node as the listener's `current`.
//!
//! Handlers may freely mutate the document — bind or unbind listeners,
//! dispatch further events, schedule timers. The handler set for one
//! dispatch is snapshotted up front, and a listener removed mid-dispatch
//! does not fire.

use crate::Document;
use crate::node::NodeData;
use indextree::NodeId;
use selectors::SelectorList;
use std::rc::Rc;

/// Identifier of a bound listener, usable for unbinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Context passed to event handlers.
#[derive(Debug, Clone)]
pub struct EventContext {
    /// The event type (e.g. "click", "scroll", "autohide").
    pub event_type: String,
    /// The node the event was dispatched at.
    pub target: NodeId,
    /// For direct listeners, the node the listener is bound to; for
    /// delegated listeners, the descendant that matched the selector.
    pub current: NodeId,
}

/// Type-erased event handler. `Rc`, not `Arc`: the page environment is
/// single-threaded by contract.
pub type Handler = Rc<dyn Fn(&mut Document, &EventContext)>;

pub(crate) struct Listener {
    id: ListenerId,
    node: NodeId,
    event_type: String,
    delegate: Option<SelectorList>,
    handler: Handler,
}

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl ListenerRegistry {
    fn insert(
        &mut self,
        node: NodeId,
        event_type: &str,
        delegate: Option<SelectorList>,
        handler: Handler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            node,
            event_type: event_type.into(),
            delegate,
            handler,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    pub(crate) fn remove_for_node(&mut self, node: NodeId) {
        self.listeners.retain(|listener| listener.node != node);
    }

    fn is_live(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|listener| listener.id == id)
    }
}

impl Document {
    /// Bind a handler for `event_type` on `node`.
    pub fn add_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        handler: impl Fn(&mut Document, &EventContext) + 'static,
    ) -> ListenerId {
        self.listeners
            .insert(node, event_type, None, Rc::new(handler))
    }

    /// Bind a delegated handler on `node`: it fires when the event target
    /// (or one of its ancestors below `node`) matches `selector`.
    pub fn add_delegated_listener(
        &mut self,
        node: NodeId,
        selector: &SelectorList,
        event_type: &str,
        handler: impl Fn(&mut Document, &EventContext) + 'static,
    ) -> ListenerId {
        self.listeners
            .insert(node, event_type, Some(selector.clone()), Rc::new(handler))
    }

    /// Unbind a listener. Returns false if it was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Dispatch an event at `target`, bubbling to the document root.
    pub fn dispatch(&mut self, target: NodeId, event_type: &str) {
        if self.arena.get(target).is_none_or(indextree::Node::is_removed) {
            return;
        }
        let path: Vec<NodeId> = target.ancestors(&self.arena).collect();

        // Snapshot the matching listeners before running any handler.
        let mut plan: Vec<(ListenerId, Handler, EventContext)> = Vec::new();
        for &node in &path {
            for listener in &self.listeners.listeners {
                if listener.node != node || listener.event_type != event_type {
                    continue;
                }
                let current = match &listener.delegate {
                    None => Some(node),
                    Some(selector) => path
                        .iter()
                        .take_while(|&&candidate| candidate != node)
                        .copied()
                        .find(|&candidate| {
                            self.node_matches_list(candidate, selector)
                        }),
                };
                if let Some(current) = current {
                    plan.push((
                        listener.id,
                        Rc::clone(&listener.handler),
                        EventContext {
                            event_type: event_type.into(),
                            target,
                            current,
                        },
                    ));
                }
            }
        }

        for (id, handler, context) in plan {
            if self.listeners.is_live(id) {
                handler(self, &context);
            }
        }
    }

    fn node_matches_list(&self, node: NodeId, selector: &SelectorList) -> bool {
        self.node(node).is_some_and(NodeData::is_element)
            && selectors::matches_selector_list(self, node, selector)
    }
}
