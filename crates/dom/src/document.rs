//! The document: arena-backed element tree plus page-level state.

use crate::animate::AnimationRegistry;
use crate::cookies::CookieJar;
use crate::events::ListenerRegistry;
use crate::geometry::{LayoutBox, Offset};
use crate::node::{NodeData, NodeKind};
use crate::timers::TimerQueue;
use chrono::{DateTime, Utc};
use indextree::{Arena, NodeId};
use selectors::{ElementAdapter, SelectorList};
use std::time::Duration;

/// Default viewport height in CSS pixels.
const DEFAULT_VIEWPORT_HEIGHT: f64 = 768.0;
/// Default animation step interval (one frame at ~60 Hz).
const DEFAULT_ANIMATION_TICK: Duration = Duration::from_millis(16);

/// A headless page: element tree, listeners, timers, animations, viewport
/// scroll state, and the cookie store.
pub struct Document {
    pub(crate) arena: Arena<NodeData>,
    root: NodeId,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) timers: TimerQueue,
    pub(crate) animations: AnimationRegistry,
    scroll_top: f64,
    viewport_height: f64,
    cookies: CookieJar,
    loaded: bool,
    supports_placeholder: bool,
    animation_tick: Duration,
    /// Wall-clock anchor for the virtual clock; cookie expiry is judged
    /// against `wall_base + now()`.
    wall_base: DateTime<Utc>,
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::default());
        Self {
            arena,
            root,
            listeners: ListenerRegistry::default(),
            timers: TimerQueue::default(),
            animations: AnimationRegistry::default(),
            scroll_top: 0.0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            cookies: CookieJar::default(),
            loaded: false,
            supports_placeholder: true,
            animation_tick: DEFAULT_ANIMATION_TICK,
            wall_base: Utc::now(),
        }
    }

    /// The document root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.arena
            .get_mut(id)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get_mut)
    }

    // ----- tree building -----

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(NodeData::element(tag))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(NodeData::text(text))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Create an element and append it to `parent` in one step.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    /// Remove a node and its subtree, dropping any listeners bound inside.
    pub fn remove_node(&mut self, node: NodeId) {
        let removed: Vec<NodeId> = node.descendants(&self.arena).collect();
        for id in removed {
            self.listeners.remove_for_node(id);
        }
        node.remove_subtree(&mut self.arena);
    }

    /// Tag name of an element node, empty string otherwise.
    pub fn tag(&self, node: NodeId) -> &str {
        self.node(node).map_or("", NodeData::tag)
    }

    /// Parent node, if attached.
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(indextree::Node::parent)
    }

    /// Child element nodes in document order.
    pub fn children_elements(&self, node: NodeId) -> Vec<NodeId> {
        node.children(&self.arena)
            .filter(|&child| self.node(child).is_some_and(NodeData::is_element))
            .collect()
    }

    /// Child elements with the given tag name.
    pub fn child_elements_by_tag(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.children_elements(node)
            .into_iter()
            .filter(|&child| self.node(child).is_some_and(|data| data.tag() == tag))
            .collect()
    }

    // ----- attributes and classes -----

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .and_then(|data| data.attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.attrs.insert(name.into(), value.into());
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(data) = self.node_mut(node) {
            data.attrs.remove(name);
        }
    }

    /// Read a `data-*` attribute: `data(node, "src")` reads `data-src`.
    pub fn data(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .and_then(|data| data.attrs.get(&format!("data-{name}")))
            .map(String::as_str)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attr(node, "class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|token| token == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut list = self.attr(node, "class").unwrap_or("").to_string();
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
        self.set_attr(node, "class", &list);
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        let Some(list) = self.attr(node, "class") else {
            return;
        };
        let kept: Vec<&str> = list
            .split_ascii_whitespace()
            .filter(|token| *token != class)
            .collect();
        let joined = kept.join(" ");
        self.set_attr(node, "class", &joined);
    }

    pub fn toggle_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            self.remove_class(node, class);
        } else {
            self.add_class(node, class);
        }
    }

    // ----- inline CSS -----

    pub fn css(&self, node: NodeId, prop: &str) -> Option<&str> {
        self.node(node)
            .and_then(|data| data.css.get(prop))
            .map(String::as_str)
    }

    pub fn set_css(&mut self, node: NodeId, prop: &str, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.css.insert(prop.into(), value.into());
        }
    }

    /// Numeric pixel value of an inline property, accepting `12px` or `12`.
    pub fn css_px(&self, node: NodeId, prop: &str) -> Option<f64> {
        self.css(node, prop)
            .map(|value| value.trim_end_matches("px"))
            .and_then(|value| value.parse().ok())
    }

    pub fn set_css_px(&mut self, node: NodeId, prop: &str, value: f64) {
        self.set_css(node, prop, &format!("{value}px"));
    }

    // ----- visibility -----

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|data| !data.hidden)
    }

    pub fn show(&mut self, node: NodeId) {
        if let Some(data) = self.node_mut(node) {
            data.hidden = false;
        }
    }

    pub fn hide(&mut self, node: NodeId) {
        if let Some(data) = self.node_mut(node) {
            data.hidden = true;
        }
    }

    pub fn toggle(&mut self, node: NodeId) {
        if let Some(data) = self.node_mut(node) {
            data.hidden = !data.hidden;
        }
    }

    // ----- text and form value -----

    /// Concatenated text content of the subtree.
    pub fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in node.descendants(&self.arena) {
            if let Some(NodeData {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(id)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace the node's children with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        let children: Vec<NodeId> = node.children(&self.arena).collect();
        for child in children {
            self.remove_node(child);
        }
        let text_node = self.create_text(text);
        self.append_child(node, text_node);
    }

    /// Form value of an input-like element.
    pub fn value(&self, node: NodeId) -> String {
        self.node(node).map(|data| data.value.clone()).unwrap_or_default()
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.value = value.into();
        }
    }

    // ----- box metrics and viewport -----

    pub fn set_layout_box(&mut self, node: NodeId, layout: LayoutBox) {
        if let Some(data) = self.node_mut(node) {
            data.layout = layout;
        }
    }

    pub fn layout_box(&self, node: NodeId) -> LayoutBox {
        self.node(node).map(|data| data.layout).unwrap_or_default()
    }

    /// Document-relative position of the element's top-left corner.
    pub fn offset(&self, node: NodeId) -> Offset {
        let layout = self.layout_box(node);
        Offset {
            top: layout.y,
            left: layout.x,
        }
    }

    pub fn width(&self, node: NodeId) -> f64 {
        self.layout_box(node).width
    }

    pub fn height(&self, node: NodeId) -> f64 {
        self.layout_box(node).height
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Set the page scroll position and dispatch `scroll` on the root.
    pub fn set_scroll_top(&mut self, value: f64) {
        self.scroll_top = value.max(0.0);
        let root = self.root;
        self.dispatch(root, "scroll");
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, value: f64) {
        self.viewport_height = value.max(0.0);
    }

    // ----- queries -----

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<NodeId>, selectors::ParseError> {
        let list = selectors::parse_selector_list(selector)?;
        Ok(self.collect_matches(self.root, &list, false))
    }

    /// First element matching `selector`, if any.
    pub fn query_first(&self, selector: &str) -> Result<Option<NodeId>, selectors::ParseError> {
        Ok(self.query(selector)?.into_iter().next())
    }

    /// Elements matching `selector` among the strict descendants of `scope`.
    pub fn query_within(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, selectors::ParseError> {
        let list = selectors::parse_selector_list(selector)?;
        Ok(self.collect_matches(scope, &list, true))
    }

    /// Whether `node` matches `selector`.
    pub fn matches(&self, node: NodeId, selector: &str) -> Result<bool, selectors::ParseError> {
        let list = selectors::parse_selector_list(selector)?;
        Ok(self.node(node).is_some_and(NodeData::is_element)
            && selectors::matches_selector_list(self, node, &list))
    }

    fn collect_matches(&self, scope: NodeId, list: &SelectorList, skip_scope: bool) -> Vec<NodeId> {
        scope
            .descendants(&self.arena)
            .skip(usize::from(skip_scope))
            .filter(|&id| {
                self.node(id).is_some_and(NodeData::is_element)
                    && selectors::matches_selector_list(self, id, list)
            })
            .collect()
    }

    // ----- page lifecycle -----

    /// Whether the load signal has fired.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fire the page load signal. The flag is one-way: repeat calls are
    /// no-ops and the `load` event is dispatched at most once.
    pub fn fire_load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        let root = self.root;
        self.dispatch(root, "load");
    }

    // ----- environment capabilities -----

    /// Whether the environment natively supports input placeholders.
    pub fn supports_placeholder(&self) -> bool {
        self.supports_placeholder
    }

    pub fn set_supports_placeholder(&mut self, value: bool) {
        self.supports_placeholder = value;
    }

    /// Interval between animation steps.
    pub fn animation_tick(&self) -> Duration {
        self.animation_tick
    }

    pub fn set_animation_tick(&mut self, tick: Duration) {
        self.animation_tick = tick.max(Duration::from_millis(1));
    }

    // ----- cookies -----

    /// Current wall-clock time: the creation-time anchor plus virtual time.
    pub fn now_utc(&self) -> DateTime<Utc> {
        self.wall_base + chrono::Duration::milliseconds(self.timers.now_ms as i64)
    }

    /// Store a cookie from wire-format text (`name=value; path=/; expires=...`).
    pub fn write_cookie(&mut self, raw: &str) {
        let now = self.now_utc();
        self.cookies.write(raw, now);
    }

    /// Render the live cookies as a `"; "`-joined `name=value` header string.
    pub fn cookie_header(&self) -> String {
        self.cookies.header(self.now_utc())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementAdapter for Document {
    type Handle = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.parent_of(element)
    }

    fn tag_name(&self, element: NodeId) -> &str {
        self.node(element).map_or("", NodeData::tag)
    }

    fn element_id(&self, element: NodeId) -> Option<&str> {
        self.attr(element, "id")
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        Document::has_class(self, element, class)
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        Document::attr(self, element, name)
    }
}
