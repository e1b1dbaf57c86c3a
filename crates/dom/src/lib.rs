//! Headless page environment for the widget toolkit.
//!
//! This crate plays the role the wrapped DOM library plays in a browser:
//! element lookup and mutation, class/attribute/CSS changes, event binding
//! with bubbling and delegation, timers, property animation, box metrics,
//! and the page cookie store. Execution is single-threaded and
//! cooperative; time is virtual and driven by the host through
//! [`Document::advance`], which makes every timer- and animation-dependent
//! behavior deterministic.

mod animate;
mod cookies;
mod document;
mod events;
mod geometry;
mod node;
mod timers;

pub use animate::{AnimationId, Easing};
pub use cookies::COOKIE_EXPIRES_FORMAT;
pub use document::Document;
pub use events::{EventContext, Handler, ListenerId};
pub use geometry::{LayoutBox, Offset};
pub use node::{NodeData, NodeKind};
pub use timers::TimerId;

pub use indextree::NodeId;
pub use selectors::ParseError as SelectorError;
