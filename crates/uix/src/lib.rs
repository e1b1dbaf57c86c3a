//! Page-UI toolkit for the headless document environment.
//!
//! A small collection of page helpers: tab switchers, dropdowns, select
//! widgets, smooth scrolling, auto-hide panels, a placeholder polyfill,
//! lazy image loading, cookie accessors, relative positioning, and a
//! post-load task queue. Each widget binds listeners on a container's
//! descendants and returns a [`WidgetHandle`] that unbinds them again.
//!
//! Widgets can also be initialized declaratively: mark an element with
//! `data-uix="<type>"` (and optional JSON in `data-params`) and call
//! [`dispatch::install`]; every marked element is initialized once the
//! page load signal fires.

pub mod config;
pub mod cookie;
pub mod dispatch;
mod effect;
mod error;
mod load_queue;
pub mod position;
mod throttle;
pub mod widgets;

pub use config::UixConfig;
pub use effect::{Easing, Effect, Speed};
pub use error::Error;
pub use load_queue::LoadQueue;
pub use position::Placement;
pub use throttle::throttle;
pub use widgets::WidgetHandle;
