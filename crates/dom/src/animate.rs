//! Stepped property animation over the virtual timer queue.
//!
//! Animations advance on a fixed tick (see [`Document::animation_tick`]),
//! interpolating an inline CSS pixel property or the page scroll position
//! toward a target value. The final step always lands exactly on the
//! target. Cancellation flips a shared liveness flag; an already-queued
//! step observes it and stops.

use crate::Document;
use indextree::NodeId;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a running animation, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub(crate) u64);

/// Interpolation curve. `Swing` is the classic ease-in-out cosine curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Swing,
}

impl Easing {
    fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress,
            Self::Swing => 0.5 - (progress * std::f64::consts::PI).cos() / 2.0,
        }
    }
}

enum AnimTarget {
    Css { node: NodeId, prop: String },
    Scroll,
}

struct AnimState {
    id: AnimationId,
    alive: Rc<Cell<bool>>,
    target: AnimTarget,
    from: f64,
    to: f64,
    duration_ms: u64,
    start_ms: u64,
    easing: Easing,
    on_complete: RefCell<Option<Box<dyn FnOnce(&mut Document)>>>,
}

#[derive(Default)]
pub(crate) struct AnimationRegistry {
    live: HashMap<u64, Rc<Cell<bool>>>,
    next_id: u64,
}

impl AnimationRegistry {
    fn register(&mut self) -> (AnimationId, Rc<Cell<bool>>) {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        let flag = Rc::new(Cell::new(true));
        self.live.insert(id.0, Rc::clone(&flag));
        (id, flag)
    }

    fn finish(&mut self, id: AnimationId) {
        self.live.remove(&id.0);
    }

    pub(crate) fn cancel(&mut self, id: AnimationId) -> bool {
        if let Some(flag) = self.live.remove(&id.0) {
            flag.set(false);
            true
        } else {
            false
        }
    }
}

impl Document {
    /// Animate an inline CSS pixel property toward `to`.
    pub fn animate_css(
        &mut self,
        node: NodeId,
        prop: &str,
        to: f64,
        duration: Duration,
        easing: Easing,
    ) -> AnimationId {
        self.animate_css_with(node, prop, to, duration, easing, |_| {})
    }

    /// Animate an inline CSS pixel property, running `on_complete` once the
    /// target value has been applied.
    pub fn animate_css_with(
        &mut self,
        node: NodeId,
        prop: &str,
        to: f64,
        duration: Duration,
        easing: Easing,
        on_complete: impl FnOnce(&mut Document) + 'static,
    ) -> AnimationId {
        let from = self.css_px(node, prop).unwrap_or(0.0);
        let target = AnimTarget::Css {
            node,
            prop: prop.into(),
        };
        self.start(target, from, to, duration, easing, Box::new(on_complete))
    }

    /// Animate the page scroll position toward `to`.
    pub fn animate_scroll(&mut self, to: f64, duration: Duration, easing: Easing) -> AnimationId {
        let from = self.scroll_top();
        self.start(AnimTarget::Scroll, from, to, duration, easing, Box::new(|_| {}))
    }

    /// Cancel a running animation, leaving the property at its last
    /// stepped value. Returns false if it already completed.
    pub fn cancel_animation(&mut self, id: AnimationId) -> bool {
        self.animations.cancel(id)
    }

    fn start(
        &mut self,
        target: AnimTarget,
        from: f64,
        to: f64,
        duration: Duration,
        easing: Easing,
        on_complete: Box<dyn FnOnce(&mut Document)>,
    ) -> AnimationId {
        let (id, alive) = self.animations.register();
        let state = Rc::new(AnimState {
            id,
            alive,
            target,
            from,
            to,
            duration_ms: duration.as_millis() as u64,
            start_ms: self.timers.now_ms,
            easing,
            on_complete: RefCell::new(Some(on_complete)),
        });
        if state.duration_ms == 0 {
            step(self, &state);
        } else {
            let tick = self.animation_tick().min(duration);
            let next = Rc::clone(&state);
            self.set_timeout(tick, move |doc| step(doc, &next));
        }
        id
    }
}

fn step(doc: &mut Document, state: &Rc<AnimState>) {
    if !state.alive.get() {
        return;
    }
    let elapsed = doc.timers.now_ms.saturating_sub(state.start_ms);
    let progress = if state.duration_ms == 0 {
        1.0
    } else {
        (elapsed as f64 / state.duration_ms as f64).min(1.0)
    };
    let value = state.from + (state.to - state.from) * state.easing.apply(progress);
    match &state.target {
        AnimTarget::Css { node, prop } => doc.set_css_px(*node, prop, value),
        AnimTarget::Scroll => doc.set_scroll_top(value),
    }
    if progress >= 1.0 {
        state.alive.set(false);
        doc.animations.finish(state.id);
        if let Some(callback) = state.on_complete.borrow_mut().take() {
            callback(doc);
        }
    } else {
        let remaining = Duration::from_millis(state.duration_ms - elapsed);
        let tick = doc.animation_tick().min(remaining);
        let next = Rc::clone(state);
        doc.set_timeout(tick, move |doc| step(doc, &next));
    }
}
