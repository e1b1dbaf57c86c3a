//! Post-load task queue.
//!
//! Callbacks pushed before the page load signal are buffered in FIFO
//! order and drained when the signal fires; callbacks pushed afterwards
//! run synchronously on the spot.

use dom::{Document, ListenerId};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce(&mut Document)>;

#[derive(Default)]
struct QueueState {
    tasks: VecDeque<Task>,
    drained: bool,
}

/// A FIFO task buffer tied to the document's load signal.
pub struct LoadQueue {
    state: Rc<RefCell<QueueState>>,
    listener: ListenerId,
}

impl LoadQueue {
    /// Bind a queue to `doc`'s load signal. If the page already loaded,
    /// the queue starts drained and every push runs immediately.
    pub fn install(doc: &mut Document) -> Self {
        let state = Rc::new(RefCell::new(QueueState {
            tasks: VecDeque::new(),
            drained: doc.is_loaded(),
        }));
        let listener = {
            let state = Rc::clone(&state);
            doc.add_listener(doc.root(), "load", move |doc, _| drain(doc, &state))
        };
        Self { state, listener }
    }

    /// Run `task` after the load signal — or right now if it already
    /// fired. Buffered tasks run in push order; a task pushed while the
    /// drain is running is appended and still runs in the same pass.
    ///
    /// Task panics are not caught: a panicking task aborts the rest of
    /// the drain and propagates to the caller that fired the signal.
    pub fn push(&self, doc: &mut Document, task: impl FnOnce(&mut Document) + 'static) {
        let drained = self.state.borrow().drained;
        if drained {
            task(doc);
        } else {
            self.state.borrow_mut().tasks.push_back(Box::new(task));
        }
    }

    /// Whether the load signal has fired and the buffer was drained.
    pub fn is_drained(&self) -> bool {
        self.state.borrow().drained
    }

    /// Number of tasks still waiting for the load signal.
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Detach the queue from the load signal, dropping buffered tasks.
    pub fn dispose(self, doc: &mut Document) {
        doc.remove_listener(self.listener);
    }
}

fn drain(doc: &mut Document, state: &Rc<RefCell<QueueState>>) {
    state.borrow_mut().drained = true;
    // Pop from the front with the borrow released so tasks can push.
    loop {
        let task = state.borrow_mut().tasks.pop_front();
        match task {
            Some(task) => task(doc),
            None => break,
        }
    }
}
