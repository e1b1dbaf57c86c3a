//! Leading-edge call throttling for high-frequency events.

use dom::{Document, EventContext};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Wrap `func` so repeated invocations within `delay` collapse to the
/// leading call.
///
/// The wrapper starts ready: the first call always invokes `func`
/// synchronously with the wrapper's arguments, then enters a cooldown
/// for `delay` of virtual time. Calls during the cooldown are dropped —
/// there is no queuing and no trailing call.
pub fn throttle<F>(delay: Duration, func: F) -> impl Fn(&mut Document, &EventContext)
where
    F: Fn(&mut Document, &EventContext) + 'static,
{
    let ready = Rc::new(Cell::new(true));
    move |doc, ctx| {
        if ready.get() {
            func(doc, ctx);
            ready.set(false);
            let ready = Rc::clone(&ready);
            doc.set_timeout(delay, move |_| ready.set(true));
        }
    }
}
