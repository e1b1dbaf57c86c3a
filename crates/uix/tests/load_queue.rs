use anyhow::Result;
use dom::Document;
use std::cell::RefCell;
use std::rc::Rc;
use uix::LoadQueue;

#[test]
fn tasks_buffer_until_load_and_run_in_push_order() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = Document::new();
    let queue = LoadQueue::install(&mut doc);
    let log: Rc<RefCell<Vec<&str>>> = Rc::default();

    for name in ["first", "second", "third"] {
        let log = Rc::clone(&log);
        queue.push(&mut doc, move |_| log.borrow_mut().push(name));
    }
    assert!(!queue.is_drained());
    assert_eq!(queue.pending(), 3);
    assert!(log.borrow().is_empty());

    doc.fire_load();
    assert!(queue.is_drained());
    assert_eq!(queue.pending(), 0);
    assert_eq!(*log.borrow(), ["first", "second", "third"]);
    Ok(())
}

#[test]
fn post_load_pushes_run_synchronously() -> Result<()> {
    let mut doc = Document::new();
    let queue = LoadQueue::install(&mut doc);
    doc.fire_load();

    let log: Rc<RefCell<Vec<&str>>> = Rc::default();
    {
        let log = Rc::clone(&log);
        queue.push(&mut doc, move |_| log.borrow_mut().push("late"));
    }
    assert_eq!(*log.borrow(), ["late"]);

    // Installing after the page loaded starts drained.
    let queue = LoadQueue::install(&mut doc);
    assert!(queue.is_drained());
    Ok(())
}

#[test]
fn pushes_during_the_drain_run_in_the_same_pass() -> Result<()> {
    let mut doc = Document::new();
    let queue = Rc::new(LoadQueue::install(&mut doc));
    let log: Rc<RefCell<Vec<&str>>> = Rc::default();

    {
        let log_a = Rc::clone(&log);
        let log_c = Rc::clone(&log);
        let inner = Rc::clone(&queue);
        queue.push(&mut doc, move |doc| {
            log_a.borrow_mut().push("a");
            inner.push(doc, move |_| log_c.borrow_mut().push("c"));
        });
    }
    {
        let log = Rc::clone(&log);
        queue.push(&mut doc, move |_| log.borrow_mut().push("b"));
    }

    doc.fire_load();
    // The nested push lands as soon as the drain has started.
    assert_eq!(*log.borrow(), ["a", "c", "b"]);
    Ok(())
}

#[test]
fn dispose_drops_buffered_tasks() -> Result<()> {
    let mut doc = Document::new();
    let queue = LoadQueue::install(&mut doc);
    let log: Rc<RefCell<Vec<&str>>> = Rc::default();
    {
        let log = Rc::clone(&log);
        queue.push(&mut doc, move |_| log.borrow_mut().push("never"));
    }

    queue.dispose(&mut doc);
    doc.fire_load();
    assert!(log.borrow().is_empty());
    Ok(())
}
