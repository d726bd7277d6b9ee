//! Browser-side tests for debounce coalescing: rapid reschedules within the
//! delay collapse into exactly one run, using the last-scheduled task.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::*;

use docuhub_frontend::utils::debounce::Debouncer;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn rapid_schedules_coalesce_into_one_run() {
    let debouncer = Debouncer::new();
    let applied = Rc::new(RefCell::new(Vec::<String>::new()));

    // "a", "ab", "abc" typed faster than the delay.
    for query in ["a", "ab", "abc"] {
        let applied = Rc::clone(&applied);
        debouncer.schedule(30, move || applied.borrow_mut().push(query.to_string()));
    }

    gloo_timers::future::TimeoutFuture::new(120).await;
    assert_eq!(*applied.borrow(), vec!["abc".to_string()]);
}

#[wasm_bindgen_test]
async fn cancel_drops_pending_run() {
    let debouncer = Debouncer::new();
    let applied = Rc::new(RefCell::new(0_u32));

    {
        let applied = Rc::clone(&applied);
        debouncer.schedule(30, move || *applied.borrow_mut() += 1);
    }
    debouncer.cancel();

    gloo_timers::future::TimeoutFuture::new(120).await;
    assert_eq!(*applied.borrow(), 0);
}

#[wasm_bindgen_test]
async fn schedule_after_cancel_still_runs() {
    let debouncer = Debouncer::new();
    let applied = Rc::new(RefCell::new(0_u32));

    debouncer.cancel();
    {
        let applied = Rc::clone(&applied);
        debouncer.schedule(30, move || *applied.borrow_mut() += 1);
    }

    gloo_timers::future::TimeoutFuture::new(120).await;
    assert_eq!(*applied.borrow(), 1);
}
