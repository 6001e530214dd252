use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn reschedule(handle: RuntimeHandle, remaining: Rc<Cell<usize>>, times: Rc<RefCell<Vec<u64>>>) {
    let next = handle.clone();
    handle.register_frame_callback(move |frame_time_nanos| {
        times.borrow_mut().push(frame_time_nanos);
        let left = remaining.get().saturating_sub(1);
        remaining.set(left);
        if left > 0 {
            reschedule(next, remaining, times);
        }
    });
}

#[test]
fn registering_a_callback_requests_a_frame() {
    let runtime = StdRuntime::new();
    assert!(!runtime.take_frame_request());

    runtime.runtime_handle().register_frame_callback(|_| {});
    assert!(runtime.take_frame_request());
    assert!(!runtime.take_frame_request(), "request is consumed");
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(0);
    assert!(!runtime.needs_frame());
}

#[test]
fn clock_is_monotonic() {
    let clock = StdClock;
    let start = clock.now();
    let first = clock.elapsed_nanos(start);
    std::thread::sleep(Duration::from_millis(1));
    let second = clock.elapsed_nanos(start);
    assert!(second >= first);
    assert!(second >= 1_000_000);
}

#[test]
fn frame_loop_runs_chain_until_idle() {
    let runtime = StdRuntime::new();
    let remaining = Rc::new(Cell::new(3));
    let times = Rc::new(RefCell::new(Vec::new()));
    reschedule(runtime.runtime_handle(), Rc::clone(&remaining), Rc::clone(&times));

    let frame_loop = FrameLoop::with_tick(runtime, Duration::from_millis(1));
    let frames = frame_loop.run_until_idle(MAX_LOOP_FRAMES);

    assert_eq!(frames, 3);
    assert_eq!(remaining.get(), 0);
    let times = times.borrow();
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(!frame_loop.runtime().needs_frame());
}

#[test]
fn frame_loop_stops_at_frame_limit() {
    let runtime = StdRuntime::new();
    let remaining = Rc::new(Cell::new(100));
    reschedule(
        runtime.runtime_handle(),
        Rc::clone(&remaining),
        Rc::new(RefCell::new(Vec::new())),
    );

    let frame_loop = FrameLoop::with_tick(runtime, Duration::ZERO);
    assert_eq!(frame_loop.run_until_idle(5), 5);
    assert_eq!(remaining.get(), 95);
    assert!(frame_loop.runtime().needs_frame());
}

#[test]
fn idle_loop_returns_immediately() {
    let frame_loop = FrameLoop::new(StdRuntime::new());
    assert_eq!(frame_loop.tick(), DEFAULT_FRAME_TICK);
    assert_eq!(frame_loop.run_until_idle(MAX_LOOP_FRAMES), 0);
}
