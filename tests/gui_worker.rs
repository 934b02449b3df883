// tests/gui_worker.rs
//
// Background job handling behind the Reconcile button.
//
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use cv_imprints::gui::worker::{Poll, Worker};

/// Poll until the job leaves `Running`, or give up after a few seconds.
fn settle<T: Send + 'static>(w: &mut Worker<T>) -> Poll<T> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match w.poll() {
            Poll::Running if Instant::now() < deadline => thread::sleep(Duration::from_millis(5)),
            other => return other,
        }
    }
}

#[test]
fn idle_until_spawned() {
    let mut w: Worker<u32> = Worker::new();
    assert!(!w.is_running());
    assert!(matches!(w.poll(), Poll::Idle));
}

#[test]
fn hands_back_the_result_once() {
    let mut w = Worker::new();
    assert!(w.spawn(|| 7u32));
    assert!(matches!(settle(&mut w), Poll::Done(7)));
    assert!(!w.is_running());
    assert!(matches!(w.poll(), Poll::Idle));
}

#[test]
fn second_spawn_refused_while_running() {
    let (tx, rx) = mpsc::channel::<()>();
    let mut w = Worker::new();
    assert!(w.spawn(move || {
        let _ = rx.recv();
        1u32
    }));
    assert!(w.is_running());
    assert!(!w.spawn(|| 2u32));
    assert!(matches!(w.poll(), Poll::Running));

    tx.send(()).unwrap();
    assert!(matches!(settle(&mut w), Poll::Done(1)));
}

#[test]
fn panicking_job_frees_the_worker() {
    let mut w: Worker<u32> = Worker::new();
    assert!(w.spawn(|| panic!("page parser exploded")));

    match settle(&mut w) {
        Poll::Died(msg) => assert!(msg.contains("page parser exploded"), "{msg}"),
        _ => panic!("expected the job to be reported as died"),
    }
    assert!(!w.is_running());
    assert!(w.spawn(|| 3u32));
    assert!(matches!(settle(&mut w), Poll::Done(3)));
}
