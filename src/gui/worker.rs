// src/gui/worker.rs
//
// One background job at a time. The UI polls once per frame; a job that
// panics is reported as `Died` instead of leaving the UI stuck "running".

use std::any::Any;
use std::thread::{self, JoinHandle};

pub enum Poll<T> {
    Idle,
    Running,
    Done(T),
    /// The job panicked; carries the panic message when there is one.
    Died(String),
}

pub struct Worker<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T> Default for Worker<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T: Send + 'static> Worker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `job` unless one is already running. Returns whether it started.
    pub fn spawn<F>(&mut self, job: F) -> bool
    where
        F: FnOnce() -> T + Send + 'static,
    {
        if self.is_running() {
            return false;
        }
        self.handle = Some(thread::spawn(job));
        true
    }

    /// True from `spawn` until `poll` hands back the result.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn poll(&mut self) -> Poll<T> {
        match &self.handle {
            None => return Poll::Idle,
            Some(h) if !h.is_finished() => return Poll::Running,
            Some(_) => {}
        }
        let Some(handle) = self.handle.take() else { return Poll::Idle };
        match handle.join() {
            Ok(v) => Poll::Done(v),
            Err(payload) => Poll::Died(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unknown panic")
    }
}
