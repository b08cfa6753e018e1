//! View-Scoped Tasks
//!
//! Async work and timers owned by a mounted view. Everything registered here is
//! cancelled when the owning reactive scope is cleaned up.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Handle of the send currently running. At most one send is in flight.
#[derive(Default)]
struct InFlight(Option<AbortHandle>);

impl InFlight {
    fn track(&mut self, handle: AbortHandle) {
        self.0 = Some(handle);
    }

    fn abort(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewTasks {
    in_flight: StoredValue<InFlight>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ViewTasks {
    /// Create inside a component; cleanup is tied to that component's owner.
    pub fn new() -> Self {
        let tasks = Self {
            in_flight: StoredValue::new(InFlight::default()),
            timer: StoredValue::new_local(None),
        };
        on_cleanup(move || tasks.cancel_all());
        tasks
    }

    /// Run `future` until it finishes or the view goes away
    pub fn spawn(&self, future: impl Future<Output = ()> + 'static) {
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.update_value(|in_flight| in_flight.track(handle));
        spawn_local(async move {
            if Abortable::new(future, registration).await.is_err() {
                log::debug!("[TASKS] send aborted");
            }
        });
    }

    /// Run `callback` after `delay_ms`. Replaces (and cancels) a pending timer.
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, callback);
        self.timer.update_value(|slot| *slot = Some(timeout));
    }

    pub fn cancel_all(&self) {
        self.in_flight.try_update_value(InFlight::abort);
        // Dropping a Timeout clears it
        self.timer.try_update_value(|slot| slot.take());
    }
}
