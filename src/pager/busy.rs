// src/pager/busy.rs
// =============================================================================
// Loading indicator shared by every in-flight request.
//
// Each request holds a BusyGuard for as long as it runs. The indicator turns
// on when the first guard is taken and off when the last one is dropped, so
// it never flickers off while the other request of a cycle (or a request
// from an overlapping cycle) is still running. Dropping the guard is the
// cleanup path: it runs on success, on error, and on early return alike.
// =============================================================================

use std::sync::{Mutex, PoisonError};

use crate::view::View;

#[derive(Debug, Default)]
pub struct BusyCounter {
    // The count and the matching set_busy call happen under one lock so two
    // tasks can't interleave an "off" after a newer "on".
    in_flight: Mutex<usize>,
}

impl BusyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin<'a, V: View>(&'a self, view: &'a V) -> BusyGuard<'a, V> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        *in_flight += 1;
        if *in_flight == 1 {
            view.set_busy(true);
        }
        BusyGuard {
            counter: self,
            view,
        }
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        *self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[must_use = "the indicator turns off as soon as the guard is dropped"]
pub struct BusyGuard<'a, V: View> {
    counter: &'a BusyCounter,
    view: &'a V,
}

impl<V: View> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        let mut in_flight = self
            .counter
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.view.set_busy(false);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a guard type instead of calling begin()/end()?
//    - An async request can bail out at any `?` or early `return`
//    - Drop runs on every exit path, so the count can't leak
//    - Same idea as MutexGuard: the resource is "held" while the value lives
//
// 2. What does #[must_use] do?
//    - Warns if the caller writes `counter.begin(view);` and throws the guard
//      away, which would turn the indicator off on the very next line
//    - Bind it to `_busy`, not `_`: `let _ = ...` drops immediately
// -----------------------------------------------------------------------------
