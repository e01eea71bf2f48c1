//! Single-flight lazy initialization cell.
//!
//! Collapses concurrent first uses of a not-yet-available resource into one
//! underlying initialization whose result every waiter shares. The cell moves
//! through three states:
//!
//! ```text
//! Empty ──get_or_try_init──▶ Pending ──Ok──▶ Ready (steady state)
//!   ▲                           │
//!   └─────────────Err───────────┘
//! ```
//!
//! A failed attempt resets the cell to `Empty` so the next caller retries
//! from scratch; a failure is never cached.

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::Mutex;

/// A lazily-initialized, process-wide cell with single-flight semantics.
pub struct SingleFlight<T, E> {
    state: Mutex<State<T, E>>,
}

enum State<T, E> {
    Empty,
    Pending(Shared<BoxFuture<'static, Result<T, E>>>),
    Ready(T),
}

impl<T, E> SingleFlight<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Empty),
        }
    }

    /// Get the value, initializing it with `init` if no attempt is ready or
    /// in flight. Callers arriving while an attempt is pending await that
    /// same attempt; their `init` is never invoked.
    ///
    /// # Errors
    ///
    /// Returns the initialization error shared by every waiter of the failed
    /// attempt. The cell is reset so a subsequent call starts a fresh
    /// attempt.
    pub async fn get_or_try_init<F, Fut>(&self, init: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let attempt = {
            let mut state = self.state.lock().await;
            match &*state {
                State::Ready(value) => return Ok(value.clone()),
                State::Pending(shared) => shared.clone(),
                State::Empty => {
                    let shared = init().boxed().shared();
                    *state = State::Pending(shared.clone());
                    shared
                }
            }
        };

        let result = attempt.clone().await;

        // Settle the cell, but only if it still refers to our attempt: a
        // waiter of a failed attempt may already have reset it, and a later
        // caller may already have started a new one.
        let mut state = self.state.lock().await;
        if let State::Pending(current) = &*state {
            if current.ptr_eq(&attempt) {
                *state = match &result {
                    Ok(value) => State::Ready(value.clone()),
                    Err(_) => State::Empty,
                };
            }
        }
        result
    }

    /// Take the ready value, leaving the cell empty. Returns `None` if no
    /// attempt ever completed. Used by the shutdown hook to release the
    /// resource.
    pub async fn take(&self) -> Option<T> {
        let mut state = self.state.lock().await;
        match std::mem::replace(&mut *state, State::Empty) {
            State::Ready(value) => Some(value),
            other => {
                *state = other;
                None
            }
        }
    }
}

impl<T, E> Default for SingleFlight<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
