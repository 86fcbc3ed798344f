//! Periodic polling tied to the screen that owns it.
//!
//! [`use_polling`] runs its loop inside the calling component's scope, so the loop
//! is dropped together with the screen: leaving the page never leaves a timer or a
//! request behind.

use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::timing;

/// Latest successful poll result plus bookkeeping for the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Polled<T> {
    /// Last good value. Failed polls never clear it.
    pub value: Option<T>,
    /// True once the first poll finished, whatever its outcome.
    pub settled: bool,
    pub consecutive_failures: u32,
}

impl<T> Default for Polled<T> {
    fn default() -> Self {
        Self {
            value: None,
            settled: false,
            consecutive_failures: 0,
        }
    }
}

impl<T> Polled<T> {
    /// Fold one poll outcome in: success replaces the value wholesale, failure
    /// keeps the stale value and is only logged.
    pub fn apply<E: Display>(&mut self, source: &str, outcome: Result<T, E>) {
        match outcome {
            Ok(value) => {
                if self.consecutive_failures > 0 {
                    info!(source, failures = self.consecutive_failures, "poll recovered");
                }
                self.value = Some(value);
                self.consecutive_failures = 0;
            }
            Err(err) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                if self.consecutive_failures == 1 {
                    warn!(source, %err, "poll failed; keeping last value");
                } else {
                    debug!(source, %err, failures = self.consecutive_failures, "poll still failing");
                }
            }
        }
        self.settled = true;
    }

    pub fn is_loading(&self) -> bool {
        !self.settled
    }
}

/// Poll `fetch` immediately and then every `period_ms` for as long as the calling
/// component stays mounted.
pub fn use_polling<T, E, F, Fut>(source: &'static str, period_ms: u64, fetch: F) -> Signal<Polled<T>>
where
    T: 'static,
    E: Display + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = use_signal(Polled::<T>::default);

    use_future(move || {
        let fetch = fetch.clone();
        let mut state = state;
        async move {
            loop {
                let outcome = fetch().await;
                state.with_mut(|polled| polled.apply(source, outcome));
                timing::sleep_ms(period_ms).await;
            }
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_replaces_and_failure_keeps() {
        let mut polled = Polled::<Vec<u32>>::default();
        assert!(polled.is_loading());

        polled.apply("test", Err::<Vec<u32>, _>("offline"));
        assert!(!polled.is_loading());
        assert_eq!(polled.value, None);
        assert_eq!(polled.consecutive_failures, 1);

        polled.apply("test", Ok::<_, String>(vec![1, 2]));
        assert_eq!(polled.value, Some(vec![1, 2]));
        assert_eq!(polled.consecutive_failures, 0);

        polled.apply("test", Err::<Vec<u32>, _>("timeout"));
        polled.apply("test", Err::<Vec<u32>, _>("timeout"));
        assert_eq!(polled.value, Some(vec![1, 2]));
        assert_eq!(polled.consecutive_failures, 2);

        polled.apply("test", Ok::<_, String>(vec![3]));
        assert_eq!(polled.value, Some(vec![3]));
    }
}
