use std::time::Duration;

use backoff::backoff::Backoff;
use backoff::{retry, Error};

/// Allows a fixed number of immediate retries.
struct AttemptBudget {
    retries: u32,
    remaining: u32,
}

impl AttemptBudget {
    fn new(retries: u32) -> Self {
        Self {
            retries,
            remaining: retries,
        }
    }
}

impl Backoff for AttemptBudget {
    fn reset(&mut self) {
        self.remaining = self.retries;
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Duration::ZERO)
    }
}

/// Retries an operation up to `retries` extra times when it fails with an
/// error the caller knows how to recover from.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    retries: u32,
}

impl RetryPolicy {
    pub fn new(retries: u32) -> Self {
        Self { retries }
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Run `operation`. Whenever it fails with an error matched by `catches`,
    /// `recover` is called with that error; the operation is attempted again
    /// only if `recover` returns true and the budget is not exhausted.
    ///
    /// Errors not matched by `catches` are returned straight away, and the
    /// most recent error is returned once retrying stops.
    pub fn run<T, E, F, C, R>(&self, mut operation: F, catches: C, mut recover: R) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        C: Fn(&E) -> bool,
        R: FnMut(&E) -> bool,
    {
        let attempt = || match operation() {
            Ok(value) => Ok(value),
            Err(err) if catches(&err) && recover(&err) => Err(Error::transient(err)),
            Err(err) => Err(Error::permanent(err)),
        };

        retry(AttemptBudget::new(self.retries), attempt).map_err(|e| match e {
            Error::Permanent(err) => err,
            Error::Transient { err, .. } => err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Recoverable(u32),
        Fatal,
    }

    fn is_recoverable(e: &TestError) -> bool {
        matches!(e, TestError::Recoverable(_))
    }

    #[test]
    fn succeeds_after_recovery() {
        let calls = Cell::new(0);
        let recoveries = Cell::new(0);
        let res = RetryPolicy::new(1).run(
            || {
                calls.set(calls.get() + 1);
                if calls.get() == 1 {
                    Err(TestError::Recoverable(1))
                } else {
                    Ok("done")
                }
            },
            is_recoverable,
            |_| {
                recoveries.set(recoveries.get() + 1);
                true
            },
        );
        assert_eq!(res, Ok("done"));
        assert_eq!(calls.get(), 2);
        assert_eq!(recoveries.get(), 1);
    }

    #[test]
    fn returns_most_recent_error_when_budget_exhausted() {
        let calls = Cell::new(0);
        let res: Result<(), _> = RetryPolicy::new(1).run(
            || {
                calls.set(calls.get() + 1);
                Err(TestError::Recoverable(calls.get()))
            },
            is_recoverable,
            |_| true,
        );
        assert_eq!(res, Err(TestError::Recoverable(2)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn stops_when_recovery_declines() {
        let calls = Cell::new(0);
        let res: Result<(), _> = RetryPolicy::new(3).run(
            || {
                calls.set(calls.get() + 1);
                Err(TestError::Recoverable(calls.get()))
            },
            is_recoverable,
            |_| false,
        );
        assert_eq!(res, Err(TestError::Recoverable(1)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unmatched_errors_are_not_retried() {
        let calls = Cell::new(0);
        let recoveries = Cell::new(0);
        let res: Result<(), _> = RetryPolicy::new(1).run(
            || {
                calls.set(calls.get() + 1);
                Err(TestError::Fatal)
            },
            is_recoverable,
            |_| {
                recoveries.set(recoveries.get() + 1);
                true
            },
        );
        assert_eq!(res, Err(TestError::Fatal));
        assert_eq!(calls.get(), 1);
        assert_eq!(recoveries.get(), 0);
    }

    #[test]
    fn zero_retries_means_single_attempt() {
        let calls = Cell::new(0);
        let res: Result<(), _> = RetryPolicy::new(0).run(
            || {
                calls.set(calls.get() + 1);
                Err(TestError::Recoverable(0))
            },
            is_recoverable,
            |_| true,
        );
        assert!(res.is_err());
        assert_eq!(calls.get(), 1);
    }
}
