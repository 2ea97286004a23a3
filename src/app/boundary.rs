//! Error boundary for the host's composition root.
//!
//! Host callbacks run inside [`ErrorBoundary::guard`], which turns both `Err`
//! returns and panics into a report on the host's error channel and lets the
//! UI keep running. Wrapping happens once, at the point where the host wires
//! commands to the controller, instead of around every handler.
//!
//! # Example
//!
//! ```rust
//! use bucket_list::app::ErrorBoundary;
//! use bucket_list::BucketsError;
//! use std::cell::RefCell;
//!
//! let seen = RefCell::new(Vec::new());
//! let boundary = ErrorBoundary::new(|e: &BucketsError| seen.borrow_mut().push(e.to_string()));
//!
//! let value = boundary.guard(|| Err::<(), _>(BucketsError::NotFound("b1".into())));
//! assert!(value.is_none());
//! assert_eq!(seen.borrow().len(), 1);
//! ```

use crate::domain::{BucketsError, Result};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// The host's error channel.
pub trait ErrorReporter {
    fn report(&self, error: &BucketsError);
}

impl<F> ErrorReporter for F
where
    F: Fn(&BucketsError),
{
    fn report(&self, error: &BucketsError) {
        self(error);
    }
}

/// Reports errors as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &BucketsError) {
        tracing::error!(error = %error, "operation failed");
    }
}

/// Catches errors and panics from host callbacks.
#[derive(Debug, Clone, Default)]
pub struct ErrorBoundary<R = TracingReporter> {
    reporter: R,
}

impl<R: ErrorReporter> ErrorBoundary<R> {
    #[must_use]
    pub const fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Runs `op`, returning its value or `None` after reporting the failure.
    ///
    /// Panics are reported as [`BucketsError::Unexpected`] carrying the panic
    /// message.
    pub fn guard<T>(&self, op: impl FnOnce() -> Result<T>) -> Option<T> {
        match catch_unwind(AssertUnwindSafe(op)) {
            Ok(Ok(value)) => Some(value),
            Ok(Err(error)) => {
                self.reporter.report(&error);
                None
            }
            Err(payload) => {
                let error = BucketsError::Unexpected(panic_message(payload.as_ref()));
                tracing::error!(error = %error, "callback panicked");
                self.reporter.report(&error);
                None
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "callback panicked with a non-string payload".to_string()
    }
}
