//! Failure reporting.
//!
//! Handlers that can fail use an out-parameter convention: they populate an
//! [`ErrorSlot`] instead of returning a `Result`. The error adapter turns a
//! populated slot into an [`OperationFailed`], which aborts the remainder of
//! the chain. Structural resolution failures (no applicable handler, or two
//! equally specific ones) are not represented here at all: they are rejected
//! by the compiler before any chain runs.

use std::convert::Infallible;
use thiserror::Error;

use crate::tag::Tag;

/// A boxed error type for handler-reported failure details.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Transient error output for one adapter-mediated call.
///
/// The slot lives exactly as long as the call it was created for; it is
/// never stored across chain links. A later [`set`] overwrites an earlier
/// one, matching assignment semantics of an out-parameter.
///
/// [`set`]: ErrorSlot::set
#[derive(Debug, Default)]
pub struct ErrorSlot {
    error: Option<BoxError>,
}

impl ErrorSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn set(&mut self, error: impl Into<BoxError>) {
        self.error = Some(error.into());
    }

    /// Whether a failure has been recorded.
    pub fn is_set(&self) -> bool {
        self.error.is_some()
    }

    /// Remove and return the recorded failure, leaving the slot empty.
    pub fn take(&mut self) -> Option<BoxError> {
        self.error.take()
    }
}

/// A handler populated its error slot.
///
/// Raised by the error adapter; carries the failing operation's name and the
/// detail the handler reported. Once raised, the remaining links of the
/// chain are skipped and the terminal accessor yields `Err`.
#[derive(Debug, Error)]
#[error("operation `{operation}` failed: {detail}")]
pub struct OperationFailed {
    operation: &'static str,
    #[source]
    detail: BoxError,
}

impl OperationFailed {
    /// Build a failure for the tag `T` from a reported detail.
    pub fn new<T: Tag>(detail: BoxError) -> Self {
        Self {
            operation: T::name(),
            detail,
        }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The detail the handler reported.
    pub fn detail(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.detail
    }
}

// Infallible slots use `Infallible` as their failure type; this conversion
// keeps the generic failure-carry path total.
impl From<Infallible> for OperationFailed {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
