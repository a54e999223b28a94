//! Error boundary around caller-supplied callbacks.
//!
//! Callbacks report failure either by returning `Err` or by panicking. Both are
//! turned into a [`CallbackError`], logged, and never propagated into the
//! render pass or to sibling callbacks.

use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + 'static>;
pub type CallbackResult = Result<(), BoxError>;

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("{name} failed: {message}")]
    Failed { name: &'static str, message: String },
    #[error("{name} panicked: {message}")]
    Panicked { name: &'static str, message: String },
}

/// Runs `f`, converting an `Err` or a panic into a `CallbackError`.
pub fn guarded(name: &'static str, f: impl FnOnce() -> CallbackResult) -> Result<(), CallbackError> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(CallbackError::Failed {
            name,
            message: err.to_string(),
        }),
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "unknown panic".to_string()
            };
            Err(CallbackError::Panicked { name, message })
        }
    }
}

/// Like [`guarded`], but logs the failure and carries on. Returns whether the
/// callback succeeded.
pub fn invoke_logged(name: &'static str, f: impl FnOnce() -> CallbackResult) -> bool {
    match guarded(name, f) {
        Ok(()) => true,
        Err(err) => {
            log::error!("{err}");
            false
        }
    }
}
