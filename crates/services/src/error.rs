//! Shared error types for the services crate.

use thiserror::Error;

use atlas_core::model::BankError;

/// Errors emitted while configuring a `SessionController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    #[error(transparent)]
    Bank(#[from] BankError),
}
