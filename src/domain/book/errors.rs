//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}
