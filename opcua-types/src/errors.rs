// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0

//!  Rust OpcUa specific errors

use thiserror::Error;

use crate::StatusCode;

/// Rust OpcUa specific errors
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum OpcUaError {
    #[error("Request returned a StatusCode Error: {0}")]
    StatusCodeError(StatusCode),
}

impl From<StatusCode> for OpcUaError {
    fn from(value: StatusCode) -> Self {
        OpcUaError::StatusCodeError(value)
    }
}
