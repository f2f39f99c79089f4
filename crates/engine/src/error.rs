//! The module contains the errors the engine can return.
//!
//! The variants split into three families:
//!
//! - validation failures ([`Validation`]): malformed or missing input,
//!   nothing was mutated;
//! - business-rule failures ([`CapacityExceeded`], [`InsufficientStock`],
//!   [`NothingToOptimize`], [`NoVehicleAvailable`]): well-formed input that
//!   the current data state cannot satisfy;
//! - faults ([`Storage`]): the document could not be read or written.
//!
//! [`Validation`]: EngineError::Validation
//! [`CapacityExceeded`]: EngineError::CapacityExceeded
//! [`InsufficientStock`]: EngineError::InsufficientStock
//! [`NothingToOptimize`]: EngineError::NothingToOptimize
//! [`NoVehicleAvailable`]: EngineError::NoVehicleAvailable
//! [`Storage`]: EngineError::Storage
use thiserror::Error;

use crate::store::StoreError;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("Nothing to optimize: {0}")]
    NothingToOptimize(String),
    #[error("No vehicle available: {0}")]
    NoVehicleAvailable(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::CapacityExceeded(a), Self::CapacityExceeded(b)) => a == b,
            (Self::InsufficientStock(a), Self::InsufficientStock(b)) => a == b,
            (Self::NothingToOptimize(a), Self::NothingToOptimize(b)) => a == b,
            (Self::NoVehicleAvailable(a), Self::NoVehicleAvailable(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
