//! Status registry
//!
//! Maps wire status codes to a closed enum and classifies non-success codes
//! into the domain error taxonomy. Codes this crate does not know about decode
//! to [`Status::Unknown`] and classify as a generic server failure, since the
//! protocol grows new statuses faster than clients ship.

use crate::error::ErrorCode;

/// Key-value wire status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    KeyNotFound,
    KeyExists,
    ValueTooLarge,
    InvalidArguments,
    NotStored,
    NotMyPartition,
    Locked,
    TemporaryFailure,
    DurabilityInvalidLevel,
    DurabilityImpossible,
    SyncWriteInProgress,
    SyncWriteAmbiguous,
    /// A status code this client does not recognize (raw value preserved)
    Unknown(u16),
}

impl Status {
    /// Decode a raw 16-bit wire status
    pub fn from_wire(code: u16) -> Self {
        match code {
            0x0000 => Status::Success,
            0x0001 => Status::KeyNotFound,
            0x0002 => Status::KeyExists,
            0x0003 => Status::ValueTooLarge,
            0x0004 => Status::InvalidArguments,
            0x0005 => Status::NotStored,
            0x0007 => Status::NotMyPartition,
            0x0009 => Status::Locked,
            0x0086 => Status::TemporaryFailure,
            0x00a0 => Status::DurabilityInvalidLevel,
            0x00a1 => Status::DurabilityImpossible,
            0x00a2 => Status::SyncWriteInProgress,
            0x00a3 => Status::SyncWriteAmbiguous,
            other => Status::Unknown(other),
        }
    }

    /// Raw wire value of this status
    pub fn to_wire(self) -> u16 {
        match self {
            Status::Success => 0x0000,
            Status::KeyNotFound => 0x0001,
            Status::KeyExists => 0x0002,
            Status::ValueTooLarge => 0x0003,
            Status::InvalidArguments => 0x0004,
            Status::NotStored => 0x0005,
            Status::NotMyPartition => 0x0007,
            Status::Locked => 0x0009,
            Status::TemporaryFailure => 0x0086,
            Status::DurabilityInvalidLevel => 0x00a0,
            Status::DurabilityImpossible => 0x00a1,
            Status::SyncWriteInProgress => 0x00a2,
            Status::SyncWriteAmbiguous => 0x00a3,
            Status::Unknown(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Classify a non-success status into the domain error taxonomy
    ///
    /// Returns `None` for [`Status::Success`].
    pub fn as_error_code(self) -> Option<ErrorCode> {
        let code = match self {
            Status::Success => return None,
            Status::KeyNotFound => ErrorCode::DocumentNotFound,
            Status::KeyExists => ErrorCode::DocumentExists,
            Status::ValueTooLarge => ErrorCode::ValueTooLarge,
            Status::InvalidArguments => ErrorCode::InvalidArgument,
            Status::NotStored => ErrorCode::NotStored,
            Status::NotMyPartition => ErrorCode::NotMyPartition,
            Status::Locked => ErrorCode::DocumentLocked,
            Status::TemporaryFailure => ErrorCode::TemporaryFailure,
            Status::DurabilityInvalidLevel => ErrorCode::DurabilityLevelInvalid,
            Status::DurabilityImpossible => ErrorCode::DurabilityImpossible,
            Status::SyncWriteInProgress => ErrorCode::DurableWriteInProgress,
            Status::SyncWriteAmbiguous => ErrorCode::DurabilityAmbiguous,
            Status::Unknown(raw) => {
                tracing::warn!("unrecognized wire status 0x{:04x}", raw);
                ErrorCode::UnknownServerFailure(raw)
            }
        };
        Some(code)
    }
}
