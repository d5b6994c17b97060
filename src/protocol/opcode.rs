//! Opcode registry
//!
//! One wire tag per operation type. Every request/response body type binds to
//! exactly one of these, and response parsing validates the binding.

/// Client operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Get = 0x00,
    Replace = 0x03,
    Remove = 0x04,
    Append = 0x0e,
    Observe = 0x92,
}

impl Opcode {
    /// Wire tag of this opcode
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x00 => Ok(Opcode::Get),
            0x03 => Ok(Opcode::Replace),
            0x04 => Ok(Opcode::Remove),
            0x0e => Ok(Opcode::Append),
            0x92 => Ok(Opcode::Observe),
            other => Err(other),
        }
    }
}
