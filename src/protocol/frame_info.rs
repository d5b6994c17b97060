//! Frame-info builder
//!
//! Appends optional tag-length-value records to a request's framing-extras
//! buffer. Records are order-independent on the wire, but durability is always
//! emitted before expiry preservation to match server parsing expectations.
//!
//! Record layout: tag byte, length byte, payload. Durability carries a 1-byte
//! level and optionally a 2-byte big-endian timeout (length 1 or 3);
//! preserve-expiry carries no payload (length 0).

/// Frame-info tag for a durability requirement
pub const FRAME_INFO_DURABILITY: u8 = 0x01;
/// Frame-info tag for expiry preservation
pub const FRAME_INFO_PRESERVE_EXPIRY: u8 = 0x05;

/// Durability guarantee requested for a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DurabilityLevel {
    /// No requirement. Encodes as the absence of a record, never as a
    /// zero-valued one.
    #[default]
    None = 0x00,
    Majority = 0x01,
    MajorityAndPersistToActive = 0x02,
    PersistToMajority = 0x03,
}

/// Append a durability record to the framing-extras buffer
///
/// [`DurabilityLevel::None`] appends nothing.
pub fn add_durability_frame_info(
    buffer: &mut Vec<u8>,
    level: DurabilityLevel,
    timeout: Option<u16>,
) {
    if level == DurabilityLevel::None {
        return;
    }
    match timeout {
        Some(millis) => {
            buffer.push(FRAME_INFO_DURABILITY);
            buffer.push(3);
            buffer.push(level as u8);
            buffer.extend_from_slice(&millis.to_be_bytes());
        }
        None => {
            buffer.push(FRAME_INFO_DURABILITY);
            buffer.push(1);
            buffer.push(level as u8);
        }
    }
}

/// Append a preserve-expiry record to the framing-extras buffer
pub fn add_preserve_expiry_frame_info(buffer: &mut Vec<u8>) {
    buffer.push(FRAME_INFO_PRESERVE_EXPIRY);
    buffer.push(0);
}
