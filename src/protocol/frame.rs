//! Wire frame model
//!
//! Byte-level representation of a protocol message and the serialize/parse
//! steps for its segments.
//!
//! ## Wire Format
//!
//! ```text
//! ┌───────┬────────┬─────────┬────────┬──────┬───────────┬──────────┬───────┐
//! │ Magic │ Opcode │ KeyLen  │ ExtLen │ Type │ Part/Stat │ BodyLen  │Opaque │
//! │  (1)  │  (1)   │  (2)    │  (1)   │ (1)  │   (2)     │   (4)    │ (4)   │
//! ├───────┴────────┴─────────┴────────┴──────┴───────────┴──────────┴───────┤
//! │                              CAS (8)                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Framing Extras │ Extras │ Key │ Value                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All multi-byte fields are big-endian. When framing extras are present the
//! alternate magic is used and the key-length field is split: byte 2 carries
//! the framing-extras length (u8) and byte 3 the key length (u8). The declared
//! body length always equals framing-extras + extras + key + value.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};
use super::{Opcode, Status};

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 24;

/// Request magic without framing extras
pub const MAGIC_REQUEST: u8 = 0x80;
/// Request magic with framing extras
pub const MAGIC_ALT_REQUEST: u8 = 0x08;
/// Response magic without framing extras
pub const MAGIC_RESPONSE: u8 = 0x81;
/// Response magic with framing extras
pub const MAGIC_ALT_RESPONSE: u8 = 0x18;

/// Maximum protocol key size in bytes (including any collection prefix)
pub const MAX_KEY_SIZE: usize = 250;

/// Maximum declared body size accepted by the parser (20 MB)
pub const MAX_BODY_SIZE: usize = 20 * 1024 * 1024;

/// An outgoing request before materialization
///
/// Holds the raw segments; [`RequestFrame::to_bytes`] is the single explicit
/// conversion to the frozen wire buffer. It is a pure function of the fields,
/// so materializing twice yields identical byte sequences.
#[derive(Debug, Clone, Default)]
pub struct RequestFrame {
    pub opcode: u8,
    pub data_type: u8,
    pub partition_id: u16,
    pub opaque: u32,
    pub cas: u64,
    pub framing_extras: Vec<u8>,
    pub extras: Vec<u8>,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl RequestFrame {
    /// Create an empty frame bound to an opcode
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode: opcode.to_u8(),
            ..Self::default()
        }
    }

    /// Total body length: framing extras + extras + key + value
    pub fn body_size(&self) -> usize {
        self.framing_extras.len() + self.extras.len() + self.key.len() + self.value.len()
    }

    /// Materialize the frame to wire bytes
    ///
    /// Segments are written in fixed order: header, framing extras, extras,
    /// key, value. The alternate magic is selected automatically when framing
    /// extras are present.
    pub fn to_bytes(&self) -> Bytes {
        debug_assert!(self.key.len() <= MAX_KEY_SIZE);
        debug_assert!(self.framing_extras.len() <= u8::MAX as usize);

        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.body_size());
        if self.framing_extras.is_empty() {
            buf.put_u8(MAGIC_REQUEST);
            buf.put_u8(self.opcode);
            buf.put_u16(self.key.len() as u16);
        } else {
            buf.put_u8(MAGIC_ALT_REQUEST);
            buf.put_u8(self.opcode);
            buf.put_u8(self.framing_extras.len() as u8);
            buf.put_u8(self.key.len() as u8);
        }
        buf.put_u8(self.extras.len() as u8);
        buf.put_u8(self.data_type);
        buf.put_u16(self.partition_id);
        buf.put_u32(self.body_size() as u32);
        buf.put_u32(self.opaque);
        buf.put_u64(self.cas);
        buf.put_slice(&self.framing_extras);
        buf.put_slice(&self.extras);
        buf.put_slice(&self.key);
        buf.put_slice(&self.value);
        buf.freeze()
    }
}

/// An incoming response after transport-level decoding
///
/// Segment sizes come from the header; the body is kept as one buffer and
/// exposed through slice accessors, matching how per-operation parsers
/// consume it.
#[derive(Debug, Clone)]
pub struct ResponseFrame {
    pub opcode: u8,
    pub data_type: u8,
    pub status: Status,
    pub opaque: u32,
    pub cas: u64,
    framing_extras_size: u8,
    extras_size: u8,
    key_size: u16,
    body: Vec<u8>,
}

impl ResponseFrame {
    /// Parse a complete response frame from wire bytes
    ///
    /// Validates the magic, the declared length accounting, and the overall
    /// buffer size. Any mismatch is a data-level [`Error::MalformedFrame`];
    /// opcode pairing is checked separately by [`ResponseFrame::expect_opcode`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::MalformedFrame(format!(
                "incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let magic = bytes[0];
        let (framing_extras_size, key_size) = match magic {
            MAGIC_RESPONSE => (0u8, u16::from_be_bytes([bytes[2], bytes[3]])),
            MAGIC_ALT_RESPONSE => (bytes[2], bytes[3] as u16),
            other => {
                return Err(Error::MalformedFrame(format!(
                    "unexpected response magic 0x{other:02x}"
                )));
            }
        };

        let extras_size = bytes[4];
        let data_type = bytes[5];
        let status = Status::from_wire(u16::from_be_bytes([bytes[6], bytes[7]]));
        let body_size =
            u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
        let opaque = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        let cas = u64::from_be_bytes([
            bytes[16], bytes[17], bytes[18], bytes[19], bytes[20], bytes[21], bytes[22],
            bytes[23],
        ]);

        if body_size > MAX_BODY_SIZE {
            return Err(Error::MalformedFrame(format!(
                "declared body too large: {body_size} bytes (max {MAX_BODY_SIZE})"
            )));
        }
        if bytes.len() != HEADER_SIZE + body_size {
            return Err(Error::MalformedFrame(format!(
                "declared body of {} bytes, buffer carries {}",
                body_size,
                bytes.len() - HEADER_SIZE
            )));
        }
        let segments =
            framing_extras_size as usize + extras_size as usize + key_size as usize;
        if segments > body_size {
            return Err(Error::MalformedFrame(format!(
                "segment sizes ({segments}) exceed declared body ({body_size})"
            )));
        }

        Ok(Self {
            opcode: bytes[1],
            data_type,
            status,
            opaque,
            cas,
            framing_extras_size,
            extras_size,
            key_size,
            body: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    /// Verify this frame belongs to the given operation type
    ///
    /// A mismatch means the dispatcher paired the wrong response with the
    /// wrong request, which is a bug upstream and not a wire condition.
    pub fn expect_opcode(&self, expected: Opcode) -> Result<()> {
        if self.opcode != expected.to_u8() {
            return Err(Error::OpcodeMismatch {
                expected,
                actual: self.opcode,
            });
        }
        Ok(())
    }

    pub fn framing_extras_size(&self) -> u8 {
        self.framing_extras_size
    }

    pub fn extras_size(&self) -> u8 {
        self.extras_size
    }

    pub fn key_size(&self) -> u16 {
        self.key_size
    }

    /// Whole body buffer (framing extras + extras + key + value)
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn framing_extras(&self) -> &[u8] {
        &self.body[..self.framing_extras_size as usize]
    }

    pub fn extras(&self) -> &[u8] {
        let start = self.framing_extras_size as usize;
        &self.body[start..start + self.extras_size as usize]
    }

    pub fn key(&self) -> &[u8] {
        let start = self.framing_extras_size as usize + self.extras_size as usize;
        &self.body[start..start + self.key_size as usize]
    }

    pub fn value(&self) -> &[u8] {
        let start = self.framing_extras_size as usize
            + self.extras_size as usize
            + self.key_size as usize;
        &self.body[start..]
    }
}
