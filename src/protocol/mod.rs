//! Protocol Module
//!
//! Byte-level model of the binary key-value wire protocol: the versioned
//! frame format, opcode and status registries, the framing-extras builder for
//! durability metadata, and the fixed-layout codecs (mutation token, observe
//! body). Everything here is pure and synchronous: buffers in, buffers out.

mod frame;
mod frame_info;
mod leb128;
mod mutation_token;
mod observe;
mod opcode;
mod status;

pub use frame::{
    RequestFrame, ResponseFrame, HEADER_SIZE, MAGIC_ALT_REQUEST, MAGIC_ALT_RESPONSE,
    MAGIC_REQUEST, MAGIC_RESPONSE, MAX_BODY_SIZE, MAX_KEY_SIZE,
};
pub use frame_info::{
    add_durability_frame_info, add_preserve_expiry_frame_info, DurabilityLevel,
    FRAME_INFO_DURABILITY, FRAME_INFO_PRESERVE_EXPIRY,
};
pub use leb128::{decode_leb128, encode_leb128};
pub use mutation_token::{parse_token, MutationToken, TOKEN_EXTRAS_SIZE};
pub use observe::{
    decode_observe_body, encode_observe_body, ObserveResult, ObserveStatus,
};
pub use opcode::Opcode;
pub use status::Status;
