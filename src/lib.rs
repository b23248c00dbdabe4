//! Thai QR payment payloads: TLV codec, CRC-16 integrity field and an
//! indented outline notation for editing payloads by hand.

pub mod crc16;
pub mod error;
pub mod outline;
pub mod payload;
pub mod tlv;

pub use crc16::checksum;
pub use error::{Error, Result};
pub use payload::{attach_checksum, validate};
pub use tlv::{decode, encode, Tlv, Value};
