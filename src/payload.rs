use log::debug;

use crate::{
    crc16::checksum,
    tlv::{decode, encode, Tlv, Value},
};

/// Tag reserved for the integrity field, always the last top-level node.
pub const CHECKSUM_TAG: &str = "63";
pub const CHECKSUM_LEN: usize = 4;

/// True when the payload ends in a well-formed checksum field whose value matches
/// the CRC of everything before it, the field's own tag and length included.
pub fn validate(payload: &str) -> bool {
    let tlv = match decode(payload) {
        Ok(tlv) => tlv,
        Err(e) => {
            debug!("payload does not decode: {}", e);
            return false;
        }
    };

    let stored = match tlv.last() {
        Some(Tlv {
            tag,
            value: Value::Primitive(v),
        }) if tag == CHECKSUM_TAG && v.chars().count() == CHECKSUM_LEN => v,
        _ => {
            debug!("payload has no trailing {} checksum field", CHECKSUM_TAG);
            return false;
        }
    };

    // Last node, so its value is the suffix of the payload.
    let covered = match payload.get(..payload.len() - stored.len()) {
        Some(c) => c,
        None => return false,
    };
    let computed = checksum(covered);

    debug!("checksum stored {} computed {}", stored, computed);
    computed.eq_ignore_ascii_case(stored)
}

pub fn strip_checksum(tlvs: &[Tlv]) -> Vec<Tlv> {
    tlvs.iter()
        .filter(|t| t.tag != CHECKSUM_TAG)
        .cloned()
        .collect()
}

/// Encodes the tree and appends a freshly computed checksum field, replacing any
/// checksum field already present at the top level.
pub fn attach_checksum(tlvs: &[Tlv]) -> String {
    let mut out = encode(&strip_checksum(tlvs));
    out.push_str(CHECKSUM_TAG);
    out.push_str(&format!("{:02}", CHECKSUM_LEN));

    let crc = checksum(&out);
    out.push_str(&crc);
    out
}
