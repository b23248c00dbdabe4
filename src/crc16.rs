// CRC-16/CCITT-FALSE: poly 0x1021, init 0xFFFF, no reflection, no final xor.
const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = INIT;

    for &byte in data {
        crc ^= u16::from(byte) << 8;

        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

/// Four uppercase hex digits, as carried by the checksum field.
pub fn checksum(text: &str) -> String {
    hex::encode_upper(crc16(text.as_bytes()).to_be_bytes())
}
