use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tags whose value is itself a TLV sequence, but only at the top level of a payload.
pub const CONSTRUCTED_TAGS: [&str; 7] = ["26", "29", "30", "31", "62", "64", "80"];

const HEADER_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tlv {
    pub tag: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Primitive(String),
    Constructed(Vec<Tlv>),
}

impl Tlv {
    pub fn primitive(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: Value::Primitive(value.into()),
        }
    }

    pub fn constructed(tag: impl Into<String>, children: Vec<Tlv>) -> Self {
        Self {
            tag: tag.into(),
            value: Value::Constructed(children),
        }
    }

    /// The value as it appears on the wire.
    pub fn encoded_value(&self) -> String {
        match &self.value {
            Value::Primitive(v) => v.clone(),
            Value::Constructed(children) => encode(children),
        }
    }

    /// Character count of the encoded value. Always derived, never stored.
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Primitive(v) => v.chars().count(),
            Value::Constructed(children) => encode(children).chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn is_constructed(tag: &str, level: usize) -> bool {
    level == 0 && CONSTRUCTED_TAGS.contains(&tag)
}

pub fn decode(payload: &str) -> Result<Vec<Tlv>> {
    decode_level(payload, 0)
}

pub fn decode_level(payload: &str, level: usize) -> Result<Vec<Tlv>> {
    let mut result = Vec::new();
    let mut rest = payload;

    while !rest.is_empty() {
        let (tag, length) = match header(rest) {
            Some(h) => h,
            None => {
                return Err(Error::MalformedHeader {
                    input: rest.to_string(),
                })
            }
        };

        let body = &rest[HEADER_LEN..];
        let (raw, next) = match split_chars(body, length) {
            Some(split) => split,
            None => {
                return Err(Error::TruncatedPayload {
                    tag: tag.to_string(),
                    declared: length,
                    available: body.chars().count(),
                    input: rest.to_string(),
                })
            }
        };

        debug!("tag {} ({} chars) at level {}", tag, length, level);

        let value = if is_constructed(tag, level) {
            Value::Constructed(decode_level(raw, level + 1)?)
        } else {
            Value::Primitive(raw.to_string())
        };

        result.push(Tlv {
            tag: tag.to_string(),
            value,
        });
        rest = next;
    }

    Ok(result)
}

pub fn encode(elements: &[Tlv]) -> String {
    let mut out = String::new();

    for el in elements {
        let value = el.encoded_value();
        let length = value.chars().count();

        if length > 99 {
            warn!(
                "tag {} carries {} chars, more than a two-digit length can describe",
                el.tag, length
            );
        }

        out.push_str(&el.tag);
        out.push_str(&format!("{:02}", length));
        out.push_str(&value);
    }

    out
}

// Two digit tag followed by two digit length.
fn header(input: &str) -> Option<(&str, usize)> {
    let head = input.as_bytes().get(..HEADER_LEN)?;
    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let length = usize::from(head[2] - b'0') * 10 + usize::from(head[3] - b'0');
    Some((&input[..2], length))
}

fn split_chars(input: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some(("", input));
    }

    match input.char_indices().nth(n) {
        Some((i, _)) => Some(input.split_at(i)),
        None if input.chars().count() == n => Some((input, "")),
        None => None,
    }
}
