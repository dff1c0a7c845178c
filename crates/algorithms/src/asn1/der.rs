//! DER value model, encoder, and decoder

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crypta_bigint::BigInt;

const TAG_INTEGER: u8 = 0x02;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_NULL: u8 = 0x05;
const TAG_SEQUENCE: u8 = 0x30;

fn malformed(details: &'static str) -> Error {
    Error::Processing {
        operation: "DER decode",
        details,
    }
}

/// A DER value from the supported subset
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DerValue {
    /// INTEGER, arbitrary precision and signed
    Integer(BigInt),
    /// OCTET STRING
    OctetString(Vec<u8>),
    /// NULL
    Null,
    /// SEQUENCE of nested values
    Sequence(Vec<DerValue>),
}

/// Append a definite-length field for `len`
fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    let significant = &bytes[first..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

/// Parse a definite-length field, returning (length, bytes consumed)
fn read_length(data: &[u8]) -> Result<(usize, usize)> {
    let first = *data.first().ok_or_else(|| malformed("missing length"))?;
    if first < 0x80 {
        return Ok((first as usize, 1));
    }
    let count = (first & 0x7F) as usize;
    if count == 0 {
        return Err(malformed("indefinite lengths are not DER"));
    }
    if count > core::mem::size_of::<usize>() || data.len() < 1 + count {
        return Err(malformed("length field overflows"));
    }
    let mut length: usize = 0;
    for &b in &data[1..1 + count] {
        length = (length << 8) | b as usize;
    }
    // DER demands the shortest length form
    if length < 0x80 || data[1] == 0 {
        return Err(malformed("non-minimal length encoding"));
    }
    Ok((length, 1 + count))
}

impl DerValue {
    /// Encode this value
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            DerValue::Integer(value) => {
                let body = value.to_signed_bytes_be();
                out.push(TAG_INTEGER);
                write_length(out, body.len());
                out.extend_from_slice(&body);
            }
            DerValue::OctetString(bytes) => {
                out.push(TAG_OCTET_STRING);
                write_length(out, bytes.len());
                out.extend_from_slice(bytes);
            }
            DerValue::Null => {
                out.push(TAG_NULL);
                out.push(0);
            }
            DerValue::Sequence(items) => {
                let mut body = Vec::new();
                for item in items {
                    item.encode_into(&mut body);
                }
                out.push(TAG_SEQUENCE);
                write_length(out, body.len());
                out.extend_from_slice(&body);
            }
        }
    }

    /// Decode exactly one value spanning the whole input
    pub fn decode(data: &[u8]) -> Result<DerValue> {
        let (value, consumed) = Self::decode_prefix(data)?;
        if consumed != data.len() {
            return Err(malformed("trailing bytes after value"));
        }
        Ok(value)
    }

    /// Decode one value from the front of `data`, returning it and the
    /// number of bytes consumed
    pub fn decode_prefix(data: &[u8]) -> Result<(DerValue, usize)> {
        let tag = *data.first().ok_or_else(|| malformed("missing tag"))?;
        let (length, length_size) = read_length(&data[1..])?;
        let header = 1 + length_size;
        let body = data
            .get(header..header + length)
            .ok_or_else(|| malformed("value body is truncated"))?;

        let value = match tag {
            TAG_INTEGER => {
                if body.is_empty() {
                    return Err(malformed("INTEGER body is empty"));
                }
                // reject padding that a minimal encoding would not contain
                if body.len() > 1
                    && ((body[0] == 0x00 && body[1] & 0x80 == 0)
                        || (body[0] == 0xFF && body[1] & 0x80 != 0))
                {
                    return Err(malformed("non-minimal INTEGER encoding"));
                }
                DerValue::Integer(BigInt::from_signed_bytes_be(body))
            }
            TAG_OCTET_STRING => DerValue::OctetString(body.to_vec()),
            TAG_NULL => {
                if length != 0 {
                    return Err(malformed("NULL must have empty body"));
                }
                DerValue::Null
            }
            TAG_SEQUENCE => {
                let mut items = Vec::new();
                let mut offset = 0;
                while offset < body.len() {
                    let (item, consumed) = Self::decode_prefix(&body[offset..])?;
                    items.push(item);
                    offset += consumed;
                }
                DerValue::Sequence(items)
            }
            _ => return Err(malformed("unsupported tag")),
        };

        Ok((value, header + length))
    }
}
