//! # Consensus Encoding
//!
//! Little-endian wire layout used for hashing transactions and headers.
//! Variable-length fields carry a CompactSize length prefix.

/// Implemented by types with a canonical consensus byte encoding.
pub trait Encodable {
    /// Append the encoding of `self` to `out`.
    fn encode_to(&self, out: &mut Vec<u8>);

    /// Encode `self` into a fresh buffer.
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_to(&mut out);
        out
    }
}

/// Append a CompactSize length prefix.
///
/// | Value           | Encoding          |
/// |-----------------|-------------------|
/// | < 0xfd          | 1 byte            |
/// | <= 0xffff       | 0xfd + u16 LE     |
/// | <= 0xffff_ffff  | 0xfe + u32 LE     |
/// | otherwise       | 0xff + u64 LE     |
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

/// Append a length-prefixed byte vector.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode_to(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        for item in self {
            item.encode_to(out);
        }
    }
}
