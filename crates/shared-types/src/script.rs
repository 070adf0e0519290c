//! # Script Builder
//!
//! Minimal push-only script construction, enough to assemble coinbase
//! signature scripts.

use serde::{Deserialize, Serialize};

use crate::encoding::{write_var_bytes, Encodable};

/// Opcodes emitted by the builder.
pub mod opcodes {
    pub const OP_0: u8 = 0x00;
    pub const OP_PUSHDATA1: u8 = 0x4c;
    pub const OP_PUSHDATA2: u8 = 0x4d;
    pub const OP_PUSHDATA4: u8 = 0x4e;
    pub const OP_1NEGATE: u8 = 0x4f;
    pub const OP_1: u8 = 0x51;
}

/// Raw script bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push a small integer.
    ///
    /// `0` becomes `OP_0`, `-1` and `1..=16` use their dedicated opcodes,
    /// everything else is pushed as a minimally encoded script number.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(opcodes::OP_0),
            -1 => self.0.push(opcodes::OP_1NEGATE),
            1..=16 => self.0.push(opcodes::OP_1 + (n as u8 - 1)),
            _ => return self.push_num(n),
        }
        self
    }

    /// Push an integer as a data element, never as a small-int opcode.
    pub fn push_num(self, n: i64) -> Self {
        let bytes = encode_script_num(n);
        self.push_slice(&bytes)
    }

    /// Push raw data with the shortest length prefix.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < opcodes::OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(opcodes::OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(opcodes::OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(opcodes::OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Encodable for Script {
    fn encode_to(&self, out: &mut Vec<u8>) {
        write_var_bytes(out, &self.0);
    }
}

/// Little-endian sign-magnitude encoding; zero is the empty vector.
fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign, so add a byte if it is already taken.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
