//! # Compact Difficulty
//!
//! Conversion between a 256-bit target and the 32-bit "nBits" form stored
//! in block headers: one size byte followed by a 24-bit mantissa.

use primitive_types::U256;

/// Encode a target into compact form.
///
/// The mantissa keeps the three most significant bytes. If its top bit is
/// set the mantissa is shifted down a byte, since that bit would otherwise
/// read as a sign.
pub fn compact_from_target(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut mantissa = if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    };

    if mantissa & 0x0080_0000 != 0 {
        mantissa >>= 8;
        size += 1;
    }

    (mantissa as u32 & 0x007f_ffff) | ((size as u32) << 24)
}

/// Decode compact form back into a target. Negative encodings yield zero.
pub fn target_from_compact(bits: u32) -> U256 {
    let size = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    if bits & 0x0080_0000 != 0 || mantissa == 0 {
        return U256::zero();
    }

    if size <= 3 {
        U256::from(mantissa >> (8 * (3 - size)))
    } else {
        U256::from(mantissa) << (8 * (size - 3))
    }
}
