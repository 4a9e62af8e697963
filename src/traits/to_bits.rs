//! # **ToBit trait** - *IEEE 754 bit conversion and total-order keys*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

/// Generic trait for converting floating-point types to their IEEE 754 bit representation.
///
/// Unifies access to a `to_bits` method across `f32` and `f64`, and derives from it an
/// unsigned key whose integer order is the IEEE 754 total order of the float.
pub trait ToBits: Copy {
    /// The unsigned integer type representing the bit pattern.
    type Bits: Ord + Eq + std::hash::Hash + Copy;

    /// Converts the floating-point value to its IEEE 754 bit representation.
    fn to_bits(self) -> Self::Bits;

    /// Maps the bit pattern to a key that orders like the IEEE 754 total order.
    ///
    /// If the sign bit is set all bits are inverted, otherwise only the sign bit is flipped.
    /// The result orders `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`.
    fn total_order_key(self) -> Self::Bits;
}

impl ToBits for f32 {
    type Bits = u32;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn total_order_key(self) -> u32 {
        let bits = f32::to_bits(self);
        if bits & 0x8000_0000 != 0 {
            !bits
        } else {
            bits ^ 0x8000_0000
        }
    }
}

impl ToBits for f64 {
    type Bits = u64;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn total_order_key(self) -> u64 {
        let bits = f64::to_bits(self);
        if bits & 0x8000_0000_0000_0000 != 0 {
            !bits
        } else {
            bits ^ 0x8000_0000_0000_0000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order_key_orders_signed_zero_and_infinities() {
        assert!((-0.0f64).total_order_key() < 0.0f64.total_order_key());
        assert!(f64::NEG_INFINITY.total_order_key() < (-1.0f64).total_order_key());
        assert!(f64::INFINITY.total_order_key() < f64::NAN.total_order_key());
        assert!((-2.5f32).total_order_key() < (-1.5f32).total_order_key());
    }

    #[test]
    fn test_to_bits_round_trips_raw_pattern() {
        assert_eq!(ToBits::to_bits(1.0f32), 0x3f80_0000);
        assert_eq!(ToBits::to_bits(-0.0f64), 0x8000_0000_0000_0000);
    }
}
