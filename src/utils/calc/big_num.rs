//! 256 and 512 bit unsigned integers for curve arithmetic.
//!
//! The product of two `u128` reserves needs up to 256 bits; the price-impact
//! cross-multiplication multiplies such a product by the bps denominator and
//! therefore runs in 512 bits.

use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

/// Zero-extend a 256-bit value to 512 bits.
pub fn widen(value: U256) -> U512 {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    U512::from_big_endian(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_preserves_value() {
        let x = U256::from(u128::MAX) * U256::from(u128::MAX);
        assert_eq!(widen(x) % widen(U256::from(u128::MAX)), U512::zero());
        assert_eq!(widen(U256::zero()), U512::zero());
        assert_eq!(widen(U256::from(42u64)), U512::from(42u64));
    }
}
