//! Seven-segment pattern decoding
//!
//! The display is a two-digit common-anode module behind a single 8-bit
//! GPIO bus: bits 0-6 select segments a-g, bit 7 selects which digit the
//! pattern lights. Only one digit is ever electrically active; the refresh
//! task alternates sides fast enough that both appear lit.

/// Which physical digit a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// Left digit (digit-select bit clear)
    Left,
    /// Right digit (digit-select bit set)
    Right,
}

/// Digit-select bit within a pattern.
pub const DIGIT_SELECT: u8 = 0b1000_0000;

/// Segment pattern for one hex key, without the digit-select bit.
///
/// Unmapped key values (including the [`NO_KEY`](crate::keypad::NO_KEY)
/// sentinel) render with all seven segments off. That is a normal case,
/// not an error.
const fn segment_bits(key: u8) -> u8 {
    match key {
        b'0' => 0b0011_1111,
        b'1' => 0b0011_0000,
        b'2' => 0b0101_1011,
        b'3' => 0b0111_1001,
        b'4' => 0b0111_0100,
        b'5' => 0b0110_1101,
        b'6' => 0b0110_1111,
        b'7' => 0b0011_1000,
        b'8' => 0b0111_1111,
        b'9' => 0b0111_1100,
        b'A' => 0b0111_1110,
        b'B' => 0b0110_0111,
        b'C' => 0b0000_1111,
        b'D' => 0b0111_0011,
        b'E' => 0b0100_1111,
        b'F' => 0b0100_1110,
        _ => 0b0000_0000,
    }
}

/// Decode a key value into the bus pattern for one digit.
///
/// Pure and total: the same `(key, digit)` pair always yields the same
/// pattern.
pub const fn decode(key: u8, digit: Digit) -> u8 {
    let bits = segment_bits(key);
    match digit {
        Digit::Left => bits,
        Digit::Right => bits | DIGIT_SELECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_keys_have_distinct_patterns() {
        let keys = b"0123456789ABCDEF";
        for (i, &a) in keys.iter().enumerate() {
            for &b in &keys[i + 1..] {
                assert_ne!(
                    decode(a, Digit::Left),
                    decode(b, Digit::Left),
                    "keys {} and {} collide",
                    a as char,
                    b as char
                );
            }
        }
    }

    #[test]
    fn test_digit_select_bit_for_every_key_value() {
        for key in 0..=u8::MAX {
            assert_ne!(decode(key, Digit::Right) & DIGIT_SELECT, 0);
            assert_eq!(decode(key, Digit::Left) & DIGIT_SELECT, 0);
            // Side selection never changes the segment bits themselves.
            assert_eq!(
                decode(key, Digit::Right) & !DIGIT_SELECT,
                decode(key, Digit::Left)
            );
        }
    }

    #[test]
    fn test_unmapped_keys_render_blank() {
        for key in [crate::keypad::NO_KEY, b'G', b'a', 0x00, 0xFF] {
            assert_eq!(decode(key, Digit::Left), 0);
            assert_eq!(decode(key, Digit::Right), DIGIT_SELECT);
        }
    }

    #[test]
    fn test_known_patterns() {
        // Spot checks against the lab board's segment wiring.
        assert_eq!(decode(b'0', Digit::Left), 0b0011_1111);
        assert_eq!(decode(b'8', Digit::Left), 0b0111_1111);
        assert_eq!(decode(b'7', Digit::Right), 0b1011_1000);
    }
}
