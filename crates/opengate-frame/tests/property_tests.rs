//! Property-based tests for the signal codecs and tick arithmetic.

use opengate_frame::{CanFrame, Ticks, be16, signed_be16, to_signed};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_to_signed_roundtrips_i16(value in i16::MIN..=i16::MAX) {
        let raw = u32::from(value as u16);
        prop_assert_eq!(to_signed(raw, 16), i32::from(value));
    }

    #[test]
    fn prop_to_signed_in_field_range(raw in any::<u32>(), width in 1u8..=31u8) {
        let decoded = to_signed(raw, width);
        let half = 1i64 << (width - 1);
        prop_assert!(i64::from(decoded) >= -half);
        prop_assert!(i64::from(decoded) < half);
    }

    #[test]
    fn prop_be16_decode_matches_arithmetic(hi in any::<u8>(), lo in any::<u8>()) {
        prop_assert_eq!(be16(hi, lo), u32::from(hi) * 256 + u32::from(lo));
        let expected = i32::from(i16::from_be_bytes([hi, lo]));
        prop_assert_eq!(signed_be16(hi, lo), expected);
    }

    #[test]
    fn prop_frame_byte_total(payload in proptest::collection::vec(any::<u8>(), 0..16), index in 0usize..32) {
        let frame = CanFrame::new(0x123, 0, &payload);
        let expected = if index < usize::from(frame.dlc) {
            payload[index]
        } else {
            0
        };
        prop_assert_eq!(frame.byte(index), expected);
    }

    #[test]
    fn prop_elapsed_inverts_wrapping_add(start in any::<u32>(), delta in any::<u32>()) {
        let earlier = Ticks::from_micros(start);
        let later = Ticks::from_micros(start.wrapping_add(delta));
        prop_assert_eq!(later.elapsed_since(earlier), delta);
    }
}
