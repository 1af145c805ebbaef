//! 16-bit capture/compare value packing.
//!
//! The CCPRx value is one logical 16-bit quantity spread over a low and a
//! high byte register. The split stays an explicit pack/unpack instead of
//! a memory-layout trick, so the invariant that both bytes form one
//! atomic logical value is visible and testable.

/// Low/high byte view of a 16-bit CCPRx value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegPair {
    pub low: u8,
    pub high: u8,
}

impl RegPair {
    /// Decompose a 16-bit value into the register byte pair.
    pub fn split(value: u16) -> Self {
        Self {
            low: value as u8,
            high: (value >> 8) as u8,
        }
    }

    /// Reassemble the 16-bit value.
    pub fn join(self) -> u16 {
        u16::from(self.high) << 8 | u16::from(self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_places_bytes() {
        let pair = RegPair::split(0xBEEF);
        assert_eq!(pair.low, 0xEF);
        assert_eq!(pair.high, 0xBE);
    }

    proptest! {
        #[test]
        fn prop_split_join_round_trip(value: u16) {
            prop_assert_eq!(RegPair::split(value).join(), value);
        }
    }
}
