use byteorder::{ByteOrder, LittleEndian};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceControl {
    /// The 4 bit fragment number from a sequence control field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from a sequence control field.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn new(sequence_number: u16, fragment_number: u8) -> Self {
        SequenceControl {
            fragment_number: fragment_number & 0x0F,
            sequence_number: sequence_number & 0x0FFF,
        }
    }

    pub fn encode(&self) -> [u8; 2] {
        // The sequence number occupies the upper 12 bits, the fragment number the lower 4 bits.
        let combined =
            ((self.sequence_number & 0x0FFF) << 4) | (self.fragment_number & 0x0F) as u16;

        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, combined);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_sequence_control;

    #[test]
    fn test_encode() {
        let control = SequenceControl::new(0x123, 0x4);
        assert_eq!(control.encode(), [0x34, 0x12]);
    }

    #[test]
    fn test_parse_encoded() {
        let control = SequenceControl::new(4095, 15);
        let bytes = control.encode();
        let (remaining, parsed) = parse_sequence_control(&bytes).unwrap();

        assert!(remaining.is_empty());
        assert_eq!(parsed, control);
    }

    #[test]
    fn test_new_masks_overflowing_values() {
        let control = SequenceControl::new(0xFFFF, 0xFF);
        assert_eq!(control.sequence_number, 0x0FFF);
        assert_eq!(control.fragment_number, 0x0F);
    }
}
