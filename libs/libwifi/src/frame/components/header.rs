use super::{FrameControl, MacAddress, SequenceControl};
use crate::frame_types::FrameSubType;
use crate::traits::Addresses;

/// Representation of a management frame header. This format is used by all management frames!
///
/// This struct implements the `Addresses` trait, which provides the `src`, `dest` and `bssid`
/// functions.
///
/// Structure of a management header:
///
/// **Bytes 0-1** \
/// These contain protocol meta information and flags.
/// Take a look at the [FrameControl] struct for more information.
///
/// **Bytes 2-3** \
/// Those are the duration bytes. These are always present!
/// They are quite specific and not explained here.
///
/// **Bytes 4-23** \
/// These contain all important address information.
///
/// byte 4-9: Address 1. Always present!
/// byte 10-15: Address 2.
/// byte 16-21: Address 3.
/// byte 22-23: Sequence Control.
///
/// **Sequence Control:** \
/// Contains the FragmentNumber and SequenceNumber that define the main frame and the number of fragments in the frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagementHeader {
    pub frame_control: FrameControl,
    pub duration: [u8; 2],
    pub address_1: MacAddress,
    pub address_2: MacAddress,
    pub address_3: MacAddress,
    pub sequence_control: SequenceControl,
}

impl ManagementHeader {
    /// Size of the header on the wire, frame control included.
    pub const SIZE: usize = 24;

    /// A header for a frame sent from `src` to `dst`.
    /// The BSSID (address 3) stays zeroed until it's explicitly set.
    pub fn new(frame_subtype: FrameSubType, dst: MacAddress, src: MacAddress) -> Self {
        ManagementHeader {
            frame_control: FrameControl::management(frame_subtype),
            duration: [0, 0],
            address_1: dst,
            address_2: src,
            address_3: MacAddress::zeroed(),
            sequence_control: SequenceControl::default(),
        }
    }

    /// Write the header to the start of `buffer` and return the number of written bytes.
    ///
    /// Panics if `buffer` is shorter than [ManagementHeader::SIZE].
    pub fn write(&self, buffer: &mut [u8]) -> usize {
        buffer[0..2].copy_from_slice(&self.frame_control.encode());
        buffer[2..4].copy_from_slice(&self.duration);
        buffer[4..10].copy_from_slice(&self.address_1.encode());
        buffer[10..16].copy_from_slice(&self.address_2.encode());
        buffer[16..22].copy_from_slice(&self.address_3.encode());
        buffer[22..24].copy_from_slice(&self.sequence_control.encode());

        Self::SIZE
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; Self::SIZE];
        self.write(&mut bytes);
        bytes
    }
}

/// Which address is used in which way, depends on a combination of
/// - two flags in the FrameControl header.
/// - the Type/Subtype constellation.
///
/// A rule of thumb is this:
///
/// **Address 1:** \
/// The recipient station address.
/// If `to_ds` is set, this is the AP address.
/// If `from_ds` is set then this is the station address
///
/// **Address 2:** \
/// The transmitter station address.
/// If `from_ds` is set, this is the AP address.
/// If `to_ds` is set then this is the station address.
///
/// **Address 3:** \
/// If Address 1 contains the destination address then Address 3 will contain the source address.
/// Similarly, if Address 2 contains the source address then Address 3 will contain the destination address.
impl Addresses for ManagementHeader {
    /// Return the mac address of the sender
    fn src(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_3)
        } else if frame_control.from_ds() {
            Some(&self.address_1)
        } else {
            Some(&self.address_2)
        }
    }

    /// Return the mac address of the receiver.
    /// A full `ff:ff:..` usually indicates a undirected broadcast.
    fn dest(&self) -> &MacAddress {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() && frame_control.from_ds() {
            &self.address_3
        } else if frame_control.to_ds() {
            &self.address_2
        } else if frame_control.from_ds() {
            &self.address_3
        } else {
            &self.address_1
        }
    }

    /// The BSSID for this request.
    /// In most cases, this is expected to be present.
    /// The only time it's not, is in a wireless distributed system (WDS).
    fn bssid(&self) -> Option<&MacAddress> {
        let frame_control = &self.frame_control;
        if frame_control.to_ds() {
            Some(&self.address_1)
        } else if frame_control.from_ds() {
            Some(&self.address_2)
        } else {
            Some(&self.address_3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_frame_control, parse_management_header};

    #[test]
    fn test_encode_layout() {
        let mut header = ManagementHeader::new(
            FrameSubType::Action,
            MacAddress::broadcast(),
            MacAddress([0x02, 0, 0, 0, 0, 0x01]),
        );
        header.address_3 = MacAddress([0x02, 0, 0, 0, 0, 0x02]);
        header.duration = [0x3a, 0x01];
        header.sequence_control = SequenceControl::new(1, 0);

        assert_eq!(
            header.encode(),
            vec![
                0xd0, 0x00, // FrameControl
                0x3a, 0x01, // Duration
                255, 255, 255, 255, 255, 255, // First address
                0x02, 0, 0, 0, 0, 0x01, // Second address
                0x02, 0, 0, 0, 0, 0x02, // Third address
                0x10, 0x00, // SequenceControl
            ]
        );
    }

    #[test]
    fn test_parse_encoded() {
        let header = ManagementHeader::new(
            FrameSubType::Action,
            MacAddress([1, 2, 3, 4, 5, 6]),
            MacAddress([6, 5, 4, 3, 2, 1]),
        );
        let bytes = header.encode();

        let (input, frame_control) = parse_frame_control(&bytes).unwrap();
        let (remaining, parsed) = parse_management_header(frame_control, input).unwrap();

        assert!(remaining.is_empty());
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_addresses_without_ds_flags() {
        let dst = MacAddress([1, 1, 1, 1, 1, 1]);
        let src = MacAddress([2, 2, 2, 2, 2, 2]);
        let header = ManagementHeader::new(FrameSubType::Action, dst, src);

        assert_eq!(header.dest(), &dst);
        assert_eq!(header.src(), Some(&src));
        assert_eq!(header.bssid(), Some(&MacAddress::zeroed()));
    }
}
