use crate::frame_types::*;

#[inline]
/// Mini helper to check, whether a bit is set or not.
fn flag_is_set(data: u8, bit: u8) -> bool {
    data & (1 << bit) > 0
}

/// The very first two bytes of every frame contain the FrameControl header.
/// [Wikipedia article](https://en.wikipedia.org/wiki/802.11_Frame_Types)
///
/// First byte:
///
/// - **bit_0-1**: Protocol version.
///     Until now, this has always been 0 and is expected to be 0.
/// - **bit_2-3**: [FrameType]
/// - **bit_4-7**: [FrameSubType]
///
/// Second byte (Flags):
/// - **bit_0** `to_ds`: Set if the frame is to be sent by the AP to the distribution system.
/// - **bit_1** `from_ds`: Set if the frame is from the distribution system.
/// - **bit_2** `more_frag`: Set if this frame is a fragment of a bigger frame and there are more fragments to follow.
/// - **bit_3** `retry`: Set if this frame is a retransmission, maybe through the loss of an ACK.
/// - **bit_4** `power_mgmt`: Indicates what power mode (`save` or `active`) the station will be in, once the frame has been sent.
/// - **bit_5** `more_data`: Set by the AP to indicate that more frames are destined to a particular station that may be in power save mode.
/// - **bit_6** `protected`: Set if the frame body is encrypted.
///     Protected Action frames (e.g. SA Query) carry this flag.
/// - **bit_7** `order`: Set if the frame is being sent according to the _Strictly Ordered Class_.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub frame_subtype: FrameSubType,
    pub flags: u8,
}

impl FrameControl {
    /// A management frame control with the given subtype and no flags set.
    pub fn management(frame_subtype: FrameSubType) -> Self {
        FrameControl {
            protocol_version: 0,
            frame_type: FrameType::Management,
            frame_subtype,
            flags: 0,
        }
    }

    pub fn to_ds(&self) -> bool {
        flag_is_set(self.flags, 0)
    }

    pub fn from_ds(&self) -> bool {
        flag_is_set(self.flags, 1)
    }

    pub fn more_frag(&self) -> bool {
        flag_is_set(self.flags, 2)
    }

    pub fn retry(&self) -> bool {
        flag_is_set(self.flags, 3)
    }

    pub fn pwr_mgmt(&self) -> bool {
        flag_is_set(self.flags, 4)
    }

    pub fn more_data(&self) -> bool {
        flag_is_set(self.flags, 5)
    }

    pub fn protected(&self) -> bool {
        flag_is_set(self.flags, 6)
    }

    pub fn order(&self) -> bool {
        flag_is_set(self.flags, 7)
    }

    pub fn encode(&self) -> [u8; 2] {
        let protocol_version_bits = self.protocol_version & 0b11;
        let frame_type_bits = (self.frame_type.to_bytes() & 0b11) << 2;
        let frame_subtype_bits = (self.frame_subtype.to_bytes() & 0b1111) << 4;

        let first_byte = frame_subtype_bits | frame_type_bits | protocol_version_bits;

        [first_byte, self.flags]
    }
}
