use crate::error::Error;
use crate::frame::components::*;
use crate::frame_types::{FrameSubType, PduType};
use crate::parsers::{parse_management_header, parse_tagged_parameters};
use crate::traits::Addresses;

/// Everything all management frames have in common.
///
/// That is the [ManagementHeader] in front of the frame and the [TaggedParameters]
/// that trail the subtype specific fixed fields.
/// Concrete management frames embed this struct and forward to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagementFrame {
    pub header: ManagementHeader,
    pub tagged_parameters: TaggedParameters,
}

impl ManagementFrame {
    /// A frame from `src` to `dst` without any tagged parameters.
    ///
    /// The subtype is `0` (AssociationRequest) until the embedding frame sets its own.
    pub fn new(dst: MacAddress, src: MacAddress) -> Self {
        ManagementFrame {
            header: ManagementHeader::new(FrameSubType::AssociationRequest, dst, src),
            tagged_parameters: TaggedParameters::new(),
        }
    }

    /// Parse the management header.
    ///
    /// Only the header is consumed, the returned slice starts at the subtype's fixed fields.
    /// Tagged parameters are attached later through [ManagementFrame::parse_tagged_parameters].
    pub fn parse(frame_control: FrameControl, input: &[u8]) -> Result<(&[u8], Self), Error> {
        let (remaining, header) = parse_management_header(frame_control, input)?;

        Ok((
            remaining,
            ManagementFrame {
                header,
                tagged_parameters: TaggedParameters::new(),
            },
        ))
    }

    /// Parse all remaining bytes as tagged parameters and attach them to this frame.
    ///
    /// On error, the already attached parameters are left untouched.
    pub fn parse_tagged_parameters(&mut self, input: &[u8]) -> Result<(), Error> {
        self.tagged_parameters = parse_tagged_parameters(input)?;
        Ok(())
    }

    pub fn pdu_type(&self) -> PduType {
        PduType::Dot11Management
    }

    pub fn matches_flag(&self, flag: PduType) -> bool {
        matches!(flag, PduType::Dot11Management | PduType::Dot11)
    }

    /// Size of the management header on the wire.
    pub fn header_size(&self) -> usize {
        ManagementHeader::SIZE
    }

    /// Write the management header to the start of `buffer`.
    pub fn write_header(&self, buffer: &mut [u8]) -> usize {
        self.header.write(buffer)
    }

    pub fn encode_header(&self) -> Vec<u8> {
        self.header.encode()
    }

    pub fn subtype(&self) -> FrameSubType {
        self.header.frame_control.frame_subtype
    }

    pub fn set_subtype(&mut self, subtype: FrameSubType) {
        self.header.frame_control.frame_subtype = subtype;
    }

    pub fn frame_control(&self) -> &FrameControl {
        &self.header.frame_control
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.header.frame_control.flags = flags;
    }

    pub fn duration(&self) -> u16 {
        u16::from_le_bytes(self.header.duration)
    }

    pub fn set_duration(&mut self, duration: u16) {
        self.header.duration = duration.to_le_bytes();
    }

    pub fn addr1(&self) -> &MacAddress {
        &self.header.address_1
    }

    pub fn set_addr1(&mut self, address: MacAddress) {
        self.header.address_1 = address;
    }

    pub fn addr2(&self) -> &MacAddress {
        &self.header.address_2
    }

    pub fn set_addr2(&mut self, address: MacAddress) {
        self.header.address_2 = address;
    }

    pub fn addr3(&self) -> &MacAddress {
        &self.header.address_3
    }

    pub fn set_addr3(&mut self, address: MacAddress) {
        self.header.address_3 = address;
    }

    pub fn sequence_control(&self) -> &SequenceControl {
        &self.header.sequence_control
    }

    pub fn set_sequence_number(&mut self, sequence_number: u16) {
        self.header.sequence_control.sequence_number = sequence_number & 0x0FFF;
    }

    pub fn set_fragment_number(&mut self, fragment_number: u8) {
        self.header.sequence_control.fragment_number = fragment_number & 0x0F;
    }
}

impl Addresses for ManagementFrame {
    fn src(&self) -> Option<&MacAddress> {
        self.header.src()
    }

    fn dest(&self) -> &MacAddress {
        self.header.dest()
    }

    fn bssid(&self) -> Option<&MacAddress> {
        self.header.bssid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_frame_control;

    #[test]
    fn test_flags_of_the_base() {
        let frame = ManagementFrame::new(MacAddress::broadcast(), MacAddress::zeroed());

        assert_eq!(frame.pdu_type(), PduType::Dot11Management);
        assert!(frame.matches_flag(PduType::Dot11Management));
        assert!(frame.matches_flag(PduType::Dot11));
        assert!(!frame.matches_flag(PduType::Dot11Action));
        assert!(!frame.matches_flag(PduType::Dot11Data));
    }

    #[test]
    fn test_parse_leaves_body() {
        let mut frame = ManagementFrame::new(MacAddress([2, 0, 0, 0, 0, 1]), MacAddress::zeroed());
        frame.set_subtype(FrameSubType::Action);
        frame.set_sequence_number(300);
        frame.set_duration(314);

        let mut bytes = frame.encode_header();
        assert_eq!(bytes.len(), frame.header_size());
        bytes.extend([4, 10]);

        let (input, frame_control) = parse_frame_control(&bytes).unwrap();
        let (body, parsed) = ManagementFrame::parse(frame_control, input).unwrap();

        assert_eq!(body, &[4, 10]);
        assert_eq!(parsed, frame);
        assert_eq!(parsed.duration(), 314);
        assert_eq!(parsed.sequence_control().sequence_number, 300);
    }

    #[test]
    fn test_short_header() {
        let bytes = [0xd0, 0x00, 0x00, 0x00, 1, 2, 3];

        let (input, frame_control) = parse_frame_control(&bytes).unwrap();
        let result = ManagementFrame::parse(frame_control, input);

        assert!(matches!(result, Err(Error::Incomplete(_))));
    }

    #[test]
    fn test_failed_tagged_parameters_keep_previous() {
        let mut frame = ManagementFrame::new(MacAddress::broadcast(), MacAddress::zeroed());
        frame.parse_tagged_parameters(&[0, 1, b'a']).unwrap();

        assert!(frame.parse_tagged_parameters(&[0, 5, b'a']).is_err());
        assert_eq!(frame.tagged_parameters.ssid(), Some("a".to_string()));
    }
}
