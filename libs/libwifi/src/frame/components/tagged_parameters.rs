use strum_macros::Display;

use crate::error::Error;

/// Ids of the information elements that commonly show up in management frames.
///
/// Everything else is kept as [ElementId::Unknown] with its raw id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum ElementId {
    Ssid,
    SupportedRates,
    DsParameterSet,
    Tim,
    Country,
    PowerConstraint,
    ChannelSwitchAnnouncement,
    HtCapabilities,
    RsnInformation,
    ExtendedSupportedRates,
    MobilityDomain,
    FastBssTransition,
    TimeoutInterval,
    HtOperation,
    ExtendedCapabilities,
    VhtCapabilities,
    VendorSpecific,
    Extension,
    Unknown(u8),
}

impl From<u8> for ElementId {
    fn from(value: u8) -> Self {
        match value {
            0 => ElementId::Ssid,
            1 => ElementId::SupportedRates,
            3 => ElementId::DsParameterSet,
            5 => ElementId::Tim,
            7 => ElementId::Country,
            32 => ElementId::PowerConstraint,
            37 => ElementId::ChannelSwitchAnnouncement,
            45 => ElementId::HtCapabilities,
            48 => ElementId::RsnInformation,
            50 => ElementId::ExtendedSupportedRates,
            54 => ElementId::MobilityDomain,
            55 => ElementId::FastBssTransition,
            56 => ElementId::TimeoutInterval,
            61 => ElementId::HtOperation,
            127 => ElementId::ExtendedCapabilities,
            191 => ElementId::VhtCapabilities,
            221 => ElementId::VendorSpecific,
            255 => ElementId::Extension,
            other => ElementId::Unknown(other),
        }
    }
}

impl From<ElementId> for u8 {
    fn from(id: ElementId) -> Self {
        match id {
            ElementId::Ssid => 0,
            ElementId::SupportedRates => 1,
            ElementId::DsParameterSet => 3,
            ElementId::Tim => 5,
            ElementId::Country => 7,
            ElementId::PowerConstraint => 32,
            ElementId::ChannelSwitchAnnouncement => 37,
            ElementId::HtCapabilities => 45,
            ElementId::RsnInformation => 48,
            ElementId::ExtendedSupportedRates => 50,
            ElementId::MobilityDomain => 54,
            ElementId::FastBssTransition => 55,
            ElementId::TimeoutInterval => 56,
            ElementId::HtOperation => 61,
            ElementId::ExtendedCapabilities => 127,
            ElementId::VhtCapabilities => 191,
            ElementId::VendorSpecific => 221,
            ElementId::Extension => 255,
            ElementId::Unknown(other) => other,
        }
    }
}

/// A single tagged parameter (information element).
///
/// On the wire this is one byte id, one byte length and `length` bytes of payload.
/// The payload is never longer than 255 bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaggedParameter {
    id: u8,
    data: Vec<u8>,
}

impl TaggedParameter {
    /// Size of the id and length prefix.
    pub const HEADER_SIZE: usize = 2;

    pub fn new(id: impl Into<u8>, data: Vec<u8>) -> Result<Self, Error> {
        if data.len() > u8::MAX as usize {
            return Err(Error::ParameterTooLong(data.len()));
        }

        Ok(TaggedParameter {
            id: id.into(),
            data,
        })
    }

    /// Only used by the parser, which can't produce payloads over 255 bytes.
    pub(crate) fn from_parsed(id: u8, data: &[u8]) -> Self {
        TaggedParameter {
            id,
            data: data.to_vec(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn element_id(&self) -> ElementId {
        ElementId::from(self.id)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size on the wire, prefix included.
    pub fn size(&self) -> usize {
        Self::HEADER_SIZE + self.data.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        bytes.push(self.id);
        bytes.push(self.data.len() as u8);
        bytes.extend_from_slice(&self.data);
        bytes
    }
}

/// The payload of a vendor specific element (id 221).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendorSpecificInfo {
    pub oui: [u8; 3],
    pub oui_type: u8,
    pub data: Vec<u8>,
}

/// The ordered list of tagged parameters that trails the fixed fields of a management frame.
///
/// There might be multiple elements with the same element id and their order matters
/// when the frame gets serialized again, which is why this is a plain list and not a map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaggedParameters(pub(crate) Vec<TaggedParameter>);

impl TaggedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. Fails if `data` is longer than 255 bytes.
    pub fn push(&mut self, id: impl Into<u8>, data: Vec<u8>) -> Result<(), Error> {
        self.0.push(TaggedParameter::new(id, data)?);
        Ok(())
    }

    pub fn push_parameter(&mut self, parameter: TaggedParameter) {
        self.0.push(parameter);
    }

    /// The first element with the given id.
    pub fn get(&self, id: impl Into<u8>) -> Option<&TaggedParameter> {
        let id = id.into();
        self.0.iter().find(|parameter| parameter.id == id)
    }

    /// All elements with the given id in wire order.
    pub fn get_all(&self, id: impl Into<u8>) -> impl Iterator<Item = &TaggedParameter> {
        let id = id.into();
        self.0.iter().filter(move |parameter| parameter.id == id)
    }

    /// Remove every element with the given id. Returns the number of removed elements.
    pub fn remove(&mut self, id: impl Into<u8>) -> usize {
        let id = id.into();
        let before = self.0.len();
        self.0.retain(|parameter| parameter.id != id);
        before - self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedParameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size of all elements on the wire.
    pub fn size(&self) -> usize {
        self.0.iter().map(TaggedParameter::size).sum()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        for parameter in &self.0 {
            bytes.extend(parameter.encode());
        }
        bytes
    }

    /// The SSID, if present. Non UTF-8 bytes are replaced.
    pub fn ssid(&self) -> Option<String> {
        self.get(ElementId::Ssid)
            .map(|parameter| String::from_utf8_lossy(parameter.data()).to_string())
    }

    /// All vendor specific elements that are long enough to carry an OUI and a type.
    pub fn vendor_specific(&self) -> Vec<VendorSpecificInfo> {
        self.get_all(ElementId::VendorSpecific)
            .filter(|parameter| parameter.data.len() >= 4)
            .map(|parameter| VendorSpecificInfo {
                oui: [parameter.data[0], parameter.data[1], parameter.data[2]],
                oui_type: parameter.data[3],
                data: parameter.data[4..].to_vec(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TaggedParameters {
    type Item = &'a TaggedParameter;
    type IntoIter = std::slice::Iter<'a, TaggedParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_mapping() {
        for raw in 0..=u8::MAX {
            assert_eq!(u8::from(ElementId::from(raw)), raw);
        }
        assert_eq!(ElementId::from(221), ElementId::VendorSpecific);
        assert_eq!(ElementId::from(2), ElementId::Unknown(2));
    }

    #[test]
    fn test_too_long_payload() {
        let mut parameters = TaggedParameters::new();
        assert!(parameters.push(ElementId::Ssid, vec![0; 255]).is_ok());
        assert!(matches!(
            parameters.push(ElementId::Ssid, vec![0; 256]),
            Err(Error::ParameterTooLong(256))
        ));
        assert_eq!(parameters.len(), 1);
    }

    #[test]
    fn test_encode_keeps_order() {
        let mut parameters = TaggedParameters::new();
        parameters.push(ElementId::Ssid, b"lab".to_vec()).unwrap();
        parameters.push(42u8, vec![]).unwrap();
        parameters.push(ElementId::Ssid, b"x".to_vec()).unwrap();

        assert_eq!(parameters.size(), 5 + 2 + 3);
        assert_eq!(
            parameters.encode(),
            vec![0, 3, b'l', b'a', b'b', 42, 0, 0, 1, b'x']
        );
        assert_eq!(parameters.ssid(), Some("lab".to_string()));
        assert_eq!(parameters.get_all(ElementId::Ssid).count(), 2);
    }

    #[test]
    fn test_vendor_specific() {
        let mut parameters = TaggedParameters::new();
        parameters
            .push(ElementId::VendorSpecific, vec![0x00, 0x50, 0xf2, 0x04, 0xaa])
            .unwrap();
        // Too short to carry an OUI type, skipped.
        parameters
            .push(ElementId::VendorSpecific, vec![0x00, 0x50])
            .unwrap();

        let vendor = parameters.vendor_specific();
        assert_eq!(
            vendor,
            vec![VendorSpecificInfo {
                oui: [0x00, 0x50, 0xf2],
                oui_type: 0x04,
                data: vec![0xaa],
            }]
        );
    }

    #[test]
    fn test_remove() {
        let mut parameters = TaggedParameters::new();
        parameters.push(1u8, vec![0x82]).unwrap();
        parameters.push(3u8, vec![6]).unwrap();
        parameters.push(1u8, vec![0x84]).unwrap();

        assert_eq!(parameters.remove(ElementId::SupportedRates), 2);
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.get(ElementId::DsParameterSet).unwrap().data(), &[6]);
    }
}
