use std::fmt;

use libwifi_macros::AddressHeader;

use super::ManagementFrame;
use crate::error::Error;
use crate::frame::components::*;
use crate::frame_types::{FrameSubType, PduType};
use crate::parsers::parse_action_frame;
use crate::traits::FrameNode;

/// The category byte of an [Action] frame.
///
/// The raw byte is kept as-is, so every value survives a parse/encode cycle,
/// including values this library has no name for.
/// Use [ActionCategory::kind] to classify it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionCategory(pub u8);

impl ActionCategory {
    /// Out of range value that marks a category that hasn't been set.
    pub const ERROR: ActionCategory = ActionCategory(128);

    /// The named category of this value.
    ///
    /// Values above `128` have no name and return `None`.
    pub fn kind(&self) -> Option<CategoryKind> {
        let kind = match self.0 {
            0 => CategoryKind::SpectrumManagement,
            1 => CategoryKind::Qos,
            2 => CategoryKind::Dls,
            3 => CategoryKind::BlockAck,
            4 => CategoryKind::Public,
            5 => CategoryKind::RadioMeasurement,
            6 => CategoryKind::FastBssTransition,
            7 => CategoryKind::HighThroughput,
            8 => CategoryKind::SaQuery,
            9 => CategoryKind::ProtectedDualOfPublicAction,
            10 => CategoryKind::Wnm,
            11 => CategoryKind::UnprotectedWnm,
            12 => CategoryKind::Tdls,
            13 => CategoryKind::Mesh,
            14 => CategoryKind::Multihop,
            15 => CategoryKind::SelfProtected,
            16 => CategoryKind::Dmg,
            18 => CategoryKind::FastSessionTransfer,
            19 => CategoryKind::RobustAvStreaming,
            20 => CategoryKind::UnprotectedDmg,
            21 => CategoryKind::Vht,
            22 => CategoryKind::UnprotectedS1g,
            23 => CategoryKind::S1g,
            24 => CategoryKind::FlowControl,
            25 => CategoryKind::ControlResponseMcsNegotiation,
            26 => CategoryKind::Fils,
            27 => CategoryKind::Cdmg,
            28 => CategoryKind::Cmmg,
            29 => CategoryKind::Glk,
            126 => CategoryKind::VendorSpecificProtected,
            127 => CategoryKind::VendorSpecific,
            17 | 30..=125 => CategoryKind::Reserved(self.0),
            128 => CategoryKind::Error,
            129..=255 => return None,
        };

        Some(kind)
    }

    /// Whether this is the [ActionCategory::ERROR] sentinel.
    ///
    /// A defaulted category and a `128` read from the wire look the same.
    pub fn is_unset(&self) -> bool {
        *self == Self::ERROR
    }
}

impl Default for ActionCategory {
    fn default() -> Self {
        Self::ERROR
    }
}

impl From<u8> for ActionCategory {
    fn from(value: u8) -> Self {
        ActionCategory(value)
    }
}

impl From<ActionCategory> for u8 {
    fn from(category: ActionCategory) -> Self {
        category.0
    }
}

impl From<CategoryKind> for ActionCategory {
    fn from(kind: CategoryKind) -> Self {
        ActionCategory(kind.value())
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind:?}"),
            None => write!(f, "Unknown({})", self.0),
        }
    }
}

/// Named action categories, IEEE 802.11-2020 table 9-51.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    SpectrumManagement,
    Qos,
    Dls,
    BlockAck,
    Public,
    RadioMeasurement,
    FastBssTransition,
    HighThroughput,
    SaQuery,
    ProtectedDualOfPublicAction,
    Wnm,
    UnprotectedWnm,
    Tdls,
    Mesh,
    Multihop,
    SelfProtected,
    Dmg,
    FastSessionTransfer,
    RobustAvStreaming,
    UnprotectedDmg,
    Vht,
    UnprotectedS1g,
    S1g,
    FlowControl,
    ControlResponseMcsNegotiation,
    Fils,
    Cdmg,
    Cmmg,
    Glk,
    VendorSpecificProtected,
    VendorSpecific,
    /// A value from the reserved ranges (17, 30-125).
    Reserved(u8),
    /// The `128` sentinel.
    Error,
}

impl CategoryKind {
    /// The wire value of this category.
    pub fn value(&self) -> u8 {
        match self {
            CategoryKind::SpectrumManagement => 0,
            CategoryKind::Qos => 1,
            CategoryKind::Dls => 2,
            CategoryKind::BlockAck => 3,
            CategoryKind::Public => 4,
            CategoryKind::RadioMeasurement => 5,
            CategoryKind::FastBssTransition => 6,
            CategoryKind::HighThroughput => 7,
            CategoryKind::SaQuery => 8,
            CategoryKind::ProtectedDualOfPublicAction => 9,
            CategoryKind::Wnm => 10,
            CategoryKind::UnprotectedWnm => 11,
            CategoryKind::Tdls => 12,
            CategoryKind::Mesh => 13,
            CategoryKind::Multihop => 14,
            CategoryKind::SelfProtected => 15,
            CategoryKind::Dmg => 16,
            CategoryKind::FastSessionTransfer => 18,
            CategoryKind::RobustAvStreaming => 19,
            CategoryKind::UnprotectedDmg => 20,
            CategoryKind::Vht => 21,
            CategoryKind::UnprotectedS1g => 22,
            CategoryKind::S1g => 23,
            CategoryKind::FlowControl => 24,
            CategoryKind::ControlResponseMcsNegotiation => 25,
            CategoryKind::Fils => 26,
            CategoryKind::Cdmg => 27,
            CategoryKind::Cmmg => 28,
            CategoryKind::Glk => 29,
            CategoryKind::VendorSpecificProtected => 126,
            CategoryKind::VendorSpecific => 127,
            CategoryKind::Reserved(value) => *value,
            CategoryKind::Error => 128,
        }
    }
}

/// The fixed fields of an Action frame, directly after the management header.
///
/// - 1 byte category
/// - 1 byte action, its meaning depends on the category
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionHeader {
    pub category: ActionCategory,
    pub action: u8,
}

impl ActionHeader {
    /// Size on the wire.
    pub const SIZE: usize = 2;

    pub fn new(category: impl Into<ActionCategory>, action: u8) -> Self {
        ActionHeader {
            category: category.into(),
            action,
        }
    }

    /// Write category and action to the start of `buffer`.
    ///
    /// Panics if `buffer` is shorter than [ActionHeader::SIZE].
    pub fn write(&self, buffer: &mut [u8]) -> usize {
        buffer[..Self::SIZE].copy_from_slice(&self.encode());
        Self::SIZE
    }

    pub fn encode(&self) -> [u8; 2] {
        [self.category.0, self.action]
    }
}

/// An Action frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Category (indicating the type of action, e.g., spectrum management, QoS)
/// - Action (specific action within the category)
/// - Tagged parameters (vary depending on the category and action)
#[derive(Clone, Debug, PartialEq, Eq, AddressHeader)]
pub struct Action {
    #[addresses]
    management: ManagementFrame,
    body: ActionHeader,
}

impl Action {
    /// Build an Action frame from `src` to `dst`.
    pub fn new(
        dst: MacAddress,
        src: MacAddress,
        category: impl Into<ActionCategory>,
        action: u8,
    ) -> Self {
        let mut management = ManagementFrame::new(dst, src);
        management.set_subtype(FrameSubType::Action);

        Action {
            management,
            body: ActionHeader::new(category, action),
        }
    }

    /// Build an Action frame with an unset category and action `0`.
    pub fn with_addresses(dst: MacAddress, src: MacAddress) -> Self {
        Self::new(dst, src, ActionCategory::default(), 0)
    }

    /// Parse an Action frame from the bytes following the frame control field.
    ///
    /// Fails with [Error::MalformedFrame] if less than two bytes follow the management header.
    /// Errors of the tagged parameter parser are passed through.
    pub fn parse(frame_control: FrameControl, input: &[u8]) -> Result<Self, Error> {
        parse_action_frame(frame_control, input)
    }

    pub(crate) fn from_parts(management: ManagementFrame, body: ActionHeader) -> Self {
        Action { management, body }
    }

    pub fn category(&self) -> ActionCategory {
        self.body.category
    }

    pub fn set_category(&mut self, category: impl Into<ActionCategory>) {
        self.body.category = category.into();
    }

    pub fn action(&self) -> u8 {
        self.body.action
    }

    pub fn set_action(&mut self, action: u8) {
        self.body.action = action;
    }

    pub fn fixed_header(&self) -> &ActionHeader {
        &self.body
    }

    pub fn management(&self) -> &ManagementFrame {
        &self.management
    }

    pub fn management_mut(&mut self) -> &mut ManagementFrame {
        &mut self.management
    }

    pub fn tagged_parameters(&self) -> &TaggedParameters {
        &self.management.tagged_parameters
    }

    pub fn tagged_parameters_mut(&mut self) -> &mut TaggedParameters {
        &mut self.management.tagged_parameters
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::with_addresses(MacAddress::zeroed(), MacAddress::zeroed())
    }
}

impl FrameNode for Action {
    fn pdu_type(&self) -> PduType {
        PduType::Dot11Action
    }

    fn matches_flag(&self, flag: PduType) -> bool {
        flag == PduType::Dot11Action || self.management.matches_flag(flag)
    }

    fn header_size(&self) -> usize {
        self.management.header_size() + ActionHeader::SIZE
    }

    fn write_fixed_parameters(&self, buffer: &mut [u8]) -> usize {
        debug_assert!(buffer.len() >= ActionHeader::SIZE);
        self.body.write(buffer)
    }

    fn size(&self) -> usize {
        self.header_size() + self.management.tagged_parameters.size()
    }

    fn encode(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.header_size()];
        let written = self.management.write_header(&mut bytes);
        self.write_fixed_parameters(&mut bytes[written..]);
        bytes.extend(self.management.tagged_parameters.encode());

        bytes
    }
}
