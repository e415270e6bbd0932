use crate::frame::components::MacAddress;
use crate::frame::*;
use crate::frame_types::PduType;
use enum_dispatch::enum_dispatch;

/// Helper trait to easily access source, destination and bssid on frames.
#[enum_dispatch]
pub trait Addresses {
    /// Returns the sender of the Frame.
    /// This isn't always send in every frame (e.g. CTS).
    fn src(&self) -> Option<&MacAddress>;

    /// Returns the destination of the Frame.
    /// This should always be present.
    fn dest(&self) -> &MacAddress;

    /// This isn't always send in every frame (e.g. RTS).
    fn bssid(&self) -> Option<&MacAddress>;
}

/// The contract every node of a frame tree fulfills.
///
/// A node knows its own type tag, the size of everything up to and including its fixed
/// parameters and how to serialize itself.
/// Deep copies are made with [Clone].
#[enum_dispatch]
pub trait FrameNode {
    /// The tag identifying this node's concrete frame type.
    fn pdu_type(&self) -> PduType;

    /// Whether this node is, or builds upon, the frame type identified by `flag`.
    fn matches_flag(&self, flag: PduType) -> bool;

    /// Size of all headers and fixed parameters, tagged parameters excluded.
    fn header_size(&self) -> usize;

    /// Write the node's fixed parameters to the start of `buffer`.
    ///
    /// `buffer` starts right after the bytes of the management header.
    /// Returns the number of written bytes.
    fn write_fixed_parameters(&self, buffer: &mut [u8]) -> usize;

    /// Size of the complete serialized frame, tagged parameters included.
    fn size(&self) -> usize;

    /// Serialize the complete frame (without FCS).
    fn encode(&self) -> Vec<u8>;
}
