use enum_dispatch::enum_dispatch;

use crate::traits::FrameNode;
use crate::CRC_32;

/// Contains structs representing recurring sets of structured data.
/// For instance, MAC-Addresses, default headers, tagged parameters, etc.
pub mod components;

/// Management frame structs
mod management;

pub use management::*;

#[enum_dispatch(Addresses, FrameNode)]
#[derive(Clone, Debug, PartialEq, Eq)]
/// This represents all currently supported frame subtypes.
/// Each variant is represented by its own struct.
///
/// The structs are organized by their frame type in submodules.
pub enum Frame {
    // Management frames
    Action(Action),
}

impl Frame {
    /// Serialize the frame and append the frame check sequence.
    pub fn encode_with_fcs(&self) -> Vec<u8> {
        let mut bytes = self.encode();
        let fcs = CRC_32.checksum(&bytes);
        bytes.extend_from_slice(&fcs.to_le_bytes());

        bytes
    }
}
